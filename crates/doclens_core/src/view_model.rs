use crate::validate::classify_document;
use crate::{DocumentStatus, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRowView {
    /// 1-based, as shown to the user.
    pub number: usize,
    pub text: String,
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRowView {
    pub number: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub document: String,
    pub document_status: DocumentStatus,
    pub questions: Vec<QuestionRowView>,
    pub answers: Vec<AnswerRowView>,
    pub answered_count: usize,
    /// Questions or document changed since the answers were fetched.
    pub answers_stale: bool,
    pub processing: bool,
    pub submit_enabled: bool,
    pub notices: Vec<Notice>,
}

impl SessionViewModel {
    pub(crate) fn from_state(state: &SessionState) -> Self {
        let questions = state.questions();
        let removable = questions.len() > 1;
        let question_rows = questions
            .iter()
            .enumerate()
            .map(|(index, text)| QuestionRowView {
                number: index + 1,
                text: text.to_string(),
                removable,
            })
            .collect();

        let answers_stale = state.answer_set().is_some_and(|set| {
            set.submitted().document != state.document().trim()
                || set.submitted().questions != questions.submittable()
        });

        Self {
            document: state.document().to_string(),
            document_status: classify_document(state.document()),
            questions: question_rows,
            answers: pair_answers(questions.as_slice(), state.answers()),
            answered_count: state.answers().len(),
            answers_stale,
            processing: state.is_processing(),
            submit_enabled: !state.is_processing(),
            notices: notices(state),
        }
    }
}

/// Pairs questions and answers by position, stopping at the shorter list and
/// skipping blank questions. No attempt is made to re-align edited lists.
fn pair_answers(questions: &[String], answers: &[String]) -> Vec<AnswerRowView> {
    questions
        .iter()
        .zip(answers)
        .enumerate()
        .filter(|(_, (question, _))| !question.trim().is_empty())
        .map(|(index, (question, answer))| AnswerRowView {
            number: index + 1,
            question: question.clone(),
            answer: answer.clone(),
        })
        .collect()
}

fn notices(state: &SessionState) -> Vec<Notice> {
    let mut notices = Vec::new();
    if let Some(advisory) = state.advisory() {
        notices.push(Notice::new(NoticeLevel::Warning, advisory.to_string()));
    }
    match state.last_result() {
        Some(Ok(_)) => notices.push(Notice::new(
            NoticeLevel::Success,
            "Document processed successfully!",
        )),
        Some(Err(err)) => {
            notices.push(Notice::new(NoticeLevel::Error, err.to_string()));
            if let Some(guidance) = err.guidance() {
                notices.push(Notice::new(NoticeLevel::Info, guidance));
            }
        }
        None => {}
    }
    notices
}

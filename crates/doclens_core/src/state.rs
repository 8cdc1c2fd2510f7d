use crate::view_model::SessionViewModel;
use crate::{Advisory, QuestionList, RequestPayload, ServiceFailure, SubmitError};

pub type RequestId = u64;

/// Number of answers received, or why there are none.
pub type SubmitResult = Result<usize, SubmitError>;

/// Answers from one successful request, tagged with the payload they answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<String>,
    submitted: RequestPayload,
}

impl AnswerSet {
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn submitted(&self) -> &RequestPayload {
        &self.submitted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request_id: RequestId,
    payload: RequestPayload,
}

/// Everything one interactive session owns.
///
/// Only `update` mutates it; the shell reads it through `view()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    document: String,
    questions: QuestionList,
    answers: Option<AnswerSet>,
    in_flight: Option<InFlight>,
    last_request_id: RequestId,
    last_result: Option<SubmitResult>,
    advisory: Option<Advisory>,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SessionViewModel {
        SessionViewModel::from_state(self)
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    /// Answers from the last successful request; empty before the first one.
    pub fn answers(&self) -> &[String] {
        match &self.answers {
            Some(set) => set.answers(),
            None => &[],
        }
    }

    pub fn answer_set(&self) -> Option<&AnswerSet> {
        self.answers.as_ref()
    }

    /// The processing flag: true while a request is in flight.
    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|in_flight| in_flight.request_id)
    }

    pub fn last_result(&self) -> Option<&SubmitResult> {
        self.last_result.as_ref()
    }

    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_document(&mut self, document: String) {
        if self.document != document {
            self.document = document;
            self.dirty = true;
        }
    }

    pub(crate) fn add_question(&mut self) -> usize {
        self.dirty = true;
        self.questions.add()
    }

    pub(crate) fn remove_question(&mut self, index: usize) -> bool {
        let removed = self.questions.remove(index);
        self.dirty |= removed;
        removed
    }

    pub(crate) fn set_question_text(&mut self, index: usize, text: String) -> bool {
        if self.questions.get(index) == Some(text.as_str()) {
            return true;
        }
        let changed = self.questions.set_text(index, text);
        self.dirty |= changed;
        changed
    }

    pub(crate) fn reject_submission(&mut self, err: SubmitError) {
        self.advisory = None;
        self.last_result = Some(Err(err));
        self.dirty = true;
    }

    /// Raises the processing flag for a new request and returns its id.
    pub(crate) fn begin_submission(
        &mut self,
        payload: RequestPayload,
        advisory: Option<Advisory>,
    ) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(InFlight {
            request_id,
            payload,
        });
        self.advisory = advisory;
        self.last_result = None;
        self.dirty = true;
        request_id
    }

    /// Lowers the processing flag and applies the outcome of `request_id`.
    ///
    /// Returns `None` when `request_id` is not the request in flight; the
    /// state is left untouched in that case.
    pub(crate) fn finish_submission(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<String>, ServiceFailure>,
    ) -> Option<SubmitResult> {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.request_id == request_id => in_flight,
            other => {
                self.in_flight = other;
                return None;
            }
        };

        let outcome = match result {
            Ok(answers) => {
                let count = answers.len();
                self.answers = Some(AnswerSet {
                    answers,
                    submitted: in_flight.payload,
                });
                Ok(count)
            }
            Err(failure) => Err(SubmitError::from(failure)),
        };
        self.last_result = Some(outcome.clone());
        self.dirty = true;
        Some(outcome)
    }
}

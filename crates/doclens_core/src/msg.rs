use crate::{RequestId, ServiceFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the document URL input.
    DocumentChanged(String),
    /// User asked for another question slot.
    QuestionAdded,
    /// User removed the question slot at the given index.
    QuestionRemoved(usize),
    /// User edited the text of one question slot.
    QuestionEdited { index: usize, text: String },
    /// User pressed the process button.
    SubmitClicked,
    /// The analysis service answered (or failed) for an in-flight request.
    AnswersReceived {
        request_id: RequestId,
        result: Result<Vec<String>, ServiceFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

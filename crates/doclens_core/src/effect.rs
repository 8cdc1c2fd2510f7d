use crate::{RequestId, RequestPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the payload to the analysis service and report back with
    /// `Msg::AnswersReceived` carrying the same `request_id`.
    RequestAnswers {
        request_id: RequestId,
        payload: RequestPayload,
    },
}

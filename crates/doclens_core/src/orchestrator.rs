use doclens_logging::{clear_submission, doclens_error, doclens_info, doclens_warn, set_submission};

use log::Level;

use crate::{update, Effect, Msg, RequestPayload, ServiceFailure, SessionState, SubmitResult};

/// Blocking request/response seam to the remote analysis service.
pub trait AnalysisService {
    /// Returns one answer per submitted question, in order.
    fn analyze(&self, payload: &RequestPayload) -> Result<Vec<String>, ServiceFailure>;
}

/// Runs one submission end to end against `service`.
///
/// Every dispatched request is answered with `Msg::AnswersReceived`, which
/// is where the processing flag is lowered, so the flag never outlives this
/// call. Returns `None` when the trigger was ignored because a request was
/// already in flight.
pub fn submit(
    state: SessionState,
    service: &dyn AnalysisService,
) -> (SessionState, Option<SubmitResult>) {
    let (mut state, effects) = update(state, Msg::SubmitClicked);
    if effects.is_empty() {
        let result = if state.is_processing() {
            None
        } else {
            state.last_result().cloned()
        };
        return (state, result);
    }

    let mut outcome = None;
    for effect in effects {
        match effect {
            Effect::RequestAnswers {
                request_id,
                payload,
            } => {
                set_submission(request_id);
                doclens_info!(
                    "Requesting answers for {} question(s), document_len={}",
                    payload.questions.len(),
                    payload.document.len()
                );
                let result = service.analyze(&payload);
                if let Err(failure) = &result {
                    match failure_level(failure) {
                        Level::Warn => doclens_warn!("Analysis service failed: {}", failure),
                        _ => doclens_error!("Analysis service failed: {}", failure),
                    }
                }
                let (next, _) = update(state, Msg::AnswersReceived { request_id, result });
                state = next;
                outcome = state.last_result().cloned();
                clear_submission();
            }
        }
    }

    (state, outcome)
}

/// A service that answered with a reason is a warning; losing the service is an error.
fn failure_level(failure: &ServiceFailure) -> Level {
    match failure {
        ServiceFailure::Rejected { .. } => Level::Warn,
        ServiceFailure::Transport(_) | ServiceFailure::Unexpected(_) => Level::Error,
    }
}

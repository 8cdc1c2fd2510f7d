use doclens_logging::{doclens_debug, doclens_info, doclens_warn};

use crate::{prepare_request, Effect, Msg, PreparedRequest, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentChanged(document) => {
            state.set_document(document);
            Vec::new()
        }
        Msg::QuestionAdded => {
            let index = state.add_question();
            doclens_debug!("Question slot {} added", index);
            Vec::new()
        }
        Msg::QuestionRemoved(index) => {
            if !state.remove_question(index) {
                doclens_debug!(
                    "Question slot {} not removed (slots={})",
                    index,
                    state.questions().len()
                );
            }
            Vec::new()
        }
        Msg::QuestionEdited { index, text } => {
            if !state.set_question_text(index, text) {
                doclens_warn!(
                    "Edit for question slot {} ignored (slots={})",
                    index,
                    state.questions().len()
                );
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit_clicked(&mut state),
        Msg::AnswersReceived { request_id, result } => {
            match state.finish_submission(request_id, result) {
                Some(Ok(count)) => doclens_info!("Request {} answered with {} answer(s)", request_id, count),
                Some(Err(err)) => doclens_warn!("Request {} failed: {:?}", request_id, err),
                None => doclens_warn!(
                    "Reply for request {} ignored (in flight: {:?})",
                    request_id,
                    state.in_flight_request()
                ),
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_clicked(state: &mut SessionState) -> Vec<Effect> {
    // The trigger is disabled while a request is in flight.
    if state.is_processing() {
        doclens_debug!("Submit ignored: request {:?} in flight", state.in_flight_request());
        return Vec::new();
    }

    match prepare_request(state.document(), state.questions()) {
        Err(err) => {
            doclens_warn!("Submission rejected before dispatch: {:?}", err);
            state.reject_submission(err);
            Vec::new()
        }
        Ok(PreparedRequest { payload, advisory }) => {
            if let Some(advisory) = advisory {
                doclens_info!("Advisory {:?} for document_len={}", advisory, payload.document.len());
            }
            let request_id = state.begin_submission(payload.clone(), advisory);
            vec![Effect::RequestAnswers {
                request_id,
                payload,
            }]
        }
    }
}

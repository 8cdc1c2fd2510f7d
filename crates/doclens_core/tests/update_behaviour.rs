use std::sync::Once;

use doclens_core::{
    update, Advisory, Effect, Msg, RequestPayload, ServiceFailure, SessionState, SubmitError,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(doclens_logging::initialize_for_tests);
}

fn session(document: &str, questions: &[&str]) -> SessionState {
    let (mut state, _) = update(SessionState::new(), Msg::DocumentChanged(document.to_string()));
    for (index, text) in questions.iter().enumerate() {
        if index > 0 {
            state = update(state, Msg::QuestionAdded).0;
        }
        state = update(
            state,
            Msg::QuestionEdited {
                index,
                text: text.to_string(),
            },
        )
        .0;
    }
    state
}

fn request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::RequestAnswers { request_id, .. } => *request_id,
        })
        .next()
        .expect("request effect")
}

#[test]
fn submit_builds_trimmed_payload_and_raises_flag() {
    init_logging();
    let state = session(" https://example.com/doc.pdf ", &["  Q1 ", "", "Q2", "   "]);

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(state.is_processing());
    assert!(!state.view().submit_enabled);
    assert_eq!(
        effects,
        vec![Effect::RequestAnswers {
            request_id: 1,
            payload: RequestPayload {
                document: "https://example.com/doc.pdf".to_string(),
                questions: vec!["Q1".to_string(), "Q2".to_string()],
            },
        }]
    );
}

#[test]
fn preflight_checks_run_in_fixed_order() {
    init_logging();
    let cases = [
        ("", vec!["   ", ""], SubmitError::EmptyDocument),
        ("   ", vec!["Q1"], SubmitError::EmptyDocument),
        ("not a url", vec!["", "  "], SubmitError::NoQuestions),
        ("not a url", vec!["Q1"], SubmitError::InvalidUrl),
    ];

    for (document, questions, expected) in cases {
        let state = session(document, &questions);
        let (state, effects) = update(state, Msg::SubmitClicked);

        assert!(effects.is_empty(), "{document:?} dispatched a request");
        assert!(!state.is_processing());
        assert_eq!(state.last_result(), Some(&Err(expected)));
    }
}

#[test]
fn non_pdf_url_warns_but_still_submits() {
    init_logging();
    let state = session("https://example.com/report.docx", &["Q1"]);

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(effects.len(), 1);
    assert_eq!(state.advisory(), Some(Advisory::NotLikelyPdf));
}

#[test]
fn second_click_while_in_flight_is_ignored() {
    init_logging();
    let state = session("https://example.com/doc.pdf", &["Q1"]);
    let (state, first) = update(state, Msg::SubmitClicked);
    let (state, second) = update(state, Msg::SubmitClicked);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(state.in_flight_request(), Some(request_id(&first)));
}

#[test]
fn successful_reply_replaces_answers_and_clears_flag() {
    init_logging();
    let state = session("https://example.com/doc.pdf", &["Q1", "Q2"]);
    let (state, effects) = update(state, Msg::SubmitClicked);

    let (state, effects_after) = update(
        state,
        Msg::AnswersReceived {
            request_id: request_id(&effects),
            result: Ok(vec!["A1".to_string(), "A2".to_string()]),
        },
    );

    assert!(effects_after.is_empty());
    assert!(!state.is_processing());
    assert_eq!(state.answers(), ["A1".to_string(), "A2".to_string()]);
    assert_eq!(state.last_result(), Some(&Ok(2)));
    assert_eq!(
        state.answer_set().map(|set| set.submitted().questions.clone()),
        Some(vec!["Q1".to_string(), "Q2".to_string()])
    );
}

#[test]
fn failed_reply_keeps_previous_answers_and_clears_flag() {
    init_logging();
    let state = session("https://example.com/doc.pdf", &["Q1"]);
    let (state, effects) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnswersReceived {
            request_id: request_id(&effects),
            result: Ok(vec!["first".to_string()]),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnswersReceived {
            request_id: request_id(&effects),
            result: Err(ServiceFailure::Rejected {
                status: 500,
                detail: "parse failed".to_string(),
            }),
        },
    );

    assert!(!state.is_processing());
    assert_eq!(state.answers(), ["first".to_string()]);
    assert_eq!(
        state.last_result(),
        Some(&Err(SubmitError::Service {
            detail: "parse failed".to_string()
        }))
    );
}

#[test]
fn reply_for_unknown_request_is_ignored() {
    init_logging();
    let state = session("https://example.com/doc.pdf", &["Q1"]);
    let (state, effects) = update(state, Msg::SubmitClicked);
    let in_flight = request_id(&effects);

    let (state, _) = update(
        state,
        Msg::AnswersReceived {
            request_id: in_flight + 1,
            result: Ok(vec!["stray".to_string()]),
        },
    );

    assert!(state.is_processing());
    assert_eq!(state.in_flight_request(), Some(in_flight));
    assert!(state.answers().is_empty());
}

#[test]
fn request_ids_increase_per_submission() {
    init_logging();
    let state = session("https://example.com/doc.pdf", &["Q1"]);
    let (state, first) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnswersReceived {
            request_id: request_id(&first),
            result: Err(ServiceFailure::Transport("refused".to_string())),
        },
    );
    let (_state, second) = update(state, Msg::SubmitClicked);

    assert_eq!(request_id(&second), request_id(&first) + 1);
}

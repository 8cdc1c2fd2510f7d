//! DocLens core: pure session state machine, validation and request orchestration.
mod effect;
mod error;
mod msg;
mod orchestrator;
mod payload;
mod questions;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use error::{Advisory, ServiceFailure, SubmitError};
pub use msg::Msg;
pub use orchestrator::{submit, AnalysisService};
pub use payload::{prepare_request, PreparedRequest, RequestPayload};
pub use questions::QuestionList;
pub use state::{AnswerSet, RequestId, SessionState, SubmitResult};
pub use update::update;
pub use validate::{classify_document, is_well_formed_url, looks_like_pdf, DocumentStatus};
pub use view_model::{AnswerRowView, Notice, NoticeLevel, QuestionRowView, SessionViewModel};

use crate::validate::{is_well_formed_url, looks_like_pdf};
use crate::{Advisory, QuestionList, SubmitError};

/// What gets sent to the analysis service: the trimmed document URL and the
/// trimmed non-blank questions in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPayload {
    pub document: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub payload: RequestPayload,
    pub advisory: Option<Advisory>,
}

/// Runs the preflight checks in their fixed order and builds the payload.
///
/// Order: blank document, no usable question, malformed URL. The PDF check
/// only attaches an advisory.
pub fn prepare_request(
    document: &str,
    questions: &QuestionList,
) -> Result<PreparedRequest, SubmitError> {
    let document = document.trim();
    if document.is_empty() {
        return Err(SubmitError::EmptyDocument);
    }

    let questions = questions.submittable();
    if questions.is_empty() {
        return Err(SubmitError::NoQuestions);
    }

    if !is_well_formed_url(document) {
        return Err(SubmitError::InvalidUrl);
    }

    let advisory = (!looks_like_pdf(document)).then_some(Advisory::NotLikelyPdf);

    Ok(PreparedRequest {
        payload: RequestPayload {
            document: document.to_string(),
            questions,
        },
        advisory,
    })
}

use url::Url;

/// Live feedback on the document URL as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentStatus {
    #[default]
    Empty,
    Invalid,
    NotPdf,
    Pdf,
}

/// True iff `candidate` parses as an absolute URL with a scheme and a non-empty host.
pub fn is_well_formed_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Permissive PDF heuristic: only ever drives a warning.
pub fn looks_like_pdf(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    lowered.ends_with(".pdf") || lowered.contains("pdf")
}

pub fn classify_document(candidate: &str) -> DocumentStatus {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        DocumentStatus::Empty
    } else if !is_well_formed_url(trimmed) {
        DocumentStatus::Invalid
    } else if looks_like_pdf(trimmed) {
        DocumentStatus::Pdf
    } else {
        DocumentStatus::NotPdf
    }
}

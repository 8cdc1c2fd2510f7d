use doclens_core::{DocumentStatus, NoticeLevel, SessionViewModel};

/// Renders the whole session as plain text lines.
pub fn render(view: &SessionViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let document = if view.document.trim().is_empty() {
        "(none)"
    } else {
        view.document.as_str()
    };
    lines.push(format!("Document: {document}"));
    if let Some(feedback) = document_feedback(view.document_status) {
        lines.push(format!("  {feedback}"));
    }

    lines.push("Questions:".to_string());
    for row in &view.questions {
        let text = if row.text.trim().is_empty() {
            "(blank)"
        } else {
            row.text.as_str()
        };
        lines.push(format!("  {}. {}", row.number, text));
    }

    lines.extend(render_notices(view));

    if !view.answers.is_empty() {
        let stale = if view.answers_stale {
            " - questions changed since these answers were fetched"
        } else {
            ""
        };
        lines.push(format!(
            "Answers ({} questions answered){stale}:",
            view.answered_count
        ));
        for row in &view.answers {
            lines.push(format!("  Question {}: {}", row.number, row.question));
            lines.push(format!("  Answer: {}", row.answer));
        }
    }

    lines.push(if view.processing {
        "Status: processing".to_string()
    } else {
        "Status: ready".to_string()
    });
    lines
}

fn render_notices(view: &SessionViewModel) -> Vec<String> {
    view.notices
        .iter()
        .map(|notice| format!("[{}] {}", level_tag(notice.level), notice.text))
        .collect()
}

fn level_tag(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warn",
        NoticeLevel::Error => "error",
    }
}

fn document_feedback(status: DocumentStatus) -> Option<&'static str> {
    match status {
        DocumentStatus::Empty => None,
        DocumentStatus::Invalid => Some("Invalid URL format"),
        DocumentStatus::NotPdf => Some("URL format is valid, but doesn't appear to be a PDF"),
        DocumentStatus::Pdf => Some("Valid PDF URL detected"),
    }
}

//! Session status formatting
//!
//! Renders the backend indicator badge and any downgrade notices recorded
//! while the fallback chain ran.

use crate::services::Session;
use crate::storage::BackendKind;

/// Format the backend status badge
pub fn format_backend_badge(kind: BackendKind) -> String {
    let icon = match kind {
        BackendKind::Remote => "●",
        BackendKind::Local => "○",
        BackendKind::Memory => "!",
    };
    format!("{} {} [{}]", icon, kind.status_label(), kind)
}

/// Format the full session status: badge plus notices
pub fn format_session_status(session: &Session) -> String {
    let mut output = format_backend_badge(session.backend_kind());
    output.push('\n');

    if !session.is_persistent() {
        output.push_str("Warning: changes made this session will not be saved.\n");
    }

    for notice in session.notices() {
        output.push_str(&format!("  note: {}\n", notice));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Session;
    use crate::storage::MemoryStore;

    #[test]
    fn test_badge_names_the_backend() {
        assert!(format_backend_badge(BackendKind::Remote).contains("[Remote]"));
        assert!(format_backend_badge(BackendKind::Local).contains("[Local]"));
        assert!(format_backend_badge(BackendKind::Memory).contains("[Memory]"));
    }

    #[test]
    fn test_memory_session_warns() {
        let session = Session::from_parts(
            Box::new(MemoryStore::new()),
            Vec::new(),
            vec!["Remote spreadsheet unavailable".into()],
        );
        let out = format_session_status(&session);
        assert!(out.contains("will not be saved"));
        assert!(out.contains("note: Remote spreadsheet unavailable"));
    }
}

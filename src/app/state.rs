// Dropspot - app/state.rs
//
// Top-level application state. Holds the upload session, the active panel,
// and the request flags panels use to ask the shell for side effects
// (opening the native file dialog, resetting the session). Owned by the
// eframe::App implementation.

use crate::core::session::{UploadPhase, UploadSession};
use crate::platform::config::AppConfig;

/// Which widget the central panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// The image drop-zone / upload flow.
    Upload,
    /// The static placeholder panel.
    Loading,
}

/// Top-level application state.
pub struct AppState {
    /// Validated configuration loaded at startup.
    pub config: AppConfig,

    /// The one upload session owned by the upload widget.
    pub session: UploadSession,

    /// Widget shown in the central panel.
    pub active_panel: PanelKind,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Non-fatal warnings accumulated at startup (config validation).
    pub warnings: Vec<String>,

    /// Set by the upload panel when the user asks to browse for a file.
    /// The shell opens the native dialog and clears the flag.
    pub request_browse: bool,

    /// Set by the success/error panels when the user asks to start over.
    pub request_reset: bool,

    /// GPU texture of the current preview, created lazily from the decoded
    /// pixels and dropped on reset.
    pub preview_texture: Option<egui::TextureHandle>,
}

impl AppState {
    /// Create initial state with the given config and startup panel.
    pub fn new(config: AppConfig, active_panel: PanelKind) -> Self {
        Self {
            config,
            session: UploadSession::new(),
            active_panel,
            show_about: false,
            warnings: Vec::new(),
            request_browse: false,
            request_reset: false,
            preview_texture: None,
        }
    }

    /// One-line status for the status bar, derived from the current state.
    pub fn status_line(&self) -> String {
        match self.active_panel {
            PanelKind::Loading => "Loading panel (static placeholder).".to_string(),
            PanelKind::Upload => match self.session.phase() {
                UploadPhase::Idle => "Ready. Drop an image or browse for one.".to_string(),
                UploadPhase::Uploading => {
                    format!("Uploading\u{2026} {}%", self.session.progress())
                }
                UploadPhase::Success => "Upload complete.".to_string(),
                UploadPhase::Error => match self.session.error() {
                    Some(e) => format!("Upload failed: {e}"),
                    None => "Upload failed.".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_status_line_follows_the_session() {
        let mut state = AppState::new(AppConfig::default(), PanelKind::Upload);
        assert!(state.status_line().starts_with("Ready"));

        state.session.offer(Path::new("photo.png"));
        state.session.tick();
        assert_eq!(state.status_line(), "Uploading\u{2026} 2%");

        for _ in 0..49 {
            state.session.tick();
        }
        assert_eq!(state.status_line(), "Upload complete.");

        let generation = state.session.generation();
        state.session.reset();
        state.session.offer(Path::new("photo.png"));
        let fresh = state.session.generation();
        assert_ne!(generation, fresh);
        state.session.fail(fresh, "boom".to_string());
        assert_eq!(state.status_line(), "Upload failed: boom");
    }

    #[test]
    fn test_status_line_for_loading_panel() {
        let state = AppState::new(AppConfig::default(), PanelKind::Loading);
        assert_eq!(state.status_line(), "Loading panel (static placeholder).");
    }
}

// Dropspot - core/session.rs
//
// The upload session state machine. One widget instance owns exactly one
// session; every mutation happens on the UI thread, either from an event
// handler or while draining the ticker/reader channels.
//
// Phase diagram:
//   Idle --offer(image)--> Uploading --tick x50--> Success --reset--> Idle
//                              |                      |
//                              +----fail(preview)-----+---> Error --reset--> Idle
//
// Asynchronous preview results are tagged with the generation that started
// them; results from a previous generation (the session was reset or
// restarted in the meantime) are discarded, never applied.

use crate::core::media::{self, PreviewImage};
use crate::util::constants::{PROGRESS_COMPLETE, PROGRESS_STEP};
use std::path::{Path, PathBuf};

/// The four mutually exclusive phases of an upload session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// Waiting for a file; the drop zone is shown.
    Idle,
    /// Simulated progress is running.
    Uploading,
    /// Progress reached 100. Exits only via reset.
    Success,
    /// The preview read failed. Exits only via reset.
    Error,
}

/// State of one upload widget instance.
#[derive(Debug)]
pub struct UploadSession {
    phase: UploadPhase,
    /// Percentage 0–100, meaningful only while `phase == Uploading`.
    progress: u8,
    /// True only while a drag gesture hovers the window.
    is_dragging: bool,
    /// Decoded preview, present from read completion until reset.
    preview: Option<PreviewImage>,
    /// Path of the accepted file. Clearing this on reset is what allows the
    /// same file to be chosen again.
    source: Option<PathBuf>,
    /// Failure description, present only in `Error`.
    error: Option<String>,
    /// Bumped on every accept and reset; stale async results are dropped.
    generation: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            progress: 0,
            is_dragging: false,
            preview: None,
            source: None,
            error: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generation of the current session cycle. Background work started for
    /// this cycle must carry this value back with its result.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Offer a selected or dropped file to the session.
    ///
    /// Accepted only in `Idle` and only when the declared media type starts
    /// with `image/`; anything else is a silent no-op. On acceptance the
    /// session enters `Uploading` with progress 0 and a fresh generation —
    /// the caller is expected to start the ticker and the preview read.
    pub fn offer(&mut self, path: &Path) -> bool {
        if self.phase != UploadPhase::Idle {
            tracing::debug!(file = %path.display(), phase = ?self.phase, "Busy; selection ignored");
            return false;
        }

        let media_type = media::media_type_for_path(path);
        if !media::is_image(media_type) {
            tracing::debug!(file = %path.display(), media_type, "Not an image; selection ignored");
            return false;
        }

        self.phase = UploadPhase::Uploading;
        self.progress = 0;
        self.preview = None;
        self.error = None;
        self.source = Some(path.to_path_buf());
        self.generation += 1;

        tracing::info!(file = %path.display(), media_type, generation = self.generation, "Upload accepted");
        true
    }

    /// Advance the simulated progress by one tick.
    ///
    /// Adds [`PROGRESS_STEP`] percent; when the counter reaches
    /// [`PROGRESS_COMPLETE`] it is clamped there and the phase flips to
    /// `Success` on this same tick. A no-op outside `Uploading`.
    pub fn tick(&mut self) {
        if self.phase != UploadPhase::Uploading {
            return;
        }

        self.progress = self
            .progress
            .saturating_add(PROGRESS_STEP)
            .min(PROGRESS_COMPLETE);

        if self.progress >= PROGRESS_COMPLETE {
            self.phase = UploadPhase::Success;
            tracing::info!(generation = self.generation, "Simulated upload complete");
        }
    }

    /// Attach an asynchronously produced preview.
    ///
    /// Applied only when `generation` matches the current cycle and the
    /// session is still in `Uploading` or `Success`; otherwise the result is
    /// stale (reset or restart happened first) and is discarded. Returns
    /// whether the preview was attached.
    pub fn attach_preview(&mut self, generation: u64, preview: PreviewImage) -> bool {
        if generation != self.generation
            || !matches!(self.phase, UploadPhase::Uploading | UploadPhase::Success)
        {
            tracing::debug!(
                generation,
                current = self.generation,
                phase = ?self.phase,
                "Stale preview result discarded"
            );
            return false;
        }

        self.preview = Some(preview);
        true
    }

    /// Record a preview-read failure, driving the session into `Error`.
    ///
    /// Subject to the same staleness rules as [`attach_preview`]. A failure
    /// arriving after the simulated progress already completed still applies:
    /// a success panel that can never show its image is not a success.
    ///
    /// [`attach_preview`]: UploadSession::attach_preview
    pub fn fail(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation
            || !matches!(self.phase, UploadPhase::Uploading | UploadPhase::Success)
        {
            tracing::debug!(
                generation,
                current = self.generation,
                phase = ?self.phase,
                "Stale failure result discarded"
            );
            return false;
        }

        tracing::warn!(error = %message, generation, "Preview read failed");
        self.phase = UploadPhase::Error;
        self.preview = None;
        self.error = Some(message);
        true
    }

    /// Update the transient drag-hover highlight flag.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    /// Reset to the initial idle state from any phase.
    ///
    /// Clears progress, preview, error, and the retained source path, and
    /// bumps the generation so in-flight background results are orphaned.
    pub fn reset(&mut self) {
        self.phase = UploadPhase::Idle;
        self.progress = 0;
        self.is_dragging = false;
        self.preview = None;
        self.source = None;
        self.error = None;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "Session reset");
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn preview() -> PreviewImage {
        PreviewImage {
            media_type: "image/png",
            data_url: "data:image/png;base64,YWJj".to_string(),
            rgba: vec![0; 4],
            width: 1,
            height: 1,
        }
    }

    fn assert_initial(session: &UploadSession) {
        assert_eq!(session.phase(), UploadPhase::Idle);
        assert_eq!(session.progress(), 0);
        assert!(!session.is_dragging());
        assert!(session.preview().is_none());
        assert!(session.source().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_non_image_selection_is_a_no_op() {
        let mut session = UploadSession::new();
        let generation = session.generation();

        assert!(!session.offer(Path::new("notes.txt")));
        assert!(!session.offer(Path::new("archive.pdf")));
        assert!(!session.offer(Path::new("no_extension")));

        assert_initial(&session);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn test_image_selection_enters_uploading_immediately() {
        let mut session = UploadSession::new();
        assert!(session.offer(Path::new("photo.jpg")));

        assert_eq!(session.phase(), UploadPhase::Uploading);
        assert_eq!(session.progress(), 0);
        assert_eq!(session.source(), Some(Path::new("photo.jpg")));
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_second_file_while_uploading_is_ignored() {
        let mut session = UploadSession::new();
        assert!(session.offer(Path::new("first.png")));
        assert!(!session.offer(Path::new("second.png")));
        assert_eq!(session.source(), Some(Path::new("first.png")));
    }

    #[test]
    fn test_progress_steps_and_completes_on_the_final_tick() {
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));

        for expected in 1..=49u8 {
            session.tick();
            assert_eq!(session.progress(), expected * 2);
            assert_eq!(session.phase(), UploadPhase::Uploading);
        }

        // Tick 50 reaches 100 and flips to Success on the same tick.
        session.tick();
        assert_eq!(session.progress(), 100);
        assert_eq!(session.phase(), UploadPhase::Success);
    }

    #[test]
    fn test_progress_never_exceeds_complete() {
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));
        for _ in 0..200 {
            session.tick();
        }
        assert_eq!(session.progress(), 100);
        assert_eq!(session.phase(), UploadPhase::Success);
    }

    #[test]
    fn test_tick_outside_uploading_is_a_no_op() {
        let mut session = UploadSession::new();
        session.tick();
        assert_initial(&session);
    }

    #[test]
    fn test_preview_attaches_during_uploading_and_after_success() {
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));
        let generation = session.generation();

        assert!(session.attach_preview(generation, preview()));
        assert!(session.preview().is_some());

        // Also valid after the progress already completed (slow read).
        let mut late = UploadSession::new();
        late.offer(Path::new("photo.png"));
        let generation = late.generation();
        for _ in 0..50 {
            late.tick();
        }
        assert_eq!(late.phase(), UploadPhase::Success);
        assert!(late.preview().is_none()); // success panel with no image yet
        assert!(late.attach_preview(generation, preview()));
        assert!(late.preview().is_some());
    }

    #[test]
    fn test_stale_preview_after_reset_is_discarded() {
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));
        let stale = session.generation();

        session.reset();
        assert!(!session.attach_preview(stale, preview()));
        assert_initial(&session);
    }

    #[test]
    fn test_stale_preview_after_restart_is_discarded() {
        let mut session = UploadSession::new();
        session.offer(Path::new("first.png"));
        let stale = session.generation();

        session.reset();
        session.offer(Path::new("second.png"));

        assert!(!session.attach_preview(stale, preview()));
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_read_failure_drives_error_phase() {
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));
        let generation = session.generation();

        assert!(session.fail(generation, "disk on fire".to_string()));
        assert_eq!(session.phase(), UploadPhase::Error);
        assert_eq!(session.error(), Some("disk on fire"));
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));
        let stale = session.generation();
        session.reset();

        assert!(!session.fail(stale, "too slow".to_string()));
        assert_initial(&session);
    }

    #[test]
    fn test_reset_restores_initial_values_from_every_phase() {
        // From Uploading.
        let mut session = UploadSession::new();
        session.offer(Path::new("photo.png"));
        session.tick();
        session.reset();
        assert_initial(&session);

        // From Success, with a preview attached.
        session.offer(Path::new("photo.png"));
        let generation = session.generation();
        for _ in 0..50 {
            session.tick();
        }
        session.attach_preview(generation, preview());
        session.reset();
        assert_initial(&session);

        // From Error.
        session.offer(Path::new("photo.png"));
        let generation = session.generation();
        session.fail(generation, "boom".to_string());
        session.reset();
        assert_initial(&session);
    }

    #[test]
    fn test_reset_allows_reselecting_the_same_file() {
        let mut session = UploadSession::new();
        assert!(session.offer(Path::new("photo.png")));
        session.reset();
        assert!(session.offer(Path::new("photo.png")));
        assert_eq!(session.phase(), UploadPhase::Uploading);
    }

    #[test]
    fn test_drag_flag_follows_hover() {
        let mut session = UploadSession::new();
        assert!(!session.is_dragging());
        session.set_dragging(true);
        assert!(session.is_dragging());
        session.set_dragging(false);
        assert!(!session.is_dragging());
    }
}

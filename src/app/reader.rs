// Dropspot - app/reader.rs
//
// One-shot preview read on a background thread.
//
// Architecture:
//   - `PreviewReader` lives on the UI thread; `run_read` runs on a
//     background thread and sends exactly one completion or failure
//     message over an mpsc channel, then exits.
//   - There is no cancellation: the read is short-lived and its result is
//     tagged with the session generation that started it, so a result
//     arriving after a reset or restart is recognised as stale by the
//     session and discarded instead of mutating fresh state.
//   - Transient I/O errors are retried with capped backoff; permanent
//     errors are reported immediately.
//
// The size cap is enforced on the file's metadata before any bytes are
// read, so an oversize selection never allocates its content.

use crate::core::media::{self, PreviewImage};
use crate::util::constants::{READ_MAX_RETRIES, READ_RETRY_DELAYS_MS};
use crate::util::error::MediaError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

/// Outcome of a preview read, tagged with its starting generation.
#[derive(Debug)]
pub enum ReadProgress {
    /// The file was read and decoded.
    Completed {
        generation: u64,
        preview: PreviewImage,
    },
    /// The read or decode failed.
    Failed {
        generation: u64,
        error: MediaError,
    },
}

/// Manages the one-shot preview read on a background thread.
pub struct PreviewReader {
    /// Channel receiver for the UI to poll the read outcome.
    pub progress_rx: Option<mpsc::Receiver<ReadProgress>>,
}

impl PreviewReader {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start reading `path` for the session cycle `generation`.
    ///
    /// Spawns a background thread immediately. A previous in-flight read is
    /// orphaned (its channel is replaced); its late result would have been
    /// rejected by the generation check anyway.
    pub fn start_read(&mut self, path: PathBuf, generation: u64, max_bytes: u64) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_read(path, generation, max_bytes, tx);
        });

        tracing::debug!(generation, "Preview read started");
    }

    /// Poll for the read outcome without blocking.
    pub fn poll_progress(&self) -> Vec<ReadProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for PreviewReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Background read pipeline: size check → read → decode → single message.
fn run_read(path: PathBuf, generation: u64, max_bytes: u64, tx: mpsc::Sender<ReadProgress>) {
    let result = load_preview(&path, max_bytes);

    let msg = match result {
        Ok(preview) => {
            tracing::debug!(
                file = %path.display(),
                width = preview.width,
                height = preview.height,
                generation,
                "Preview ready"
            );
            ReadProgress::Completed {
                generation,
                preview,
            }
        }
        Err(error) => {
            tracing::warn!(file = %path.display(), error = %error, generation, "Preview read failed");
            ReadProgress::Failed { generation, error }
        }
    };

    // Receiver dropped (widget closed); nothing left to do.
    let _ = tx.send(msg);
}

/// Read and decode the file at `path` into a [`PreviewImage`].
pub fn load_preview(path: &Path, max_bytes: u64) -> Result<PreviewImage, MediaError> {
    let size = std::fs::metadata(path)
        .map_err(|e| MediaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();

    if size > max_bytes {
        return Err(MediaError::TooLarge {
            path: path.to_path_buf(),
            size,
            max_size: max_bytes,
        });
    }

    let bytes = read_bytes_with_retry(path).map_err(|e| MediaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    media::decode_preview(path, &bytes)
}

/// Read a file's bytes with transient-error retries.
fn read_bytes_with_retry(path: &Path) -> io::Result<Vec<u8>> {
    let mut last_err: Option<io::Error> = None;

    for attempt in 0..READ_MAX_RETRIES {
        match std::fs::read(path) {
            Ok(bytes) => return Ok(bytes),
            Err(e) if is_transient_error(&e) => {
                tracing::debug!(
                    file = %path.display(),
                    attempt = attempt + 1,
                    error = %e,
                    "Transient I/O error, retrying"
                );
                std::thread::sleep(Duration::from_millis(READ_RETRY_DELAYS_MS[attempt as usize]));
                last_err = Some(e);
            }
            Err(e) => return Err(e), // Permanent error; do not retry.
        }
    }

    Err(last_err.unwrap_or_else(|| io::Error::other("Unknown read error")))
}

/// Returns true for transient I/O errors that are worth retrying.
fn is_transient_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted | io::ErrorKind::TimedOut
    )
}

//! Background builds.
//!
//! [`spawn_build`] runs a [`CatalogBuilder`] on its own thread and streams
//! [`BuildEvent`]s back over an unbounded channel, so the worker never
//! blocks on a slow consumer. Every build ends with exactly one
//! [`BuildEvent::Finished`].

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::error::{CatalogError, Result};

use super::builder::{Catalog, CatalogBuilder};
use super::cancel::CancellationToken;
use super::config::FilterConfig;
use super::progress::ProgressSink;

#[derive(Debug)]
pub enum BuildEvent {
    /// Percentage complete, non-decreasing.
    Progress(u8),
    /// Final outcome; always the last event.
    Finished(Result<Catalog>),
}

/// Forwards progress into the event channel.
struct ChannelSink(Sender<BuildEvent>);

impl ProgressSink for ChannelSink {
    fn on_progress(&mut self, percent: u8) {
        // A dropped receiver means nobody is listening; the build carries on.
        let _ = self.0.send(BuildEvent::Progress(percent));
    }
}

/// A build running on a worker thread.
pub struct BuildHandle {
    events: Receiver<BuildEvent>,
    thread: JoinHandle<()>,
    cancel: CancellationToken,
}

impl BuildHandle {
    /// Raw event stream, for callers with their own event loop.
    pub fn events(&self) -> &Receiver<BuildEvent> {
        &self.events
    }

    /// Ask the worker to stop at the next file.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Block until the build finishes, discarding progress.
    pub fn wait(self) -> Result<Catalog> {
        self.wait_with(&mut super::progress::NoProgress)
    }

    /// Block until the build finishes, replaying progress into `sink` on the
    /// calling thread.
    pub fn wait_with<S: ProgressSink + ?Sized>(self, sink: &mut S) -> Result<Catalog> {
        for event in self.events.iter() {
            match event {
                BuildEvent::Progress(pct) => sink.on_progress(pct),
                BuildEvent::Finished(result) => {
                    let _ = self.thread.join();
                    return result;
                }
            }
        }
        // Channel closed without a result: the worker panicked.
        let _ = self.thread.join();
        Err(CatalogError::WorkerLost)
    }
}

/// Start building the catalog of `root` on a dedicated thread.
pub fn spawn_build(root: PathBuf, config: FilterConfig) -> Result<BuildHandle> {
    spawn_build_with(root, config, CancellationToken::new())
}

/// Like [`spawn_build`], sharing an existing cancellation token.
pub fn spawn_build_with(
    root: PathBuf,
    config: FilterConfig,
    cancel: CancellationToken,
) -> Result<BuildHandle> {
    let (tx, rx) = unbounded();
    let builder = CatalogBuilder::new(config).with_cancellation(cancel.clone());

    let thread = thread::Builder::new()
        .name("foldercat-worker".to_string())
        .spawn(move || {
            let mut sink = ChannelSink(tx);
            let result = builder.build(&root, &mut sink);
            let _ = sink.0.send(BuildEvent::Finished(result));
        })
        .map_err(CatalogError::Spawn)?;

    Ok(BuildHandle {
        events: rx,
        thread,
        cancel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_events_end_with_finished() {
        let dir = TempDir::new().unwrap();
        for i in 0..4 {
            fs::write(dir.path().join(format!("{i}.txt")), "").unwrap();
        }

        let handle = spawn_build(dir.path().to_path_buf(), FilterConfig::default()).unwrap();
        let events: Vec<BuildEvent> = handle.events().iter().collect();

        let progress: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                BuildEvent::Progress(p) => Some(*p),
                BuildEvent::Finished(_) => None,
            })
            .collect();
        assert_eq!(progress, [25, 50, 75, 100]);
        assert!(matches!(events.last(), Some(BuildEvent::Finished(Ok(_)))));
    }

    #[test]
    fn test_wait_with_replays_progress() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("only.txt"), "").unwrap();

        let handle = spawn_build(dir.path().to_path_buf(), FilterConfig::default()).unwrap();
        let mut seen: Vec<u8> = Vec::new();
        let catalog = handle.wait_with(&mut |p: u8| seen.push(p)).unwrap();
        assert_eq!(seen, [100]);
        assert!(catalog.text.contains("  only.txt\n"));
    }

    #[test]
    fn test_path_error_crosses_thread() {
        let dir = TempDir::new().unwrap();
        let handle = spawn_build(dir.path().join("missing"), FilterConfig::default()).unwrap();
        assert!(matches!(handle.wait(), Err(CatalogError::Path { .. })));
    }

    #[test]
    fn test_pre_cancelled_build() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let token = CancellationToken::new();
        token.cancel();
        let handle =
            spawn_build_with(dir.path().to_path_buf(), FilterConfig::default(), token).unwrap();
        assert!(matches!(handle.wait(), Err(CatalogError::Cancelled)));
    }
}

// Progress Indicator - app/tail.rs
//
// Live tail: keeps "the latest non-blank line" of one file current and
// hands each change to a sink on the owning thread.
//
// Architecture:
//   - `TailWatcher` lives on the UI thread; `run_tail_watcher` runs on a
//     background thread that owns the open file and the notify subscription.
//   - notify delivers raw events on its own thread; they are forwarded to
//     the tail thread over an internal channel and coalesced there.
//   - Statuses travel back over a single mpsc channel (one producer, one
//     consumer), so the UI applies them in exactly the order produced.
//   - An `Arc<AtomicBool>` cancel flag lets the UI stop the tail without
//     waiting for the background thread.
//
// Stop semantics:
//   - `stop()` sets the flag, drops the receiver, and posts one wake-up on
//     the notification channel. Only `pump()` applies messages, and it reads
//     from that receiver, so nothing reaches the sink once `stop()` has
//     returned.
//   - The tail thread blocks on the notification channel (no timed polling),
//     re-checks the flag after every wake and before every send, then exits,
//     which closes the file and removes the subscription.
//
// Error policy:
//   - Open or subscribe failure: terminal, one `Failed` message naming the path.
//   - Read failure after a notification (file gone, permissions, invalid or
//     half-written UTF-8): logged at DEBUG, previous status kept.

use crate::app::sink::StatusSink;
use crate::core::extract::extract_latest_line;
use crate::core::model::{FileState, StatusLine, WatchProgress, WatchState};
use crate::platform::fs::read_file_text;
use crate::util::error::{Result, WatchError};
use crate::util::logging::preview;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Callback run on the background thread after each queued message, so the
/// owning thread can wake up (e.g. `egui::Context::request_repaint`).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

// =============================================================================
// TailWatcher
// =============================================================================

/// Watches one file and feeds its latest non-blank line to a sink.
///
/// The watcher lives on the thread that owns presentation state and exposes
/// a start/pump/stop interface: `start` spawns the background thread,
/// `pump` applies queued updates to the sink, `stop` tears everything down.
pub struct TailWatcher<S: StatusSink> {
    path: PathBuf,
    origin: FileState,
    sink: S,
    state: WatchState,
    waker: Option<Waker>,
    /// Channel receiver for tail messages. `None` when not running.
    progress_rx: Option<mpsc::Receiver<WatchProgress>>,
    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
    /// Extra sender on the notification channel, used once by `stop()` to
    /// wake the tail thread out of its blocking receive.
    wake_tx: Option<mpsc::Sender<()>>,
    /// Kept only to report whether the background thread has exited; never joined.
    worker: Option<JoinHandle<()>>,
}

impl<S: StatusSink> TailWatcher<S> {
    /// Create an idle watcher for `path`.
    ///
    /// `origin` is what `platform::fs::ensure_path` reported; a freshly
    /// created file is announced with `StatusLine::Created`.
    pub fn new(path: impl Into<PathBuf>, origin: FileState, sink: S) -> Self {
        Self {
            path: path.into(),
            origin,
            sink,
            state: WatchState::Idle,
            waker: None,
            progress_rx: None,
            cancel_flag: None,
            wake_tx: None,
            worker: None,
        }
    }

    /// Install a callback that fires whenever a message is queued.
    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// Begin watching. Returns immediately; opening, the first read and the
    /// subscription all happen on the background thread.
    ///
    /// Only valid from `Idle`; any other state logs and does nothing.
    pub fn start(&mut self) {
        if self.state != WatchState::Idle {
            tracing::warn!(
                path = %self.path.display(),
                state = ?self.state,
                "Tail: start ignored, watcher already used"
            );
            return;
        }

        let (tx, rx) = mpsc::channel();
        let (events_tx, events_rx) = mpsc::channel::<()>();
        let wake_tx = events_tx.clone();
        let cancel = Arc::new(AtomicBool::new(false));
        let emitter = Emitter {
            tx,
            cancel: Arc::clone(&cancel),
            waker: self.waker.clone(),
        };
        let path = self.path.clone();
        let origin = self.origin;

        let spawned = std::thread::Builder::new()
            .name("tail-watcher".to_string())
            .spawn(move || run_tail_watcher(path, origin, emitter, events_tx, events_rx));

        match spawned {
            Ok(handle) => {
                self.progress_rx = Some(rx);
                self.cancel_flag = Some(cancel);
                self.wake_tx = Some(wake_tx);
                self.worker = Some(handle);
                self.state = WatchState::Opening;
                tracing::info!(path = %self.path.display(), "Live tail starting");
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Tail: could not spawn watcher thread"
                );
                self.state = WatchState::Error;
                self.sink.on_status(StatusLine::open_failed(&self.path));
            }
        }
    }

    /// Stop watching. Safe in any state and safe to repeat: only `Opening`
    /// and `Watching` have anything to tear down. Does not block.
    pub fn stop(&mut self) {
        if !self.state.is_active() {
            return;
        }
        if let Some(flag) = self.cancel_flag.take() {
            flag.store(true, Ordering::SeqCst);
        }
        if let Some(wake) = self.wake_tx.take() {
            // Err means the tail thread is already gone.
            let _ = wake.send(());
        }
        self.progress_rx = None;
        self.state = WatchState::Stopped;
        self.sink.on_stop();
        tracing::info!(path = %self.path.display(), "Live tail stopped");
    }

    /// Drain queued tail messages without blocking.
    pub fn poll_progress(&self) -> Vec<WatchProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }

    /// Apply every queued message to the sink, in order.
    ///
    /// Call from the thread that owns the sink. Returns how many messages
    /// were applied.
    pub fn pump(&mut self) -> usize {
        let messages = self.poll_progress();
        let count = messages.len();
        for msg in messages {
            self.apply(msg);
        }
        count
    }

    fn apply(&mut self, msg: WatchProgress) {
        if !self.state.is_active() {
            return;
        }
        match msg {
            WatchProgress::Status(status) => self.sink.on_status(status),
            WatchProgress::Started => {
                self.state = WatchState::Watching;
                self.sink.on_start();
            }
            WatchProgress::Failed(status) => {
                self.state = WatchState::Error;
                self.progress_rx = None;
                self.cancel_flag = None;
                self.wake_tx = None;
                self.sink.on_status(status);
            }
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Returns `true` while the watcher is opening or watching.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether the background thread (and with it the file handle and the
    /// subscription) is gone. `true` if it was never started.
    pub fn worker_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl<S: StatusSink> Drop for TailWatcher<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Background side
// =============================================================================

/// Sending half held by the tail thread.
struct Emitter {
    tx: mpsc::Sender<WatchProgress>,
    cancel: Arc<AtomicBool>,
    waker: Option<Waker>,
}

impl Emitter {
    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Queue `msg` unless the watcher has been stopped.
    /// Returns `false` when the tail thread should exit.
    fn send(&self, msg: WatchProgress) -> bool {
        if self.is_cancelled() || self.tx.send(msg).is_err() {
            return false;
        }
        if let Some(ref wake) = self.waker {
            wake();
        }
        true
    }
}

/// The open file and its change subscription. Dropping it closes the
/// descriptor and removes the OS watch.
struct WatchHandle {
    _file: File,
    _watcher: RecommendedWatcher,
}

/// Background loop: open, subscribe, initial read, then one extraction per
/// batch of change notifications until cancelled.
///
/// `events_tx` is handed to the notify callback; `events_rx` carries both
/// change notifications and the wake-up posted by `TailWatcher::stop`.
fn run_tail_watcher(
    path: PathBuf,
    origin: FileState,
    emitter: Emitter,
    events_tx: mpsc::Sender<()>,
    events_rx: mpsc::Receiver<()>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if !emitter.send($msg) {
                tracing::debug!(path = %path.display(), "Tail: stopped, exiting");
                return;
            }
        };
    }

    // The subscription is registered before the first read so that a write
    // landing between the two still produces a notification.
    let _handle = match open_and_subscribe(&path, events_tx) {
        Ok(handle) => handle,
        Err(err) => {
            tracing::error!(error = %err, "Tail: cannot watch file");
            emitter.send(WatchProgress::Failed(StatusLine::open_failed(&path)));
            return;
        }
    };

    if origin == FileState::Created {
        send!(WatchProgress::Status(StatusLine::Created(path.clone())));
    }
    let mut last_line = read_latest_line(&path);
    match last_line {
        Some(ref line) => send!(WatchProgress::Status(StatusLine::Line(line.clone()))),
        None => send!(WatchProgress::Status(StatusLine::Watching(path.clone()))),
    }
    // Queued after the initial statuses: once the owner sees Watching, all
    // of them have been applied.
    send!(WatchProgress::Started);
    tracing::info!(path = %path.display(), "Live tail active");

    loop {
        if events_rx.recv().is_err() {
            tracing::warn!(path = %path.display(), "Tail: notification source closed");
            return;
        }

        // Several writes may have landed since the last wake; one read
        // covers them all because it sees the whole current file.
        let mut coalesced = 1usize;
        while events_rx.try_recv().is_ok() {
            coalesced += 1;
        }

        if emitter.is_cancelled() {
            tracing::debug!(path = %path.display(), "Tail: cancelled, exiting");
            return;
        }

        let Some(line) = read_latest_line(&path) else {
            continue;
        };
        if last_line.as_deref() == Some(line.as_str()) {
            continue;
        }

        tracing::debug!(
            path = %path.display(),
            coalesced,
            line = preview(&line),
            "Tail: new status line"
        );
        send!(WatchProgress::Status(StatusLine::Line(line.clone())));
        last_line = Some(line);
    }
}

/// Open `path` read-only and subscribe to its change events, forwarding each
/// one as a unit message on `events`.
fn open_and_subscribe(path: &Path, events: mpsc::Sender<()>) -> Result<WatchHandle> {
    let file = File::open(path).map_err(|source| WatchError::FileOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let subscribe_failed = |source: notify::Error| WatchError::SubscribeFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut watcher = notify::recommended_watcher(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) if is_change(&event) => {
                // Receiver gone means the tail thread has exited.
                let _ = events.send(());
            }
            Ok(event) => tracing::trace!(kind = ?event.kind, "Tail: ignoring event"),
            Err(e) => tracing::warn!(error = %e, "Tail: notification error"),
        },
    )
    .map_err(subscribe_failed)?;
    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(subscribe_failed)?;

    Ok(WatchHandle {
        _file: file,
        _watcher: watcher,
    })
}

/// Whether `event` may have changed the file's content.
///
/// A rescan request (e.g. an overflowed inotify queue) means events were
/// lost, so it counts as a change too.
fn is_change(event: &notify::Event) -> bool {
    event.kind.is_modify() || event.need_rescan()
}

/// Re-read the whole file and extract its latest non-blank line.
///
/// `None` when the file holds no such line or could not be read (including
/// content that is not valid UTF-8); either way the caller keeps its
/// previous status.
fn read_latest_line(path: &Path) -> Option<String> {
    match read_file_text(path) {
        Ok(text) => extract_latest_line(&text),
        Err(source) => {
            let err = WatchError::TransientReadFailed {
                path: path.to_path_buf(),
                source,
            };
            tracing::debug!(error = %err, "Tail: keeping previous status");
            None
        }
    }
}

// Progress Indicator - tests/e2e_watch.rs
//
// End-to-end tests for the ensure → watch → display pipeline.
//
// These tests exercise the real filesystem and real OS change notifications
// through notify. No mocks: a producer appends to a file on disk and the
// display state must end up showing the right line.

use progress_indicator::app::args::{parse_args, LaunchMode};
use progress_indicator::app::state::DisplayState;
use progress_indicator::app::tail::TailWatcher;
use progress_indicator::core::model::{FileState, StatusLine, WatchState};
use progress_indicator::platform::fs::ensure_path;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// Pump `watcher` until `done` holds or five seconds pass.
fn pump_until<S, F>(watcher: &mut TailWatcher<S>, done: F) -> bool
where
    S: progress_indicator::app::sink::StatusSink,
    F: Fn(&TailWatcher<S>) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        watcher.pump();
        if done(watcher) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

fn append_line(path: &Path, line: &str) {
    let mut f = fs::OpenOptions::new()
        .append(true)
        .open(path)
        .expect("open for append");
    writeln!(f, "{line}").expect("append");
}

/// Lines (not lifecycle statuses) recorded by a `Vec` sink.
fn lines(statuses: &[StatusLine]) -> Vec<&str> {
    statuses.iter().filter_map(StatusLine::line).collect()
}

// =============================================================================
// Launch → ensure → watch
// =============================================================================

/// A path from the command line that does not exist yet is created together
/// with its directories, and the display announces it.
#[test]
fn e2e_fresh_path_is_created_and_announced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs").join("nightly").join("progress.log");
    let arg = format!("--watchfile={}", path.display());

    let launch = parse_args(["progress-indicator", arg.as_str()]);
    let watch_path = match launch.mode {
        LaunchMode::Watch(p) => p,
        other => panic!("expected Watch mode, got {other:?}"),
    };

    let origin = ensure_path(&watch_path).unwrap();
    assert_eq!(origin, FileState::Created);
    assert!(path.is_file());

    let mut watcher = TailWatcher::new(&watch_path, origin, DisplayState::new());
    watcher.start();
    assert!(pump_until(&mut watcher, |w| w.state() == WatchState::Watching));

    let state = watcher.sink();
    assert!(state.live);
    assert_eq!(state.current, StatusLine::Watching(watch_path.clone()));
    assert_eq!(state.update_count, 2, "Created then Watching");

    watcher.stop();
    assert!(!watcher.sink().live);
}

/// A producer appending progress lines drives the display through each one.
#[test]
fn e2e_producer_lines_show_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.log");
    fs::write(&path, "starting\n").unwrap();

    let origin = ensure_path(&path).unwrap();
    assert_eq!(origin, FileState::Existing);

    let mut watcher = TailWatcher::new(&path, origin, Vec::<StatusLine>::new());
    watcher.start();
    assert!(pump_until(&mut watcher, |w| w.state() == WatchState::Watching));
    assert_eq!(lines(watcher.sink()), ["starting"]);

    for step in ["step 1/3", "step 2/3", "step 3/3"] {
        append_line(&path, step);
        assert!(
            pump_until(&mut watcher, |w| lines(w.sink()).last() == Some(&step)),
            "display never showed {step}"
        );
    }

    // Whatever got coalesced, the order is the producer's order and no
    // value repeats back to back.
    let seen = lines(watcher.sink());
    assert_eq!(seen.first(), Some(&"starting"));
    assert_eq!(seen.last(), Some(&"step 3/3"));
    assert!(seen.windows(2).all(|w| w[0] != w[1]), "{seen:?}");
}

/// Whitespace-only appends after a real line leave the display alone.
#[test]
fn e2e_blank_appends_keep_previous_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.log");
    fs::write(&path, "downloading\n").unwrap();

    let mut watcher = TailWatcher::new(&path, FileState::Existing, DisplayState::new());
    watcher.start();
    assert!(pump_until(&mut watcher, |w| w.state() == WatchState::Watching));
    assert_eq!(watcher.sink().message(), "downloading");

    append_line(&path, "   ");
    append_line(&path, "");
    append_line(&path, "\t");
    std::thread::sleep(Duration::from_millis(300));
    watcher.pump();

    assert_eq!(watcher.sink().message(), "downloading");
    assert_eq!(watcher.sink().update_count, 1);
}

/// A watch path whose parent is a regular file can never be opened; the
/// display shows the error and stop stays a no-op.
#[test]
fn e2e_unopenable_path_shows_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("progress.log");

    assert!(ensure_path(&path).is_err());

    let mut watcher = TailWatcher::new(&path, FileState::Existing, DisplayState::new());
    watcher.start();
    assert!(pump_until(&mut watcher, |w| w.state() == WatchState::Error));

    let expected = format!("Error: Could not open file {}", path.display());
    assert_eq!(watcher.sink().message(), expected);
    assert!(!watcher.sink().live);

    watcher.stop();
    watcher.stop();
    assert_eq!(watcher.state(), WatchState::Error);
}

/// Dropping a running watcher stops it and lets the tail thread exit.
#[test]
fn e2e_stop_releases_watch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.log");
    fs::write(&path, "running\n").unwrap();

    let mut watcher = TailWatcher::new(&path, FileState::Existing, DisplayState::new());
    watcher.start();
    assert!(pump_until(&mut watcher, |w| w.state() == WatchState::Watching));

    watcher.stop();
    append_line(&path, "written after stop");
    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(watcher.pump(), 0);
    assert_eq!(watcher.sink().message(), "running");

    let deadline = Instant::now() + Duration::from_secs(5);
    while !watcher.worker_finished() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(watcher.worker_finished());
}

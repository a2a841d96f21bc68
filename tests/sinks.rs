use std::fs;
use std::path::PathBuf;
use timber::{FileSink, Level, RotatingFileSink, Sink};

fn backup(dir: &tempfile::TempDir, index: usize) -> PathBuf {
    dir.path().join(format!("app.{}.log", index))
}

#[test]
fn file_sink_appends_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");

    let sink = FileSink::new(&path).unwrap();
    sink.log("one\n", Level::Info);
    sink.log("two\n", Level::Error);

    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn file_sink_fails_fast_when_the_path_cannot_be_opened() {
    let dir = tempfile::tempdir().unwrap();

    // the path is a directory, so the open must fail at construction
    let err = FileSink::new(dir.path()).unwrap_err();
    assert_eq!(err.path(), dir.path());
    assert!(err.to_string().contains("failed to open log file"));
}

#[test]
fn rotation_shifts_backups_and_discards_the_oldest() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("app.log");
    let sink = RotatingFileSink::new(&base, 10, 2).unwrap();

    // each message is exactly 10 bytes, filling the file to the brim
    sink.log("message 1\n", Level::Info);
    sink.log("message 2\n", Level::Info);
    sink.log("message 3\n", Level::Info);

    assert_eq!(fs::read_to_string(&base).unwrap(), "message 3\n");
    assert_eq!(fs::read_to_string(backup(&dir, 1)).unwrap(), "message 2\n");
    assert_eq!(fs::read_to_string(backup(&dir, 2)).unwrap(), "message 1\n");

    sink.log("message 4\n", Level::Info);

    // the oldest backup is gone, never a third slot
    assert_eq!(fs::read_to_string(&base).unwrap(), "message 4\n");
    assert_eq!(fs::read_to_string(backup(&dir, 1)).unwrap(), "message 3\n");
    assert_eq!(fs::read_to_string(backup(&dir, 2)).unwrap(), "message 2\n");
    assert!(!backup(&dir, 3).exists());
}

#[test]
fn rotation_triggers_only_past_the_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("app.log");
    let sink = RotatingFileSink::new(&base, 10, 2).unwrap();

    // exactly at the limit: no rotation yet
    sink.log("1234567890", Level::Info);
    assert!(!backup(&dir, 1).exists());

    // one byte over: rotate before writing
    sink.log("x", Level::Info);
    assert_eq!(fs::read_to_string(&base).unwrap(), "x");
    assert_eq!(fs::read_to_string(backup(&dir, 1)).unwrap(), "1234567890");
}

#[test]
fn oversized_message_rotates_first_and_is_written_whole() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("app.log");
    let sink = RotatingFileSink::new(&base, 10, 2).unwrap();

    sink.log("short\n", Level::Info);
    let oversized = "a message far larger than the limit\n";
    sink.log(oversized, Level::Info);

    assert_eq!(fs::read_to_string(&base).unwrap(), oversized);
    assert_eq!(fs::read_to_string(backup(&dir, 1)).unwrap(), "short\n");
}

#[test]
fn size_accounting_survives_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("app.log");

    {
        let sink = RotatingFileSink::new(&base, 10, 2).unwrap();
        sink.log("123456789\n", Level::Info);
    }

    // the new sink seeds its size from the existing file
    let sink = RotatingFileSink::new(&base, 10, 2).unwrap();
    sink.log("x\n", Level::Info);

    assert_eq!(fs::read_to_string(&base).unwrap(), "x\n");
    assert_eq!(fs::read_to_string(backup(&dir, 1)).unwrap(), "123456789\n");
}

#[test]
fn zero_retained_backups_discard_the_active_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("app.log");
    let sink = RotatingFileSink::new(&base, 10, 0).unwrap();

    sink.log("1234567890", Level::Info);
    sink.log("second", Level::Info);

    assert_eq!(fs::read_to_string(&base).unwrap(), "second");
    assert!(!backup(&dir, 1).exists());
}

#[test]
fn rotating_sink_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("nested/logs/app.log");

    let sink = RotatingFileSink::new(&base, 100, 2).unwrap();
    sink.log("hello\n", Level::Info);

    assert_eq!(fs::read_to_string(&base).unwrap(), "hello\n");
}

#[test]
fn backup_naming_keeps_stem_and_extension() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("server.trace.log");
    let sink = RotatingFileSink::new(&base, 5, 1).unwrap();

    sink.log("aaaaa", Level::Info);
    sink.log("b", Level::Info);

    // `server.trace.log` rotates into `server.trace.1.log`
    let rotated = dir.path().join("server.trace.1.log");
    assert_eq!(fs::read_to_string(rotated).unwrap(), "aaaaa");
    assert_eq!(fs::read_to_string(&base).unwrap(), "b");
}

#[test]
fn flush_threshold_accepts_every_level() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path().join("app.log")).unwrap();

    // raising the threshold must not affect what gets written
    sink.flush_on(Level::Critical);
    sink.log("quiet\n", Level::Trace);
    sink.log("loud\n", Level::Critical);

    let contents = fs::read_to_string(dir.path().join("app.log")).unwrap();
    assert_eq!(contents, "quiet\nloud\n");
}

use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use timber::{FileSink, Level, Logger, Sink};

/// Captures rendered lines in memory.
struct MemorySink {
    lines: Mutex<Vec<(String, Level)>>,
    flush_level: Mutex<Level>,
}

impl MemorySink {
    fn new() -> Self {
        MemorySink {
            lines: Mutex::new(Vec::new()),
            flush_level: Mutex::new(Level::Trace),
        }
    }

    fn lines(&self) -> Vec<(String, Level)> {
        self.lines.lock().unwrap().clone()
    }

    fn flush_level(&self) -> Level {
        *self.flush_level.lock().unwrap()
    }
}

impl Sink for MemorySink {
    fn log(&self, message: &str, level: Level) {
        self.lines.lock().unwrap().push((message.to_owned(), level));
    }

    fn flush_on(&self, level: Level) {
        *self.flush_level.lock().unwrap() = level;
    }
}

/// Records which sink saw a message, in dispatch order.
struct TaggedSink {
    tag: &'static str,
    record: Arc<Mutex<Vec<&'static str>>>,
}

impl Sink for TaggedSink {
    fn log(&self, _message: &str, _level: Level) {
        self.record.lock().unwrap().push(self.tag);
    }

    fn flush_on(&self, _level: Level) {}
}

#[test]
fn formats_and_renders_through_the_pattern() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new("app")
        .with_pattern("[%L] %N: %V%n")
        .with_sink(sink.clone());

    timber::info!(logger, "hi");
    timber::error!(logger, "{} of {} shards down", 2, 8);

    let lines = sink.lines();
    assert_eq!(lines[0], ("[info] app: hi\n".to_owned(), Level::Info));
    assert_eq!(
        lines[1],
        ("[error] app: 2 of 8 shards down\n".to_owned(), Level::Error),
    );
}

#[test]
fn level_wrappers_fix_the_level() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new("app")
        .with_pattern("%V")
        .with_sink(sink.clone());

    logger.trace("t", &[]);
    logger.info("i", &[]);
    logger.debug("d", &[]);
    logger.warning("w", &[]);
    logger.error("e", &[]);
    logger.critical("c", &[]);

    let levels: Vec<Level> = sink.lines().into_iter().map(|(_, level)| level).collect();
    assert_eq!(
        levels,
        [
            Level::Trace,
            Level::Info,
            Level::Debug,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ],
    );
}

#[test]
fn sinks_dispatch_in_registration_order() {
    let record = Arc::new(Mutex::new(Vec::new()));
    let mut logger = Logger::new("app").with_pattern("%V");
    for &tag in ["first", "second", "third"].iter() {
        logger.add_sink(Arc::new(TaggedSink {
            tag,
            record: record.clone(),
        }));
    }

    timber::info!(logger, "go");

    assert_eq!(*record.lock().unwrap(), ["first", "second", "third"]);
}

#[test]
fn duplicate_sinks_receive_the_message_twice() {
    let sink = Arc::new(MemorySink::new());
    let mut logger = Logger::new("app").with_pattern("%V");
    logger.add_sink(sink.clone());
    logger.add_sink(sink.clone());

    timber::info!(logger, "once");

    assert_eq!(sink.lines().len(), 2);
}

#[test]
fn flush_on_reaches_only_already_attached_sinks() {
    let early = Arc::new(MemorySink::new());
    let late = Arc::new(MemorySink::new());

    let mut logger = Logger::new("app");
    logger.add_sink(early.clone());
    logger.flush_on(Level::Critical);
    logger.add_sink(late.clone());

    assert_eq!(early.flush_level(), Level::Critical);
    assert_eq!(late.flush_level(), Level::Trace);
}

#[test]
fn log_to_file_appends_the_bare_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("side.log");
    let logger = Logger::new("app").with_pattern("[%L] %V");

    logger.log_to_file(&path, "checkpoint {} reached\n", &[7.into()]);

    // no pattern expansion on this path
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "checkpoint 7 reached\n",
    );
}

#[test]
fn log_to_file_is_a_silent_no_op_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::new("app");

    // the target is a directory; the call must neither panic nor error
    logger.log_to_file(dir.path(), "lost\n", &[1.into()]);
}

#[test]
fn concurrent_writers_never_tear_messages() {
    const THREADS: usize = 8;
    const MESSAGES: usize = 50;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let sink = Arc::new(FileSink::new(&path).unwrap());
    let logger = Arc::new(Logger::new("app").with_pattern("%V").with_sink(sink));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || {
                let jitter = rand::random::<u64>() % 3;
                thread::sleep(Duration::from_millis(jitter));
                for message_id in 0..MESSAGES {
                    timber::info!(logger, "writer {} message {}\n", thread_id, message_id);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let lines: HashSet<&str> = contents.lines().collect();

    // every message arrived exactly once and none were torn mid-write
    assert_eq!(contents.lines().count(), THREADS * MESSAGES);
    for thread_id in 0..THREADS {
        for message_id in 0..MESSAGES {
            let expected = format!("writer {} message {}", thread_id, message_id);
            assert!(lines.contains(expected.as_str()), "missing `{}`", expected);
        }
    }
}

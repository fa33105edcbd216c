//! Console facade tests over captured in-memory sinks.

use console_inspect::{value, Console, InspectOptions, Logger, Value};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture() -> (Console, SharedSink, SharedSink) {
    let out = SharedSink::default();
    let err = SharedSink::default();
    let console = Console::new(Logger::with_streams(out.clone(), err.clone()));
    (console, out, err)
}

#[test]
fn test_level_routing() {
    let (mut console, out, err) = capture();
    console.debug(&[value!("d")]).unwrap();
    console.info(&[value!("i")]).unwrap();
    console.log(&[value!("l")]).unwrap();
    console.warn(&[value!("w")]).unwrap();
    console.error(&[value!("e")]).unwrap();
    assert_eq!(out.contents(), "d\ni\nl\n");
    assert_eq!(err.contents(), "w\ne\n");
}

#[test]
fn test_values_format_through_the_inspector() {
    let (mut console, out, _err) = capture();
    console
        .log(&[value!("state:"), value!({ "ready": true, "port": 8080 })])
        .unwrap();
    assert_eq!(out.contents(), "state: { ready: true, port: 8080 }\n");
}

#[test]
fn test_captured_sinks_are_not_colorized() {
    let (mut console, out, _err) = capture();
    console.log(&[value!({ "n": 1 })]).unwrap();
    assert!(!out.contents().contains('\u{1b}'));
}

#[test]
fn test_logger_options_apply_to_every_line() {
    let out = SharedSink::default();
    let err = SharedSink::default();
    let logger = Logger::with_streams(out.clone(), err)
        .with_options(InspectOptions::new().with_line_width(5));
    let mut console = Console::new(logger);
    console.log(&[value!({ "a": 1 })]).unwrap();
    assert_eq!(out.contents(), "{\n  a: 1\n}\n");
}

#[test]
fn test_clear_writes_the_ansi_sequence() {
    let (mut console, out, _err) = capture();
    console.clear().unwrap();
    assert_eq!(out.contents(), "\x1b[2J\x1b[1;1H");
}

#[test]
fn test_timer_round_trip() {
    let (mut console, out, err) = capture();
    console.time("load").unwrap();
    console.time_log("load", &[value!("halfway")]).unwrap();
    console.time_end("load").unwrap();

    let lines: Vec<String> = out.contents().lines().map(String::from).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("load: "));
    assert!(lines[0].ends_with(" halfway"));
    assert!(lines[1].starts_with("load: "));
    assert!(lines[1].ends_with("ms") || lines[1].ends_with('s'));
    assert_eq!(err.contents(), "");
}

#[test]
fn test_duplicate_and_missing_labels_warn() {
    let (mut console, out, err) = capture();
    console.time("t").unwrap();
    console.time("t").unwrap();
    console.time_log("other", &[]).unwrap();
    assert_eq!(out.contents(), "");
    assert_eq!(
        err.contents(),
        "Warning: Label 't' already exists for console.time()\n\
         Warning: No such label 'other' for console.timeEnd()\n"
    );
}

#[test]
fn test_independent_counters() {
    let (mut console, out, _err) = capture();
    console.count("a").unwrap();
    console.count("b").unwrap();
    console.count("a").unwrap();
    assert_eq!(out.contents(), "a: 1\nb: 1\na: 2\n");
}

#[test]
fn test_assert_message_prefixing() {
    let (mut console, _out, err) = capture();
    console.assert(false, &[value!("db"), value!(3)]).unwrap();
    assert_eq!(err.contents(), "Assertion failed: db 3\n");
}

#[test]
fn test_trace_includes_a_backtrace_after_the_headline() {
    let (mut console, _out, err) = capture();
    console.trace(&[value!("here"), value!(7)]).unwrap();
    let text = err.contents();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Trace: here 7"));
    // Whatever the backtrace capture produced, the headline is not alone.
    assert!(lines.next().is_some());
}

#[test]
fn test_io_errors_surface() {
    struct FailingSink;
    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut logger = Logger::with_streams(FailingSink, io::sink());
    let result = logger.log(&[Value::from(1)]);
    assert!(matches!(result, Err(console_inspect::Error::Io(_))));
}

//! Integration tests: diagnostics emitted while attaching.
//!
//! Installs a capturing `log` backend (one per test binary) that keeps
//! records per thread, so each test sees only what it logged itself.

use log::{Level, LevelFilter, Metadata, Record};
use nerve_core::headless::{MemoryDocument, MemorySurface};
use nerve_core::{BootstrapConfig, run_bootstrap};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

fn capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

fn errors() -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

#[test]
fn missing_surface_logs_exactly_one_error() {
    capture();
    let mut doc = MemoryDocument::new();
    doc.insert_element("app");

    run_bootstrap(&doc, &BootstrapConfig::default());

    assert_eq!(errors(), vec!["Canvas element #myCanvas not found".to_string()]);
}

#[test]
fn refused_context_logs_exactly_one_error() {
    capture();
    let mut doc = MemoryDocument::new();
    doc.insert_surface("myCanvas", MemorySurface::without_context(0, 0));

    run_bootstrap(&doc, &BootstrapConfig::default());

    assert_eq!(
        errors(),
        vec!["Failed to get 2d context for canvas #myCanvas".to_string()]
    );
}

#[test]
fn complete_page_logs_no_errors() {
    capture();
    let mut doc = MemoryDocument::new();
    doc.insert_element("app");
    doc.insert_surface("myCanvas", MemorySurface::new(0, 0));

    let draw = run_bootstrap(&doc, &BootstrapConfig::default());

    assert!(draw.is_ready());
    assert!(errors().is_empty());
}

#[test]
fn missing_greeting_element_is_not_an_error() {
    capture();
    let mut doc = MemoryDocument::new();
    doc.insert_surface("myCanvas", MemorySurface::new(0, 0));

    run_bootstrap(&doc, &BootstrapConfig::default());

    assert!(errors().is_empty());
}

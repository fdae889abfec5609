//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent lines in a circular buffer
//! and echoes each one to the browser console (wasm32) or stderr.
//! The buffer can be read back at any time with [`recent_lines`].

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,
    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

// ========================
// Ring Buffer
// ========================

/// Fixed-capacity line buffer; the oldest line is dropped when full
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

pub type SharedBuffer = Arc<Mutex<RingBuffer>>;

static BUFFER: OnceLock<SharedBuffer> = OnceLock::new();

// ========================
// Layer
// ========================

/// Collects the `message` field plus any other fields as `key=value`
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Render one event as `HH:MM:SS.mmm LEVEL target: message key=value`
pub fn format_event(event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    let meta = event.metadata();
    format!(
        "{} {:<5} {}: {}{}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        meta.level().to_string(),
        meta.target(),
        visitor.message,
        visitor.fields
    )
}

pub struct RollingLayer {
    app_name: String,
    buffer: SharedBuffer,
    max_level: Level,
    echo: bool,
}

impl RollingLayer {
    pub fn new(app_name: &str, buffer: SharedBuffer) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer,
            max_level: Level::DEBUG,
            echo: true,
        }
    }

    /// Most verbose level that is kept
    pub fn with_max_level(self, max_level: Level) -> Self {
        Self { max_level, ..self }
    }

    /// Turn console/stderr output on or off
    pub fn with_echo(self, echo: bool) -> Self {
        Self { echo, ..self }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level > self.max_level {
            return;
        }
        let line = format_event(event);
        if self.echo {
            emit(&self.app_name, level, &line);
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(app_name: &str, level: Level, line: &str) {
    use web_sys::console;

    let text = format!("[{app_name}] {line}").into();
    match level {
        Level::ERROR => console::error_1(&text),
        Level::WARN => console::warn_1(&text),
        Level::INFO => console::info_1(&text),
        _ => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(app_name: &str, _level: Level, line: &str) {
    eprintln!("[{app_name}] {line}");
}

// ========================
// Global API
// ========================

/// Install the rolling layer as the global subscriber.
///
/// Can only succeed once per process. The buffer behind [`recent_lines`] is
/// published only after the subscriber is in place, so a failed install
/// leaves nothing half-initialized.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    install(app_name, capacity, |layer| {
        tracing_subscriber::registry().with(layer).try_init().map_err(|e| e.to_string())
    })?;

    tracing::info!(app = app_name, capacity, "logger started");
    Ok(())
}

fn install<F>(app_name: &str, capacity: usize, try_init: F) -> Result<(), LoggerError>
where
    F: FnOnce(RollingLayer) -> Result<(), String>,
{
    if BUFFER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let buffer: SharedBuffer = Arc::new(Mutex::new(RingBuffer::new(capacity)));
    try_init(RollingLayer::new(app_name, buffer.clone())).map_err(LoggerError::Subscriber)?;
    BUFFER.set(buffer).map_err(|_| LoggerError::AlreadyInitialized)
}

/// Lines captured so far, oldest first; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    BUFFER
        .get()
        .and_then(|buffer| buffer.lock().ok().map(|b| b.lines()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, trace, warn};

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 1..=5 {
            buffer.push(format!("line {i}"));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 3", "line 4", "line 5"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_layer_formats_and_filters() {
        let buffer: SharedBuffer = Arc::new(Mutex::new(RingBuffer::new(10)));
        let layer = RollingLayer::new("test", buffer.clone()).with_echo(false);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            trace!("too chatty");
            debug!(id = 7, "record created");
            info!("login succeeded");
            warn!(entity = "Bank", "update of missing record");
        });

        let lines = buffer.lock().unwrap().lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("DEBUG rolling_logger::tests: record created id=7"));
        assert!(lines[1].contains("INFO  rolling_logger::tests: login succeeded"));
        assert!(lines[2].ends_with("update of missing record entity=Bank"));
        // HH:MM:SS.mmm prefix
        assert_eq!(lines[0].find(' '), Some(12));
    }

    #[test]
    fn test_failed_install_can_be_retried() {
        let refused = install("test", 4, |_| Err("a global default is already set".to_string()));
        assert!(matches!(refused, Err(LoggerError::Subscriber(ref e)) if e.contains("already set")));
        assert!(BUFFER.get().is_none());

        // still not marked as initialized
        let again = install("test", 4, |_| Err("still refused".to_string()));
        assert!(matches!(again, Err(LoggerError::Subscriber(_))));

        install("test", 4, |_| Ok(())).expect("install after failures");
        assert_eq!(BUFFER.get().map(|b| b.lock().unwrap().capacity()), Some(4));
        assert!(matches!(install("test", 4, |_| Ok(())), Err(LoggerError::AlreadyInitialized)));
    }

    #[test]
    fn test_recent_lines_empty_without_init() {
        if BUFFER.get().is_none() {
            assert!(recent_lines().is_empty());
        }
    }
}

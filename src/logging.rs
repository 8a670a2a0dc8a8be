//! Tracing subscriber that forwards formatted events to the browser console
//!
//! Each event is buffered by a [`ConsoleWriter`] and emitted as one console
//! line when the writer is dropped, routed to `console.error`, `console.warn`,
//! `console.log` or `console.debug` by level. Native builds fall back to
//! stderr so unit tests and headless runs still see output.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the console subscriber
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place.
pub fn init(max_level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(max_level)
        .without_time()
        .with_target(true)
        .try_init();

    if installed.is_err() {
        tracing::debug!("console subscriber already installed");
    }
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a single formatted event
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// The buffered event as one trimmed line, if anything was written
    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let trimmed = text.trim_end();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            emit(self.level, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::log_1(&value),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_buffers_whole_event() -> io::Result<()> {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b" WARN canvas_backdrop: ")?;
        writer.write_all(b"missing target\n")?;
        assert_eq!(
            writer.line().as_deref(),
            Some(" WARN canvas_backdrop: missing target")
        );
        Ok(())
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        let writer = ConsoleWriter::new(Level::INFO);
        assert_eq!(writer.line(), None);
    }

    #[test]
    fn test_make_writer_uses_event_level() {
        let writer = MakeConsoleWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }

    #[test]
    fn test_init_is_idempotent() {
        init(Level::DEBUG);
        init(Level::TRACE);
        tracing::info!("logging initialised twice without panicking");
    }
}

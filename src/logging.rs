//! Console-backed `tracing` setup.
//!
//! `tracing-subscriber` formats each event into a [`ConsoleWriter`], which
//! hands the finished line to the matching `console.*` method when dropped.

use std::io;
use std::panic::PanicHookInfo;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
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
        let Some(line) = console_line(&self.buffer) else {
            return;
        };
        let line = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

/// Formatted output minus the trailing newline; `None` when nothing was written.
fn console_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let text = text.trim_end();
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Installs the subscriber and panic hook. Debug builds log at `DEBUG`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    // The wasm target has no system clock for timestamps.
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logging not initialised: {err}")));
    }
    init_panic_hook();
}

fn panic_report(info: &PanicHookInfo<'_>) -> String {
    format!("panic: {info}")
}

/// Panics go straight to `console.error` as well, so they are visible even
/// when the subscriber could not be installed.
fn init_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let report = panic_report(info);
        web_sys::console::error_1(&JsValue::from_str(&report));
        tracing::error!("{report}");
    }));
    tracing::debug!("panic hook installed");
}

#[cfg(test)]
mod tests {
    use super::{console_line, panic_report};
    use std::cell::RefCell;

    thread_local! {
        static REPORT: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    #[test]
    fn trailing_newline_is_dropped() {
        assert_eq!(console_line(b" INFO gallery loaded\n").as_deref(), Some(" INFO gallery loaded"));
        assert_eq!(console_line(b"\n"), None);
        assert_eq!(console_line(b""), None);
    }

    #[test]
    fn panic_report_names_message_and_location() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(|info| {
            REPORT.with(|r| *r.borrow_mut() = Some(panic_report(info)));
        }));
        let result: std::thread::Result<()> = std::panic::catch_unwind(|| panic!("viewer exploded"));
        std::panic::set_hook(previous);

        assert!(result.is_err());
        let report = REPORT.with(|r| r.borrow_mut().take()).unwrap();
        assert!(report.starts_with("panic: "), "{report}");
        assert!(report.contains("viewer exploded"), "{report}");
        assert!(report.contains("logging.rs"), "{report}");
    }
}

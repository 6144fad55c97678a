//! Routes `tracing` events to the browser console.

use std::io;

use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Default filter: warnings from the cart library, info from the front-end.
const DEFAULT_FILTER: &str = "warn,kuroi_cart=warn,kuroi_cart_web=info";

/// Installs a `fmt` subscriber that writes one console message per event.
///
/// Timestamps are disabled; `SystemTime` is not available on `wasm32-unknown-unknown`.
pub(crate) fn init_browser_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(Console)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

/// Writer factory for the browser console.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::default()
    }
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Debug, Default)]
pub(crate) struct ConsoleLine {
    buffer: Vec<u8>,
}

impl ConsoleLine {
    /// The buffered event without its trailing newline, or `None` if nothing was written.
    fn take_line(&mut self) -> Option<String> {
        let buffer = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&buffer).trim_end().to_string();

        (!line.is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(&line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_line: &str) {}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn buffers_event_until_taken() -> TestResult {
        let mut line = Console.make_writer();

        write!(line, " WARN discarding unreadable cart slot")?;
        writeln!(line, " error=cart slot is not valid JSON")?;

        assert_eq!(
            line.take_line().as_deref(),
            Some(" WARN discarding unreadable cart slot error=cart slot is not valid JSON")
        );
        assert_eq!(line.take_line(), None, "buffer should be empty after take");

        Ok(())
    }

    #[test]
    fn blank_output_emits_nothing() -> TestResult {
        let mut line = Console.make_writer();

        writeln!(line)?;

        assert_eq!(line.take_line(), None);

        Ok(())
    }
}

//! Printing borrowed text.

use crate::error::Result;
use std::io::Write;

/// Prefix written in front of every printed payload.
pub const DEFAULT_PREFIX: &str = "[bridge] ";

/// How a payload is framed when printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoConfig {
    pub prefix: String,
    /// Terminate the line with `\n`.
    pub newline: bool,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            newline: true,
        }
    }
}

/// Render the line that [`echo`] writes. Payload bytes are copied verbatim.
pub fn render(text: &[u8], config: &EchoConfig) -> Vec<u8> {
    let mut line = Vec::with_capacity(config.prefix.len() + text.len() + 1);
    line.extend_from_slice(config.prefix.as_bytes());
    line.extend_from_slice(text);
    if config.newline {
        line.push(b'\n');
    }
    line
}

/// Write `text` to `out` in a single write and flush.
pub fn echo<W: Write>(out: &mut W, text: &[u8], config: &EchoConfig) -> Result<()> {
    let line = render(text, config);
    out.write_all(&line)?;
    out.flush()?;
    tracing::trace!(bytes = line.len(), "echoed payload");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_render_default() {
        assert_eq!(render(b"hello", &EchoConfig::default()), b"[bridge] hello\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(b"", &EchoConfig::default()), b"[bridge] \n");
    }

    #[test]
    fn test_render_custom() {
        let config = EchoConfig {
            prefix: String::new(),
            newline: false,
        };
        assert_eq!(render(b"raw", &config), b"raw");
    }

    #[test]
    fn test_echo_writes_line() {
        let mut out = Vec::new();
        echo(&mut out, b"hello", &EchoConfig::default()).unwrap();
        assert_eq!(out, b"[bridge] hello\n");
    }

    #[test]
    fn test_echo_keeps_non_utf8() {
        let mut out = Vec::new();
        let config = EchoConfig {
            prefix: ">".into(),
            newline: true,
        };
        echo(&mut out, &[0xc3, 0x28], &config).unwrap();
        assert_eq!(out, [b'>', 0xc3, 0x28, b'\n']);
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_reports_io_error() {
        let result = echo(&mut Closed, b"x", &EchoConfig::default());
        assert!(matches!(result, Err(crate::BridgeError::Io(_))));
    }
}

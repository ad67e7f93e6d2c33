//! Standard output sink for handler messages

use std::io::{self, Write};

use anyhow::{Context, Result};

/// Write each line followed by a newline, then flush
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}").context("Failed to write handler output")?;
    }
    out.flush().context("Failed to flush handler output")?;
    Ok(())
}

/// Print handler output on stdout, logging instead of failing
pub fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = write_lines(&mut handle, lines) {
        log::error!("{:#}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines_terminates_each_line() {
        let mut buf = Vec::new();
        write_lines(
            &mut buf,
            &["Hello world".to_string(), "Goodbye world!".to_string()],
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hello world\nGoodbye world!\n");
    }

    #[test]
    fn test_write_lines_reports_broken_sink() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_lines(&mut Closed, &["x".to_string()]).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to write handler output"));
    }
}

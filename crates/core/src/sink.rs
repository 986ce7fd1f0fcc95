use crate::error::OutputError;
use serde::Serialize;
use std::io::{self, Stdout, Write};

/// Destination for the result of a successful seeding call.
pub trait ReceiptSink<R> {
    fn forward(&mut self, receipt: R) -> Result<(), OutputError>;
}

/// Writes each receipt as pretty-printed JSON followed by a newline.
pub struct JsonSink<W> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write, R: Serialize> ReceiptSink<R> for JsonSink<W> {
    fn forward(&mut self, receipt: R) -> Result<(), OutputError> {
        let mut json = serde_json::to_vec_pretty(&receipt)?;
        json.push(b'\n');
        self.writer.write_all(&json)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Organization;

    #[test]
    fn writes_pretty_json_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.forward(Organization::charity()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();

        assert!(out.ends_with("}\n"));
        let parsed: Organization = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, Organization::charity());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_io_error() {
        let mut sink = JsonSink::new(BrokenPipe);
        let res = sink.forward(Organization::charity());
        assert!(matches!(res, Err(OutputError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}

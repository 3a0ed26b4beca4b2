// obelus/src/writer.rs — response stream writer seam

use std::io::{self, BufWriter, Write};

/// Factory seam for fabricating a text writer over a response byte sink.
/// Hosts provide the real implementation; tests use
/// [`crate::testing::TestResponseStreamWriterFactory`].
pub trait ResponseStreamWriterFactory {
    fn create_writer<'a>(&self, stream: &'a mut dyn Write) -> HttpResponseStreamWriter<'a>;
}

/// Buffered text writer bound to a response byte sink. Text is written as
/// UTF-8; nothing reaches the sink until the buffer fills or `flush` runs.
pub struct HttpResponseStreamWriter<'a> {
    inner: BufWriter<&'a mut dyn Write>,
}

impl<'a> HttpResponseStreamWriter<'a> {
    pub fn new(stream: &'a mut dyn Write) -> Self {
        Self {
            inner: BufWriter::new(stream),
        }
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

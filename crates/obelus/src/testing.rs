// obelus/src/testing.rs — test doubles

use std::io::Write;

use crate::writer::{HttpResponseStreamWriter, ResponseStreamWriterFactory};

/// Trivial writer factory satisfying [`ResponseStreamWriterFactory`] in unit
/// tests.
#[derive(Debug, Default)]
pub struct TestResponseStreamWriterFactory;

impl ResponseStreamWriterFactory for TestResponseStreamWriterFactory {
    fn create_writer<'a>(&self, stream: &'a mut dyn Write) -> HttpResponseStreamWriter<'a> {
        HttpResponseStreamWriter::new(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_binds_writer_to_sink() {
        let factory = TestResponseStreamWriterFactory;
        let mut sink: Vec<u8> = Vec::new();
        {
            let mut writer = factory.create_writer(&mut sink);
            writer.write_text("503 Service Unavailable").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(sink, b"503 Service Unavailable");
    }
}

//! Byte buffers and object streams used by generated `deep_copy` methods
//!
//! A generated method writes `self` through an [`ObjectWriter`]
//! into a [`ByteSink`], then reads a fresh value back out of a
//! [`ByteSource`] holding a snapshot of those bytes.
//!
//! The encoding is `bincode`'s default, which is private to the round trip:
//! nothing written here outlives the call that wrote it.

use std::io::{self, Cursor, Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Why a generated deep copy could not complete
///
/// Generated code does not return this; it panics with it as the message.
/// It happens when some reachable value refuses to serialize
/// (a custom `Serialize` impl that errors, a map with non-string keys
/// under a format that needs them, ...)
/// or when a type's `Deserialize` rejects what its own `Serialize` wrote.
#[derive(Debug, thiserror::Error)]
pub enum CopyFailure {
    #[error("deep copy: failed to write object graph: {0}")]
    Write(#[source] bincode::Error),

    #[error("deep copy: failed to flush object stream: {0}")]
    Flush(#[source] io::Error),

    #[error("deep copy: failed to read object graph back: {0}")]
    Read(#[source] bincode::Error),
}

#[cold]
#[track_caller]
fn fail(failure: CopyFailure) -> ! {
    panic!("{}", failure)
}

//---------- ByteSink ----------

/// Growable in-memory output buffer
#[derive(Debug, Default)]
pub struct ByteSink {
    bytes: Vec<u8>,
}

impl ByteSink {
    pub fn new() -> Self {
        ByteSink::default()
    }

    /// Copy of everything written so far
    pub fn snapshot(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Write for ByteSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//---------- ObjectWriter ----------

/// Serializes whole object graphs into a borrowed [`ByteSink`]
//
// No Drop impl: generated code reads `sink.snapshot()` while the writer
// is still in scope, which only borrow-checks if the writer's borrow
// ends at its last use.
#[derive(Debug)]
pub struct ObjectWriter<'s> {
    sink: &'s mut ByteSink,
}

impl<'s> ObjectWriter<'s> {
    pub fn new(sink: &'s mut ByteSink) -> Self {
        ObjectWriter { sink }
    }

    /// Append the encoding of `value`
    ///
    /// # Panics
    ///
    /// Panics with [`CopyFailure::Write`] if `value` cannot be serialized.
    #[track_caller]
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) {
        bincode::serialize_into(&mut *self.sink, value)
            .unwrap_or_else(|e| fail(CopyFailure::Write(e)))
    }

    #[track_caller]
    pub fn flush(&mut self) {
        self.sink
            .flush()
            .unwrap_or_else(|e| fail(CopyFailure::Flush(e)))
    }
}

//---------- ByteSource ----------

/// In-memory input buffer over an owned byte snapshot
#[derive(Debug)]
pub struct ByteSource {
    cursor: Cursor<Vec<u8>>,
}

impl ByteSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        ByteSource {
            cursor: Cursor::new(bytes),
        }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position()) as usize
    }
}

impl Read for ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

//---------- ObjectReader ----------

/// Deserializes whole object graphs out of a [`Read`] source
#[derive(Debug)]
pub struct ObjectReader<R> {
    source: R,
}

impl<R: Read> ObjectReader<R> {
    pub fn new(source: R) -> Self {
        ObjectReader { source }
    }

    /// Decode the next value
    ///
    /// # Panics
    ///
    /// Panics with [`CopyFailure::Read`] if the bytes do not decode as `T`.
    #[track_caller]
    pub fn read<T: DeserializeOwned>(&mut self) -> T {
        bincode::deserialize_from(&mut self.source)
            .unwrap_or_else(|e| fail(CopyFailure::Read(e)))
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn sink_snapshot_is_detached() {
        let mut sink = ByteSink::new();
        assert!(sink.is_empty());
        sink.write_all(b"abc").unwrap();
        let snap = sink.snapshot();
        sink.write_all(b"def").unwrap();
        assert_eq!(snap, b"abc");
        assert_eq!(sink.len(), 6);
    }

    #[test]
    fn writer_then_reader() {
        let value: BTreeMap<String, Vec<u32>> =
            vec![("a".to_owned(), vec![1, 2]), ("b".to_owned(), vec![])]
                .into_iter()
                .collect();

        let mut sink = ByteSink::new();
        let mut writer = ObjectWriter::new(&mut sink);
        writer.write(&value);
        writer.flush();

        let source = ByteSource::new(sink.snapshot());
        let mut reader = ObjectReader::new(source);
        let back: BTreeMap<String, Vec<u32>> = reader.read();
        assert_eq!(back, value);
        assert_eq!(reader.into_inner().remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "failed to read object graph back")]
    fn truncated_input_panics() {
        let mut reader = ObjectReader::new(ByteSource::new(vec![1, 2]));
        let _: (u64, String) = reader.read();
    }

    #[test]
    fn failure_messages() {
        let e = CopyFailure::Flush(io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(
            e.to_string(),
            "deep copy: failed to flush object stream: x"
        );
    }
}

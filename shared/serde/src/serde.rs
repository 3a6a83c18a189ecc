use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr};

/// A type that can be written to and read back from a byte stream.
pub trait Serde: Sized {
    /// Writes self into the given writer
    fn ser(&self, writer: &mut dyn ByteWrite);

    /// Reads a value of this type from the reader
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` will produce
    fn byte_length(&self) -> usize;
}

/// Implemented by types whose encoding has the same length for every value.
pub trait ConstByteLength {
    fn const_byte_length() -> usize;
}

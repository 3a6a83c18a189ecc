//! # Gridrep Serde
//! Little-endian byte codec shared by the section writer, the section reader
//! and user payload handlers.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod byte_reader;
mod byte_writer;
mod error;
mod integer;
mod number;
mod serde;
mod stream_writer;

pub use byte_reader::ByteReader;
pub use byte_writer::{ByteWrite, ByteWriter};
pub use error::SerdeErr;
pub use serde::{ConstByteLength, Serde};
pub use stream_writer::StreamWriter;

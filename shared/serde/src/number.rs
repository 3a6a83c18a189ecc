use crate::{
    byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, serde::Serde,
    ConstByteLength,
};

// Floats

macro_rules! impl_serde_float {
    ($t:ty, $bits:ty) => {
        impl Serde for $t {
            fn ser(&self, writer: &mut dyn ByteWrite) {
                self.to_bits().ser(writer);
            }

            fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                Ok(<$t>::from_bits(<$bits>::de(reader)?))
            }

            fn byte_length(&self) -> usize {
                std::mem::size_of::<$t>()
            }
        }

        impl ConstByteLength for $t {
            fn const_byte_length() -> usize {
                std::mem::size_of::<$t>()
            }
        }
    };
}

impl_serde_float!(f32, u32);
impl_serde_float!(f64, u64);

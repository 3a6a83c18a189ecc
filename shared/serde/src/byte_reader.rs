use crate::error::SerdeErr;

/// Cursor over a borrowed, read-only byte slice.
pub struct ByteReader<'b> {
    buffer: &'b [u8],
    position: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let byte = *self.buffer.get(self.position).ok_or(SerdeErr {
            requested: 1,
            remaining: 0,
        })?;
        self.position += 1;
        Ok(byte)
    }

    /// Borrows the next `length` bytes and advances past them.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'b [u8], SerdeErr> {
        let remaining = self.remaining();
        if length > remaining {
            return Err(SerdeErr {
                requested: length,
                remaining,
            });
        }
        let bytes = &self.buffer[self.position..self.position + length];
        self.position += length;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let mut output = [0u8; N];
        output.copy_from_slice(self.read_bytes(N)?);
        Ok(output)
    }

    /// Bytes not yet consumed, without advancing.
    pub fn peek_rest(&self) -> &'b [u8] {
        &self.buffer[self.position..]
    }
}

/// Sink for encoded bytes. Implemented by the bounded [`ByteWriter`] and the
/// growable [`crate::StreamWriter`].
pub trait ByteWrite {
    fn write_byte(&mut self, byte: u8);
    fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.write_byte(*byte);
        }
    }
}

/// Writes into a caller-owned, fixed-size slice.
///
/// A write that does not fit is dropped whole and marks the writer as
/// overflowed; everything written before it stays intact.
pub struct ByteWriter<'b> {
    buffer: &'b mut [u8],
    position: usize,
    overflowed: bool,
}

impl<'b> ByteWriter<'b> {
    pub fn new(buffer: &'b mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            overflowed: false,
        }
    }

    pub fn bytes_written(&self) -> usize {
        self.position
    }

    pub fn bytes_free(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.position]
    }
}

impl ByteWrite for ByteWriter<'_> {
    fn write_byte(&mut self, byte: u8) {
        if self.position >= self.buffer.len() {
            self.overflowed = true;
            return;
        }
        self.buffer[self.position] = byte;
        self.position += 1;
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        if end > self.buffer.len() {
            self.overflowed = true;
            return;
        }
        self.buffer[self.position..end].copy_from_slice(bytes);
        self.position = end;
    }
}

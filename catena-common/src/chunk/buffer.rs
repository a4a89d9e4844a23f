//! The reusable transfer buffer

use crate::BUFFER_SIZE;

/// A fixed-capacity byte region reused for every chunk of every input
///
/// After a read of `n` bytes only `..n` is meaningful; the rest still holds
/// whatever an earlier, larger read left behind.
pub struct TransferBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl TransferBuffer {
    /// Create a zeroed buffer
    pub fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Capacity in bytes (always [`BUFFER_SIZE`])
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub(crate) fn filled(&self, n: usize) -> &[u8] {
        &self.bytes[..n]
    }
}

impl Default for TransferBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(TransferBuffer::new().capacity(), 256);
    }

    #[test]
    fn test_filled_is_bounded() {
        let mut buffer = TransferBuffer::default();
        buffer.as_mut_slice().fill(b'x');
        assert_eq!(buffer.filled(3), b"xxx");
        assert!(buffer.filled(0).is_empty());
    }
}

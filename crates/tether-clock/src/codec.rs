//! Fixed-width encoding.
//!
//! A clock is written as its counter, verbatim, in 4 little-endian bytes.
//!
//! ```
//! use tether_clock::LogicalClock;
//!
//! let mut buf = Vec::new();
//! LogicalClock::from_raw(258).write_to(&mut buf);
//! assert_eq!(buf, [2, 1, 0, 0]);
//!
//! let mut input = buf.as_slice();
//! assert_eq!(LogicalClock::read_from(&mut input).unwrap().raw(), 258);
//! assert!(input.is_empty());
//! ```

use tether_core::constants::LOGICAL_CLOCK_ENCODED_LEN;
use tether_core::ClockError;

use crate::LogicalClock;

impl LogicalClock {
    /// Number of bytes in the encoding.
    pub const ENCODED_LEN: usize = LOGICAL_CLOCK_ENCODED_LEN;

    /// Encode the counter.
    pub fn encode(self) -> [u8; LOGICAL_CLOCK_ENCODED_LEN] {
        self.raw().to_le_bytes()
    }

    /// Decode a counter. Every bit pattern decodes, the placeholder included.
    pub fn decode(bytes: [u8; LOGICAL_CLOCK_ENCODED_LEN]) -> Self {
        Self::from_raw(u32::from_le_bytes(bytes))
    }

    /// Append the encoding to `out`.
    pub fn write_to(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.encode());
    }

    /// Read one clock from the front of `input`, advancing it past the bytes
    /// consumed. On error `input` is left untouched.
    pub fn read_from(input: &mut &[u8]) -> Result<Self, ClockError> {
        let Some((head, rest)) = input.split_first_chunk::<LOGICAL_CLOCK_ENCODED_LEN>() else {
            return Err(ClockError::Truncated {
                needed: LOGICAL_CLOCK_ENCODED_LEN,
                available: input.len(),
            });
        };
        let clock = Self::decode(*head);
        *input = rest;
        Ok(clock)
    }
}

impl From<LogicalClock> for [u8; LOGICAL_CLOCK_ENCODED_LEN] {
    fn from(clock: LogicalClock) -> Self {
        clock.encode()
    }
}

impl From<[u8; LOGICAL_CLOCK_ENCODED_LEN]> for LogicalClock {
    fn from(bytes: [u8; LOGICAL_CLOCK_ENCODED_LEN]) -> Self {
        Self::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_input_is_left_in_place() {
        let bytes = [1u8, 2, 3];
        let mut input = &bytes[..];
        let err = LogicalClock::read_from(&mut input).unwrap_err();
        assert_eq!(
            err,
            ClockError::Truncated {
                needed: 4,
                available: 3
            }
        );
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn placeholder_encodes_as_all_ones() {
        assert_eq!(LogicalClock::INVALID.encode(), [0xff; 4]);
    }
}

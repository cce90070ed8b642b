use crate::error::WireError;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;

/// Sequential reader over a byte buffer.
///
/// Every read checks the remaining length and fails with
/// [`WireError::MalformedMessage`] instead of panicking, so arbitrary
/// input can be fed through the message decoder safely.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let byte = self.bytes.get(self.pos).copied().ok_or_else(|| {
            WireError::MalformedMessage(format!("unexpected end of buffer at byte {}", self.pos))
        })?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        if len > self.remaining() {
            return Err(WireError::MalformedMessage(format!(
                "need {} bytes at offset {}, only {} remain",
                len,
                self.pos,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, WireError> {
        Ok(Pubkey::from(self.read_array::<32>()?))
    }

    pub fn read_hash(&mut self) -> Result<Hash, WireError> {
        Ok(Hash::new_from_array(self.read_array::<32>()?))
    }

    pub fn read_u16_le(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, WireError> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    pub fn read_u128_le(&mut self) -> Result<u128, WireError> {
        Ok(u128::from_le_bytes(self.read_array::<16>()?))
    }

    /// Read a compact-u16 length: 1 to 3 bytes of little-endian 7-bit
    /// groups, each continued by its high bit. The third byte may only
    /// carry the top two bits of a u16.
    pub fn read_compact_len(&mut self) -> Result<usize, WireError> {
        let start = self.pos;
        let mut value: usize = 0;
        for group in 0..3 {
            let byte = self.read_u8()?;
            value |= ((byte & 0x7f) as usize) << (7 * group);
            if byte & 0x80 == 0 {
                if value > u16::MAX as usize {
                    return Err(WireError::MalformedMessage(format!(
                        "compact length at byte {start} overflows u16"
                    )));
                }
                return Ok(value);
            }
        }
        Err(WireError::MalformedMessage(format!(
            "compact length at byte {start} runs longer than 3 bytes"
        )))
    }
}

/// Append a value in compact-u16 form, the inverse of
/// [`ByteCursor::read_compact_len`].
pub fn encode_compact_u16(value: u16, out: &mut Vec<u8>) {
    let mut rest = value as u32;
    loop {
        let mut byte = (rest & 0x7f) as u8;
        rest >>= 7;
        if rest > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if rest == 0 {
            break;
        }
    }
}

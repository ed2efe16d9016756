use crate::blend::{BlendError, Result};

/// Forward-only reader over a fixed byte buffer.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Wrap `bytes` with the position at the start.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Current byte offset from the buffer start.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Bytes left before the end of the buffer.
	pub fn remaining(&self) -> usize {
		self.bytes.len() - self.pos
	}

	fn take(&mut self, need: usize) -> Result<&'a [u8]> {
		let rem = self.remaining();
		if need > rem {
			return Err(BlendError::UnexpectedEof { at: self.pos, need, rem });
		}
		let out = &self.bytes[self.pos..self.pos + need];
		self.pos += need;
		Ok(out)
	}

	/// Read exactly `need` bytes.
	pub fn read_exact(&mut self, need: usize) -> Result<&'a [u8]> {
		self.take(need)
	}

	/// Advance `count` bytes without materializing them.
	pub fn skip(&mut self, count: usize) -> Result<()> {
		self.take(count).map(|_| ())
	}

	/// Read a 4-byte block or section code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		let bytes = self.take(4)?;
		Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		let bytes = self.take(2)?;
		Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let bytes = self.take(4)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}

	/// Read a little-endian `u64`.
	pub fn read_u64_le(&mut self) -> Result<u64> {
		let bytes = self.take(8)?;
		let mut out = [0_u8; 8];
		out.copy_from_slice(bytes);
		Ok(u64::from_le_bytes(out))
	}

	/// Read bytes up to the next NUL, consuming the NUL as well.
	pub fn read_cstring_bytes(&mut self) -> Result<&'a [u8]> {
		let tail = &self.bytes[self.pos..];
		let end = tail.iter().position(|byte| *byte == 0).ok_or(BlendError::UnexpectedEof {
			at: self.pos,
			need: tail.len() + 1,
			rem: tail.len(),
		})?;
		let out = &tail[..end];
		self.pos += end + 1;
		Ok(out)
	}

	/// Advance to the next 4-byte boundary measured from the buffer start.
	pub fn align4(&mut self) -> Result<()> {
		let pad = (4 - self.pos % 4) % 4;
		self.skip(pad)
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::blend::BlendError;

	#[test]
	fn read_exact_past_end_is_eof() {
		let mut cursor = Cursor::new(&[1, 2, 3]);
		cursor.read_exact(2).expect("two bytes available");
		let err = cursor.read_exact(2).expect_err("only one byte remains");
		match err {
			BlendError::UnexpectedEof { at, need, rem } => {
				assert_eq!(at, 2);
				assert_eq!(need, 2);
				assert_eq!(rem, 1);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn skip_advances_without_reading() {
		let mut cursor = Cursor::new(&[0; 10]);
		cursor.skip(7).expect("seven bytes available");
		assert_eq!(cursor.pos(), 7);
		assert_eq!(cursor.remaining(), 3);
		assert!(cursor.skip(4).is_err());
	}

	#[test]
	fn cstring_stops_at_nul_and_consumes_it() {
		let mut cursor = Cursor::new(b"abc\0def\0");
		assert_eq!(cursor.read_cstring_bytes().expect("first string"), b"abc");
		assert_eq!(cursor.pos(), 4);
		assert_eq!(cursor.read_cstring_bytes().expect("second string"), b"def");
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn unterminated_cstring_is_eof() {
		let mut cursor = Cursor::new(b"abc");
		assert!(cursor.read_cstring_bytes().is_err());
	}

	#[test]
	fn align4_lands_on_boundary() {
		for start in 1..=3 {
			let mut cursor = Cursor::new(&[0; 8]);
			cursor.skip(start).expect("within buffer");
			cursor.align4().expect("padding available");
			assert_eq!(cursor.pos(), 4, "start={start}");
		}

		let mut cursor = Cursor::new(&[0; 8]);
		cursor.skip(4).expect("within buffer");
		cursor.align4().expect("no padding needed");
		assert_eq!(cursor.pos(), 4);
	}
}

use crate::blend::Result;
use crate::blend::bytes::Cursor;

/// Fixed-size block header record preceding each payload.
#[derive(Debug, Clone, Copy)]
pub struct BHead {
	/// 4-byte block type code, NUL padded.
	pub code: [u8; 4],
	/// Payload size in bytes.
	pub len: u32,
	/// Old memory address, kept as an opaque value.
	pub old: u64,
	/// SDNA struct index, 0 when not applicable.
	pub sdna_nr: u32,
	/// Number of struct instances packed in the payload.
	pub nr: u32,
}

impl BHead {
	/// Encoded record size: code + len + old + sdna_nr + nr.
	pub const SIZE: usize = 24;

	/// Parse one record at the cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let code = cursor.read_code4()?;
		let len = cursor.read_u32_le()?;
		let old = cursor.read_u64_le()?;
		let sdna_nr = cursor.read_u32_le()?;
		let nr = cursor.read_u32_le()?;
		Ok(Self { code, len, old, sdna_nr, nr })
	}

	/// Whether this is the stream terminator.
	pub fn is_endb(&self) -> bool {
		self.code == *b"ENDB"
	}

	/// Whether this is the embedded schema block.
	pub fn is_dna1(&self) -> bool {
		self.code == *b"DNA1"
	}

	/// Whether this is a payload-only continuation block.
	pub fn is_data(&self) -> bool {
		self.code == *b"DATA"
	}

	/// Block code with NUL padding trimmed from both ends.
	pub fn tag_text(&self) -> String {
		let start = self.code.iter().position(|byte| *byte != 0).unwrap_or(self.code.len());
		let end = self.code.iter().rposition(|byte| *byte != 0).map_or(start, |idx| idx + 1);
		String::from_utf8_lossy(&self.code[start..end]).into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::BHead;
	use crate::blend::bytes::Cursor;

	#[test]
	fn record_layout_is_code_len_old_sdna_nr() {
		let mut bytes = Vec::new();
		bytes.extend_from_slice(b"MESH");
		bytes.extend_from_slice(&128_u32.to_le_bytes());
		bytes.extend_from_slice(&0xdead_beef_u64.to_le_bytes());
		bytes.extend_from_slice(&7_u32.to_le_bytes());
		bytes.extend_from_slice(&3_u32.to_le_bytes());
		assert_eq!(bytes.len(), BHead::SIZE);

		let mut cursor = Cursor::new(&bytes);
		let head = BHead::parse(&mut cursor).expect("record parses");
		assert_eq!(head.code, *b"MESH");
		assert_eq!(head.len, 128);
		assert_eq!(head.old, 0xdead_beef);
		assert_eq!(head.sdna_nr, 7);
		assert_eq!(head.nr, 3);
	}

	#[test]
	fn tag_text_trims_nul_padding() {
		let head = BHead {
			code: [b'S', b'C', 0, 0],
			len: 0,
			old: 0,
			sdna_nr: 0,
			nr: 0,
		};
		assert_eq!(head.tag_text(), "SC");

		let all_nul = BHead { code: [0; 4], ..head };
		assert_eq!(all_nul.tag_text(), "");
	}
}

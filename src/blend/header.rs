use crate::blend::{BlendError, Result};

/// Parsed `.blend` file header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendHeader {
	/// Major version digit (`3` for `"304"`).
	pub major: u8,
	/// Minor version, last two digits parsed as an integer (`4` for `"304"`).
	pub minor: u8,
}

impl BlendHeader {
	/// Leading file magic.
	pub const MAGIC: &'static [u8; 9] = b"BLENDER-v";
	/// Total header size in bytes: magic plus three version digits.
	pub const SIZE: usize = 12;

	/// Parse the file header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let take = bytes.len().min(Self::MAGIC.len());
		let mut magic = [0_u8; 9];
		magic[..take].copy_from_slice(&bytes[..take]);
		if magic != *Self::MAGIC {
			return Err(BlendError::IncompatibleFormat { magic });
		}

		let raw = bytes.get(9..12).unwrap_or(&[]);
		let mut digits = [0_u8; 3];
		digits[..raw.len()].copy_from_slice(raw);
		if raw.len() < 3 || !raw.iter().all(u8::is_ascii_digit) {
			return Err(BlendError::InvalidVersion { digits });
		}

		Ok(Self {
			major: digits[0] - b'0',
			minor: (digits[1] - b'0') * 10 + (digits[2] - b'0'),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::BlendHeader;
	use crate::blend::BlendError;

	#[test]
	fn version_digits_split_into_major_and_minor() {
		let header = BlendHeader::parse(b"BLENDER-v304rest").expect("valid header");
		assert_eq!(header.major, 3);
		assert_eq!(header.minor, 4);
	}

	#[test]
	fn bad_magic_reports_offending_bytes() {
		let err = BlendHeader::parse(b"NOTBLEND!!304").expect_err("magic mismatch");
		match err {
			BlendError::IncompatibleFormat { magic } => assert_eq!(&magic, b"NOTBLEND!"),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn short_input_is_incompatible() {
		assert!(matches!(
			BlendHeader::parse(b"BLEND"),
			Err(BlendError::IncompatibleFormat { .. })
		));
	}

	#[test]
	fn non_digit_version_is_rejected() {
		assert!(matches!(
			BlendHeader::parse(b"BLENDER-v3x4"),
			Err(BlendError::InvalidVersion { .. })
		));
	}
}

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlendError>;

/// Errors produced while reading and decoding `.blend` data.
#[derive(Debug, Error)]
pub enum BlendError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// File does not start with the `BLENDER-v` magic.
	#[error("incompatible blend file (magic={magic:?})")]
	IncompatibleFormat {
		/// First up-to-9 bytes of the stream, zero-padded.
		magic: [u8; 9],
	},
	/// Version field after the magic is not three ASCII digits.
	#[error("invalid version digits {digits:?}")]
	InvalidVersion {
		/// Raw version bytes, zero-padded.
		digits: [u8; 3],
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Unexpected SDNA section tag.
	#[error("SDNA tag mismatch at {at}: expected {expected:?}, got {got:?}")]
	SdnaBadTag {
		/// Expected section tag.
		expected: [u8; 4],
		/// Actual section tag.
		got: [u8; 4],
		/// Cursor offset of the tag read.
		at: usize,
	},
	/// Out-of-range index into the SDNA tables.
	#[error("SDNA index out of range for {kind}: idx={idx}, max={max}")]
	SdnaIndexOutOfRange {
		/// Logical index kind being validated.
		kind: &'static str,
		/// Offending index value.
		idx: u32,
		/// Maximum valid index.
		max: u32,
	},
	/// A block required type resolution but no DNA1 block was decoded.
	#[error("missing SDNA schema: block requires type resolution but no DNA1 block was found")]
	MissingSchema,
}

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::blend::bytes::Cursor;
use crate::blend::{BHead, BlendHeader, Dna, Result};

/// A `.blend` file reduced to its header, block records and SDNA tables.
#[derive(Debug)]
pub struct BlendFile {
	/// File header with the Blender version.
	pub header: BlendHeader,
	/// Block records in stream order, terminator included.
	pub blocks: Vec<BHead>,
	/// Decoded schema, absent when no `DNA1` block appeared.
	pub dna: Option<Dna>,
	/// Set when the stream ended before a terminator block.
	pub truncation: Option<Truncation>,
}

/// Early end of the block stream. A warning, not an error: statistics still
/// run over the blocks collected before the stop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
	/// Stream ended inside (or before) a block header record.
	#[error("Unexpected end of file")]
	MidHeader {
		/// File offset where the header read was attempted.
		at: usize,
		/// Header bytes actually available.
		have: usize,
	},
	/// Declared payload size exceeded the remaining input.
	#[error("block payload at offset {at} needs {need} bytes, only {rem} remain")]
	MidPayload {
		/// File offset of the block's header record.
		at: usize,
		/// Declared payload size.
		need: u64,
		/// Bytes left after the header record.
		rem: usize,
	},
}

impl BlendFile {
	/// Read and parse the file at `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::parse(&bytes)
	}

	/// Parse a whole in-memory file image.
	///
	/// Bad magic and malformed SDNA are hard errors. A stream that ends
	/// mid-header or mid-payload stops the loop and is recorded in
	/// `truncation`; a block whose payload overruns the input is dropped
	/// from the list since its payload cannot be attributed.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = BlendHeader::parse(bytes)?;
		let mut cursor = Cursor::new(&bytes[BlendHeader::SIZE..]);

		let mut blocks = Vec::new();
		let mut dna = None;
		let mut truncation = None;

		loop {
			let at = BlendHeader::SIZE + cursor.pos();
			if cursor.remaining() < BHead::SIZE {
				truncation = Some(Truncation::MidHeader { at, have: cursor.remaining() });
				break;
			}

			let head = BHead::parse(&mut cursor)?;
			blocks.push(head);

			if head.is_endb() {
				break;
			}

			let len = head.len as usize;
			if len > cursor.remaining() {
				blocks.pop();
				truncation = Some(Truncation::MidPayload {
					at,
					need: u64::from(head.len),
					rem: cursor.remaining(),
				});
				break;
			}

			if head.is_dna1() {
				let payload = cursor.read_exact(len)?;
				dna = Some(Dna::parse(payload)?);
			} else {
				cursor.skip(len)?;
			}
		}

		Ok(Self {
			header,
			blocks,
			dna,
			truncation,
		})
	}
}

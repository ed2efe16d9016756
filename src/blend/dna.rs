use crate::blend::bytes::Cursor;
use crate::blend::{BlendError, Result};

/// Parsed SDNA schema tables.
///
/// Only what block statistics need is retained: the name and type string
/// tables plus one `(type_idx, field_count)` pair per struct. Field layouts
/// and `TLEN` byte sizes are consumed and discarded.
#[derive(Debug)]
pub struct Dna {
	/// Field name strings from `NAME`.
	pub names: Vec<Box<str>>,
	/// Type name strings from `TYPE`.
	pub types: Vec<Box<str>>,
	/// Struct declarations from `STRC`, field layout dropped.
	pub structs: Vec<DnaStruct>,
}

/// One struct declaration from SDNA.
#[derive(Debug, Clone, Copy)]
pub struct DnaStruct {
	/// Type table index for this struct's name.
	pub type_idx: u16,
	/// Number of field declarations the struct carried.
	pub field_count: u16,
}

impl Dna {
	/// Parse `DNA1` payload bytes into SDNA tables.
	pub fn parse(payload: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(payload);

		expect_tag(&mut cursor, *b"SDNA")?;
		let names = read_string_table(&mut cursor, *b"NAME")?;
		let types = read_string_table(&mut cursor, *b"TYPE")?;

		// Per-type byte sizes are irrelevant to statistics.
		expect_tag(&mut cursor, *b"TLEN")?;
		cursor.skip(types.len() * 2)?;
		cursor.align4()?;

		expect_tag(&mut cursor, *b"STRC")?;
		let struct_count = cursor.read_u32_le()? as usize;
		let mut structs = Vec::with_capacity(struct_count);
		for _ in 0..struct_count {
			let type_idx = cursor.read_u16_le()?;
			check_index("struct.type_idx", u32::from(type_idx), types.len())?;

			let field_count = cursor.read_u16_le()?;
			cursor.skip(usize::from(field_count) * 4)?;
			structs.push(DnaStruct { type_idx, field_count });
		}

		Ok(Self { names, types, structs })
	}

	/// Type name for the struct at `sdna_nr`, if such a struct exists.
	pub fn struct_name(&self, sdna_nr: u32) -> Option<&str> {
		let item = self.structs.get(sdna_nr as usize)?;
		Some(&self.types[usize::from(item.type_idx)])
	}
}

fn expect_tag(cursor: &mut Cursor<'_>, expected: [u8; 4]) -> Result<()> {
	let at = cursor.pos();
	let got = cursor.read_code4()?;
	if got != expected {
		return Err(BlendError::SdnaBadTag { expected, got, at });
	}
	Ok(())
}

fn read_string_table(cursor: &mut Cursor<'_>, tag: [u8; 4]) -> Result<Vec<Box<str>>> {
	expect_tag(cursor, tag)?;
	let count = cursor.read_u32_le()? as usize;
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		let bytes = cursor.read_cstring_bytes()?;
		out.push(String::from_utf8_lossy(bytes).into_owned().into_boxed_str());
	}
	cursor.align4()?;
	Ok(out)
}

fn check_index(kind: &'static str, idx: u32, len: usize) -> Result<()> {
	if (idx as usize) >= len {
		return Err(BlendError::SdnaIndexOutOfRange {
			kind,
			idx,
			max: len.saturating_sub(1) as u32,
		});
	}
	Ok(())
}

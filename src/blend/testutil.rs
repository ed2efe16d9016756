//! Builders for synthetic `.blend` bytes used across unit tests.

fn pad4(out: &mut Vec<u8>) {
	while out.len() % 4 != 0 {
		out.push(0);
	}
}

fn push_string_table(out: &mut Vec<u8>, tag: &[u8; 4], entries: &[&str]) {
	out.extend_from_slice(tag);
	out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
	for entry in entries {
		out.extend_from_slice(entry.as_bytes());
		out.push(0);
	}
	pad4(out);
}

/// Encode a full SDNA payload from name/type tables and
/// `(type_idx, fields)` struct declarations.
pub(crate) fn sdna_payload(names: &[&str], types: &[&str], structs: &[(u16, &[(u16, u16)])]) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(b"SDNA");
	push_string_table(&mut out, b"NAME", names);
	push_string_table(&mut out, b"TYPE", types);

	out.extend_from_slice(b"TLEN");
	for _ in types {
		out.extend_from_slice(&0_u16.to_le_bytes());
	}
	pad4(&mut out);

	out.extend_from_slice(b"STRC");
	out.extend_from_slice(&(structs.len() as u32).to_le_bytes());
	for (type_idx, fields) in structs {
		out.extend_from_slice(&type_idx.to_le_bytes());
		out.extend_from_slice(&(fields.len() as u16).to_le_bytes());
		for (field_type, field_name) in *fields {
			out.extend_from_slice(&field_type.to_le_bytes());
			out.extend_from_slice(&field_name.to_le_bytes());
		}
	}
	out
}

/// Append one block record plus payload to a growing file image.
pub(crate) fn push_block(out: &mut Vec<u8>, code: &[u8; 4], payload: &[u8], sdna_nr: u32, nr: u32) {
	out.extend_from_slice(code);
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(&0x1000_u64.to_le_bytes());
	out.extend_from_slice(&sdna_nr.to_le_bytes());
	out.extend_from_slice(&nr.to_le_bytes());
	out.extend_from_slice(payload);
}

/// Start a file image with the magic and a 3-digit version.
pub(crate) fn file_prefix(version: &str) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(b"BLENDER-v");
	out.extend_from_slice(version.as_bytes());
	out
}

use linked_hash_map::LinkedHashMap;

use crate::blend::{BHead, BlendError, Dna, Result};

/// Running totals for one resolved SDNA type name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypeBucket {
	/// Payload bytes plus one header record per block.
	pub total_bytes: u64,
	/// Sum of per-block instance counts.
	pub instance_count: u64,
	/// Number of blocks attributed to the type.
	pub block_count: u64,
}

/// Running totals for one block-type tag, `DATA` blocks folded into the
/// nearest preceding non-`DATA` tag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TagBucket {
	/// Payload bytes plus one header record per block.
	pub total_bytes: u64,
	/// Number of blocks folded under the tag, `DATA` included.
	pub block_count: u64,
	/// Number of non-`DATA` headers observed for the tag.
	pub header_count: u64,
}

/// One block with its resolution, retained for verbose output.
#[derive(Debug)]
pub struct BlockRow {
	/// Block tag text, NUL padding trimmed.
	pub tag: String,
	/// Declared payload size.
	pub len: u32,
	/// Old address value from the record.
	pub old: u64,
	/// SDNA struct index from the record.
	pub sdna_nr: u32,
	/// Type name the block was attributed to.
	pub type_name: String,
	/// Instance count from the record.
	pub nr: u32,
}

/// Aggregated statistics over an ordered block list.
#[derive(Debug)]
pub struct StatsReport {
	/// Buckets keyed by resolved SDNA type name, in first-seen order.
	pub by_type: LinkedHashMap<String, TypeBucket>,
	/// Buckets keyed by folded block tag, in first-seen order.
	pub by_tag: LinkedHashMap<String, TagBucket>,
	/// Per-block resolution rows in stream order.
	pub rows: Vec<BlockRow>,
}

impl StatsReport {
	/// Fold the block list into the two groupings.
	///
	/// The type cursor starts at struct 0's name, the convention being that
	/// the first SDNA struct is a safe placeholder. A block that needs that
	/// fallback (or carries `sdna_nr > 0`) when no schema was decoded fails
	/// with `MissingSchema`.
	pub fn build(blocks: &[BHead], dna: Option<&Dna>) -> Result<Self> {
		let mut by_type: LinkedHashMap<String, TypeBucket> = LinkedHashMap::new();
		let mut by_tag: LinkedHashMap<String, TagBucket> = LinkedHashMap::new();
		let mut rows = Vec::with_capacity(blocks.len());

		let mut current_type: Option<String> = dna.and_then(|dna| dna.struct_name(0)).map(str::to_owned);
		let mut current_tag = String::new();

		for head in blocks {
			let tag = head.tag_text();

			if head.sdna_nr > 0 {
				let dna = dna.ok_or(BlendError::MissingSchema)?;
				let name = dna.struct_name(head.sdna_nr).ok_or(BlendError::SdnaIndexOutOfRange {
					kind: "block.sdna_nr",
					idx: head.sdna_nr,
					max: dna.structs.len().saturating_sub(1) as u32,
				})?;
				current_type = Some(name.to_owned());
			} else if !head.is_data() {
				current_type = Some(tag.clone());
			}
			let type_name = current_type.clone().ok_or(BlendError::MissingSchema)?;

			let bytes = u64::from(head.len) + BHead::SIZE as u64;

			let bucket = by_type.entry(type_name.clone()).or_insert_with(TypeBucket::default);
			bucket.total_bytes += bytes;
			bucket.instance_count += u64::from(head.nr);
			bucket.block_count += 1;

			if !head.is_data() {
				current_tag = tag.clone();
			}
			let bucket = by_tag.entry(current_tag.clone()).or_insert_with(TagBucket::default);
			bucket.total_bytes += bytes;
			bucket.block_count += 1;
			if !head.is_data() {
				bucket.header_count += 1;
			}

			rows.push(BlockRow {
				tag,
				len: head.len,
				old: head.old,
				sdna_nr: head.sdna_nr,
				type_name,
				nr: head.nr,
			});
		}

		Ok(Self { by_type, by_tag, rows })
	}

	/// Type buckets sorted descending by instance count, ties in
	/// first-seen order.
	pub fn sorted_by_type(&self) -> Vec<(&str, &TypeBucket)> {
		let mut out: Vec<_> = self.by_type.iter().map(|(name, bucket)| (name.as_str(), bucket)).collect();
		out.sort_by(|left, right| right.1.instance_count.cmp(&left.1.instance_count));
		out
	}

	/// Tag buckets sorted descending by block count, ties in
	/// first-seen order.
	pub fn sorted_by_tag(&self) -> Vec<(&str, &TagBucket)> {
		let mut out: Vec<_> = self.by_tag.iter().map(|(name, bucket)| (name.as_str(), bucket)).collect();
		out.sort_by(|left, right| right.1.block_count.cmp(&left.1.block_count));
		out
	}
}

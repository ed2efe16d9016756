use std::path::PathBuf;

use serde::Serialize;

use blendstat::blend::{BlendFile, Result, StatsReport};

#[derive(clap::Args)]
pub struct Args {
	/// Path to the .blend file to scan.
	pub path: PathBuf,
	/// Print one diagnostic line per block before the tables.
	#[arg(short, long)]
	pub verbose: bool,
	/// Emit the report as JSON instead of text.
	#[arg(long)]
	pub json: bool,
}

/// Scan the file and print the two statistics tables.
pub fn run(args: Args) -> Result<()> {
	let Args { path, verbose, json } = args;

	let blend = BlendFile::open(&path)?;
	let report = StatsReport::build(&blend.blocks, blend.dna.as_ref())?;

	if json {
		print_json(&blend, &report)
	} else {
		print_text(&blend, &report, verbose);
		Ok(())
	}
}

fn print_text(blend: &BlendFile, report: &StatsReport, verbose: bool) {
	println!("Blender version {}.{}", blend.header.major, blend.header.minor);

	if let Some(truncation) = &blend.truncation {
		println!("{truncation}");
	}

	if verbose {
		for row in &report.rows {
			println!(
				"{} size={} addr={:#x} sdna={} type={} cnt={}",
				row.tag, row.len, row.old, row.sdna_nr, row.type_name, row.nr
			);
		}
	}

	println!();
	for (name, bucket) in report.sorted_by_type() {
		println!("{} {} {} {}", name, bucket.total_bytes, bucket.instance_count, bucket.block_count);
	}

	println!();
	for (name, bucket) in report.sorted_by_tag() {
		println!("{} {} {} {}", name, bucket.total_bytes, bucket.block_count, bucket.header_count);
	}
}

#[derive(Serialize)]
struct JsonVersion {
	major: u8,
	minor: u8,
}

#[derive(Serialize)]
struct JsonTypeRow<'a> {
	name: &'a str,
	total_bytes: u64,
	instance_count: u64,
	block_count: u64,
}

#[derive(Serialize)]
struct JsonTagRow<'a> {
	name: &'a str,
	total_bytes: u64,
	block_count: u64,
	header_count: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
	version: JsonVersion,
	truncated: bool,
	by_type: Vec<JsonTypeRow<'a>>,
	by_tag: Vec<JsonTagRow<'a>>,
}

fn print_json(blend: &BlendFile, report: &StatsReport) -> Result<()> {
	let payload = JsonReport {
		version: JsonVersion {
			major: blend.header.major,
			minor: blend.header.minor,
		},
		truncated: blend.truncation.is_some(),
		by_type: report
			.sorted_by_type()
			.into_iter()
			.map(|(name, bucket)| JsonTypeRow {
				name,
				total_bytes: bucket.total_bytes,
				instance_count: bucket.instance_count,
				block_count: bucket.block_count,
			})
			.collect(),
		by_tag: report
			.sorted_by_tag()
			.into_iter()
			.map(|(name, bucket)| JsonTagRow {
				name,
				total_bytes: bucket.total_bytes,
				block_count: bucket.block_count,
				header_count: bucket.header_count,
			})
			.collect(),
	};

	println!("{}", serde_json::to_string_pretty(&payload)?);
	Ok(())
}

#![allow(missing_docs)]

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(name = "blendstat", about = "Blender .blend block statistics")]
struct Cli {
	#[command(flatten)]
	args: cmd::stats::Args,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> blendstat::blend::Result<()> {
	let cli = Cli::parse();
	cmd::stats::run(cli.args)
}

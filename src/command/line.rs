//! Command line handling
//!
//! General invocation:
//! $0 --newest_state <file> --local_state <file> --gs_url_base <base>
//!    --output_name <file> [-f]

use clap::Parser;
use std::path::PathBuf;

// Add extra default'ing to make config tests easier

/// Main arg entry point
#[cfg_attr(test, derive(Default))]
#[derive(Debug)]
#[derive(Parser)]
#[command(about = "Downloads a published profile/orderfile, if ours is stale.")]
#[command(version)]
pub struct PsArgs
{
	/// Path to the file with the name of the newest profile.
	///
	/// This is maintained by whoever publishes the profiles; we only
	/// read it, to find out what we should be pulling.
	#[arg(long="newest_state")]
	pub(crate) newest_state: PathBuf,

	/// Path of the file storing the name of the local profile.
	///
	/// We use this to track the most recent profile we've successfully
	/// pulled.  It's fine for it not to exist yet; we'll create it after
	/// the first successful fetch.
	#[arg(long="local_state")]
	pub(crate) local_state: PathBuf,

	/// The base GS URL to search for the profile.
	///
	/// Only used when the newest profile name is a bare filename; a full
	/// `gs://bucket/path` name is fetched directly.
	#[arg(long="gs_url_base")]
	pub(crate) gs_url_base: String,

	/// Output name of the downloaded and uncompressed profile.
	#[arg(long="output_name")]
	pub(crate) output_name: PathBuf,

	/// Fetch a profile even if the local one is current.
	#[arg(short, long)]
	pub(crate) force: bool,

	/// Say more about what's going on (can be given multiple times).
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub(crate) verbose: u8,

	/// Fetch from somewhere other than the public storage endpoint.
	/// This is a hidden option to make dev and testing easier.
	#[clap(hide(true))]
	#[arg(long)]
	pub(crate) endpoint: Option<String>,
}


impl PsArgs
{
	/// What log level does our -v count translate to?
	pub fn log_level(&self) -> log::LevelFilter
	{
		use log::LevelFilter as LF;
		match self.verbose {
			0 => LF::Warn,
			1 => LF::Info,
			2 => LF::Debug,
			_ => LF::Trace,
		}
	}
}



pub fn parse() -> PsArgs
{
	PsArgs::parse()
}

//! Syncing the local profile up with the newest published one.
//!
//! The whole dance is:
//! - read the name of the newest profile
//! - if it's the same one we pulled last time, and that's still there,
//!   we're done
//! - else download it next to the output, decompress it, rename it into
//!   place, and remember its name.
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::{Config, ConfigErr};
use crate::marker;
use crate::server;
use crate::util::compress::{self, Compression, SubprocessErr};


/// What a sync wound up doing
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome
{
	/// Already had it, didn't touch anything
	UpToDate,

	/// Pulled down and installed a new profile
	Fetched { name: String },
}


/// Ways a sync can fall over.  None of these get retried; they're all
/// the end of the run.
#[derive(Debug)]
#[derive(Error)]
pub enum SyncErr
{
	/// Missing/bad inputs
	#[error(transparent)]
	Config(#[from] ConfigErr),

	/// Downloading didn't work
	#[error("Fetching {url} failed: {source}")]
	Fetch { url: Url, source: server::GetErr },

	/// We got it, but don't know how to decompress it
	#[error("Only bz2 and xz extensions are supported; \"{ext}\" is not \
			(download left at {})", .path.display())]
	UnsupportedFormat { ext: String, path: PathBuf },

	/// The decompressor failed
	#[error(transparent)]
	Subprocess(#[from] SubprocessErr),

	/// Putting things in place on the filesystem
	#[error("Installing profile: {0}")]
	Io(#[from] std::io::Error),
}


/// Bring the output up to date with the newest profile.
pub fn run(conf: &Config) -> Result<Outcome, SyncErr>
{
	let newest = marker::read_newest(&conf.newest_state)?;

	if !conf.force
	{
		// In a perfect world, the output always exists if we have a
		// local name.  If it's gone, the user probably removed it as a
		// way to get us to download it again.
		let local = marker::read_local(&conf.local_state);
		if local.as_deref() == Some(newest.as_str()) && conf.output().exists()
		{
			log::info!("{newest} is already up to date at {}",
					conf.output().display());
			return Ok(Outcome::UpToDate);
		}
		log::debug!("Local profile {local:?}, newest {newest}");
	}

	// We're going to rename over the output, so it'd better not be
	// something we can't.
	crate::config::check_fetch(conf)?;

	// Pull it down into the staging spot, then swing it into place in
	// one go, so nobody ever sees a half-written profile.  A leftover
	// from some earlier failed run would make the decompressor refuse
	// to write its output, so clear it out first.
	let staging = conf.staging();
	if staging.is_file()
	{
		log::debug!("Removing stale {}", staging.display());
		std::fs::remove_file(&staging)?;
	}
	fetch(conf, &newest, &staging)?;

	log::info!("Installing {} as {}", staging.display(),
			conf.output().display());
	std::fs::rename(&staging, conf.output())?;

	// Only now is it safe to say we have it
	marker::write_local(&conf.local_state, &newest)?;

	Ok(Outcome::Fetched { name: newest })
}


/// Download a profile and decompress it into `staging`.
fn fetch(conf: &Config, name: &str, staging: &Path) -> Result<(), SyncErr>
{
	let url = server::profile_url(&conf.endpoint, &conf.url_base, name)?;

	// The download keeps the profile's compression extension, so the
	// decompressor strips it back off to land on staging.
	let ext = compress::name_ext(name);
	let cpath = crate::util::path_suffix(staging, ext);

	log::info!("Fetching {url} to {}", cpath.display());
	let agent = server::mk_agent();
	let bytes = server::fetch_to_file(&agent, &url, &cpath)
			.map_err(|source| SyncErr::Fetch { url: url.clone(), source })?;
	log::debug!("Fetched {bytes} bytes");

	// Only check the extension now that we've got the file, so the user
	// has something locally to work with if we don't know what it is.
	let comp = match Compression::from_ext(ext) {
		Some(c) => c,
		None => return Err(SyncErr::UnsupportedFormat {
			ext: ext.to_string(),
			path: cpath,
		}),
	};

	log::info!("Decompressing with {}", comp.program());
	comp.decompress(&cpath)?;

	Ok(())
}

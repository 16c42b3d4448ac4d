//! The runtime config, built up from the command-line args.

use std::path::{Path, PathBuf};
use thiserror::Error;


/// Where the profiles are published.  Everything is readable over plain
/// https, no auth needed.
pub(crate) const GS_HTTP_URL: &str = "https://storage.googleapis.com";


#[derive(Debug)]
#[derive(derivative::Derivative)]
#[derivative(Default)]
pub struct Config
{
	/// File with the name of the newest profile
	pub(crate) newest_state: PathBuf,

	/// File with the name of the profile we last pulled
	pub(crate) local_state: PathBuf,

	/// Base location for bare profile names
	pub(crate) url_base: String,

	/// Where the decompressed profile ends up
	output: PathBuf,

	/// Fetch even if we look current
	pub(crate) force: bool,

	/// Storage endpoint to build URLs under
	#[derivative(Default(value="GS_HTTP_URL.to_string()"))]
	pub(crate) endpoint: String,
}


impl Config
{
	// Kept hidden since the staging path is derived from it.
	pub(crate) fn output(&self) -> &Path { &self.output }

	/// Where the decompressed output lands before getting renamed into
	/// place.  The compressed download is this plus its extension.
	pub(crate) fn staging(&self) -> PathBuf
	{
		crate::util::path_suffix(&self.output, ".new")
	}
}


/// Problems with config
#[derive(Debug)]
#[derive(Error)]
pub enum ConfigErr
{
	/// Couldn't read a marker we can't do without
	#[error("Can't read newest profile name from {0}: {1}")]
	Marker(PathBuf, #[source] std::io::Error),

	/// The marker was there, but didn't name anything
	#[error("No profile name found in {0}")]
	EmptyMarker(PathBuf),

	/// A bare name with nothing to put it under
	#[error("No --gs_url_base given for bare profile name {0}")]
	NoUrlBase(String),

	/// Endpoint isn't something we can build URLs on
	#[error("Bad endpoint {0}: {1}")]
	Endpoint(String, #[source] url::ParseError),

	/// Name doesn't make a sensible URL
	#[error("Bad profile URL {0}: {1}")]
	Url(String, #[source] url::ParseError),

	/// Pre-flight checks failed
	#[error("Cannot sync profile:\n  - {}", .0.join("\n  - "))]
	Check(Vec<String>),
}



/// Build the config from the command-line args
pub fn from_args(clargs: &crate::command::PsArgs)
		-> Result<Config, ConfigErr>
{
	let mut conf = Config {
		newest_state: clargs.newest_state.clone(),
		local_state:  clargs.local_state.clone(),
		url_base:     clargs.gs_url_base.clone(),
		output:       clargs.output_name.clone(),
		force:        clargs.force,
		..Config::default()
	};

	// Endpoint override is only for dev/testing, but make sure it's at
	// least a URL before we get anywhere near the network.
	if let Some(ep) = &clargs.endpoint
	{
		url::Url::parse(ep).map_err(|e| ConfigErr::Endpoint(ep.clone(), e))?;
		conf.endpoint = ep.clone();
	}

	check(&conf)?;
	Ok(conf)
}


/// Run the pre-flight checks, gathering up everything that's wrong
fn check(conf: &Config) -> Result<(), ConfigErr>
{
	gather(conf, &[crate::check::outdir])
}


/// Checks that only matter once we know we're going to fetch.  An odd
/// output doesn't stop us saying we're already up to date.
pub(crate) fn check_fetch(conf: &Config) -> Result<(), ConfigErr>
{
	gather(conf, &[crate::check::output])
}


fn gather(conf: &Config, checks: &[fn(&Config) -> Result<(), String>])
		-> Result<(), ConfigErr>
{
	let errs: Vec<String> = checks.iter()
			.filter_map(|chk| chk(conf).err())
			.collect();

	match errs.len() {
		0 => Ok(()),
		_ => Err(ConfigErr::Check(errs)),
	}
}


#[cfg(test)]
impl Config
{
	/// Build up a config by hand for tests elsewhere
	pub(crate) fn for_test(dir: &Path, url_base: &str, endpoint: &str)
			-> Self
	{
		Config {
			newest_state: dir.join("newest.txt"),
			local_state:  dir.join("local.txt"),
			url_base:     url_base.to_string(),
			output:       dir.join("profile.afdo"),
			force:        false,
			endpoint:     endpoint.to_string(),
		}
	}
}

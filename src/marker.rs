//! The marker files tracking which profile is newest, and which one we
//! have locally.
//!
//! Each is just a single name in a text file.  The newest one belongs to
//! whoever publishes the profiles; the local one is ours, and only gets
//! written once a fetch has fully landed.
use std::path::Path;

use crate::config::ConfigErr;


/// Read the name of the newest profile.  We can't do anything without
/// this, so failing to get it is a config problem.
pub(crate) fn read_newest(path: &Path) -> Result<String, ConfigErr>
{
	let name = std::fs::read_to_string(path)
			.map_err(|e| ConfigErr::Marker(path.to_path_buf(), e))?;
	let name = name.trim();
	if name.is_empty() { Err(ConfigErr::EmptyMarker(path.to_path_buf()))? }
	Ok(name.to_string())
}


/// Read the name of the profile we last pulled.
///
/// Any failure just means we don't know.  Either it never existed, or
/// we can't read it; in both cases grabbing a new profile is the right
/// thing to do, and doing so makes this file sane again.
pub(crate) fn read_local(path: &Path) -> Option<String>
{
	match std::fs::read_to_string(path) {
		Ok(s) => Some(s.trim().to_string()),
		Err(e) => {
			log::debug!("No local profile name from {}: {e}",
					path.display());
			None
		},
	}
}


/// Record the name of the profile we just pulled.
pub(crate) fn write_local(path: &Path, name: &str)
		-> Result<(), std::io::Error>
{
	use std::io::Write as _;
	let mut mfh = std::fs::File::create(path)?;
	mfh.write_all(name.as_bytes())?;
	mfh.sync_all()?;
	Ok(())
}

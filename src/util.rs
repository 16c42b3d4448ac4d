//! Misc util funcs

/// Compression utils
pub(crate) mod compress;



use std::path::{Path, PathBuf};

/// Stick a suffix on the end of a path.
///
/// Path::with_extension() would replace whatever looks like an extension
/// already there, and our names are often full of dots
/// (`profile.afdo.new.bz2`), so we just glue on the raw bytes.
pub(crate) fn path_suffix(base: impl AsRef<Path>, sfx: &str) -> PathBuf
{
	let mut ret = base.as_ref().to_path_buf().into_os_string();
	ret.push(sfx);
	ret.into()
}

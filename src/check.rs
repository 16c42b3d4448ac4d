//! Various runtime checks of things
use crate::config::Config;


/*
 * These are simple "This is OK, or we know an error"
 */
pub(crate) fn output(conf: &Config) -> Result<(), String>
{
	let out = conf.output();

	if out.as_os_str().is_empty()
	{
		Err("No output name given".to_string())?
	}

	// We rename over it, which doesn't go well with dirs.
	if out.is_dir()
	{
		Err(format!("Output {} is a directory", out.display()))?
	}

	Ok(())
}

pub(crate) fn outdir(conf: &Config) -> Result<(), String>
{
	// A bare relative filename has an empty parent, which just means
	// cwd.
	let od = match conf.output().parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => return Ok(()),
	};

	if !od.is_dir()
	{
		Err(format!("No such output directory {}", od.display()))?
	}

	// The staging file lives alongside the output, so this covers it
	// too.

	Ok(())
}

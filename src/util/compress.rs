//! Compression-related utils
//!
//! We don't decompress in-process.  Some of the published bzip2 files
//! are multi-stream, and a decoder that only handles the first stream
//! will cheerfully hand back a truncated profile without complaint.  The
//! real bzip2(1) and xz(1) get it right, so we just run those.
use std::path::Path;
use std::process::Command;


/// The compression types we know how to undo.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Compression
{
	/// .bz2
	Bz2,

	/// .xz
	Xz,
}


impl Compression
{
	/// Figure the compression from an extension like `.bz2`.  Has to
	/// match exactly; no `.BZ2` or `bz2` etc.
	pub(crate) fn from_ext(ext: &str) -> Option<Self>
	{
		ext.strip_prefix('.')?.parse().ok()
	}

	/// What we run to decompress it.  Both of these replace `foo.<ext>`
	/// with `foo` on success.
	pub(crate) fn program(&self) -> &'static str
	{
		match self {
			Self::Bz2 => "bzip2",
			Self::Xz  => "xz",
		}
	}

	/// Decompress a file in place, turning `foo.<ext>` into `foo`.
	pub(crate) fn decompress(&self, src: &Path) -> Result<(), SubprocessErr>
	{
		let prog = self.program();
		let mut cmd = Command::new(prog);
		cmd.arg("-d").arg(src);
		log::debug!("Running {cmd:?}");

		let out = cmd.output().map_err(|e| {
			SubprocessErr::Spawn { prog: prog.to_string(), source: e }
		})?;
		if out.status.success() { return Ok(()); }

		let argv = std::iter::once(cmd.get_program())
				.chain(cmd.get_args())
				.map(|a| a.to_string_lossy().into_owned())
				.collect();
		Err(SubprocessErr::Failed {
			prog: prog.to_string(),
			code: out.status.code(),
			argv,
			stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
			stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
		})
	}
}


/// The extension on a (possibly URL-ish) profile name, dot included.
///
/// Only the last path segment counts, and leading dots on that don't
/// start an extension (`.xz` alone is a hidden file with no extension).
/// No extension at all gives "".
pub(crate) fn name_ext(name: &str) -> &str
{
	let seg = match name.rfind('/') {
		Some(i) => &name[i + 1..],
		None    => name,
	};
	let body = seg.trim_start_matches('.');
	match body.rfind('.') {
		Some(i) => &body[i..],
		None    => "",
	}
}



/// Running a decompressor didn't work out
#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum SubprocessErr
{
	/// Couldn't even start it
	#[error("Couldn't run {prog}: {source}")]
	Spawn { prog: String, source: std::io::Error },

	/// It ran, and said no
	#[error("{}", dump(.prog, .code, .argv, .stdout, .stderr))]
	Failed {
		prog: String,
		code: Option<i32>,
		argv: Vec<String>,
		stdout: String,
		stderr: String,
	},
}

/// Spell out everything we know about a failed run, so the user has
/// something to go on.
fn dump(prog: &str, code: &Option<i32>, argv: &[String], stdout: &str,
		stderr: &str) -> String
{
	let how = match code {
		Some(c) => format!("exit code {c}"),
		None    => "no exit code (killed by signal)".to_string(),
	};
	format!("## {prog} failed with {how}\n\
			## Full command: {argv:?}\n\
			## Stdout:\n{stdout}\n\
			## Stderr:\n{stderr}")
}

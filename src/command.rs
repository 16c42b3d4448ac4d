//! Top-level command handling.  There's only the one thing to do, but
//! this is where args turn into config, and results into exit codes.

/// Command-line parsing and handling
mod line;
pub use line::PsArgs;
pub use line::parse;



use std::process::ExitCode;


/// Dispatch a run
pub fn run(clargs: PsArgs) -> Result<ExitCode, anyhow::Error>
{
	use crate::*;

	// Load up config
	let config = config::from_args(&clargs)?;

	match sync::run(&config)? {
		sync::Outcome::UpToDate => (),
		sync::Outcome::Fetched { name } => {
			log::info!("Updated {} to {name}", config.output().display());
		},
	}

	Ok(ExitCode::SUCCESS)
}


/// Do any initalization we care about
pub fn init(clargs: &PsArgs)
{
	// -v picks the default level; RUST_LOG still wins if it's set.
	env_logger::Builder::new()
		.filter_level(clargs.log_level())
		.parse_default_env()
		.init();
}




#[cfg(test)]
mod tests
{
	use super::{run, PsArgs};
	use crate::testutil::{Server, have_tool};
	use std::fs;

	fn mk_args(dir: &std::path::Path, srv: &Server) -> PsArgs
	{
		let mut args = PsArgs::default();
		args.newest_state = dir.join("newest.txt");
		args.local_state = dir.join("local.txt");
		args.gs_url_base = "chromeos-prebuilt/afdo-job/llvm".to_string();
		args.output_name = dir.join("profile.afdo");
		args.endpoint = Some(srv.endpoint());
		args
	}

	#[test]
	fn up_to_date_ok()
	{
		let srv = Server::start(200, Vec::new());
		let td = tempfile::tempdir().unwrap();
		let args = mk_args(td.path(), &srv);
		fs::write(&args.newest_state, "profile-123.afdo.bz2").unwrap();
		fs::write(&args.local_state, "profile-123.afdo.bz2").unwrap();
		fs::write(&args.output_name, "current").unwrap();

		run(args).expect("up to date is success");
		assert_eq!(srv.hits(), 0);
	}

	#[test]
	fn missing_newest_fails()
	{
		let srv = Server::start(200, Vec::new());
		let td = tempfile::tempdir().unwrap();
		let args = mk_args(td.path(), &srv);

		let err = run(args).expect_err("no newest marker");
		let estr = err.to_string();
		assert!(estr.starts_with("Can't read newest profile name from"),
				"{estr}");
	}

	#[test]
	fn decompress_failure_dump()
	{
		if !have_tool("bzip2") { return; }

		let srv = Server::start(200, b"not bzip2 at all".to_vec());
		let td = tempfile::tempdir().unwrap();
		let args = mk_args(td.path(), &srv);
		fs::write(&args.newest_state, "profile-123.afdo.bz2").unwrap();

		// This is what main() hands to stderr
		let err = run(args).expect_err("garbage bz2");
		let estr = err.to_string();
		let lines: Vec<_> = estr.lines().collect();
		assert!(lines[0].starts_with("## bzip2 failed with exit code"),
				"{estr}");
		assert!(lines[1].starts_with("## Full command: [\"bzip2\", \"-d\","),
				"{estr}");
		assert!(lines.contains(&"## Stderr:"), "{estr}");
	}
}

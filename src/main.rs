use std::process::ExitCode;

use profile_sync::command;

fn main() -> ExitCode
{
	let clargs = command::parse();
	command::init(&clargs);

	match command::run(clargs) {
		Ok(c) => c,
		Err(e) => {
			// These are the whole story; decompressor failures carry
			// their full output already.
			eprintln!("{e}");
			ExitCode::FAILURE
		},
	}
}

//! Various http stuff.
use std::path::Path;

use url::Url;


/// A fetch error
#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum GetErr
{
	/// HTTP error (including non-2xx responses)
	#[error("HTTP fetch error: {0}")]
	Http(#[from] Box<ureq::Error>),

	/// Filesystem IO error of some kind
	#[error("File I/O error: {0}")]
	Io(#[from] std::io::Error),
}

// ureq::Error is pretty chunky, so keep it boxed up.
impl From<ureq::Error> for GetErr
{
	fn from(e: ureq::Error) -> Self { Self::Http(Box::new(e)) }
}


/// Pull down a URL into a file.
///
/// This is meant for the big stuff, so it streams straight from the
/// response into the file rather than holding it in memory.  The file
/// is only created once the server has said yes, so a 404 doesn't leave
/// an empty turd lying around.  Returns the number of bytes written.
pub(crate) fn fetch_to_file(agent: &ureq::Agent, url: &Url, outpath: &Path)
		-> Result<u64, GetErr>
{
	use std::{fs, io};

	// Make the request
	let resp = agent.request_url("GET", url).call()?;
	let clen: Option<u64> = resp.header("Content-Length")
			.and_then(|l| l.parse().ok());
	log::debug!("Got {} from {url}, length {clen:?}", resp.status());

	// Open up the output file
	let outfile = fs::File::create(outpath)?;

	// HTTP responses can come in slow, so may as well wrap this...
	let mut outwrite = io::BufWriter::new(outfile);

	// Kick a progress bar along as the bytes come in.  It hides itself
	// if we're not on a terminal.
	let pb = match clen {
		Some(l) => indicatif::ProgressBar::new(l),
		None    => indicatif::ProgressBar::new_spinner(),
	};
	let mut rdr = pb.wrap_read(resp.into_reader());
	let bytes = io::copy(&mut rdr, &mut outwrite)?;
	pb.finish_and_clear();

	// Goodie
	let outfile = outwrite.into_inner().map_err(|e| e.into_error())?;
	outfile.sync_all()?;

	Ok(bytes)
}



/// Creating an Agent for our use.  Centralize to make later adjustments
/// a little easier...
///
/// Only the connect gets a timeout; profiles can be big, and a slow
/// transfer that's still moving shouldn't get cut off.
pub(crate) fn mk_agent() -> ureq::Agent
{
	use std::time::Duration;

	ureq::AgentBuilder::new()
		.timeout_connect(Duration::from_secs(30))
		.build()
}




#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testutil::Server;

	#[test]
	fn fetch()
	{
		let body = b"not really a profile".to_vec();
		let srv = Server::start(200, body.clone());
		let td = tempfile::tempdir().unwrap();
		let out = td.path().join("fetched");

		let url = srv.url("some/profile.afdo.bz2");
		let n = fetch_to_file(&mk_agent(), &url, &out).unwrap();

		assert_eq!(n, body.len() as u64);
		assert_eq!(std::fs::read(&out).unwrap(), body);
		assert_eq!(srv.hits(), 1);
		assert_eq!(srv.paths(), vec!["/some/profile.afdo.bz2".to_string()]);
	}

	#[test]
	fn not_found()
	{
		let srv = Server::start(404, b"nope".to_vec());
		let td = tempfile::tempdir().unwrap();
		let out = td.path().join("fetched");

		let url = srv.url("missing.afdo.bz2");
		let err = fetch_to_file(&mk_agent(), &url, &out)
				.expect_err("404 is an error");
		assert!(matches!(err, GetErr::Http(_)), "{err:?}");

		// And we didn't leave anything behind
		assert!(!out.exists());
	}
}

//! Bits shared between tests.
//!
//! Mostly a tiny one-canned-response HTTP server, so we can run fetches
//! without the real storage server, and count whether we hit it at all.
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};


pub(crate) struct Server
{
	addr: SocketAddr,
	paths: Arc<Mutex<Vec<String>>>,
}

impl Server
{
	/// Start listening on some local port, answering every request with
	/// the given status and body.  The thread just gets left behind when
	/// the test finishes.
	pub(crate) fn start(status: u16, body: Vec<u8>) -> Self
	{
		let lsn = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = lsn.local_addr().unwrap();
		let paths = Arc::new(Mutex::new(Vec::new()));

		let tpaths = paths.clone();
		std::thread::spawn(move || {
			for conn in lsn.incoming()
			{
				let Ok(conn) = conn else { continue };
				let _ = answer(conn, status, &body, &tpaths);
			}
		});

		Self { addr, paths }
	}

	/// What to hand over as --endpoint
	pub(crate) fn endpoint(&self) -> String
	{
		format!("http://{}", self.addr)
	}

	pub(crate) fn url(&self, path: &str) -> url::Url
	{
		url::Url::parse(&format!("{}/{path}", self.endpoint())).unwrap()
	}

	/// How many requests have we seen?
	pub(crate) fn hits(&self) -> usize
	{
		self.paths.lock().unwrap().len()
	}

	/// And what were they for?
	pub(crate) fn paths(&self) -> Vec<String>
	{
		self.paths.lock().unwrap().clone()
	}
}


fn answer(conn: TcpStream, status: u16, body: &[u8],
		paths: &Mutex<Vec<String>>) -> std::io::Result<()>
{
	use std::io::{BufRead, BufReader, Write};

	// Request line is "GET /path HTTP/1.1"; the rest of the headers we
	// just read past.
	let mut rdr = BufReader::new(conn.try_clone()?);
	let mut line = String::new();
	rdr.read_line(&mut line)?;
	let path = line.split(' ').nth(1).unwrap_or("").to_string();
	loop
	{
		let mut hdr = String::new();
		let n = rdr.read_line(&mut hdr)?;
		if n == 0 || hdr == "\r\n" || hdr == "\n" { break }
	}
	paths.lock().unwrap().push(path);

	let mut conn = conn;
	write!(conn, "HTTP/1.1 {status} Canned\r\n\
			Content-Length: {}\r\n\
			Connection: close\r\n\r\n", body.len())?;
	conn.write_all(body)?;
	conn.flush()?;
	Ok(())
}


/// Is some external tool around for us to test with?
pub(crate) fn have_tool(name: &str) -> bool
{
	std::process::Command::new(name)
		.arg("--version")
		.stdout(std::process::Stdio::null())
		.stderr(std::process::Stdio::null())
		.status()
		.map(|s| s.success())
		.unwrap_or(false)
}


/// Compress some bytes with an external tool (e.g. `bzip2`, `xz`).
pub(crate) fn compress_with(tool: &str, data: &[u8]) -> Vec<u8>
{
	use std::io::Write as _;
	use std::process::{Command, Stdio};

	let mut child = Command::new(tool)
		.args(["-c", "-z"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.spawn()
		.unwrap();
	child.stdin.take().unwrap().write_all(data).unwrap();
	let out = child.wait_with_output().unwrap();
	assert!(out.status.success(), "{tool} compress failed");
	out.stdout
}

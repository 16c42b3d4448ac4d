//! Talking to the storage server.  All we ever do is find where a
//! profile lives and pull it down.


/// Turning profile names into URLs
mod locate;
pub(crate) use locate::profile_url;

/// General http bits
mod http;
pub(crate) use http::{mk_agent, fetch_to_file, GetErr};

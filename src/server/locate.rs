//! Figuring out where a profile lives.
use url::Url;

use crate::config::ConfigErr;


/// Names can be full GS locators instead of bare filenames.  Those we
/// map straight onto the https endpoint.
const GS_PREFIX: &str = "gs://";


/// Build the URL to fetch a given profile name from.
///
/// A bare name lives under `<endpoint>/<url_base>/`.  A `gs://` name
/// already says where it is, so it's just `<endpoint>/<rest>`, and the
/// url_base doesn't come into it.
pub(crate) fn profile_url(endpoint: &str, url_base: &str, name: &str)
		-> Result<Url, ConfigErr>
{
	let ustr = match name.strip_prefix(GS_PREFIX) {
		Some(rest) => path_join(endpoint, &[rest]),
		None => {
			if url_base.trim_matches('/').is_empty()
			{ Err(ConfigErr::NoUrlBase(name.to_string()))? }
			path_join(endpoint, &[url_base, name])
		},
	};

	Url::parse(&ustr).map_err(|e| ConfigErr::Url(ustr, e))
}


/// Glue URL path bits together with exactly one / between each.
///
/// Url::join() isn't what we want here; it resolves relative references,
/// so a base without a trailing slash loses its last segment.
fn path_join(base: &str, parts: &[&str]) -> String
{
	let mut ret = base.trim_end_matches('/').to_string();
	for p in parts
	{
		let p = p.trim_matches('/');
		if p.is_empty() { continue }
		ret.push('/');
		ret.push_str(p);
	}
	ret
}

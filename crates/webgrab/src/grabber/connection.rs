use std::time::Duration;

use reqwest::blocking::Client;

use super::{Grabber, normalize_lines};
use crate::{
    common::HeaderMap,
    entity::FetchResult,
    error::Result,
    parser::parse_connection,
};

pub const HTTPS: &str = "https://";

/// Goes through the blocking `reqwest` client, which brings TLS, redirects and
/// its own default request headers.
///
/// A 4xx/5xx answer is still a page: its body and headers are returned.
#[derive(Debug, Clone)]
pub struct ConnectionGrabber {
    scheme: String,
    timeout: Option<Duration>,
}

impl ConnectionGrabber {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            scheme: HTTPS.into(),
            timeout,
        }
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn url(&self, target: &str) -> String {
        format!("{}{target}", self.scheme)
    }

    /// Built per fetch, so a client that cannot be set up only fails this
    /// strategy.
    fn client(&self) -> Result<Client> {
        // reqwest's blocking client defaults to 30s; `None` really means none
        Ok(Client::builder().timeout(self.timeout).build()?)
    }
}

impl Grabber for ConnectionGrabber {
    type Raw = (String, HeaderMap);

    const NAME: &'static str = "connection";

    fn fetch(&self, target: &str) -> Result<Self::Raw> {
        let url = self.url(target);
        log::debug!("requesting {url}");

        let resp = self.client()?.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            log::warn!("{url} answered {status}, keeping the body anyway");
        }

        let headers = collect_headers(resp.headers());
        let body = resp.text()?;
        log::debug!("received {} bytes from {url}", body.len());

        Ok((normalize_lines(&body), headers))
    }

    fn parse(&self, (body, headers): Self::Raw) -> Result<FetchResult> {
        Ok(parse_connection(body, &headers))
    }
}

/// Every header name once, with all its values in arrival order.
pub(crate) fn collect_headers(map: &reqwest::header::HeaderMap) -> HeaderMap {
    map.keys()
        .map(|name| {
            let values = map
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            (name.as_str().to_owned(), values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap as ReqHeaderMap, HeaderValue, SET_COOKIE, SERVER};

    use super::*;

    #[test]
    fn url_prefixes_https() {
        let g = ConnectionGrabber::new(None);
        assert_eq!(g.url("example.com"), "https://example.com");
        assert_eq!(g.with_scheme("http://").url("localhost:1"), "http://localhost:1");
    }

    #[test]
    fn repeated_headers_are_grouped() {
        let mut map = ReqHeaderMap::new();
        map.append(SERVER, HeaderValue::from_static("nginx"));
        map.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        map.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        let headers = collect_headers(&map);
        let cookies = headers.iter().find(|(k, _)| k == "set-cookie").unwrap();
        assert_eq!(cookies.1, ["a=1", "b=2"]);
        assert_eq!(headers.len(), 2);
    }
}

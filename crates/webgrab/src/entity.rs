/// A fetched page normalized to `(headers, body)`.
///
/// The header text differs by strategy: the socket path keeps the raw status
/// line and header block, the connection path synthesizes `name: value` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    headers: String,
    body: String,
}

impl FetchResult {
    pub fn new(headers: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headers: headers.into(),
            body: body.into(),
        }
    }

    pub fn headers(&self) -> &str {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

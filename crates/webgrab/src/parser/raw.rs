use std::str::FromStr;

use crate::{
    entity::FetchResult,
    error::{Error, Result},
    response::RawHeaders,
};

/// Blank line between the header block and the body once every line of the
/// raw buffer has been re-terminated with `\n`.
pub const SEPARATOR: &str = "\n\n";

/// Split a raw socket buffer at its first blank line.
///
/// Everything before the separator is the header text, everything after is
/// the body. A buffer without a blank line (header-only or truncated
/// response) is an error.
pub fn parse_raw(buffer: &str) -> Result<FetchResult> {
    let (headers, body) = buffer.split_once(SEPARATOR).ok_or_else(|| {
        Error::parse(format!(
            "no blank line between headers and body in {} bytes of response",
            buffer.len()
        ))
    })?;
    Ok(FetchResult::new(headers, body))
}

/// Status line and header lines of a raw header block.
pub fn parse_raw_headers(headers: &str) -> Result<RawHeaders> {
    RawHeaders::from_str(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_blank_line() {
        let raw = "HTTP/1.0 200 OK\nContent-Type: text/html\n\n<html>hi</html>\n";
        let res = parse_raw(raw).unwrap();
        assert_eq!(res.headers(), "HTTP/1.0 200 OK\nContent-Type: text/html");
        assert_eq!(res.body(), "<html>hi</html>\n");
    }

    #[test]
    fn later_blank_lines_stay_in_body() {
        let raws = [
            "HTTP/1.0 200 OK\n\na\n\nb\n",
            "HTTP/1.0 204 No Content\n\n",
            "HTTP/1.0 200 OK\nA: b\n\n\n\n",
            "\n\nbody only",
        ];
        for raw in raws {
            let res = parse_raw(raw).unwrap();
            assert_eq!(format!("{}{SEPARATOR}{}", res.headers(), res.body()), raw);
            assert!(!res.headers().contains(SEPARATOR));
        }
    }

    #[test]
    fn missing_separator_is_a_parse_error() {
        for raw in ["", "HTTP/1.0 200 OK\nContent-Length: 0\n", "HTTP/1.0 200 OK"] {
            let err = parse_raw(raw).unwrap_err();
            assert!(matches!(err, Error::Parse(_)), "{raw:?} -> {err}");
        }
    }

    #[test]
    fn header_block_breakdown() {
        let res = parse_raw(
            "HTTP/1.0 301 Moved Permanently\nLocation: https://example.com/\nSet-Cookie: a=1\nset-cookie: b=2\n\nmoved\n",
        )
        .unwrap();
        let raw = parse_raw_headers(res.headers()).unwrap();

        assert_eq!(raw.status().code(), 301);
        assert_eq!(raw.status().reason(), "Moved Permanently");
        assert_eq!(raw.headers().len(), 3);
        assert_eq!(raw.headers()[0].value(), "https://example.com/");
        assert_eq!(raw.get_all("Set-Cookie").collect::<Vec<_>>(), ["a=1", "b=2"]);
    }

    #[test]
    fn header_block_with_junk_line_fails() {
        assert!(parse_raw_headers("HTTP/1.0 200 OK\nno colon here").is_err());
        assert!(parse_raw_headers("").is_err());
    }
}

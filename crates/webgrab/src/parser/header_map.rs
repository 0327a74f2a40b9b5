use crate::{common::HeaderMap, entity::FetchResult};

/// One `name: values\n` line per entry, values glued together with nothing
/// in between, in the order the map yields them.
pub fn format_header_map(headers: &HeaderMap) -> String {
    headers.iter().fold(String::new(), |mut out, (name, values)| {
        out.push_str(name);
        out.push_str(": ");
        values.iter().for_each(|v| out.push_str(v));
        out.push('\n');
        out
    })
}

pub fn parse_connection(body: String, headers: &HeaderMap) -> FetchResult {
    FetchResult::new(format_header_map(headers), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, values: &[&str]) -> (String, Vec<String>) {
        (name.into(), values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn empty_map_formats_to_empty_string() {
        assert_eq!(format_header_map(&HeaderMap::new()), "");
    }

    #[test]
    fn multiple_values_are_concatenated() {
        let headers = vec![entry("Content-Type", &["text", "html"])];
        assert_eq!(format_header_map(&headers), "Content-Type: texthtml\n");
    }

    #[test]
    fn entries_keep_map_order() {
        let headers = vec![
            entry("b", &["2"]),
            entry("a", &["1"]),
            entry("set-cookie", &["x=1", "y=2"]),
        ];
        assert_eq!(format_header_map(&headers), "b: 2\na: 1\nset-cookie: x=1y=2\n");
    }

    #[test]
    fn body_is_passed_through() {
        let res = parse_connection("<p>x</p>\n".into(), &vec![entry("server", &["nginx"])]);
        assert_eq!(res.headers(), "server: nginx\n");
        assert_eq!(res.body(), "<p>x</p>\n");
    }
}

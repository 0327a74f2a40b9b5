use std::{
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpStream, ToSocketAddrs},
    time::Duration,
};

use super::Grabber;
use crate::{
    entity::FetchResult,
    error::{Error, Result},
    parser::{parse_raw, parse_raw_headers},
};

/// Plain TCP, hand-written HTTP/1.0 request.
///
/// The request line carries the bare target instead of a path
/// (`GET example.com HTTP/1.0`). Servers answer it anyway, mostly with an
/// error page; that answer is what gets recorded.
///
/// Without a timeout a peer that never closes blocks the caller forever.
#[derive(Debug, Clone)]
pub struct SocketGrabber {
    port: u16,
    timeout: Option<Duration>,
}

impl SocketGrabber {
    pub const PORT: u16 = 80;

    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            port: Self::PORT,
            timeout,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn request_line(target: &str) -> String {
        format!("GET {target} HTTP/1.0\r\n\r\n")
    }

    fn lookup(&self, target: &str) -> Result<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = (target, self.port)
            .to_socket_addrs()
            .map_err(|e| Error::connect(format!("failed to resolve {target}: {e}")))?
            .collect();
        if addrs.is_empty() {
            return Err(Error::connect(format!("no address found for {target}")));
        }
        Ok(addrs)
    }

    fn connect(&self, target: &str) -> Result<TcpStream> {
        let mut last_err = None;
        for addr in self.lookup(target)? {
            log::debug!("connecting to {addr}");
            let res = match self.timeout {
                Some(t) => TcpStream::connect_timeout(&addr, t),
                None => TcpStream::connect(addr),
            };
            match res {
                Ok(stream) => {
                    stream.set_read_timeout(self.timeout)?;
                    stream.set_write_timeout(self.timeout)?;
                    return Ok(stream);
                }
                Err(e) => {
                    log::debug!("connect {addr} failed: {e}");
                    last_err = Some(e);
                }
            }
        }
        let reason = last_err.map(|e| e.to_string()).unwrap_or_default();
        Err(Error::connect(format!(
            "failed to connect to {target}:{}: {reason}",
            self.port
        )))
    }
}

impl Grabber for SocketGrabber {
    type Raw = String;

    const NAME: &'static str = "socket";

    fn fetch(&self, target: &str) -> Result<String> {
        let mut stream = self.connect(target)?;

        let request = Self::request_line(target);
        log::debug!("request: {request:?}");
        stream.write_all(request.as_bytes())?;
        stream.flush()?;

        let raw = read_lines(BufReader::new(stream))?;
        log::debug!("received {} bytes from {target}", raw.len());
        Ok(raw)
    }

    fn parse(&self, raw: String) -> Result<FetchResult> {
        let res = parse_raw(&raw)?;
        // the flat header text is what gets printed; this is only for the log
        match parse_raw_headers(res.headers()) {
            Ok(head) => {
                let status = head.status();
                if !status.is_success() {
                    log::warn!(
                        "{} {} {}, keeping the body anyway",
                        status.version(),
                        status.code(),
                        status.reason()
                    );
                }
                head.headers().iter().for_each(|h| log::trace!("{h}"));
            }
            Err(e) => log::debug!("header block is not plain http: {e}"),
        }
        Ok(res)
    }
}

/// Read until the peer closes, rebuilding every line with a `\n` terminator.
// TODO: honour the charset from Content-Type instead of lossy utf-8
fn read_lines<R: BufRead>(mut reader: R) -> Result<String> {
    let mut out = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        out.push_str(&String::from_utf8_lossy(&line));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn request_line_uses_bare_target() {
        assert_eq!(
            SocketGrabber::request_line("example.com"),
            "GET example.com HTTP/1.0\r\n\r\n"
        );
    }

    #[test]
    fn read_lines_normalizes_terminators() {
        let raw = b"HTTP/1.0 200 OK\r\nA: b\r\n\r\nline1\nline2";
        let text = read_lines(Cursor::new(&raw[..])).unwrap();
        assert_eq!(text, "HTTP/1.0 200 OK\nA: b\n\nline1\nline2\n");
    }

    #[test]
    fn read_lines_replaces_invalid_utf8() {
        let text = read_lines(Cursor::new(&b"ok\xff\n"[..])).unwrap();
        assert_eq!(text, "ok\u{fffd}\n");
    }

    #[test]
    fn parse_keeps_error_pages_and_odd_header_blocks() {
        let g = SocketGrabber::new(None);

        let res = g
            .parse("HTTP/1.0 400 Bad Request\nServer: x\n\n<h1>bad</h1>\n".into())
            .unwrap();
        assert_eq!(res.body(), "<h1>bad</h1>\n");

        let res = g.parse("not a status line\n\nbody\n".into()).unwrap();
        assert_eq!(res.headers(), "not a status line");
    }

    #[test]
    fn unresolvable_target_is_a_connect_error() {
        let err = SocketGrabber::new(None)
            .fetch("definitely-not-a-host.invalid")
            .unwrap_err();
        assert!(matches!(err, Error::Connect(_)), "{err}");
    }
}

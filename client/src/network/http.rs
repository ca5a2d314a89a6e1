//! Blocking JSON POST transport

use std::io::Read;

/// Status line and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The request never produced a response (DNS, connect, TLS, I/O)
#[derive(Debug, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Something that can POST a JSON body and hand back the raw response.
///
/// Non-2xx statuses are responses, not errors.
pub trait HttpTransport {
    fn post_json(&self, url: &str, content_type: &str, body: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn post_json(&self, url: &str, content_type: &str, body: &str) -> Result<HttpResponse, TransportError> {
        (**self).post_json(url, content_type, body)
    }
}

/// Transport backed by `ureq`
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn read_body(response: ureq::Response) -> Result<String, TransportError> {
    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| TransportError(e.to_string()))?;
    Ok(body)
}

impl HttpTransport for UreqTransport {
    fn post_json(&self, url: &str, content_type: &str, body: &str) -> Result<HttpResponse, TransportError> {
        match self
            .agent
            .post(url)
            .set("content-type", content_type)
            .send_string(body)
        {
            Ok(response) => {
                let status = response.status();
                Ok(HttpResponse {
                    status,
                    body: read_body(response)?,
                })
            }
            Err(ureq::Error::Status(status, response)) => Ok(HttpResponse {
                status,
                body: read_body(response).unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(e)) => Err(TransportError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned response and report the raw request head and body
    fn serve_once(status_line: &'static str, response_body: &'static str) -> (String, mpsc::Receiver<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
                head.push_str(&line);
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();

            let mut stream = stream;
            write!(
                stream,
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                response_body.len(),
                response_body
            )
            .unwrap();
            stream.flush().unwrap();

            tx.send((head, String::from_utf8(body).unwrap())).unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    #[test]
    fn test_post_sends_header_and_body() {
        let (base, rx) = serve_once("HTTP/1.1 200 OK", r#"{"tx":"0x1"}"#);
        let transport = UreqTransport::new();

        let response = transport
            .post_json(&format!("{}/mint", base), "application/json;charset=UTF-8", r#"{"farmId":1}"#)
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_ok());
        assert_eq!(response.body, r#"{"tx":"0x1"}"#);

        let (head, body) = rx.recv().unwrap();
        assert!(head.starts_with("POST /mint HTTP/1.1"), "unexpected request line: {}", head);
        assert!(head
            .lines()
            .any(|line| line.to_ascii_lowercase() == "content-type: application/json;charset=utf-8"));
        assert_eq!(body, r#"{"farmId":1}"#);
    }

    #[test]
    fn test_error_status_is_a_response() {
        let (base, _rx) = serve_once("HTTP/1.1 500 Internal Server Error", r#"{"error":"boom"}"#);
        let transport = UreqTransport::new();

        let response = transport
            .post_json(&format!("{}/mint", base), "application/json;charset=UTF-8", "{}")
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_ok());
        assert_eq!(response.body, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port with nothing listening
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let transport = UreqTransport::new();

        let result = transport.post_json(&format!("http://{}/mint", addr), "application/json", "{}");
        assert!(result.is_err());
    }
}

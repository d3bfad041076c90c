//! Minimal HTTP/1.1 stand-in for the public-resource download-link API.
//!
//! Answers `GET <path>?public_key=..[&path=..]` from a fixed route table and
//! records the decoded query of every request it sees. Unknown queries get
//! 404 with a Yandex-style error body.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned reply for one `(public_key, path)` pair.
#[derive(Debug, Clone)]
pub struct Route {
    pub public_key: String,
    pub path: Option<String>,
    pub status: u16,
    pub body: String,
}

impl Route {
    /// 200 with `{"href": href, "method": "GET", "templated": false}`.
    pub fn href(public_key: &str, path: Option<&str>, href: &str) -> Self {
        Self {
            public_key: public_key.to_string(),
            path: path.map(str::to_string),
            status: 200,
            body: format!(
                r#"{{"href":"{}","method":"GET","templated":false}}"#,
                href
            ),
        }
    }

    pub fn raw(public_key: &str, path: Option<&str>, status: u16, body: &str) -> Self {
        Self {
            public_key: public_key.to_string(),
            path: path.map(str::to_string),
            status,
            body: body.to_string(),
        }
    }
}

pub type Query = Vec<(String, String)>;

pub struct ApiServer {
    /// Endpoint URL to use as `api_base`.
    pub base: String,
    requests: Arc<Mutex<Vec<Query>>>,
}

impl ApiServer {
    /// Decoded query pairs of every request received so far, in order.
    pub fn requests(&self) -> Vec<Query> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts the server in a background thread. Runs until the process exits.
pub fn start(routes: Vec<Route>) -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        // One connection at a time: the resolver never overlaps lookups.
        for stream in listener.incoming().flatten() {
            handle(stream, &routes, &seen);
        }
    });
    ApiServer {
        base: format!("http://127.0.0.1:{}/v1/disk/public/resources/download", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, routes: &[Route], seen: &Mutex<Vec<Query>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let target = match request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
    {
        Some(t) => t.to_string(),
        None => return,
    };
    let query: Query = url::Url::parse(&format!("http://localhost{}", target))
        .map(|u| u.query_pairs().into_owned().collect())
        .unwrap_or_default();
    seen.lock().unwrap().push(query.clone());

    let public_key = lookup(&query, "public_key");
    let path = lookup(&query, "path");
    let (status, body) = routes
        .iter()
        .find(|r| Some(r.public_key.as_str()) == public_key && r.path.as_deref() == path)
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((
            404,
            r#"{"error":"DiskNotFoundError","description":"Resource not found."}"#.to_string(),
        ));

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn lookup<'a>(query: &'a Query, name: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

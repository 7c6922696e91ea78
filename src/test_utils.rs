#![cfg(test)]

use crate::error::LookupError;
use crate::github::client::{RawResponse, Transport};
use crate::github::types::{RepoResult, UserResult};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory `Transport` that replays one canned response and records paths.
pub struct FakeTransport {
    response: Result<RawResponse, LookupError>,
    requested: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            response: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: Err(LookupError::Transport(msg.to_string())),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, LookupError> {
        self.requested.lock().unwrap().push(path.to_string());
        self.response.clone()
    }
}

/// Local HTTP server answering every request with the same status and JSON
/// body. Returns the base URL and a counter of requests received.
pub fn serve_canned(status: u16, reason: &str, body: &str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));

    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let counter = hits.clone();
    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&chunk[..n]),
                }
            }
            if request.is_empty() {
                continue;
            }
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    (base, hits)
}

pub fn make_user(login: &str, name: Option<&str>, public_repos: u32) -> UserResult {
    UserResult {
        id: 1,
        login: login.to_string(),
        public_repos,
        name: name.map(String::from),
    }
}

pub fn make_repo(name: &str, full_name: Option<&str>, stars: u32) -> RepoResult {
    RepoResult {
        name: name.to_string(),
        full_name: full_name.map(String::from),
        stargazers_count: stars,
    }
}

pub fn render_to_buffer(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    terminal.backend().buffer().clone()
}

/// Flattens a buffer into newline-separated rows of text.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Per-index misbehavior for the fixture catalog.
#[derive(Default, Clone)]
pub struct Fixture {
    pub malformed: Vec<u32>,
    pub failing: Vec<u32>,
}

pub struct TestEnv {
    pub base_url: String,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_fixture(Fixture::default())
    }

    pub fn with_fixture(fixture: Fixture) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture catalog");
        let addr = listener.local_addr().expect("fixture address");
        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => serve(stream, &fixture),
                    Err(_) => break,
                }
            }
        });
        Self {
            base_url: format!("http://{}/api/v2", addr),
        }
    }

    /// A base url nothing is listening on.
    pub fn unreachable() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
        let addr = listener.local_addr().expect("probe address");
        drop(listener);
        Self {
            base_url: format!("http://{}/api/v2", addr),
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pokedex");
        cmd.arg("--base-url")
            .arg(&self.base_url)
            .args(["--timeout-ms", "5000"])
            .env_remove("RUST_LOG");
        cmd
    }
}

fn serve(stream: TcpStream, fixture: &Fixture) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("");
    let index = path
        .strip_prefix("/api/v2/location-area/")
        .and_then(|n| n.parse::<u32>().ok());

    let (status, body) = match index {
        Some(n) if fixture.failing.contains(&n) => {
            ("500 Internal Server Error", "catalog exploded".to_string())
        }
        Some(n) if fixture.malformed.contains(&n) => ("200 OK", "{\"name\": ".to_string()),
        Some(n) => (
            "200 OK",
            serde_json::json!({
                "id": n,
                "name": format!("area-{n}"),
                "game_index": n,
                "location": {"name": format!("location-{n}"), "url": ""}
            })
            .to_string(),
        ),
        None => ("404 Not Found", "Not Found".to_string()),
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

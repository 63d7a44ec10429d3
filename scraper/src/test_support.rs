//! Fixtures and a canned-response HTTP server for tests.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub target: String,
    pub user_agent: String,
}

/// Answers one connection per canned `(status, body)` pair, in order.
pub struct StubServer {
    addr: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let target = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();

                let mut user_agent = String::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        if name.eq_ignore_ascii_case("user-agent") {
                            user_agent = value.trim().to_string();
                        }
                    }
                }

                log.lock().unwrap().push(SeenRequest { target, user_agent });

                let _ = write!(
                    stream,
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
            }
        });

        Self { addr, seen }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// A complete vacancy item; even ids carry salary and address blocks.
pub fn vacancy(id: usize) -> Value {
    let (salary, address) = if id % 2 == 0 {
        (
            json!({ "from": 1000 * (id + 1), "to": null, "currency": "RUR" }),
            json!({ "raw": format!("Moscow, Tverskaya {id}") }),
        )
    } else {
        (Value::Null, Value::Null)
    };

    json!({
        "id": id.to_string(),
        "name": format!("Vacancy {id}"),
        "employer": { "name": format!("Employer {id}") },
        "salary": salary,
        "area": { "name": "Москва" },
        "address": address,
        "apply_alternate_url": format!("https://hh.ru/applicant/vacancy_response?vacancyId={id}"),
        "alternate_url": format!("https://hh.ru/vacancy/{id}"),
        "published_at": "2024-02-20T10:00:00+0300",
        "archived": id % 3 == 0,
        "snippet": {
            "requirement": format!("Requirement {id}"),
            "responsibility": null
        }
    })
}

/// Page body with `count` vacancies numbered from `first`.
pub fn page_body(first: usize, count: usize) -> String {
    let items: Vec<Value> = (first..first + count).map(vacancy).collect();
    json!({ "items": items, "found": 100, "pages": 10, "per_page": 10 }).to_string()
}

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub out_dir: PathBuf,
}

impl TestEnv {
    pub fn new(base_url: &str) -> Self {
        Self::custom(base_url, 3, 20, "")
    }

    pub fn custom(base_url: &str, max_retries: u32, initial_delay_ms: u64, extra: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let out_dir = tmp.path().join("out");
        fs::create_dir_all(home.join(".config/haulsync")).expect("create isolated config dir");
        fs::create_dir_all(&out_dir).expect("create out dir");

        let config = format!(
            r#"[api]
base_url = "{base_url}"
timeout_secs = 5

[auth]
api_key = "test-key"

[retry]
max_retries = {max_retries}
initial_delay_ms = {initial_delay_ms}

{extra}
"#
        );
        fs::write(home.join(".config/haulsync/config.toml"), config).expect("write config");

        Self {
            _tmp: tmp,
            home,
            out_dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("haulsync").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn pull(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "pull",
            "--out-dir",
            self.out_dir.to_str().expect("out dir utf8"),
        ]);
        cmd
    }

    pub fn artifacts(&self, prefix: &str) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = fs::read_dir(&self.out_dir)
            .expect("read out dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.starts_with(prefix))
                    .unwrap_or(false)
            })
            .collect();
        found.sort();
        found
    }

    pub fn read_artifact(&self, prefix: &str) -> serde_json::Value {
        let found = self.artifacts(prefix);
        assert_eq!(found.len(), 1, "expected exactly one {prefix} artifact");
        let raw = fs::read_to_string(&found[0]).expect("read artifact");
        serde_json::from_str(&raw).expect("valid artifact json")
    }
}

#[derive(Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
}

/// Scripted in-process API peer. The handler sees the request path
/// (with query) and the zero-based index of the request, and returns
/// status + JSON body.
pub struct MockApi {
    server: Arc<tiny_http::Server>,
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl MockApi {
    pub fn start<F>(mut handler: F) -> Self
    where
        F: FnMut(&str, usize) -> (u16, String) + Send + 'static,
    {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock api"));
        let addr = server.server_addr().to_ip().expect("tcp listen addr");
        let base_url = format!("http://{addr}");
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let srv = Arc::clone(&server);
        let log = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            let mut hits = 0usize;
            for request in srv.incoming_requests() {
                let path = request.url().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv("Authorization"))
                    .map(|header| header.value.as_str().to_string());
                log.lock().expect("request log").push(RecordedRequest {
                    path: path.clone(),
                    authorization,
                });

                let (status, body) = handler(&path, hits);
                hits += 1;
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            &b"application/json"[..],
                        )
                        .expect("content-type header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            server,
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log").clone()
    }

    pub fn requests_to(&self, prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path.starts_with(prefix))
            .collect()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn query_param(path: &str, name: &str) -> Option<String> {
    let (_, query) = path.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

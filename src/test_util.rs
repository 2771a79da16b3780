use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Router;
use reqwest::Url;
use tokio::net::TcpListener;

use crate::client::{Client, ClientOptions};

macro_rules! load_test_json {
    ($filename:literal) => {{
        let mut path = ::std::path::PathBuf::from(::std::env!("CARGO_MANIFEST_DIR"));
        path.push("test_resources");
        path.push($filename);
        let file = match ::std::fs::OpenOptions::new().read(true).open(path) {
            Err(err) => {
                println!("couldn't open test resource file `{}`", $filename);
                panic!("{:?}", err);
            }
            Ok(file) => file,
        };
        match ::serde_json::from_reader(file) {
            Err(err) => {
                println!(
                    "couldn't parse json from test resource file `{}`",
                    $filename
                );
                panic!("{:?}", err);
            }
            Ok(v) => v,
        }
    }};
}

macro_rules! test_body {
    ($filename:literal) => {
        ::std::include_str!(::std::concat!(
            ::std::env!("CARGO_MANIFEST_DIR"),
            "/test_resources/",
            $filename
        ))
    };
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<Uri>>>,
}

/// Local http server answering every request with the same status and body
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<Uri>>>,
}

impl StubServer {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body,
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }
    pub async fn ok(body: &'static str) -> Self {
        Self::start(StatusCode::OK, body).await
    }
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    pub fn client(&self) -> Client {
        ClientOptions::new()
            .api_key("test-key".to_string())
            .base_url(self.base_url.as_str())
            .build()
            .unwrap()
    }
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|uri| Url::parse(&format!("{}{}", self.base_url, uri)).unwrap())
            .collect()
    }
    pub fn last_request(&self) -> Url {
        self.requests().pop().expect("no request reached the stub")
    }
}

async fn respond(State(state): State<StubState>, uri: Uri) -> (StatusCode, &'static str) {
    state.requests.lock().unwrap().push(uri);
    (state.status, state.body)
}

pub fn query_map(url: &Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}

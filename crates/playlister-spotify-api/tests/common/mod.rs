#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header;
use axum::response::IntoResponse;
use playlister_spotify_api::endpoints::Endpoints;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Default)]
struct Script {
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Answers each request with the next scripted `(status, body)` pair and records what it got.
pub struct FakeServer {
    base: String,
    script: Script,
}

impl FakeServer {
    /// `script` gets the server's base URL so responses can link back to it.
    pub async fn start(script: impl FnOnce(&str) -> Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let state = Script::default();
        state.responses.lock().unwrap().extend(script(&base));

        let app = Router::new().fallback(respond).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base,
            script: state,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.script.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(script): State<Script>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    script.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        target: uri.to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect(),
        body,
    });

    let next = script.responses.lock().unwrap().pop_front();
    let (status, body) = next.unwrap_or((500, "script exhausted".to_string()));
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// Fake endpoints with everything pointed at `server`.
pub fn endpoints_for(server: &FakeServer) -> Endpoints {
    Endpoints {
        authorize: server.url("/authorize"),
        token: server.url("/api/token"),
        playlists: server.url("/v1/me/playlists"),
        redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
    }
}

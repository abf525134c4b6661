//! In-process stand-in for the identity platform and Graph

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Form, Json, Router};
use graphmail_auth::Credentials;
use graphmail_send::{MailSender, SenderConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const TOKEN: &str = "tok-abc123";

#[derive(Clone, Copy)]
pub enum TokenReply {
    Issue,
    InvalidClient,
    InvalidClientWith200,
}

#[derive(Debug, Clone)]
pub struct CapturedSend {
    pub mailbox: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

pub struct MockGraph {
    pub addr: SocketAddr,
    token_reply: TokenReply,
    send_status: StatusCode,
    token_hits: AtomicUsize,
    send_hits: AtomicUsize,
    sends: Mutex<Vec<CapturedSend>>,
}

impl MockGraph {
    pub async fn start(token_reply: TokenReply, send_status: StatusCode) -> Arc<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Arc::new(Self {
            addr,
            token_reply,
            send_status,
            token_hits: AtomicUsize::new(0),
            send_hits: AtomicUsize::new(0),
            sends: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/:tenant/oauth2/v2.0/token", post(token))
            .route("/v1.0/users/:mailbox/sendMail", post(send_mail))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        state
    }

    pub fn token_hits(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn send_hits(&self) -> usize {
        self.send_hits.load(Ordering::SeqCst)
    }

    pub fn sends(&self) -> Vec<CapturedSend> {
        self.sends.lock().unwrap().clone()
    }

    pub fn config(&self) -> SenderConfig {
        SenderConfig::new(Credentials::new("app-id", "s3cret", "contoso"))
            .unwrap()
            .with_authority_host(Url::parse(&format!("http://{}", self.addr)).unwrap())
            .with_api_base(Url::parse(&format!("http://{}/v1.0", self.addr)).unwrap())
            .with_timeout(Duration::from_secs(5))
    }

    pub fn sender(&self) -> MailSender {
        MailSender::new(self.config()).unwrap()
    }
}

async fn token(
    State(state): State<Arc<MockGraph>>,
    Path(_tenant): Path<String>,
    Form(_form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.token_hits.fetch_add(1, Ordering::SeqCst);
    match state.token_reply {
        TokenReply::Issue => (
            StatusCode::OK,
            Json(json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "access_token": TOKEN
            })),
        ),
        TokenReply::InvalidClient => (StatusCode::UNAUTHORIZED, Json(invalid_client())),
        TokenReply::InvalidClientWith200 => (StatusCode::OK, Json(invalid_client())),
    }
}

fn invalid_client() -> Value {
    json!({
        "error": "invalid_client",
        "error_description": "AADSTS7000215: Invalid client secret provided."
    })
}

async fn send_mail(
    State(state): State<Arc<MockGraph>>,
    Path(mailbox): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    state.send_hits.fetch_add(1, Ordering::SeqCst);

    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.sends.lock().unwrap().push(CapturedSend {
        mailbox,
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });

    state.send_status
}

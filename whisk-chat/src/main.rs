//! Chat echo server
//!
//! Standalone demo, unrelated to the Whisk client: one greeting route and
//! one message-echo route.
//!
//! ## Run
//! ```bash
//! cargo run -p whisk-chat
//! ```
//!
//! ## Test
//! ```bash
//! curl http://localhost:3000/
//! curl -X POST http://localhost:3000/chat \
//!   -H "Content-Type: application/json" \
//!   -d '{"message": "hi"}'
//! ```

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{body::Incoming, Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

/// Route a request to a status and body. Pure, so it can be tested without
/// a socket.
fn route(method: &Method, path: &str, body: &[u8]) -> (StatusCode, String, &'static str) {
    match (method, path) {
        (&Method::GET, "/") => (StatusCode::OK, "Hello, World!".to_string(), "text/plain"),
        (&Method::POST, "/chat") => match serde_json::from_slice::<ChatRequest>(body) {
            Ok(chat) => (
                StatusCode::OK,
                json!({ "response": format!("You said: {}", chat.message) }).to_string(),
                "application/json",
            ),
            Err(_) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_body",
                    "message": "Expected a JSON body with a 'message' field"
                })
                .to_string(),
                "application/json",
            ),
        },
        _ => (
            StatusCode::NOT_FOUND,
            json!({ "error": "not_found", "message": "No such route" }).to_string(),
            "application/json",
        ),
    }
}

async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let body = req.collect().await?.to_bytes();

    let (status, payload, content_type) = route(&method, &path, &body);
    log::info!("{} {} -> {}", method, path, status.as_u16());

    let response = Response::builder()
        .status(status)
        .header("content-type", content_type)
        .body(Full::new(Bytes::from(payload)))
        .expect("static response parts are valid");
    Ok(response)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = std::env::var("WHISK_CHAT_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    log::info!("chat echo server listening on {}", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);

        tokio::task::spawn(async move {
            if let Err(err) =
                http1::Builder::new().serve_connection(io, service_fn(handle)).await
            {
                log::warn!("error serving connection: {:?}", err);
            }
        });
    }
}

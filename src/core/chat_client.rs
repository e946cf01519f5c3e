//! HTTP client for the chat endpoint.
//!
//! One exchange is a single `POST {base_url}/api/chat` carrying the whole
//! conversation. The server answers `{"reply": "..."}` on success or any
//! non-2xx status, optionally with `{"error": "..."}`.

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::api::{ChatReply, ChatRequest, ErrorBody};
use crate::core::constants::{CHAT_ENDPOINT, REQUEST_FAILED_FALLBACK};
use crate::core::message::ChatMessage;
use crate::utils::url::{construct_api_url, normalize_base_url};

/// Failure of a chat exchange. `Display` is the text shown in the error banner.
#[derive(Debug)]
pub enum RequestError {
    /// The server answered with a non-success status.
    Status {
        status: StatusCode,
        /// Server-provided `error` field, or the generic fallback.
        message: String,
    },
    /// The request never produced a response (connection refused, DNS, TLS...).
    Transport(String),
    /// A success status arrived with a body that is not `{"reply": string}`.
    Decode(String),
}

impl RequestError {
    pub fn message(&self) -> &str {
        match self {
            RequestError::Status { message, .. } => message,
            RequestError::Transport(message) | RequestError::Decode(message) => message,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for RequestError {}

/// Anything able to turn a conversation into the assistant's next reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, messages: &[ChatMessage]) -> Result<String, RequestError>;
}

#[derive(Clone, Debug)]
pub struct HttpChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chat_url(&self) -> String {
        construct_api_url(&self.base_url, CHAT_ENDPOINT)
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(&self, messages: &[ChatMessage]) -> Result<String, RequestError> {
        let chat_url = self.chat_url();
        debug!(url = %chat_url, messages = messages.len(), "Sending chat request");

        let response = self
            .client
            .post(&chat_url)
            .header("Content-Type", "application/json")
            .json(&ChatRequest { messages })
            .send()
            .await
            .map_err(|err| {
                warn!(url = %chat_url, error = %err, "Chat request could not be sent");
                RequestError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still reports the status.
            let body = response.text().await.unwrap_or_default();
            let message =
                extract_error_message(&body).unwrap_or_else(|| REQUEST_FAILED_FALLBACK.to_string());
            warn!(status = %status, error = %message, "Chat request rejected");
            return Err(RequestError::Status { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|err| RequestError::Transport(err.to_string()))?;
        let reply = serde_json::from_str::<ChatReply>(&body)
            .map_err(|err| RequestError::Decode(format!("Invalid reply from server: {err}")))?;
        debug!(reply_chars = reply.reply.chars().count(), "Received chat reply");
        Ok(reply.reply)
    }
}

/// Pull a usable `error` string out of a failure body, if there is one.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body.trim())
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::Mutex;

    type CapturedRequest = Arc<Mutex<Option<(String, Vec<(String, String)>, Vec<u8>)>>>;

    async fn read_http_request(
        stream: &mut TcpStream,
    ) -> Result<(String, Vec<(String, String)>, Vec<u8>), String> {
        let mut buffer = Vec::new();
        let mut header_end = None;
        while header_end.is_none() {
            let mut chunk = [0_u8; 1024];
            let read = stream.read(&mut chunk).await.map_err(|err| err.to_string())?;
            if read == 0 {
                return Err("Unexpected EOF while reading HTTP headers".to_string());
            }
            buffer.extend_from_slice(&chunk[..read]);
            header_end = buffer
                .windows(4)
                .position(|window| window == b"\r\n\r\n")
                .map(|index| index + 4);
        }

        let header_end = header_end.expect("header end should exist");
        let header_text =
            std::str::from_utf8(&buffer[..header_end]).map_err(|err| err.to_string())?;
        let mut lines = header_text.split("\r\n").filter(|line| !line.is_empty());
        let request_line = lines
            .next()
            .ok_or_else(|| "Missing HTTP request line".to_string())?
            .to_string();

        let mut headers = Vec::new();
        let mut content_length = 0_usize;
        for line in lines {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim().to_string();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse::<usize>().map_err(|err| err.to_string())?;
            }
            headers.push((name.to_string(), value));
        }

        let mut body = buffer[header_end..].to_vec();
        while body.len() < content_length {
            let mut chunk = vec![0_u8; content_length - body.len()];
            let read = stream.read(&mut chunk).await.map_err(|err| err.to_string())?;
            if read == 0 {
                return Err("Unexpected EOF while reading HTTP body".to_string());
            }
            body.extend_from_slice(&chunk[..read]);
        }
        body.truncate(content_length);

        Ok((request_line, headers, body))
    }

    /// Serve exactly one request with the given status line and body.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, CapturedRequest) {
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        serve_raw_once(response).await
    }

    /// Answer one request with `response` written verbatim, then close.
    async fn serve_raw_once(response: String) -> (String, CapturedRequest) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("local addr should resolve");
        let captured: CapturedRequest = Arc::new(Mutex::new(None));
        let captured_for_server = Arc::clone(&captured);

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let request = read_http_request(&mut stream).await.expect("request");
            *captured_for_server.lock().await = Some(request);
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = stream.shutdown().await;
        });

        (format!("http://{addr}"), captured)
    }

    fn local_client(base_url: &str) -> HttpChatClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client should build");
        HttpChatClient::with_client(client, base_url)
    }

    fn sample_messages() -> Vec<ChatMessage> {
        vec![
            ChatMessage::assistant("Hi, how are you feeling?"),
            ChatMessage::user("I feel anxious"),
        ]
    }

    #[tokio::test]
    async fn send_posts_history_and_returns_reply() {
        let (base_url, captured) =
            serve_once("200 OK", r#"{"reply":"That sounds hard. What happened?"}"#).await;
        let client = local_client(&format!("{base_url}/"));

        let reply = client
            .send(&sample_messages())
            .await
            .expect("reply should parse");
        assert_eq!(reply, "That sounds hard. What happened?");

        let (request_line, headers, body) =
            captured.lock().await.take().expect("request captured");
        assert_eq!(request_line, "POST /api/chat HTTP/1.1");
        let content_type = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str());
        assert_eq!(content_type, Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(
            body,
            serde_json::json!({
                "messages": [
                    {"role": "assistant", "content": "Hi, how are you feeling?"},
                    {"role": "user", "content": "I feel anxious"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn non_success_uses_server_error_message() {
        let (base_url, _) = serve_once(
            "500 Internal Server Error",
            r#"{"error":"Model is temporarily unavailable"}"#,
        )
        .await;
        let client = local_client(&base_url);

        let err = client
            .send(&sample_messages())
            .await
            .expect_err("status should fail");
        assert_eq!(err.to_string(), "Model is temporarily unavailable");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn non_success_without_json_falls_back() {
        let (base_url, _) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
        let client = local_client(&base_url);

        let err = client
            .send(&sample_messages())
            .await
            .expect_err("status should fail");
        assert_eq!(err.message(), REQUEST_FAILED_FALLBACK);
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn non_success_with_truncated_body_keeps_status() {
        let (base_url, _) = serve_raw_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-type: application/json\r\ncontent-length: 100\r\nconnection: close\r\n\r\n{\"err"
                .to_string(),
        )
        .await;
        let client = local_client(&base_url);

        let err = client
            .send(&sample_messages())
            .await
            .expect_err("status should fail");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.message(), REQUEST_FAILED_FALLBACK);
    }

    #[tokio::test]
    async fn non_success_with_blank_error_falls_back() {
        let (base_url, _) = serve_once("400 Bad Request", r#"{"error":"  "}"#).await;
        let client = local_client(&base_url);

        let err = client
            .send(&sample_messages())
            .await
            .expect_err("status should fail");
        assert_eq!(err.message(), REQUEST_FAILED_FALLBACK);
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let (base_url, _) = serve_once("200 OK", r#"{"answer":"wrong field"}"#).await;
        let client = local_client(&base_url);

        let err = client
            .send(&sample_messages())
            .await
            .expect_err("missing reply should fail");
        assert!(matches!(err, RequestError::Decode(_)));
        assert!(err.message().starts_with("Invalid reply from server"));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = local_client(&format!("http://{addr}"));
        let err = client
            .send(&sample_messages())
            .await
            .expect_err("connection should be refused");
        assert!(matches!(err, RequestError::Transport(_)));
        assert!(!err.message().is_empty());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn chat_url_normalizes_base() {
        let client = HttpChatClient::new("http://localhost:4000//");
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.chat_url(), "http://localhost:4000/api/chat");
    }

    #[test]
    fn extract_error_message_variants() {
        assert_eq!(
            extract_error_message(r#"{"error":"quota exceeded"}"#).as_deref(),
            Some("quota exceeded")
        );
        assert_eq!(extract_error_message(r#"{"error":{"message":"x"}}"#), None);
        assert_eq!(extract_error_message(r#"{"detail":"x"}"#), None);
        assert_eq!(extract_error_message(""), None);
    }
}

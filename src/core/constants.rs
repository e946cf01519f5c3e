//! Shared constants used across the application

/// Base URL used when no other source provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_URL_ENV: &str = "CONFIDANT_API_BASE_URL";

/// Path of the chat endpoint relative to the base URL.
pub const CHAT_ENDPOINT: &str = "api/chat";

/// Shown when the server rejects a request without a usable `error` field.
pub const REQUEST_FAILED_FALLBACK: &str = "Request failed";

pub const WELCOME_MESSAGE: &str =
    "Hi, I'm your emotional support companion. Would you like to share how you've been feeling lately?";

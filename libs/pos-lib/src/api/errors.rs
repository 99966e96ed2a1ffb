/// Failure of a single call against the POS backend.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's own text, shown verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Transport failure. The detail is kept for logs only.
    #[error("could not reach the server, please try again")]
    Network(String),

    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),

    /// No token is held, so the request was never sent.
    #[error("not logged in")]
    Unauthenticated,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message extracted from a backend error body (`{"error": ..}`,
    /// `{"message": ..}` or a bare JSON string), falling back to the raw text.
    pub fn from_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .or_else(|| v.as_str())
            })
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && parsed.is_none()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));

        ApiError::Server { status, message }
    }
}

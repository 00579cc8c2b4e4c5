use serde::{Deserialize, Serialize};

/// Health check response. The relayer answers `GET /health` with plain text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn from_body(body: &str) -> Self {
        Self {
            status: body.trim().to_lowercase(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

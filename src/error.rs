use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request rejected with HTTP {status}")]
    Rejected { status: u16, detail: Option<String> },
}

/// The two mutations the board performs, and the texts shown when they fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Signup,
    Unregister,
}

impl Operation {
    /// Shown for a non-2xx reply that carries no usable `detail`.
    pub fn fallback_detail(self) -> &'static str {
        match self {
            Operation::Signup => "An error occurred",
            Operation::Unregister => "Failed to remove participant",
        }
    }

    /// Shown when the request never produced a readable reply.
    pub fn failure_text(self) -> &'static str {
        match self {
            Operation::Signup => "Failed to sign up. Please try again.",
            Operation::Unregister => "Failed to remove participant. Please try again.",
        }
    }

    pub fn log_label(self) -> &'static str {
        match self {
            Operation::Signup => "Error signing up",
            Operation::Unregister => "Error removing participant",
        }
    }
}

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

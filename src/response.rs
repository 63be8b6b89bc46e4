//! Response bodies shared by handlers and error mapping.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{"message": "..."}`, used for confirmations and errors alike.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}

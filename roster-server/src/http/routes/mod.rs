//! Route handlers organized by resource

pub mod courses;
pub mod health;
pub mod people;

use serde::{Deserialize, Serialize};

/// Confirmation body for deletions
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

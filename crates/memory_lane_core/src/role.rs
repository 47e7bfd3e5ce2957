//! Message roles.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    #[display("system")]
    System,
    /// End user
    #[display("user")]
    User,
    /// Model
    #[display("model")]
    Model,
}

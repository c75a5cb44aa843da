//! User roles in a nomination discussion.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What a user did for a nomination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Promoter,
    Nominator,
    Approver,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Promoter => "promoter",
            UserRole::Nominator => "nominator",
            UserRole::Approver => "approver",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username to role, at most one role per user.
pub type UserRoles = HashMap<String, UserRole>;

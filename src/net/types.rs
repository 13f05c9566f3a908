//! Wire DTOs for the auth service boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credential payload decoded by the auth service on the sign-up, sign-in,
/// and reset routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email address, sent verbatim as typed.
    pub email: String,
    /// Account password, sent verbatim as typed.
    pub password: String,
}

//! JWT claim structure for identity tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in every identity token.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `name`: User's display name
/// - `email`: User's email address
/// - `is_admin`: Whether the user holds the admin role
/// - `exp`: Token expiration timestamp (Unix timestamp)
/// - `iat`: Token issued-at timestamp (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

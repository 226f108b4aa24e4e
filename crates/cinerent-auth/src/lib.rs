//! # Cinerent Auth
//!
//! JWT claim structures and the token codec used by the Cinerent API.
//!
//! Tokens are self-contained: they carry the user's id, name, email, and
//! admin flag, so authentication and authorization decisions never need a
//! database lookup.

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_token, verify_token};

//! Extractors for cross-cutting request concerns.
//!
//! - [`auth`]: JWT authentication (`AuthUser`)
//! - [`role`]: Admin authorization (`AdminUser`)
//! - [`entity_id`]: Path-parameter id validation (`EntityId`)
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` validates the JWT and extracts claims — a missing header
//!    rejects with 401, a present-but-invalid token with 400
//! 3. `AdminUser` wraps `AuthUser` and additionally rejects non-admin
//!    identities with 403, so authorization can never run without
//!    authentication having run first
//! 4. Handler executes if all checks pass

pub mod auth;
pub mod entity_id;
pub mod role;

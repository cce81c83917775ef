//! User authentication (JWT bearer tokens)
//!
//! Registration/login with argon2 password hashing; protected routes verify
//! an HS256 JWT and inject the claims as a request extension.

pub mod handlers;
pub mod middleware;
pub mod service;

pub use middleware::jwt_auth_middleware;
pub use service::{Claims, UserAuthService};

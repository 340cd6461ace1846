//! Authentication and authorization module

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{auth_middleware, extract_token, CurrentUser};
pub use password::PasswordHasher;

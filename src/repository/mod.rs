//! Database repository layer

pub mod todo_repo;
pub mod user_repo;

pub use todo_repo::*;
pub use user_repo::*;

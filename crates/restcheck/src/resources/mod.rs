//! Typed API resources
//!
//! Each resource wraps a cloned `Client` and exposes the operations the
//! backend supports for that entity type. `_raw` variants take arbitrary
//! JSON so negative tests can submit malformed payloads.

pub use posts::Posts;
pub use todos::Todos;
pub use users::Users;

mod posts;
mod todos;
mod users;

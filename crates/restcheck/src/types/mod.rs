//! Wire models for the three simulated resource types

pub use post::{CreatePost, Post};
pub use todo::{CreateTodo, Todo};
pub use user::{CreateUser, UpdateUser, User};

pub mod fakers;
mod post;
mod todo;
mod user;

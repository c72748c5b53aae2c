//! Client-side data layer for a minimal social feed application.
//!
//! Talks to the REST backend to list users, create-or-load a user, save
//! profile edits, fetch feeds, publish posts, and manage follow edges.
//! [`ApiClient`] performs the HTTP round trips; [`User`] and [`Post`] are
//! the domain model built on top of it.

pub mod api;
pub mod config;
pub mod post;
pub mod user;

pub use api::{ApiClient, ApiError};
pub use post::Post;
pub use user::{User, UserData};

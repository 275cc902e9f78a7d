//! User infrastructure module
//!
//! Storage-backed repository for the profile collection and the service
//! that registers and updates profiles on top of it.

mod repository;
mod service;

pub use repository::StorageUserRepository;
pub use service::{RegisterOutcome, UpdateOutcome, UserService};

//! Infrastructure layer - Storage, services and logging

pub mod logging;
pub mod storage;
pub mod user;

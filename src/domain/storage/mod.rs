//! Storage domain - Whole-collection storage abstraction

mod entity;
mod repository;

pub use entity::StorageEntity;
pub use repository::Storage;

#[cfg(test)]
pub use repository::mock;

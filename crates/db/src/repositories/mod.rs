//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod item_detail_repo;
pub mod item_repo;

pub use item_detail_repo::ItemDetailRepo;
pub use item_repo::ItemRepo;

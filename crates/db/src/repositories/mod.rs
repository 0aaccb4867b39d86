//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_order_repo;
pub mod project_repo;

pub use category_order_repo::CategoryOrderRepo;
pub use project_repo::ProjectRepo;

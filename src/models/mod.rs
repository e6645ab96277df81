pub mod summary;
pub mod trip;

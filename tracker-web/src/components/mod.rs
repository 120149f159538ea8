//! Reusable components.

pub mod header;
pub mod loader;

pub use header::Header;
pub use loader::Loader;

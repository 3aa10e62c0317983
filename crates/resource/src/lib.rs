//! Resource providers backed by the local filesystem.
//!
//! - [`FilesystemResourceProvider`]: loads assets relative to a base directory
//!
//! The in-memory provider from `skyedoc-traits` is re-exported for callers
//! that only depend on this crate.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use skyedoc_traits::InMemoryResourceProvider;

//! Read-only filesystem abstraction for better-import.
//!
//! This crate provides a `FileSystem` trait that works against the real disk
//! (`NativeFileSystem`) or against an in-memory tree (`MemoryFileSystem`,
//! behind the `memory` feature).
//!
//! # Example
//!
//! ```no_run
//! use better_import_fs::{FileSystem, NativeFileSystem};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new(".")?;
//! let manifest = fs.read_to_string(Path::new("package.json")).await?;
//! println!("{}", manifest);
//!
//! for path in fs.glob("packages/*/package.json").await? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod file_system;
pub use file_system::FileSystem;

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "native")]
pub use native::NativeFileSystem;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "memory")]
pub use memory::MemoryFileSystem;

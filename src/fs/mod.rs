//! Path values and the thin OS collaborators that consume them.
//!
//! The [`path`] module is always available. Attribute queries, the current directory and
//! directory listing need the `fs` feature, which pulls in `libc`, and a Unix target.

pub mod path;
#[cfg(all(feature = "fs", unix))]
pub mod dir;

#[cfg(all(feature = "fs", unix))]
mod attributes;
mod error;
#[cfg(all(feature = "fs", unix))]
mod syscall;


#[cfg(all(feature = "fs", unix))]
pub use attributes::*;
pub use error::*;

//! Validated, normalized path values and a bidirectional cursor over their components.
//!
//! # Purpose
//! This crate is the string-normalization and traversal core beneath a filesystem abstraction. A
//! [`Path`](fs::path::Path) owns a text buffer which is checked for invalid symbols on
//! construction and never carries trailing separators. The components of a path can then be walked
//! in either direction with a [`Cursor`](fs::path::Cursor), or through the
//! [`Components`](fs::path::Components) iterator, without copying the path.
//!
//! # Method
//! No canonicalization happens against a live filesystem: `.` and `..` are ordinary components and
//! symlinks are never resolved. Both `/` and `\` are accepted as separators when parsing, while
//! joining always inserts the canonical separator (`/`, or `\` with the `backslash-separator`
//! feature).
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch with small structs that implement
//! [`Error`](std::error::Error). Pure operations (equality, joining, iteration) never fail. The
//! OS-facing queries fold ordinary failures into a classification rather than an error, see
//! [`EntryKind`](fs::EntryKind).
//!
//! # Dependencies
//! The OS-facing parts of the [`fs`] module (attributes, the current directory and directory
//! listing) rely on `libc` for thin syscall wrappers and are gated behind the `fs` feature. Those
//! calls are instrumented with `tracing`, the crate never installs a subscriber itself.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod fs;


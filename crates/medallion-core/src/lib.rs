//! Medallion Core
//!
//! Domain types for warehouse source declarations.
//! Descriptors are immutable once declared and carry no connection state.

pub mod source;

pub use source::{DeclarationError, SourceDescriptor, TableRef};

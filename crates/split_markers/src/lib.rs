// crates/split_markers/src/lib.rs

//! Marker grammar and document model for `.split` files.
//!
//! A `.split` file is plain text interleaved with `// FILE: <name>` lines.
//! [`parse`] turns the text into a [`SplitDocument`]: the preamble that
//! precedes the first marker, followed by one [`Section`] per marker.

pub mod document;
pub mod grammar;

pub use document::{parse, Section, SplitDocument};
pub use grammar::SPLIT_EXTENSION;

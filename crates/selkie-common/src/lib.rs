//! Common utilities for the Selkie selector builder.
//!
//! This crate provides shared infrastructure used around the selector core:
//! - **Warning System** - colored, deduplicated terminal output
//! - **Codec** - JSON encoding and prototype-merging decoding
//! - **Shapes** - plain structural values with computed accessors

pub mod codec;
pub mod shape;
pub mod warning;

pub use codec::{CodecError, CodecResult, decode_onto, encode, encode_pretty};
pub use shape::Rect;

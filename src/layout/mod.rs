//! Initial board layouts.
//!
//! A layout is a JSON record listing, per piece, its grid coordinates,
//! allegiance, kind, and the kind-specific field (`dir` or `stacked`).
//! Any malformed entry aborts match setup with a [`LayoutError`].
pub mod error;
pub use error::*;

pub mod record;
pub use record::*;

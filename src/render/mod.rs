//! Renderer-facing output of the core.
//!
//! The core never draws. It hands renderers an ordered list of
//! [`Drawable`] descriptors built by [`Scene`], and times beam animations
//! with [`Beam`].
pub mod beam;
pub use beam::*;

pub mod drawable;
pub use drawable::*;

pub mod scene;
pub use scene::*;

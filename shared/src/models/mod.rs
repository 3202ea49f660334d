//! Data models
//!
//! Typed source rows, the joined [`SpaceView`] and per-session selection state.

pub mod selection;
pub mod space;
pub mod space_view;

// Re-exports
pub use selection::*;
pub use space::*;
pub use space_view::*;

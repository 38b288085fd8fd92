//! Screen-space UI and styling.

pub mod debug;
pub mod overlay;
pub mod theme;

pub use overlay::OverlayPlugin;

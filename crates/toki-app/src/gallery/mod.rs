//! Gallery module - the 3D frame sequence and its navigation.
//!
//! Events sit side by side along +X; frames away from the focus recede,
//! shrink and fade. The camera glides along the row.
//!
//! ```text
//!                       ┌─────────┐
//!   ┌───┐    ┌─────┐    │         │    ┌─────┐    ┌───┐
//!   │   │    │     │    │ focused │    │     │    │   │
//!   └───┘    └─────┘    │  2.5x   │    └─────┘    └───┘
//!   d=-2      d=-1      └─────────┘     d=+1      d=+2
//!                            ▲
//!                         camera (x = index * spacing, z = 4 * zoom)
//! ```
//!
//! Input is translated into [`GalleryNavigator`](toki_core::GalleryNavigator)
//! calls; every tick the derived frame parameters are applied to meshes,
//! labels and the camera.

mod components;
mod input;
mod plugin;
mod spawn;
mod systems;

pub use plugin::GalleryPlugin;

pub use components::{CategoryToggled, Gallery, SelectionCleared, ZoomRequested};

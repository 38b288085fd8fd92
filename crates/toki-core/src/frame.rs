//! Per-frame derived values handed to the renderer each tick.

use crate::catalog::Event;
use crate::config::LayoutConfig;
use crate::scale::target_scale;
use crate::visibility::{ContentTier, visibility};

/// Everything the renderer needs to draw one frame, recomputed every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRenderParams {
    pub opacity_factor: f32,
    pub detail_level: f32,
    pub text_blur_px: f32,
    /// Scale the frame's spring should ease toward.
    pub scale: f32,
    pub is_focused: bool,
    pub tier: ContentTier,
}

/// Combine visibility and scale for a frame at signed `distance`.
pub fn frame_params(distance: f32, is_focused: bool) -> FrameRenderParams {
    let vis = visibility(distance, is_focused);
    FrameRenderParams {
        opacity_factor: vis.opacity_factor,
        detail_level: vis.detail_level,
        text_blur_px: vis.text_blur_px,
        scale: target_scale(is_focused, distance.abs()),
        is_focused,
        tier: vis.tier,
    }
}

/// One frame of the filtered sequence, as seen from the current index.
#[derive(Clone, Debug)]
pub struct FrameView<'a> {
    /// Position in the filtered, sorted sequence.
    pub index: usize,
    pub event: &'a Event,
    /// `index - current_index`.
    pub distance: f32,
    /// World position: spaced along X, receding along -Z with distance.
    pub position: [f32; 3],
    pub params: FrameRenderParams,
}

impl<'a> FrameView<'a> {
    pub(crate) fn new(
        index: usize,
        event: &'a Event,
        current_index: f32,
        focused: Option<usize>,
        layout: &LayoutConfig,
    ) -> Self {
        let distance = index as f32 - current_index;
        let is_focused = focused == Some(index);
        Self {
            index,
            event,
            distance,
            position: frame_position(index, distance, layout),
            params: frame_params(distance, is_focused),
        }
    }
}

/// World position of frame `index` at signed `distance` from the focus.
pub fn frame_position(index: usize, distance: f32, layout: &LayoutConfig) -> [f32; 3] {
    [
        index as f32 * layout.frame_spacing,
        0.0,
        -distance.abs() * layout.depth_factor,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_params() {
        let p = frame_params(0.2, true);
        assert!(p.is_focused);
        assert_eq!(p.scale, 2.5);
        assert_eq!(p.tier, ContentTier::Full);
    }

    #[test]
    fn test_unfocused_params_follow_distance() {
        let p = frame_params(-1.0, false);
        assert!(!p.is_focused);
        assert!((p.scale - 0.8).abs() < 1e-6);
        assert!((p.opacity_factor - 0.85).abs() < 1e-6);
        assert_eq!(p.text_blur_px, 0.0);
    }

    #[test]
    fn test_frame_position_recedes_both_sides() {
        let layout = LayoutConfig::default();
        assert_eq!(frame_position(3, 0.0, &layout), [12.0, 0.0, 0.0]);
        let left = frame_position(1, -2.0, &layout);
        let right = frame_position(5, 2.0, &layout);
        assert_eq!(left[2], -3.0);
        assert_eq!(right[2], -3.0);
        assert_eq!(right[0], 20.0);
    }
}

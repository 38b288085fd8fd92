//! Distance-based fade and level-of-detail.
//!
//! Every frame's appearance is a pure function of its signed distance from
//! the current index. Nothing here is cached: when the filter changes, the
//! distances change and so does everything derived from them.

/// How much of a frame's content is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentTier {
    /// Title, date, description, category badge, importance bar.
    Full,
    /// Title, date, category badge.
    Summary,
    /// Title only.
    TitleOnly,
}

impl ContentTier {
    pub fn shows_date(self) -> bool {
        matches!(self, Self::Full | Self::Summary)
    }

    pub fn shows_badge(self) -> bool {
        matches!(self, Self::Full | Self::Summary)
    }

    pub fn shows_description(self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn shows_importance(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Fade and detail scalars for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityParams {
    /// 0.3 – 1.0; multiplies material alpha.
    pub opacity_factor: f32,
    /// 0.5 – 1.0; multiplies content size.
    pub detail_level: f32,
    /// Always 0: content fades and shrinks but is never blurred.
    pub text_blur_px: f32,
    pub tier: ContentTier,
}

const OPACITY_FLOOR: f32 = 0.3;
const OPACITY_FALLOFF: f32 = 0.15;
const DETAIL_FLOOR: f32 = 0.5;
const DETAIL_FALLOFF: f32 = 0.2;
const FULL_CONTENT_RANGE: f32 = 3.0;
const SUMMARY_RANGE: f32 = 6.0;

/// Derive visibility from signed `distance = frame_index - current_index`.
pub fn visibility(distance: f32, is_focused: bool) -> VisibilityParams {
    let distance_factor = distance.abs();

    let opacity_factor =
        (1.0 - (distance_factor * OPACITY_FALLOFF).min(1.0 - OPACITY_FLOOR)).max(OPACITY_FLOOR);
    let detail_level =
        (1.0 - (distance_factor * DETAIL_FALLOFF).min(1.0 - DETAIL_FLOOR)).max(DETAIL_FLOOR);

    let tier = if is_focused || distance_factor < FULL_CONTENT_RANGE {
        ContentTier::Full
    } else if distance_factor < SUMMARY_RANGE {
        ContentTier::Summary
    } else {
        ContentTier::TitleOnly
    };

    VisibilityParams {
        opacity_factor,
        detail_level,
        text_blur_px: 0.0,
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_distances() -> impl Iterator<Item = f32> {
        (-400..=400).map(|i| i as f32 * 0.05)
    }

    #[test]
    fn test_full_visibility_at_center() {
        let v = visibility(0.0, true);
        assert_eq!(v.opacity_factor, 1.0);
        assert_eq!(v.detail_level, 1.0);
        assert_eq!(v.tier, ContentTier::Full);
    }

    #[test]
    fn test_outputs_stay_in_range() {
        for d in sample_distances() {
            let v = visibility(d, false);
            assert!((0.3..=1.0).contains(&v.opacity_factor), "opacity {} at {d}", v.opacity_factor);
            assert!((0.5..=1.0).contains(&v.detail_level), "detail {} at {d}", v.detail_level);
            assert_eq!(v.text_blur_px, 0.0);
        }
        let far = visibility(1.0e6, false);
        assert_eq!(far.opacity_factor, 0.3);
        assert_eq!(far.detail_level, 0.5);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut prev = visibility(0.0, false);
        for i in 1..=400 {
            let v = visibility(i as f32 * 0.05, false);
            assert!(v.opacity_factor <= prev.opacity_factor);
            assert!(v.detail_level <= prev.detail_level);
            prev = v;
        }
    }

    #[test]
    fn test_symmetric_in_sign() {
        for d in sample_distances() {
            assert_eq!(visibility(d, false), visibility(-d, false));
        }
    }

    #[test]
    fn test_falloff_values() {
        let v = visibility(2.0, false);
        assert!((v.opacity_factor - 0.7).abs() < 1e-6);
        assert!((v.detail_level - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_content_tiers() {
        assert_eq!(visibility(2.9, false).tier, ContentTier::Full);
        assert_eq!(visibility(3.0, false).tier, ContentTier::Summary);
        assert_eq!(visibility(-5.5, false).tier, ContentTier::Summary);
        assert_eq!(visibility(6.0, false).tier, ContentTier::TitleOnly);
        // focus overrides distance
        assert_eq!(visibility(8.0, true).tier, ContentTier::Full);
    }

    #[test]
    fn test_tier_content_flags() {
        assert!(ContentTier::Full.shows_description());
        assert!(ContentTier::Summary.shows_badge());
        assert!(!ContentTier::Summary.shows_importance());
        assert!(!ContentTier::TitleOnly.shows_date());
    }
}

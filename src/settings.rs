//! Tunable parameters for the drawing modes.

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::bezier::{DEFAULT_HIT_RADIUS, MIN_FLATTEN_SEGMENTS};
use crate::fractal::Template;

/// Every gesture in fractal mode adds a level; this is where that stops.
pub const DEFAULT_MAX_DEPTH: u32 = 12;

/// The most segments a single fractal frame may produce.
pub const DEFAULT_SEGMENT_BUDGET: usize = 1 << 20;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct Settings {
    pub fractal: FractalSettings,
    pub bezier: BezierSettings,
}

/// Which substitution table fractal mode draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", rename_all = "snake_case")
)]
pub enum TemplateKind {
    Paperfolding,
    Dragon,
    Terdragon,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct FractalSettings {
    pub template: TemplateKind,
    pub max_depth: u32,
    pub segment_budget: usize,
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct BezierSettings {
    /// Per-axis grab distance for control points.
    pub hit_radius: f64,
    pub point_radius: f64,
    pub stroke_width: f64,
    /// Segments in the polyline returned by `BezierMode::flattened`.
    pub flatten_segments: usize,
}

impl TemplateKind {
    pub fn template(self) -> Template {
        match self {
            TemplateKind::Paperfolding => Template::PAPERFOLDING,
            TemplateKind::Dragon => Template::DRAGON,
            TemplateKind::Terdragon => Template::TERDRAGON,
        }
    }
}

impl Default for TemplateKind {
    fn default() -> Self {
        TemplateKind::Paperfolding
    }
}

impl Default for FractalSettings {
    fn default() -> Self {
        FractalSettings {
            template: TemplateKind::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            segment_budget: DEFAULT_SEGMENT_BUDGET,
            stroke_width: 3.0,
        }
    }
}

impl Default for BezierSettings {
    fn default() -> Self {
        BezierSettings {
            hit_radius: DEFAULT_HIT_RADIUS,
            point_radius: 27.0,
            stroke_width: 5.0,
            flatten_segments: 64,
        }
    }
}

impl Settings {
    /// Return a copy with unusable values replaced by their defaults.
    ///
    /// Lengths must be finite and non-negative. The depth limit and segment
    /// budget must be at least 1, and the flattening resolution at least
    /// [`MIN_FLATTEN_SEGMENTS`].
    pub fn sanitized(&self) -> Settings {
        let defaults = Settings::default();
        let mut out = self.clone();
        let lengths = [
            (&mut out.fractal.stroke_width, defaults.fractal.stroke_width),
            (&mut out.bezier.hit_radius, defaults.bezier.hit_radius),
            (&mut out.bezier.point_radius, defaults.bezier.point_radius),
            (&mut out.bezier.stroke_width, defaults.bezier.stroke_width),
        ];
        for (value, default) in lengths {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("replacing invalid length {} with {}", value, default);
                *value = default;
            }
        }
        if out.fractal.max_depth == 0 {
            log::warn!("max_depth must be at least 1");
            out.fractal.max_depth = 1;
        }
        if out.fractal.segment_budget == 0 {
            log::warn!("segment_budget must be at least 1");
            out.fractal.segment_budget = 1;
        }
        if out.bezier.flatten_segments < MIN_FLATTEN_SEGMENTS {
            log::warn!(
                "flatten_segments {} is below {}, using {}",
                out.bezier.flatten_segments,
                MIN_FLATTEN_SEGMENTS,
                defaults.bezier.flatten_segments
            );
            out.bezier.flatten_segments = defaults.bezier.flatten_segments;
        }
        out
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Settings> {
        serde_json::from_str::<Settings>(json).map(|s| s.sanitized())
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_sane() {
        let s = Settings::default();
        assert_eq!(s.sanitized(), s);
        assert_eq!(s.fractal.template.template(), Template::PAPERFOLDING);
    }

    #[test]
    fn sanitize_repairs_bad_values() {
        let mut s = Settings::default();
        s.bezier.hit_radius = f64::NAN;
        s.bezier.point_radius = -1.0;
        s.fractal.stroke_width = f64::INFINITY;
        s.bezier.flatten_segments = 2;
        let fixed = s.sanitized();
        assert_eq!(fixed, Settings::default());
    }

    #[test]
    fn sanitize_raises_zero_limits() {
        let mut s = Settings::default();
        s.fractal.max_depth = 0;
        s.fractal.segment_budget = 0;
        s.bezier.flatten_segments = MIN_FLATTEN_SEGMENTS;
        let fixed = s.sanitized();
        assert_eq!(fixed.fractal.max_depth, 1);
        assert_eq!(fixed.fractal.segment_budget, 1);
        assert_eq!(fixed.bezier.flatten_segments, MIN_FLATTEN_SEGMENTS);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_partial_and_round_trip() {
        let s = Settings::from_json(r#"{ "fractal": { "template": "dragon", "max_depth": 4 } }"#)
            .unwrap();
        assert_eq!(s.fractal.template, TemplateKind::Dragon);
        assert_eq!(s.fractal.max_depth, 4);
        assert_eq!(s.bezier, BezierSettings::default());
        assert_eq!(Settings::from_json(&s.to_json().unwrap()).unwrap(), s);
        assert!(Settings::from_json("[1, 2]").is_err());
    }
}

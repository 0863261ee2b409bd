//! Feature and marker styling. Everything here is pure: the renderer calls
//! these every frame and layers the hover transform on top, so there is no
//! cached style state to invalidate.

use crate::color::color_for;
use crate::dataset::Dataset;
use crate::types::{AccessRole, CoverageFeature};

/// Style descriptor for one choropleth feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub stroke_weight: f32,
    pub opacity: f32,
    pub fill_opacity: f32,
}

impl FeatureStyle {
    /// The hover variant: heavier black border, more opaque fill, fill color
    /// unchanged.
    pub fn hovered(mut self) -> Self {
        self.stroke_weight = 2.0;
        self.stroke_color = "#000000";
        self.fill_opacity = 0.9;
        self
    }
}

/// Compute the base style for a feature of the given dataset.
///
/// Fill color comes from the shared color scale; border and opacities are
/// fixed per dataset and currently identical across all three.
pub fn style_for(_dataset: Dataset, feature: &CoverageFeature) -> FeatureStyle {
    FeatureStyle {
        fill_color: color_for(feature.value),
        stroke_color: "#ffffff",
        stroke_weight: 1.0,
        opacity: 1.0,
        fill_opacity: 0.7,
    }
}

/// Style descriptor for a focus marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub stroke_weight: f32,
    pub fill_opacity: f32,
}

/// Focus markers share one shape; only the fill follows the role.
pub fn marker_style(role: AccessRole) -> MarkerStyle {
    MarkerStyle {
        radius: 10.0,
        fill_color: role.marker_color(),
        stroke_color: "#ffffff",
        stroke_weight: 2.0,
        fill_opacity: 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(value: f64) -> CoverageFeature {
        CoverageFeature {
            name: "Testland".to_string(),
            value,
            polygons: Vec::new(),
        }
    }

    #[test]
    fn style_is_idempotent() {
        let f = feature(67.3);
        for ds in Dataset::ALL {
            assert_eq!(style_for(ds, &f), style_for(ds, &f));
        }
    }

    #[test]
    fn base_fields_are_fixed() {
        let s = style_for(Dataset::Internet, &feature(50.0));
        assert_eq!(s.stroke_color, "#ffffff");
        assert_eq!(s.stroke_weight, 1.0);
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.fill_opacity, 0.7);
    }

    #[test]
    fn high_coverage_fills_with_the_top_bucket() {
        let s = style_for(Dataset::Internet, &feature(92.0));
        assert_eq!(s.fill_color, "#0c2c84");
    }

    #[test]
    fn missing_value_fills_with_the_lowest_bucket() {
        let s = style_for(Dataset::FiveG, &feature(f64::NAN));
        assert_eq!(s.fill_color, "#f2e6b8");
    }

    #[test]
    fn hover_transform_touches_only_border_and_fill_opacity() {
        let base = style_for(Dataset::ThreeG, &feature(40.0));
        let hovered = base.hovered();
        assert_eq!(hovered.fill_color, base.fill_color);
        assert_eq!(hovered.opacity, base.opacity);
        assert_eq!(hovered.stroke_weight, 2.0);
        assert_eq!(hovered.stroke_color, "#000000");
        assert_eq!(hovered.fill_opacity, 0.9);
    }

    #[test]
    fn marker_style_follows_the_role() {
        let high = marker_style(AccessRole::High);
        let low = marker_style(AccessRole::Low);
        assert_eq!(high.fill_color, "#006d2c");
        assert_eq!(low.fill_color, "#a50f15");
        assert_eq!(high.radius, 10.0);
        assert_eq!(high.stroke_color, "#ffffff");
    }
}

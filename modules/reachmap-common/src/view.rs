//! Fixed camera presets for the view buttons.

use crate::types::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPreset {
    pub name: &'static str,
    pub center: GeoPoint,
    pub zoom: f64,
}

/// Wide world view, also the startup camera.
pub const GLOBAL_VIEW: ViewPreset = ViewPreset {
    name: "Global",
    center: GeoPoint::new(20.0, 10.0),
    zoom: 2.0,
};

/// High-access exemplar (Netherlands).
pub const HIGH_ACCESS_VIEW: ViewPreset = ViewPreset {
    name: "High access",
    center: GeoPoint::new(52.1, 5.3),
    zoom: 5.0,
};

/// Low-access exemplar (Chad).
pub const LOW_ACCESS_VIEW: ViewPreset = ViewPreset {
    name: "Low access",
    center: GeoPoint::new(15.5, 18.7),
    zoom: 5.0,
};

pub const VIEW_PRESETS: [ViewPreset; 3] = [GLOBAL_VIEW, HIGH_ACCESS_VIEW, LOW_ACCESS_VIEW];

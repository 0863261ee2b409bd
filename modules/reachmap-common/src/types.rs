use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

// --- Geo Types ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

pub type Ring = Vec<GeoPoint>;

/// A polygon with an exterior ring and zero or more interior rings (holes).
#[derive(Debug, Clone)]
pub struct Polygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

// --- Coverage Layers ---

/// One country: its display name, coverage percentage, and outline.
/// `value` is NaN when the source property was missing or non-numeric.
/// Immutable once decoded.
#[derive(Debug, Clone)]
pub struct CoverageFeature {
    pub name: String,
    pub value: f64,
    pub polygons: Vec<Polygon>,
}

impl CoverageFeature {
    /// Representative point for anchoring popups: the vertex mean of the
    /// largest outline. None for a feature without outline points.
    pub fn label_point(&self) -> Option<GeoPoint> {
        let largest = self.polygons.iter().max_by_key(|p| p.exterior.len())?;
        if largest.exterior.is_empty() {
            return None;
        }
        let n = largest.exterior.len() as f64;
        let (lat, lng) = largest
            .exterior
            .iter()
            .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
        Some(GeoPoint::new(lat / n, lng / n))
    }
}

/// All decoded features of one dataset. Built once when the dataset's load
/// completes and shared behind an Arc afterwards.
#[derive(Debug, Clone)]
pub struct CoverageLayer {
    pub dataset: Dataset,
    pub features: Vec<CoverageFeature>,
}

impl CoverageLayer {
    pub fn new(dataset: Dataset, features: Vec<CoverageFeature>) -> Self {
        Self { dataset, features }
    }
}

// --- Focus Points ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRole {
    High,
    Low,
}

impl AccessRole {
    pub fn label(&self) -> &'static str {
        match self {
            AccessRole::High => "High access",
            AccessRole::Low => "Low access",
        }
    }

    /// Marker fill color for this role.
    pub fn marker_color(&self) -> &'static str {
        match self {
            AccessRole::High => "#006d2c",
            AccessRole::Low => "#a50f15",
        }
    }
}

impl std::fmt::Display for AccessRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A fixed exemplar country highlighted with a permanent marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPoint {
    pub name: &'static str,
    pub role: AccessRole,
    pub location: GeoPoint,
}

/// The two hardcoded focus countries: one high-access exemplar, one
/// low-access exemplar.
pub const FOCUS_POINTS: [FocusPoint; 2] = [
    FocusPoint {
        name: "Netherlands",
        role: AccessRole::High,
        location: GeoPoint::new(52.1, 5.3),
    },
    FocusPoint {
        name: "Chad",
        role: AccessRole::Low,
        location: GeoPoint::new(15.5, 18.7),
    },
];

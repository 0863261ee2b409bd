//! Pointer interaction state: the hovered country and the open popup.
//!
//! The renderer reports hit-test results here each frame and reads the state
//! back when painting. Hover styling itself lives in [`crate::style`]; the
//! hovered feature is just drawn last with the hover variant, so ending a
//! hover needs no reset step.

use crate::dataset::Dataset;
use crate::types::{CoverageFeature, GeoPoint};

/// What the pointer hit on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapTarget {
    Country { dataset: Dataset, feature: usize },
    FocusMarker { index: usize },
}

/// An open popup, anchored where the click landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Popup {
    pub target: MapTarget,
    pub anchor: GeoPoint,
}

#[derive(Debug, Default)]
pub struct Interaction {
    hovered: Option<(Dataset, usize)>,
    popup: Option<Popup>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover_enter(&mut self, dataset: Dataset, feature: usize) {
        self.hovered = Some((dataset, feature));
    }

    pub fn hover_clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<(Dataset, usize)> {
        self.hovered
    }

    pub fn is_hovered(&self, dataset: Dataset, feature: usize) -> bool {
        self.hovered == Some((dataset, feature))
    }

    pub fn open_popup(&mut self, target: MapTarget, anchor: GeoPoint) {
        self.popup = Some(Popup { target, anchor });
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    pub fn popup(&self) -> Option<Popup> {
        self.popup
    }
}

/// Popup line for a country: name, metric label, and the percentage.
/// A NaN value reads "no data" instead of a number.
pub fn popup_text(dataset: Dataset, feature: &CoverageFeature) -> String {
    if feature.value.is_nan() {
        format!("{}: {} no data", feature.name, dataset.metric_label())
    } else {
        format!(
            "{}: {} {}%",
            feature.name,
            dataset.metric_label(),
            feature.value
        )
    }
}

//! Layer bookkeeping for the map view.
//!
//! One registry owns every piece of shared layer state: which dataset layers
//! have finished loading, which layers are on the view, and what the overlay
//! control lists. Load completion is reported through [`on_layer_ready`],
//! so nothing here ever waits or polls.
//!
//! [`on_layer_ready`]: LayerRegistry::on_layer_ready

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::types::CoverageLayer;

/// Identifies one toggleable layer on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    Coverage(Dataset),
    Focus,
}

/// One checkbox row in the overlay control.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    pub id: LayerId,
    pub title: &'static str,
}

pub const FOCUS_OVERLAY_TITLE: &str = "Focus countries";

#[derive(Debug)]
pub struct LayerRegistry {
    layers: HashMap<Dataset, Arc<CoverageLayer>>,
    failed: HashSet<Dataset>,
    visible: HashSet<LayerId>,
    /// Overlay control rows. None until the primary dataset has loaded.
    overlay: Option<Vec<OverlayEntry>>,
    /// Datasets that finished before the overlay control existed, in
    /// completion order.
    pending_overlays: Vec<Dataset>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        let mut visible = HashSet::new();
        // The focus markers are static data, on the view from startup.
        visible.insert(LayerId::Focus);
        Self {
            layers: HashMap::new(),
            failed: HashSet::new(),
            visible,
            overlay: None,
            pending_overlays: Vec::new(),
        }
    }

    pub fn layer(&self, dataset: Dataset) -> Option<&Arc<CoverageLayer>> {
        self.layers.get(&dataset)
    }

    pub fn is_loaded(&self, dataset: Dataset) -> bool {
        self.layers.contains_key(&dataset)
    }

    pub fn has_failed(&self, dataset: Dataset) -> bool {
        self.failed.contains(&dataset)
    }

    /// True once every dataset has either loaded or failed.
    pub fn all_settled(&self) -> bool {
        Dataset::ALL
            .iter()
            .all(|ds| self.layers.contains_key(ds) || self.failed.contains(ds))
    }

    /// Record a completed dataset load.
    ///
    /// The primary dataset goes straight onto the view and creates the
    /// overlay control, listing itself, the focus markers, and any dataset
    /// that completed earlier. Other datasets register with the control if
    /// it exists and are held back otherwise; they are never shown by
    /// default.
    pub fn on_layer_ready(&mut self, dataset: Dataset, layer: Arc<CoverageLayer>) {
        info!(
            dataset = %dataset,
            features = layer.features.len(),
            "Dataset layer ready"
        );
        self.layers.insert(dataset, layer);

        if dataset.is_primary() {
            self.visible.insert(LayerId::Coverage(dataset));
            let mut entries = vec![
                OverlayEntry {
                    id: LayerId::Coverage(dataset),
                    title: dataset.overlay_title(),
                },
                OverlayEntry {
                    id: LayerId::Focus,
                    title: FOCUS_OVERLAY_TITLE,
                },
            ];
            for pending in self.pending_overlays.drain(..) {
                entries.push(OverlayEntry {
                    id: LayerId::Coverage(pending),
                    title: pending.overlay_title(),
                });
            }
            self.overlay = Some(entries);
        } else if let Some(entries) = self.overlay.as_mut() {
            entries.push(OverlayEntry {
                id: LayerId::Coverage(dataset),
                title: dataset.overlay_title(),
            });
        } else {
            self.pending_overlays.push(dataset);
        }
    }

    /// Record a failed dataset load. The dataset stays unavailable and its
    /// toggle stays inert.
    pub fn on_layer_failed(&mut self, dataset: Dataset) {
        debug!(dataset = %dataset, "Dataset marked failed");
        self.failed.insert(dataset);
    }

    pub fn show_internet(&mut self) {
        self.show(Dataset::Internet);
    }

    pub fn show_5g(&mut self) {
        self.show(Dataset::FiveG);
    }

    pub fn show_3g(&mut self) {
        self.show(Dataset::ThreeG);
    }

    /// Make `dataset` the only coverage layer on the view. Idempotent.
    /// A whole no-op when the dataset has not loaded yet. Never touches the
    /// focus layer.
    pub fn show(&mut self, dataset: Dataset) {
        if !self.layers.contains_key(&dataset) {
            debug!(dataset = %dataset, "Toggle before load, ignoring");
            return;
        }
        for other in Dataset::ALL {
            if other != dataset {
                self.visible.remove(&LayerId::Coverage(other));
            }
        }
        self.visible.insert(LayerId::Coverage(dataset));
        debug!(dataset = %dataset, "Coverage layer selected");
    }

    /// Checkbox binding for the overlay control. Unlike [`show`], overlay
    /// checkboxes are independent of each other.
    ///
    /// [`show`]: LayerRegistry::show
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let LayerId::Coverage(dataset) = id {
            if !self.layers.contains_key(&dataset) {
                return;
            }
        }
        if visible {
            self.visible.insert(id);
        } else {
            self.visible.remove(&id);
        }
    }

    pub fn is_visible(&self, id: LayerId) -> bool {
        self.visible.contains(&id)
    }

    pub fn overlay_entries(&self) -> &[OverlayEntry] {
        self.overlay.as_deref().unwrap_or(&[])
    }

    /// Coverage layers currently on the view, in catalog order.
    pub fn visible_layers(&self) -> Vec<Arc<CoverageLayer>> {
        Dataset::ALL
            .iter()
            .filter(|ds| self.visible.contains(&LayerId::Coverage(**ds)))
            .filter_map(|ds| self.layers.get(ds))
            .cloned()
            .collect()
    }

    pub fn focus_visible(&self) -> bool {
        self.is_visible(LayerId::Focus)
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Concurrent dataset loading.
//!
//! One task per catalog entry. Each task fetches its dataset, decodes it,
//! and reports exactly one completion event; the UI drains the channel and
//! hands ready layers to the registry. There is no ordering between
//! datasets and no retry.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info};

use reachmap_common::dataset::Dataset;
use reachmap_common::types::CoverageLayer;

use crate::client::CoverageClient;
use crate::decode::decode_layer;
use crate::error::Result;

/// Completion signal for one dataset load.
#[derive(Debug, Clone)]
pub enum LayerEvent {
    Ready {
        dataset: Dataset,
        layer: Arc<CoverageLayer>,
    },
    Failed {
        dataset: Dataset,
    },
}

/// Spawn one loader task per dataset on the current tokio runtime.
pub fn spawn_loaders(client: Arc<CoverageClient>, events: UnboundedSender<LayerEvent>) {
    for dataset in Dataset::ALL {
        let client = Arc::clone(&client);
        let events = events.clone();
        tokio::spawn(async move {
            let event = match load_dataset(&client, dataset).await {
                Ok(layer) => LayerEvent::Ready {
                    dataset,
                    layer: Arc::new(layer),
                },
                Err(e) => {
                    error!(dataset = %dataset, error = %e, "Dataset load failed");
                    LayerEvent::Failed { dataset }
                }
            };
            // A dropped receiver just means the app is shutting down.
            let _ = events.send(event);
        });
    }
}

/// Fetch and decode one dataset.
pub async fn load_dataset(client: &CoverageClient, dataset: Dataset) -> Result<CoverageLayer> {
    let started = Instant::now();
    info!(dataset = %dataset, path = dataset.resource_path(), "Loading dataset");

    let collection = client.fetch_collection(dataset.resource_path()).await?;
    let layer = decode_layer(dataset, collection);

    info!(
        dataset = %dataset,
        features = layer.features.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dataset loaded"
    );
    Ok(layer)
}

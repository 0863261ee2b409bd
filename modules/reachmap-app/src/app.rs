//! The eframe application: map widget, load-event drain, popups, downloads.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;
use walkers::{lat_lon, HttpOptions, HttpTiles, Map, MapMemory};

use coverage_client::{download_file, spawn_loaders, CoverageClient, LayerEvent};
use reachmap_common::color::{legend_entries, LegendEntry};
use reachmap_common::config::AppConfig;
use reachmap_common::dataset::Dataset;
use reachmap_common::interaction::{popup_text, Interaction, MapTarget};
use reachmap_common::registry::{LayerId, LayerRegistry};
use reachmap_common::types::{GeoPoint, FOCUS_POINTS};
use reachmap_common::view::{ViewPreset, GLOBAL_VIEW};

use crate::plugins::{CoveragePlugin, FocusPlugin, PointerReport, PopupContent, PopupPlugin};
use crate::tiles::OsmTileSource;

pub struct ReachmapApp {
    pub(crate) config: AppConfig,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: Arc<CoverageClient>,
    pub(crate) registry: LayerRegistry,
    pub(crate) interaction: Interaction,
    pub(crate) legend: Vec<LegendEntry>,
    pub(crate) download_feedback: Arc<Mutex<Option<String>>>,
    events: UnboundedReceiver<LayerEvent>,
    tiles: HttpTiles,
    map_memory: MapMemory,
    pointer_report: PointerReport,
}

impl ReachmapApp {
    pub fn new(
        config: AppConfig,
        runtime: tokio::runtime::Runtime,
        egui_ctx: &egui::Context,
    ) -> Self {
        let http_options = HttpOptions {
            cache: Some(config.tile_cache_dir.clone()),
            ..Default::default()
        };
        let tiles = HttpTiles::with_options(OsmTileSource, http_options, egui_ctx.clone());

        let mut map_memory = MapMemory::default();
        if let Err(e) = map_memory.set_zoom(GLOBAL_VIEW.zoom) {
            warn!(error = ?e, "Start zoom rejected");
        }
        map_memory.center_at(lat_lon(GLOBAL_VIEW.center.lat, GLOBAL_VIEW.center.lng));

        let client = Arc::new(CoverageClient::new(&config.data_url));
        let (events_tx, events) = tokio::sync::mpsc::unbounded_channel();
        {
            let _enter = runtime.enter();
            spawn_loaders(Arc::clone(&client), events_tx);
        }

        Self {
            config,
            runtime,
            client,
            registry: LayerRegistry::new(),
            interaction: Interaction::new(),
            legend: legend_entries(),
            download_feedback: Arc::new(Mutex::new(None)),
            events,
            tiles,
            map_memory,
            pointer_report: Arc::new(Mutex::new(None)),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                LayerEvent::Ready { dataset, layer } => {
                    self.registry.on_layer_ready(dataset, layer)
                }
                LayerEvent::Failed { dataset } => self.registry.on_layer_failed(dataset),
            }
        }
    }

    pub(crate) fn apply_view(&mut self, preset: ViewPreset) {
        self.map_memory
            .center_at(lat_lon(preset.center.lat, preset.center.lng));
        if let Err(e) = self.map_memory.set_zoom(preset.zoom) {
            warn!(error = ?e, preset = preset.name, "Preset zoom rejected");
        }
    }

    pub(crate) fn start_download(&self, dataset: Dataset, ctx: egui::Context) {
        let client = Arc::clone(&self.client);
        let url = self.client.resource_url(dataset.resource_path());
        let dir = self.config.download_dir.clone();
        let feedback = Arc::clone(&self.download_feedback);
        self.runtime.spawn(async move {
            let message = match download_file(&client, &url, &dir).await {
                Ok(path) => format!("Saved {}", path.display()),
                Err(e) => {
                    warn!(error = %e, url = url.as_str(), "Download failed");
                    format!("Download failed: {e}")
                }
            };
            *feedback.lock().unwrap() = Some(message);
            ctx.request_repaint();
        });
    }

    fn anchor_for(&self, target: MapTarget) -> Option<GeoPoint> {
        match target {
            MapTarget::Country { dataset, feature } => self
                .registry
                .layer(dataset)?
                .features
                .get(feature)?
                .label_point(),
            MapTarget::FocusMarker { index } => Some(FOCUS_POINTS.get(index)?.location),
        }
    }

    fn popup_content(&self) -> Option<PopupContent> {
        let popup = self.interaction.popup()?;
        match popup.target {
            MapTarget::Country { dataset, feature } => {
                let layer = self.registry.layer(dataset)?;
                let feature = layer.features.get(feature)?;
                Some(PopupContent::Country {
                    anchor: popup.anchor,
                    text: popup_text(dataset, feature),
                })
            }
            MapTarget::FocusMarker { index } => {
                let point = FOCUS_POINTS.get(index)?;
                Some(PopupContent::Focus {
                    anchor: popup.anchor,
                    name: point.name,
                    role: point.role.label(),
                })
            }
        }
    }

    /// A popup whose layer got hidden closes instead of lingering.
    fn close_stale_popup(&mut self) {
        if let Some(popup) = self.interaction.popup() {
            let visible = match popup.target {
                MapTarget::Country { dataset, .. } => {
                    self.registry.is_visible(LayerId::Coverage(dataset))
                }
                MapTarget::FocusMarker { .. } => self.registry.focus_visible(),
            };
            if !visible {
                self.interaction.close_popup();
            }
        }
    }

    fn map_ui(&mut self, ui: &mut egui::Ui) {
        *self.pointer_report.lock().unwrap() = None;

        let coverage = CoveragePlugin {
            layers: self.registry.visible_layers(),
            hovered: self.interaction.hovered(),
            report: Arc::clone(&self.pointer_report),
        };
        let focus = FocusPlugin {
            visible: self.registry.focus_visible(),
            report: Arc::clone(&self.pointer_report),
        };
        let popup = PopupPlugin {
            popup: self.popup_content(),
        };

        let position = lat_lon(GLOBAL_VIEW.center.lat, GLOBAL_VIEW.center.lng);
        let response = ui.add(
            Map::new(Some(&mut self.tiles), &mut self.map_memory, position)
                .with_plugin(coverage)
                .with_plugin(focus)
                .with_plugin(popup),
        );

        let target = *self.pointer_report.lock().unwrap();
        match target {
            Some(MapTarget::Country { dataset, feature }) => {
                self.interaction.hover_enter(dataset, feature)
            }
            _ => self.interaction.hover_clear(),
        }

        if response.clicked() {
            match target {
                Some(target) => {
                    if let Some(anchor) = self.anchor_for(target) {
                        self.interaction.open_popup(target, anchor);
                    }
                }
                None => self.interaction.close_popup(),
            }
        }
    }
}

impl eframe::App for ReachmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.close_stale_popup();

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(250.0)
            .show(ctx, |ui| self.controls_ui(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.map_ui(ui));

        // Keep draining promptly while loads are still in flight.
        if !self.registry.all_settled() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}

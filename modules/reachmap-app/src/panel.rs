//! Side panel: view presets, dataset switching, overlay checkboxes, the
//! color legend, and GeoJSON downloads.

use egui::{Color32, RichText};

use reachmap_common::color::hex_to_rgb;
use reachmap_common::dataset::Dataset;
use reachmap_common::view::VIEW_PRESETS;

use crate::app::ReachmapApp;

impl ReachmapApp {
    pub(crate) fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("Reachmap");
        ui.label("Internet, 5G, and 3G coverage by country");
        ui.separator();

        ui.label(RichText::new("Views").strong());
        ui.horizontal(|ui| {
            for preset in VIEW_PRESETS {
                if ui.button(preset.name).clicked() {
                    self.apply_view(preset);
                }
            }
        });
        ui.separator();

        ui.label(RichText::new("Datasets").strong());
        ui.horizontal(|ui| {
            if ui.button("Internet").clicked() {
                self.registry.show_internet();
            }
            if ui.button("5G").clicked() {
                self.registry.show_5g();
            }
            if ui.button("3G").clicked() {
                self.registry.show_3g();
            }
        });
        if !self.registry.all_settled() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading datasets...");
            });
        }
        ui.separator();

        ui.label(RichText::new("Overlays").strong());
        for entry in self.registry.overlay_entries().to_vec() {
            let mut on = self.registry.is_visible(entry.id);
            if ui.checkbox(&mut on, entry.title).changed() {
                self.registry.set_visible(entry.id, on);
            }
        }
        ui.separator();

        ui.label(RichText::new("Coverage (%)").strong());
        for entry in &self.legend {
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(18.0, 12.0), egui::Sense::hover());
                let [r, g, b] = hex_to_rgb(entry.color).unwrap_or([0, 0, 0]);
                ui.painter().rect_filled(rect, 2.0, Color32::from_rgb(r, g, b));
                ui.label(&entry.label);
            });
        }
        ui.separator();

        ui.label(RichText::new("Downloads").strong());
        for dataset in Dataset::ALL {
            let caption = format!("Download {}", dataset.metric_label());
            if ui.button(caption).clicked() {
                self.start_download(dataset, ui.ctx().clone());
            }
        }
        if let Some(message) = self.download_feedback.lock().unwrap().clone() {
            ui.add_space(2.0);
            ui.label(RichText::new(message).small());
        }
    }
}

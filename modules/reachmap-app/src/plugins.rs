//! Map plugins: choropleth fills, focus markers, and the popup overlay.
//!
//! Plugins are rebuilt every frame from registry and interaction state.
//! They paint in registration order, so the popup plugin always lands on
//! top. Pointer hits are written to a shared report cell the app reads back
//! after the map widget returns; the focus plugin runs after the choropleth
//! plugin and overwrites its hit, which gives markers pointer precedence.

use std::sync::{Arc, Mutex};

use egui::{Color32, Mesh, Pos2, Rect, Stroke};
use walkers::{MapMemory, Plugin, Projector};

use reachmap_common::color::hex_to_rgb;
use reachmap_common::dataset::Dataset;
use reachmap_common::interaction::MapTarget;
use reachmap_common::style::{marker_style, style_for, FeatureStyle};
use reachmap_common::types::{CoverageLayer, GeoPoint, Polygon, FOCUS_POINTS};

use crate::hit;
use crate::tessellate;

/// Latest pointer hit, written by the plugins, read by the app.
pub type PointerReport = Arc<Mutex<Option<MapTarget>>>;

fn to_screen(projector: &Projector, point: GeoPoint) -> Pos2 {
    let screen = projector.project(walkers::lat_lon(point.lat, point.lng));
    egui::pos2(screen.x, screen.y)
}

fn fill_color(hex: &str, opacity: f32) -> Color32 {
    let [r, g, b] = hex_to_rgb(hex).unwrap_or([0, 0, 0]);
    Color32::from_rgb(r, g, b).linear_multiply(opacity)
}

/// One projected polygon: exterior ring, holes, and the screen bounds of
/// the exterior.
struct ScreenPolygon {
    exterior: Vec<Pos2>,
    holes: Vec<Vec<Pos2>>,
    bounds: Rect,
}

fn project_polygon(projector: &Projector, polygon: &Polygon) -> ScreenPolygon {
    let exterior: Vec<Pos2> = polygon
        .exterior
        .iter()
        .map(|p| to_screen(projector, *p))
        .collect();
    let holes = polygon
        .holes
        .iter()
        .map(|ring| ring.iter().map(|p| to_screen(projector, *p)).collect())
        .collect();
    let bounds = Rect::from_points(&exterior);
    ScreenPolygon {
        exterior,
        holes,
        bounds,
    }
}

fn draw_feature(painter: &egui::Painter, polygons: &[ScreenPolygon], style: &FeatureStyle) {
    let fill = fill_color(style.fill_color, style.fill_opacity);
    let stroke = Stroke::new(
        style.stroke_weight,
        fill_color(style.stroke_color, style.opacity),
    );
    for polygon in polygons {
        if polygon.exterior.len() < 3 {
            continue;
        }
        let mut mesh = Mesh::default();
        for point in &polygon.exterior {
            mesh.colored_vertex(*point, fill);
        }
        for [a, b, c] in tessellate::triangulate_ring(&polygon.exterior) {
            mesh.add_triangle(a, b, c);
        }
        painter.add(egui::Shape::mesh(mesh));
        painter.add(egui::Shape::closed_line(polygon.exterior.clone(), stroke));
    }
}

/// Draws every visible coverage layer and hit-tests the pointer against the
/// projected outlines. The hovered feature is painted last with the hover
/// style so its border sits on top of its neighbors.
pub struct CoveragePlugin {
    pub layers: Vec<Arc<CoverageLayer>>,
    pub hovered: Option<(Dataset, usize)>,
    pub report: PointerReport,
}

impl Plugin for CoveragePlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let viewport = ui.max_rect();
        let hover_pos = response.hover_pos();

        let mut hit: Option<MapTarget> = None;
        let mut raised: Option<(Vec<ScreenPolygon>, FeatureStyle)> = None;

        for layer in &self.layers {
            for (index, feature) in layer.features.iter().enumerate() {
                let projected: Vec<ScreenPolygon> = feature
                    .polygons
                    .iter()
                    .map(|p| project_polygon(projector, p))
                    .collect();
                if !projected.iter().any(|p| p.bounds.intersects(viewport)) {
                    continue;
                }

                if let Some(pos) = hover_pos {
                    let over = projected
                        .iter()
                        .any(|p| hit::point_in_polygon(pos, &p.exterior, &p.holes));
                    if over {
                        hit = Some(MapTarget::Country {
                            dataset: layer.dataset,
                            feature: index,
                        });
                    }
                }

                let style = style_for(layer.dataset, feature);
                if self.hovered == Some((layer.dataset, index)) {
                    raised = Some((projected, style.hovered()));
                } else {
                    draw_feature(painter, &projected, &style);
                }
            }
        }

        if let Some((projected, style)) = raised {
            draw_feature(painter, &projected, &style);
        }

        if hit.is_some() {
            *self.report.lock().unwrap() = hit;
        }
    }
}

/// Draws the two focus markers with their permanent name labels.
pub struct FocusPlugin {
    pub visible: bool,
    pub report: PointerReport,
}

impl Plugin for FocusPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        if !self.visible {
            return;
        }
        let painter = ui.painter();
        let hover_pos = response.hover_pos();

        for (index, point) in FOCUS_POINTS.iter().enumerate() {
            let style = marker_style(point.role);
            let pos = to_screen(projector, point.location);

            painter.circle_filled(
                pos,
                style.radius,
                fill_color(style.fill_color, style.fill_opacity),
            );
            painter.circle_stroke(
                pos,
                style.radius,
                Stroke::new(style.stroke_weight, fill_color(style.stroke_color, 1.0)),
            );

            // Permanent label above the marker.
            let galley = painter.layout_no_wrap(
                point.name.to_string(),
                egui::FontId::proportional(12.0),
                Color32::BLACK,
            );
            let padding = egui::vec2(4.0, 2.0);
            let text_pos = pos
                - egui::vec2(
                    galley.size().x / 2.0,
                    style.radius + galley.size().y + 8.0,
                );
            let box_rect = Rect::from_min_size(text_pos - padding, galley.size() + padding * 2.0);
            painter.rect_filled(
                box_rect,
                3.0,
                Color32::from_rgba_unmultiplied(255, 255, 255, 230),
            );
            painter.galley(text_pos, galley, Color32::BLACK);

            if let Some(pos_hover) = hover_pos {
                if pos_hover.distance(pos) <= style.radius + 2.0 {
                    *self.report.lock().unwrap() =
                        Some(MapTarget::FocusMarker { index });
                }
            }
        }
    }
}

/// Content of the open popup, resolved by the app before the frame.
pub enum PopupContent {
    Country { anchor: GeoPoint, text: String },
    Focus {
        anchor: GeoPoint,
        name: &'static str,
        role: &'static str,
    },
}

/// Anchors the open popup to its geographic position so it tracks the map.
pub struct PopupPlugin {
    pub popup: Option<PopupContent>,
}

impl Plugin for PopupPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let Some(popup) = self.popup else {
            return;
        };
        let anchor = match &popup {
            PopupContent::Country { anchor, .. } => *anchor,
            PopupContent::Focus { anchor, .. } => *anchor,
        };
        let pos = to_screen(projector, anchor);

        egui::Area::new(egui::Id::new("map_popup"))
            .fixed_pos(pos + egui::vec2(14.0, -14.0))
            .order(egui::Order::Foreground)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| match &popup {
                    PopupContent::Country { text, .. } => {
                        ui.label(text);
                    }
                    PopupContent::Focus { name, role, .. } => {
                        ui.label(egui::RichText::new(*name).strong());
                        ui.label(*role);
                    }
                });
            });
    }
}

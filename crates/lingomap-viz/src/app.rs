//! Main application state and rendering logic.

use eframe::{App, CreationContext};
use egui::{Context, ScrollArea};
use tracing::debug;

use lingomap_client::HoverSession;
use lingomap_core::{ColorScale, CoreResult, MapLayout, RegionData, Rgb};

use crate::geometry::MapGeometry;
use crate::settings::SettingsStyle;
use crate::ui::{draw_hover_card, draw_legend, draw_tile, to_color32};

/// The map application.
pub struct LingoMapApp {
    /// Region values driving tile colours
    data: RegionData,
    /// Cosmetic options
    layout: MapLayout,
    /// Parsed colour ramp for `data`
    scale: ColorScale,
    /// Border, hover fill and hover border colours
    strokes: (Rgb, Rgb, Rgb),
    /// Hover state and lookup plumbing
    session: HoverSession,
    settings_style: SettingsStyle,
    show_sidebar: bool,
    /// Tile placement from the last frame
    geometry: MapGeometry,
}

impl LingoMapApp {
    /// Create the app. Fails if the layout's colours do not parse.
    pub fn new(
        cc: &CreationContext<'_>,
        data: RegionData,
        layout: MapLayout,
        session: HoverSession,
    ) -> CoreResult<Self> {
        let ctx = cc.egui_ctx.clone();
        let session = session.with_notifier(move || ctx.request_repaint());

        Ok(Self {
            scale: layout.color_scale(&data)?,
            strokes: layout.stroke_colors()?,
            data,
            layout,
            session,
            settings_style: SettingsStyle::default(),
            show_sidebar: true,
            geometry: MapGeometry::default(),
        })
    }

    fn ui_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Lingo-Map");
        ui.separator();

        if self.settings_style.show_legend {
            draw_legend(ui, &self.scale, &self.layout.hover_title);
            ui.separator();
        }

        ui.checkbox(&mut self.settings_style.labels_always, "Show labels");
        ui.add(egui::Slider::new(&mut self.settings_style.tile_radius, 6.0..=30.0).text("tile size"));
        ui.separator();

        let controller = self.session.controller();
        ui.label(format!(
            "Hovered: {}",
            controller.hovered().unwrap_or("none")
        ));
        ui.label(format!("Lookups in flight: {}", self.session.in_flight()));

        if !self.geometry.unplaced().is_empty() {
            ui.separator();
            ui.label("Regions without a position:");
            for name in self.geometry.unplaced() {
                let value = self.data.get(name).map(|r| r.value).unwrap_or_default();
                ui.label(format!("{name} {value}"));
            }
        }
    }

    fn ui_map(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(&self.layout.title);
        });

        let available = ui.available_size();
        let size = egui::vec2(
            available.x.max(self.layout.width),
            available.y.max(self.layout.height),
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());

        self.geometry = MapGeometry::layout(
            &self.data,
            response.rect,
            self.settings_style.tile_radius,
        );

        let pointer = response.hover_pos();
        let hovered = pointer
            .and_then(|pos| self.geometry.hit_test(pos))
            .map(|tile| tile.name.clone());

        if let Some(name) = &hovered {
            if self.session.hover(name) {
                debug!(region = %name, "hover");
            }
        }

        let (border, hover_fill, hover_border) = self.strokes;
        for tile in self.geometry.tiles() {
            let is_hovered = hovered.as_deref() == Some(tile.name.as_str());
            let (fill, stroke) = if is_hovered {
                (to_color32(hover_fill), to_color32(hover_border))
            } else {
                (
                    to_color32(self.scale.color_for(Some(tile.value))),
                    to_color32(border),
                )
            };
            draw_tile(
                &painter,
                tile,
                fill,
                stroke,
                self.settings_style.labels_always || is_hovered,
            );
        }

        if let (Some(pos), Some(name)) = (pointer, hovered) {
            if let Some(region) = self.data.get(&name) {
                let info = self.session.render(&region);
                draw_hover_card(ui.ctx(), pos, &info);
            }
        }
    }
}

// =============================================================================
// Main Update Loop
// =============================================================================

impl App for LingoMapApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.session.poll();

        // Keep the spinner moving while a lookup is outstanding
        if self.session.controller().is_loading() {
            ctx.request_repaint();
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Tab) {
                self.show_sidebar = !self.show_sidebar;
            }
        });

        if self.show_sidebar {
            egui::SidePanel::right("right_panel")
                .default_width(240.0)
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        self.ui_sidebar(ui);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_map(ui);
        });
    }
}

//! Tile, legend and hover card rendering.

use lingomap_core::{ColorScale, HoverBody, HoverInfo, Rgb};

use crate::geometry::Tile;

pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Draw one region tile. Hovered tiles use the layout's hover colours.
pub fn draw_tile(
    painter: &egui::Painter,
    tile: &Tile,
    fill: egui::Color32,
    border: egui::Color32,
    show_label: bool,
) {
    painter.circle(tile.center, tile.radius, fill, egui::Stroke::new(1.5, border));

    if show_label {
        // Dark text on light fills, light text on dark fills
        let [r, g, b, _] = fill.to_array();
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        let text_color = if luma > 140.0 {
            egui::Color32::BLACK
        } else {
            egui::Color32::WHITE
        };
        painter.text(
            tile.center,
            egui::Align2::CENTER_CENTER,
            abbreviate(&tile.name),
            egui::FontId::proportional(9.0),
            text_color,
        );
    }
}

/// Initials of multi-word names, first three letters otherwise.
fn abbreviate(name: &str) -> String {
    let words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == '&')
        .filter(|w| !w.is_empty())
        .collect();
    if words.len() > 1 {
        words
            .iter()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_uppercase()
    } else {
        name.chars().take(3).collect()
    }
}

/// Draw the hover card next to the pointer.
pub fn draw_hover_card(ctx: &egui::Context, pointer: egui::Pos2, info: &HoverInfo) {
    egui::Area::new(egui::Id::new("hover_card"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pointer + egui::vec2(16.0, 16.0))
        .movable(false)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(280.0);
                ui.label(egui::RichText::new(&info.label).strong());

                match &info.body {
                    HoverBody::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading...");
                        });
                    }
                    HoverBody::Languages { title, lines } => {
                        ui.separator();
                        ui.label(egui::RichText::new(title).heading().size(14.0));
                        for line in lines {
                            ui.label(format!("• {line}"));
                        }
                    }
                    HoverBody::None | HoverBody::Failed(_) => {}
                }
            });
        });
}

/// Draw the value legend: a gradient bar from min to max.
pub fn draw_legend(ui: &mut egui::Ui, scale: &ColorScale, caption: &str) {
    ui.label(egui::RichText::new(caption).strong());

    let Some((lo, hi)) = scale.range else {
        ui.label("No data");
        return;
    };

    let (rect, _) = ui.allocate_exact_size(egui::vec2(200.0, 14.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let steps = 32;
    let step_w = rect.width() / steps as f32;
    for i in 0..steps {
        let t = i as f64 / (steps - 1) as f64;
        let x = rect.left() + i as f32 * step_w;
        let cell = egui::Rect::from_min_max(
            egui::pos2(x, rect.top()),
            egui::pos2(x + step_w + 0.5, rect.bottom()),
        );
        painter.rect_filled(cell, 0.0, to_color32(scale.start.lerp(scale.end, t)));
    }

    ui.horizontal(|ui| {
        ui.label(format!("{lo}"));
        ui.add_space(140.0);
        ui.label(format!("{hi}"));
    });
    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, to_color32(scale.no_data));
        ui.label("No data");
    });
}

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::format;

use super::super::theme;

const AXIS_W: f32 = 36.0;
const LABEL_H: f32 = 64.0;

/// Vertical bar chart, one bar per row, colors cycling through the palette.
/// Returns the index of the hovered bar.
pub fn bar_chart(ui: &mut egui::Ui, rows: &[(String, u64)], height: f32) -> Option<usize> {
    let width = ui.available_width().max(200.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let rect = resp.rect;

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + AXIS_W, rect.top() + 8.0),
        Pos2::new(rect.right() - 8.0, rect.bottom() - LABEL_H),
    );
    let text_color = ui.visuals().text_color();
    let small = FontId::proportional(11.0);

    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    // gridlines at quarters
    for i in 0..=4 {
        let frac = i as f32 / 4.0;
        let y = plot.bottom() - plot.height() * frac;
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, theme::GRID),
        );
        let v = (max as f32 * frac).round() as u64;
        painter.text(
            Pos2::new(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            v.to_string(),
            small.clone(),
            theme::MUTED,
        );
    }

    if rows.is_empty() {
        return None;
    }

    let slot = plot.width() / rows.len() as f32;
    let bar_w = (slot * 0.7).max(2.0);
    let hover = resp.hover_pos();
    let mut hovered = None;

    for (i, (label, value)) in rows.iter().enumerate() {
        let x_mid = plot.left() + slot * (i as f32 + 0.5);
        let h = plot.height() * (*value as f32 / max as f32);
        let bar = Rect::from_min_max(
            Pos2::new(x_mid - bar_w / 2.0, plot.bottom() - h),
            Pos2::new(x_mid + bar_w / 2.0, plot.bottom()),
        );
        let column = Rect::from_min_max(
            Pos2::new(x_mid - slot / 2.0, plot.top()),
            Pos2::new(x_mid + slot / 2.0, plot.bottom()),
        );

        let is_hovered = hover.map_or(false, |p| column.contains(p));
        let mut color = theme::chart_color(i);
        if is_hovered {
            hovered = Some(i);
            color = color.gamma_multiply(0.8);
        }
        painter.rect_filled(bar, 3.0, color);

        // crowded axis: alternate label rows
        let y_off = if rows.len() > 8 && i % 2 == 1 { 16.0 } else { 4.0 };
        painter.text(
            Pos2::new(x_mid, plot.bottom() + y_off),
            Align2::CENTER_TOP,
            format::truncate_label(label, if rows.len() > 8 { 10 } else { format::LEGEND_LABEL_MAX }),
            small.clone(),
            text_color,
        );
    }

    if let Some(i) = hovered {
        let (label, value) = &rows[i];
        resp.on_hover_text(format!("{}: {}", label, value));
    }

    hovered
}

/// One horizontal bar split into colored segments, plus a legend underneath
/// with counts and percentages.
pub fn share_bar(ui: &mut egui::Ui, rows: &[(String, u64)], highlight: Option<usize>) {
    let total: u64 = rows.iter().map(|(_, v)| *v).sum();
    let width = ui.available_width().max(200.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, 22.0), Sense::hover());
    let rect = resp.rect;

    if total == 0 {
        painter.rect_filled(rect, 4.0, theme::GRID);
        return;
    }

    let mut x = rect.left();
    for (i, (_, value)) in rows.iter().enumerate() {
        let w = rect.width() * format::share(*value, total) as f32;
        let seg = Rect::from_min_max(Pos2::new(x, rect.top()), Pos2::new(x + w, rect.bottom()));
        painter.rect_filled(seg, 0.0, theme::chart_color(i));
        if highlight == Some(i) {
            painter.rect_stroke(seg, 0.0, Stroke::new(2.0, Color32::WHITE));
        }
        x += w;
    }

    ui.add_space(6.0);
    egui::Grid::new(ui.id().with("share_legend"))
        .num_columns(3)
        .spacing([16.0, 2.0])
        .show(ui, |ui| {
            for (i, (label, value)) in rows.iter().enumerate() {
                legend_swatch(ui, theme::chart_color(i));
                let text = format::truncate_label(label, format::LEGEND_LABEL_MAX);
                let rich = if highlight == Some(i) {
                    egui::RichText::new(text).strong()
                } else {
                    egui::RichText::new(text)
                };
                ui.label(rich).on_hover_text(label);
                ui.label(format!("{} ({})", value, format::format_percent(*value, total)));
                ui.end_row();
            }
        });
}

pub fn legend_swatch(ui: &mut egui::Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}

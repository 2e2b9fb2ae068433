//! Presenting a [`Surface`] inside a ratatui frame.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::surface::Surface;

/// Renders a surface into a buffer area using the upper-half-block glyph,
/// so each terminal cell carries two vertically stacked logical pixels
/// (foreground = top pixel, background = bottom pixel). Text runs are
/// overlaid afterwards as regular cells, keeping the pixel underneath as
/// their background.
pub struct SurfaceWidget<'a> {
    surface: &'a Surface,
}

impl<'a> SurfaceWidget<'a> {
    pub fn new(surface: &'a Surface) -> Self {
        Self { surface }
    }
}

impl Widget for SurfaceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.surface.is_empty() {
            return;
        }
        let (lw, lh) = self.surface.logical_size();
        let cols = (lw as u16).min(area.width);
        let rows = ((lh / 2.0).ceil() as u16).min(area.height);

        for row in 0..rows {
            for col in 0..cols {
                let top = self.surface.logical_pixel(col as usize, row as usize * 2);
                let bottom = self
                    .surface
                    .logical_pixel(col as usize, row as usize * 2 + 1);
                let (tr, tg, tb) = top.to_rgb8();
                let (br, bg, bb) = bottom.to_rgb8();
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀')
                        .set_fg(Color::Rgb(tr, tg, tb))
                        .set_bg(Color::Rgb(br, bg, bb));
                }
            }
        }

        for run in self.surface.text_runs() {
            let len = run.text.chars().count() as f32;
            let start = (run.x - len / 2.0).round() as i32;
            let row = (run.y / 2.0).round() as i32;
            if row < 0 || row >= rows as i32 {
                continue;
            }
            let (r, g, b) = run.color.to_rgb8();
            for (i, ch) in run.text.chars().enumerate() {
                let col = start + i as i32;
                if col < 0 || col >= cols as i32 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                    cell.set_char(ch).set_fg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}

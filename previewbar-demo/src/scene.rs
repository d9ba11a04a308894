//! Draws a seek bar and its preview stage into a [`Canvas`].

use previewbar::{Color, ElementState, Scrubber, SeekBar};

use crate::canvas::Canvas;

const BACKGROUND: Color = Color::Oklch {
    l: 0.18,
    c: 0.02,
    h: 250.0,
};
const TRACK: Color = Color::Oklch {
    l: 0.4,
    c: 0.02,
    h: 250.0,
};
const TEXT: Color = Color::Oklch {
    l: 0.92,
    c: 0.02,
    h: 250.0,
};
const MUTED: Color = Color::Oklch {
    l: 0.6,
    c: 0.03,
    h: 250.0,
};

/// Terminal cells are about twice as tall as they are wide; distances are
/// measured in rows.
const CELL_ASPECT: f32 = 0.5;

pub struct Scene<'a> {
    pub bar: &'a SeekBar,
    /// Position the preview loader was last asked for.
    pub previewed: i64,
    pub help: &'a str,
    pub status: &'a str,
}

impl Scene<'_> {
    pub fn render(&self, width: u16, height: u16) -> Canvas {
        let mut canvas = Canvas::new(width, height, BACKGROUND.to_rgb());
        canvas.put_str(2, 0, "previewbar demo", TEXT.to_rgb());
        canvas.put_str(2, 1, self.help, MUTED.to_rgb());
        canvas.put_str(2, i32::from(height) - 1, self.status, MUTED.to_rgb());

        self.draw_track(&mut canvas);

        let stage = self.bar.delegate().stage();
        if stage.overlay.visible {
            self.draw_overlay(&mut canvas, &stage.overlay, &stage.tint);
        }
        if stage.morph.visible {
            draw_morph(&mut canvas, &stage.morph);
        }
        canvas
    }

    fn draw_track(&self, canvas: &mut Canvas) {
        let bounds = self.bar.bounds();
        let row = bounds.y as i32;
        let thumb = self.bar.thumb_x() as i32;
        let played = self.bar.scrubber_color();

        for x in bounds.left() as i32..bounds.right() as i32 {
            let fg = if x <= thumb { played } else { TRACK };
            if let Some(cell) = canvas.cell_mut(x, row) {
                cell.ch = '━';
                cell.fg = fg.to_rgb();
            }
        }
        if let Some(cell) = canvas.cell_mut(thumb, row) {
            cell.ch = '●';
            cell.fg = played.to_rgb();
        }

        let time = format!(
            "{} / {}",
            clock(i64::from(self.bar.progress())),
            clock(i64::from(self.bar.max()))
        );
        canvas.put_str(bounds.left() as i32, row + 1, &time, MUTED.to_rgb());
    }

    fn draw_overlay(&self, canvas: &mut Canvas, overlay: &ElementState, tint: &ElementState) {
        let (center_x, center_y) = overlay.bounds().center();
        let max = i64::from(self.bar.max()).max(1);
        let hue = 360.0 * self.previewed as f32 / max as f32;
        let tint_color = tint.color.unwrap_or(TRACK);

        let top = overlay.y as i32;
        let left = overlay.x as i32;
        for row in top..top + overlay.height as i32 {
            for col in left..left + overlay.width as i32 {
                let (px, py) = (col as f32 + 0.5, row as f32 + 0.5);
                if let Some(radius) = overlay.reveal_radius {
                    if distance(px - center_x, py - center_y) > radius {
                        continue;
                    }
                }

                let u = (px - overlay.x) / overlay.width.max(1.0);
                let v = (py - overlay.y) / overlay.height.max(1.0);
                let mut color = Color::oklch(0.3 + 0.25 * (1.0 - v), 0.12, hue + 60.0 * u);
                if tint.visible {
                    color = color.lerp(&tint_color, tint.alpha);
                }
                let color = BACKGROUND.lerp(&color, overlay.alpha);

                if let Some(cell) = canvas.cell_mut(col, row) {
                    cell.ch = ' ';
                    cell.bg = color.to_rgb();
                }
            }
        }

        let label = format!("▶ {}", clock(self.previewed));
        let label_x = center_x as i32 - label.chars().count() as i32 / 2;
        let fg = BACKGROUND.lerp(&TEXT, overlay.alpha).to_rgb();
        for (i, ch) in label.chars().enumerate() {
            let col = label_x + i as i32;
            let row = center_y as i32;
            if let Some(radius) = overlay.reveal_radius {
                let (px, py) = (col as f32 + 0.5, row as f32 + 0.5);
                if distance(px - center_x, py - center_y) > radius {
                    continue;
                }
            }
            if let Some(cell) = canvas.cell_mut(col, row) {
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }
}

fn draw_morph(canvas: &mut Canvas, morph: &ElementState) {
    let radius = morph.width * morph.scale / 2.0;
    if radius <= 0.0 {
        return;
    }
    let (center_x, center_y) = morph.bounds().center();
    let color = morph.color.unwrap_or(TEXT).to_rgb();

    let reach_x = (radius / CELL_ASPECT).ceil() as i32;
    let reach_y = radius.ceil() as i32;
    for row in center_y as i32 - reach_y..=center_y as i32 + reach_y {
        for col in center_x as i32 - reach_x..=center_x as i32 + reach_x {
            let (px, py) = (col as f32 + 0.5, row as f32 + 0.5);
            if distance(px - center_x, py - center_y) <= radius.max(0.5) {
                if let Some(cell) = canvas.cell_mut(col, row) {
                    cell.ch = ' ';
                    cell.bg = color;
                }
            }
        }
    }
}

fn distance(dx: f32, dy: f32) -> f32 {
    (dx * CELL_ASPECT).hypot(dy)
}

fn clock(seconds: i64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

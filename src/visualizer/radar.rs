use ratatui::prelude::*;

use crate::color::ColorScheme;
use crate::plot::PointStore;

/// Width/height of a terminal cell relative to a square unit. Cells are
/// roughly twice as tall as wide, so x distances get stretched by this.
pub const CELL_ASPECT: f32 = 2.0;

/// Convert polar chart coordinates to buffer cell coordinates.
///
/// `angle` follows chart convention (radians, counterclockwise, 0 = east);
/// the y axis is flipped because buffer rows grow downward.
#[inline]
pub fn polar_to_cell(cx: f32, cy: f32, angle: f32, radius: f32, aspect: f32) -> (f32, f32) {
    (cx + angle.cos() * radius * aspect, cy - angle.sin() * radius)
}

/// Compute the circle that fits within the given area, accounting for cell
/// aspect ratio. Returns (center_x, center_y, max_radius) where a radius of
/// r spans r rows vertically and r * aspect columns horizontally.
pub fn fit_circle(area_w: usize, area_h: usize, aspect: f32) -> (f32, f32, f32) {
    let cx = area_w as f32 / 2.0;
    let cy = area_h as f32 / 2.0;
    let effective_w = area_w as f32 / aspect;
    let max_radius = (effective_w.min(area_h as f32) / 2.0) * 0.95;
    (cx, cy, max_radius)
}

/// The polar chart: range rings, cardinal spokes, stored points, and the
/// animated sweep circle. Points are drawn after the sweep so the sweep
/// never occludes data.
pub struct RadarCanvas;

impl RadarCanvas {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &PointStore,
        sweep_radius: f64,
        sweep_intensity: f32,
        scheme: &ColorScheme,
    ) {
        if area.width < 8 || area.height < 8 {
            return;
        }

        let (cx, cy, max_r) = fit_circle(area.width as usize, area.height as usize, CELL_ASPECT);
        let bound = store.current_bound() as f32;
        if bound <= 0.0 || max_r <= 0.0 {
            return;
        }
        let cells_per_unit = max_r / bound;

        Self::render_grid(frame, area, cx, cy, max_r, bound, scheme);

        // Sweep circle at its current radius, clipped to the chart extent.
        let sweep_r = sweep_radius as f32 * cells_per_unit;
        if sweep_r <= max_r {
            let (r, g, b) = scheme.sweep_color(sweep_intensity);
            draw_circle(frame, area, cx, cy, sweep_r, '*', Color::Rgb(r, g, b));
        }

        // Stored points on top of everything.
        let (pr, pg, pb) = scheme.point_color();
        for point in store.points() {
            let r_cells = point.radius as f32 * cells_per_unit;
            let (x, y) = polar_to_cell(cx, cy, point.angle as f32, r_cells, CELL_ASPECT);
            put_cell(frame, area, x, y, '●', Color::Rgb(pr, pg, pb));
        }

        // Origin dot at the center.
        let (or, og, ob) = scheme.origin_color();
        put_cell(frame, area, cx, cy, '●', Color::Rgb(or, og, ob));
    }

    fn render_grid(
        frame: &mut Frame,
        area: Rect,
        cx: f32,
        cy: f32,
        max_r: f32,
        bound: f32,
        scheme: &ColorScheme,
    ) {
        let (gr, gg, gb) = scheme.grid_color();
        let grid = Color::Rgb(gr, gg, gb);
        let (dr, dg, db) = scheme.dim_color();
        let dim = Color::Rgb(dr, dg, db);

        // Four range rings with their radius value labeled on the east spoke.
        for ring in 1..=4 {
            let frac = ring as f32 / 4.0;
            draw_circle(frame, area, cx, cy, max_r * frac, '·', grid);

            let value = bound * frac;
            let label = if bound >= 8.0 {
                format!("{:.0}", value)
            } else {
                format!("{:.1}", value)
            };
            let (lx, ly) = polar_to_cell(cx, cy, 0.0, max_r * frac, CELL_ASPECT);
            put_text(frame, area, lx + 1.0, ly, &label, dim);
        }

        // Cardinal spokes, dotted every other cell.
        for quadrant in 0..4 {
            let angle = quadrant as f32 * std::f32::consts::FRAC_PI_2;
            let mut r = 2.0;
            while r < max_r {
                let (x, y) = polar_to_cell(cx, cy, angle, r, CELL_ASPECT);
                put_cell(frame, area, x, y, '·', grid);
                r += 2.0;
            }
        }

        // Angle labels just beyond the chart edge.
        for (quadrant, label) in ["0°", "90°", "180°", "270°"].iter().enumerate() {
            let angle = quadrant as f32 * std::f32::consts::FRAC_PI_2;
            let (x, y) = polar_to_cell(cx, cy, angle, max_r + 1.5, CELL_ASPECT);
            put_text(frame, area, x, y, label, dim);
        }
    }
}

/// Plot a full circle outline by stepping the angle finely enough that
/// adjacent samples land on neighboring cells.
fn draw_circle(frame: &mut Frame, area: Rect, cx: f32, cy: f32, radius: f32, ch: char, color: Color) {
    if radius < 0.5 {
        return;
    }
    let steps = ((std::f32::consts::TAU * radius * CELL_ASPECT).ceil() as usize).max(8);
    for i in 0..steps {
        let angle = i as f32 / steps as f32 * std::f32::consts::TAU;
        let (x, y) = polar_to_cell(cx, cy, angle, radius, CELL_ASPECT);
        put_cell(frame, area, x, y, ch, color);
    }
}

fn put_cell(frame: &mut Frame, area: Rect, x: f32, y: f32, ch: char, color: Color) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (x, y) = (x.round() as u16, y.round() as u16);
    if x >= area.width || y >= area.height {
        return;
    }
    if let Some(cell) = frame.buffer_mut().cell_mut((area.x + x, area.y + y)) {
        cell.set_char(ch);
        cell.set_fg(color);
    }
}

fn put_text(frame: &mut Frame, area: Rect, x: f32, y: f32, text: &str, color: Color) {
    for (i, ch) in text.chars().enumerate() {
        put_cell(frame, area, x + i as f32, y, ch, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_to_cell_maps_cardinal_directions() {
        // East: +x only, stretched by the aspect ratio.
        let (x, y) = polar_to_cell(10.0, 10.0, 0.0, 4.0, 2.0);
        assert_eq!((x, y), (18.0, 10.0));

        // North: -y only (rows grow downward).
        let (x, y) = polar_to_cell(10.0, 10.0, std::f32::consts::FRAC_PI_2, 4.0, 2.0);
        assert!((x - 10.0).abs() < 1e-4);
        assert!((y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn fit_circle_respects_the_narrow_dimension() {
        // 80x24 terminal chunk: height is the limiting dimension.
        let (cx, cy, r) = fit_circle(80, 24, 2.0);
        assert_eq!(cx, 40.0);
        assert_eq!(cy, 12.0);
        assert!(r <= 12.0);

        // A tall narrow area limits via effective width instead.
        let (_, _, r) = fit_circle(20, 60, 2.0);
        assert!(r <= 5.0);
    }
}

//! Line chart renderer.
//!
//! ### Workflow
//! 1. `Params::compute` maps the resolved value range into row-space.
//! 2. The y-axis pass writes one label and one tick per row.
//! 3. The series pass walks every adjacent sample pair and drops one or
//!    more glyphs into the pair's column.
//! 4. The optional x-axis pass turns the bottom row into an axis, swaps
//!    series glyphs resting on it for their joined variants and closes the
//!    right edge of every line.
//! 5. The grid is flattened to text; tick labels follow on their own line.

use tracing::{debug, trace};

use crate::{
    core::{color::AnsiCode, config::Config, data::Series},
    render::{
        glyph::Glyph,
        grid::{Cell, Grid},
        params::Params,
    },
};

/// Draws a resolved [`Config`] and its series onto a fresh grid.
pub struct Chart<'a> {
    cfg: &'a Config,
}

impl<'a> Chart<'a> {
    #[inline]
    #[must_use]
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Render already padded `series`. Input validation belongs to
    /// [`ConfigBuilder::build`](crate::ConfigBuilder::build).
    #[must_use]
    pub fn render(&self, series: &[Series]) -> String {
        let params = Params::compute(series, self.cfg);
        debug!(
            rows = params.rows,
            width = params.width,
            ratio = params.ratio,
            "chart geometry"
        );
        let mut grid = Grid::new(params.rows + 1, params.width);

        self.draw_y_axis(&mut grid, &params);
        for (index, s) in series.iter().enumerate() {
            self.draw_series(&mut grid, &params, s, self.cfg.color_for(index));
        }
        if self.cfg.display_x_axis {
            self.draw_x_axis(&mut grid);
        }

        let mut out = grid.render(&self.cfg.symbols);
        if let Some(labels) = self.tick_labels() {
            out.push('\n');
            out.push_str(&labels);
        }
        out
    }

    fn draw_y_axis(&self, grid: &mut Grid, params: &Params) {
        let cfg = self.cfg;
        let tick_col = cfg.offset - 1;
        let zero = params.zero_row();
        for row in 0..=params.rows {
            let label = cfg.format.render(params.label_value(cfg, row));
            let col = cfg.offset.saturating_sub(label.chars().count());
            grid.set(row, col, Cell::Label(label));

            let tick = if zero == Some(row) {
                Glyph::Cross
            } else {
                Glyph::TeeRight
            };
            grid.set_glyph(row, tick_col, tick, AnsiCode::none());
        }
        trace!(rows = params.rows + 1, "y-axis drawn");
    }

    fn draw_series(&self, grid: &mut Grid, params: &Params, series: &Series, color: AnsiCode) {
        let cfg = self.cfg;
        // The leading sample crosses the y-axis.
        if let Some(Some(first)) = series.samples().first() {
            grid.set_glyph(params.row_of(cfg, *first), cfg.offset - 1, Glyph::Cross, color);
        }
        for (x, pair) in series.samples().windows(2).enumerate() {
            let col = cfg.offset + x;
            match (pair[0], pair[1]) {
                (None, None) => {}
                (None, Some(next)) => {
                    grid.set_glyph(params.row_of(cfg, next), col, Glyph::SegmentStart, color);
                }
                (Some(cur), None) => {
                    grid.set_glyph(params.row_of(cfg, cur), col, Glyph::SegmentEnd, color);
                }
                (Some(cur), Some(next)) => {
                    let (y0, y1) = (params.scaled(cfg, cur), params.scaled(cfg, next));
                    if y0 == y1 {
                        grid.set_glyph(params.rows - y0, col, Glyph::Horizontal, color);
                        continue;
                    }
                    let (at_next, at_cur) = if y0 > y1 {
                        (Glyph::CornerBottomLeft, Glyph::CornerTopRight)
                    } else {
                        (Glyph::CornerTopLeft, Glyph::CornerBottomRight)
                    };
                    grid.set_glyph(params.rows - y1, col, at_next, color);
                    grid.set_glyph(params.rows - y0, col, at_cur, color);
                    for y in y0.min(y1) + 1..y0.max(y1) {
                        grid.set_glyph(params.rows - y, col, Glyph::Vertical, color);
                    }
                }
            }
        }
        trace!(samples = series.len(), "series drawn");
    }

    fn draw_x_axis(&self, grid: &mut Grid) {
        let cfg = self.cfg;
        let bottom = grid.height() - 1;
        let width = grid.width();

        if grid.get(bottom, cfg.offset - 1).color().is_none() {
            grid.set_glyph(bottom, cfg.offset - 1, Glyph::Cross, AnsiCode::none());
        }
        for col in cfg.offset..width {
            let data_point = cfg.is_data_point(col);
            match grid.get(bottom, col).clone() {
                Cell::Blank => {
                    let glyph = if data_point {
                        Glyph::AxisTick
                    } else {
                        Glyph::Horizontal
                    };
                    grid.set_glyph(bottom, col, glyph, AnsiCode::none());
                }
                Cell::Glyph { glyph, color } if data_point => {
                    grid.set_glyph(bottom, col, glyph.on_axis(), color);
                }
                _ => {}
            }
        }

        // Lines end one column short of the grid; extend them to the edge.
        if width > cfg.offset {
            let (last, before) = (width - 1, width - 2);
            for row in 0..bottom {
                let neighbour = grid.get(row, before);
                if !neighbour.is_blank() {
                    let color = neighbour.color().unwrap_or_default();
                    grid.set_glyph(row, last, Glyph::Horizontal, color);
                }
            }
        }
        trace!(columns = width - cfg.offset, "x-axis drawn");
    }

    /// Tick labels under each original sample, skipping any that would touch
    /// the previous one.
    fn tick_labels(&self) -> Option<String> {
        let cfg = self.cfg;
        let ticks = cfg.x_ticks.as_ref().filter(|_| cfg.display_x_axis)?;
        let step = cfg.horizontal_point_spacing + 1;

        let mut line = String::new();
        let (mut cursor, mut next_free) = (0usize, 0usize);
        for (j, tick) in ticks.iter().enumerate() {
            let col = cfg.offset + j * step;
            if col < next_free {
                continue;
            }
            line.extend(std::iter::repeat_n(' ', col - cursor));
            line.push_str(tick);
            cursor = col + tick.chars().count();
            next_free = cursor + 1;
        }
        Some(line.trim_end().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(series: &[Series], cfg: &Config) -> String {
        Chart::new(cfg).render(&cfg.pad(series))
    }

    #[test]
    fn gap_uses_segment_glyphs() {
        let s = vec![Series::new(vec![Some(1.0), None, Some(1.0)])];
        let cfg = Config::builder().build(&s).unwrap();
        assert_eq!(render(&s, &cfg), "    1.00  ┼╴╶");
    }

    #[test]
    fn vertical_fill_between_corners() {
        let s = vec![Series::from([0.0, 3.0])];
        let cfg = Config::builder().build(&s).unwrap();
        let out = render(&s, &cfg);
        let col: String = out
            .lines()
            .map(|l| l.chars().nth(11).unwrap_or(' '))
            .collect();
        assert_eq!(col, "╭││╯");
    }

    #[test]
    fn x_axis_joins_glyphs_resting_on_it() {
        let s = vec![Series::from([1.0, 0.0, 0.0])];
        let cfg = Config::builder().display_x_axis(true).build(&s).unwrap();
        assert_eq!(render(&s, &cfg), "    1.00  ┼╮\n    0.00  ┼┴┬┬");
    }

    #[test]
    fn x_axis_marks_data_points_and_closes_edge() {
        let s = vec![Series::from([2.0, 2.0, 0.0])];
        let cfg = Config::builder()
            .horizontal_point_spacing(1)
            .display_x_axis(true)
            .build(&s)
            .unwrap();
        let out = render(&s, &cfg);
        let lines: Vec<_> = out.lines().collect();
        // padded: [2, 2, 2, 1, 0]
        assert_eq!(lines[0], "    2.00  ┼──╮");
        assert_eq!(lines[1], "    1.00  ┤  ╰╮─");
        assert_eq!(lines[2], "    0.00  ┼┬─┬╰┬");
    }

    #[test]
    fn tick_labels_skip_overlaps() {
        let s = vec![Series::from([1.0, 2.0, 3.0, 4.0])];
        let cfg = Config::builder()
            .display_x_axis(true)
            .x_ticks(["a", "bb", "c", "d"])
            .build(&s)
            .unwrap();
        let out = render(&s, &cfg);
        assert_eq!(out.lines().last(), Some("   a c"));

        let hidden = Config::builder().x_ticks(["a", "b", "c", "d"]).build(&s).unwrap();
        assert_eq!(Chart::new(&hidden).tick_labels(), None);
    }
}

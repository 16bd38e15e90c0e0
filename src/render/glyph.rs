//! Glyph roles and the character tables that draw them.
//!
//! The grid stores *roles*, not characters, so the x-axis pass can swap a
//! series glyph for its axis-touching variant regardless of which table is
//! used to print it.

/// What a cell depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `┼` axis crossing: zero row, first sample, x/y corner.
    Cross,
    /// `┤` ordinary y-axis tick.
    TeeRight,
    /// `╶` line resumes after a gap.
    SegmentStart,
    /// `╴` line stops before a gap.
    SegmentEnd,
    /// `─`
    Horizontal,
    /// `╰`
    CornerBottomLeft,
    /// `╮`
    CornerTopRight,
    /// `╭`
    CornerTopLeft,
    /// `╯`
    CornerBottomRight,
    /// `│`
    Vertical,
    /// `┬` x-axis mark under an original sample.
    AxisTick,
    /// `┴` a corner resting on the x-axis.
    AxisJoinUp,
}

impl Glyph {
    /// The variant drawn when this glyph sits on the x-axis at a data point.
    #[must_use]
    pub const fn on_axis(self) -> Self {
        match self {
            Self::Horizontal
            | Self::SegmentStart
            | Self::SegmentEnd
            | Self::CornerTopLeft
            | Self::CornerTopRight => Self::AxisTick,
            Self::CornerBottomLeft | Self::CornerBottomRight => Self::AxisJoinUp,
            Self::Vertical => Self::Cross,
            other => other,
        }
    }
}

/// Character for every [`Glyph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub cross: char,
    pub tee_right: char,
    pub segment_start: char,
    pub segment_end: char,
    pub horizontal: char,
    pub corner_bottom_left: char,
    pub corner_top_right: char,
    pub corner_top_left: char,
    pub corner_bottom_right: char,
    pub vertical: char,
    pub axis_tick: char,
    pub axis_join_up: char,
}

impl Symbols {
    /// Rounded box-drawing set.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            cross: '┼',
            tee_right: '┤',
            segment_start: '╶',
            segment_end: '╴',
            horizontal: '─',
            corner_bottom_left: '╰',
            corner_top_right: '╮',
            corner_top_left: '╭',
            corner_bottom_right: '╯',
            vertical: '│',
            axis_tick: '┬',
            axis_join_up: '┴',
        }
    }

    /// Plain 7-bit set for terminals without box-drawing fonts.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            cross: '+',
            tee_right: '|',
            segment_start: '-',
            segment_end: '-',
            horizontal: '-',
            corner_bottom_left: '\'',
            corner_top_right: '.',
            corner_top_left: '.',
            corner_bottom_right: '\'',
            vertical: '|',
            axis_tick: '+',
            axis_join_up: '+',
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, glyph: Glyph) -> char {
        match glyph {
            Glyph::Cross => self.cross,
            Glyph::TeeRight => self.tee_right,
            Glyph::SegmentStart => self.segment_start,
            Glyph::SegmentEnd => self.segment_end,
            Glyph::Horizontal => self.horizontal,
            Glyph::CornerBottomLeft => self.corner_bottom_left,
            Glyph::CornerTopRight => self.corner_top_right,
            Glyph::CornerTopLeft => self.corner_top_left,
            Glyph::CornerBottomRight => self.corner_bottom_right,
            Glyph::Vertical => self.vertical,
            Glyph::AxisTick => self.axis_tick,
            Glyph::AxisJoinUp => self.axis_join_up,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::unicode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_substitution_table() {
        assert_eq!(Glyph::Horizontal.on_axis(), Glyph::AxisTick);
        assert_eq!(Glyph::CornerBottomLeft.on_axis(), Glyph::AxisJoinUp);
        assert_eq!(Glyph::CornerBottomRight.on_axis(), Glyph::AxisJoinUp);
        assert_eq!(Glyph::Vertical.on_axis(), Glyph::Cross);
        assert_eq!(Glyph::Cross.on_axis(), Glyph::Cross);
    }

    #[test]
    fn unicode_table_draws_box_glyphs() {
        let s = Symbols::default();
        let drawn: String = [
            Glyph::CornerTopLeft,
            Glyph::CornerTopRight,
            Glyph::CornerBottomLeft,
            Glyph::CornerBottomRight,
        ]
        .into_iter()
        .map(|g| s.get(g))
        .collect();
        assert_eq!(drawn, "╭╮╰╯");
        assert_eq!(Symbols::ascii().get(Glyph::Vertical), '|');
    }
}

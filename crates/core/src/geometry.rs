//! Border geometry: glyph tables, straight lines, boxes and zigzag separators.
//!
//! Everything here is pure. A primitive validates itself against the grid and
//! then produces the glyph runs it would write, in caller coordinates (row 0
//! is the first drawable row, one screen row below the log line).
//! [`draw`] is the only function that touches a [`Surface`].

use tui_panels_term::{CellStyle, Surface};
use tui_panels_types::{BorderStyle, Junction, Rect, LOG_ROWS};

use crate::error::{Axis, GeometryError};

const HORIZONTAL: [char; 2] = ['─', '═'];
const VERTICAL: [char; 2] = ['│', '║'];

// Rows: BorderStyle. Columns: Junction (none, vertical, horizontal, crossing).
const TOP_LEFT: [[char; 4]; 2] = [['┌', '├', '┬', '┼'], ['╔', '╠', '╦', '╬']];
const TOP_RIGHT: [[char; 4]; 2] = [['┐', '┤', '┬', '┼'], ['╗', '╣', '╦', '╬']];
const BOTTOM_LEFT: [[char; 4]; 2] = [['└', '├', '┴', '┼'], ['╚', '╠', '╩', '╬']];
const BOTTOM_RIGHT: [[char; 4]; 2] = [['┘', '┤', '┴', '┼'], ['╝', '╣', '╩', '╬']];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

pub fn horizontal(style: BorderStyle) -> char {
    HORIZONTAL[style.index()]
}

pub fn vertical(style: BorderStyle) -> char {
    VERTICAL[style.index()]
}

pub fn corner(corner: Corner, style: BorderStyle, junction: Junction) -> char {
    let family = match corner {
        Corner::TopLeft => &TOP_LEFT,
        Corner::TopRight => &TOP_RIGHT,
        Corner::BottomLeft => &BOTTOM_LEFT,
        Corner::BottomRight => &BOTTOM_RIGHT,
    };
    family[style.index()][junction.index()]
}

fn plain(c: Corner, style: BorderStyle) -> char {
    corner(c, style, Junction::None)
}

/// A horizontal run of glyphs at caller coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRun {
    pub x: u16,
    pub y: u16,
    pub text: String,
}

impl GlyphRun {
    fn new(x: u16, y: u16, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// A drawable border element.
pub trait Primitive {
    fn name(&self) -> &'static str;

    /// Check origin, extent and minimum size against a `grid_w x grid_h` grid.
    fn validate(&self, grid_w: u16, grid_h: u16) -> Result<(), GeometryError>;

    /// Glyph runs in caller coordinates. Only meaningful after `validate`.
    fn runs(&self) -> Vec<GlyphRun>;
}

/// Validate `p`, then write its runs shifted below the log row.
///
/// Nothing is written when validation fails.
pub fn draw<P: Primitive + ?Sized>(
    surface: &mut dyn Surface,
    p: &P,
    style: CellStyle,
    grid_w: u16,
    grid_h: u16,
) -> Result<(), GeometryError> {
    p.validate(grid_w, grid_h)?;
    for run in p.runs() {
        surface.put_str(run.x, run.y + LOG_ROWS, &run.text, style);
    }
    Ok(())
}

fn check_origin(name: &'static str, x: u16, y: u16, w: u16, h: u16) -> Result<(), GeometryError> {
    if x >= w || y >= h {
        return Err(GeometryError::Origin {
            primitive: name,
            x,
            y,
        });
    }
    Ok(())
}

fn check_extent(
    name: &'static str,
    axis: Axis,
    start: u16,
    len: u16,
    limit: u16,
) -> Result<(), GeometryError> {
    let end = start as u32 + len as u32;
    if end > limit as u32 {
        return Err(GeometryError::Extent {
            primitive: name,
            axis,
            end,
            limit,
        });
    }
    Ok(())
}

fn check_min(name: &'static str, len: u16, min: u16) -> Result<(), GeometryError> {
    if len < min {
        return Err(GeometryError::TooSmall {
            primitive: name,
            len,
            min,
        });
    }
    Ok(())
}

/// Straight horizontal line; each end is a plain line glyph or a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub x: u16,
    pub y: u16,
    pub len: u16,
    pub style: BorderStyle,
    pub left: Junction,
    pub right: Junction,
}

impl Line {
    pub fn new(x: u16, y: u16, len: u16, style: BorderStyle) -> Self {
        Self {
            x,
            y,
            len,
            style,
            left: Junction::None,
            right: Junction::None,
        }
    }

    pub fn with_ends(mut self, left: Junction, right: Junction) -> Self {
        self.left = left;
        self.right = right;
        self
    }
}

impl Primitive for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    fn validate(&self, grid_w: u16, grid_h: u16) -> Result<(), GeometryError> {
        check_origin(self.name(), self.x, self.y, grid_w, grid_h)?;
        check_extent(self.name(), Axis::Horizontal, self.x, self.len, grid_w)?;
        check_min(self.name(), self.len, 3)
    }

    fn runs(&self) -> Vec<GlyphRun> {
        let h = horizontal(self.style);
        let end = |c: Corner, j: Junction| match j {
            Junction::None => h,
            _ => corner(c, self.style, j),
        };
        let mut text = String::with_capacity(self.len as usize * 3);
        text.push(end(Corner::TopLeft, self.left));
        for _ in 2..self.len {
            text.push(h);
        }
        text.push(end(Corner::TopRight, self.right));
        vec![GlyphRun::new(self.x, self.y, text)]
    }
}

/// Straight vertical column; each end is a plain line glyph or a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub x: u16,
    pub y: u16,
    pub len: u16,
    pub style: BorderStyle,
    pub top: Junction,
    pub bottom: Junction,
}

impl Column {
    pub fn new(x: u16, y: u16, len: u16, style: BorderStyle) -> Self {
        Self {
            x,
            y,
            len,
            style,
            top: Junction::None,
            bottom: Junction::None,
        }
    }

    pub fn with_ends(mut self, top: Junction, bottom: Junction) -> Self {
        self.top = top;
        self.bottom = bottom;
        self
    }
}

impl Primitive for Column {
    fn name(&self) -> &'static str {
        "column"
    }

    fn validate(&self, grid_w: u16, grid_h: u16) -> Result<(), GeometryError> {
        check_origin(self.name(), self.x, self.y, grid_w, grid_h)?;
        check_extent(self.name(), Axis::Vertical, self.y, self.len, grid_h)?;
        check_min(self.name(), self.len, 3)
    }

    fn runs(&self) -> Vec<GlyphRun> {
        let v = vertical(self.style);
        let end = |c: Corner, j: Junction| match j {
            Junction::None => v,
            _ => corner(c, self.style, j),
        };
        let last = self.len.saturating_sub(1);
        (0..self.len)
            .map(|i| {
                let ch = if i == 0 {
                    end(Corner::TopLeft, self.top)
                } else if i == last {
                    end(Corner::BottomLeft, self.bottom)
                } else {
                    v
                };
                GlyphRun::new(self.x, self.y + i, ch.to_string())
            })
            .collect()
    }
}

/// Junction style of each box corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Corners {
    pub top_left: Junction,
    pub top_right: Junction,
    pub bottom_left: Junction,
    pub bottom_right: Junction,
}

/// Rectangular border, optionally with its interior blanked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxShape {
    pub rect: Rect,
    pub style: BorderStyle,
    pub corners: Corners,
    pub fill: bool,
}

impl BoxShape {
    pub fn new(rect: Rect, style: BorderStyle) -> Self {
        Self {
            rect,
            style,
            corners: Corners::default(),
            fill: false,
        }
    }

    pub fn with_corners(mut self, corners: Corners) -> Self {
        self.corners = corners;
        self
    }

    pub fn filled(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}

impl Primitive for BoxShape {
    fn name(&self) -> &'static str {
        "box"
    }

    fn validate(&self, grid_w: u16, grid_h: u16) -> Result<(), GeometryError> {
        let r = self.rect;
        check_origin(self.name(), r.left, r.top, grid_w, grid_h)?;
        check_extent(self.name(), Axis::Horizontal, r.left, r.width, grid_w)?;
        check_extent(self.name(), Axis::Vertical, r.top, r.height, grid_h)?;
        check_min(self.name(), r.width.min(r.height), 2)
    }

    fn runs(&self) -> Vec<GlyphRun> {
        let r = self.rect;
        let (h, v) = (horizontal(self.style), vertical(self.style));
        let inner = r.width.saturating_sub(2) as usize;
        let fill: String = std::iter::repeat(h).take(inner).collect();

        let edge = |l: char, rgt: char| {
            let mut s = String::with_capacity((inner + 2) * 3);
            s.push(l);
            s.push_str(&fill);
            s.push(rgt);
            s
        };

        let mut runs = Vec::with_capacity(r.height as usize * 3);
        runs.push(GlyphRun::new(
            r.left,
            r.top,
            edge(
                corner(Corner::TopLeft, self.style, self.corners.top_left),
                corner(Corner::TopRight, self.style, self.corners.top_right),
            ),
        ));
        for dy in 1..r.height.saturating_sub(1) {
            let y = r.top + dy;
            runs.push(GlyphRun::new(r.left, y, v.to_string()));
            if self.fill && inner > 0 {
                runs.push(GlyphRun::new(r.left + 1, y, " ".repeat(inner)));
            }
            runs.push(GlyphRun::new(r.left + r.width.saturating_sub(1), y, v.to_string()));
        }
        runs.push(GlyphRun::new(
            r.left,
            r.top + r.height.saturating_sub(1),
            edge(
                corner(Corner::BottomLeft, self.style, self.corners.bottom_left),
                corner(Corner::BottomRight, self.style, self.corners.bottom_right),
            ),
        ));
        runs
    }
}

/// Two-row zigzag separator.
///
/// The upper row spans `len` cells from `x`; the lower row spans `len - 2`
/// cells from `x + 1`. `flipped` mirrors the pattern vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZigzagLine {
    pub x: u16,
    pub y: u16,
    pub len: u16,
    pub style: BorderStyle,
    pub straight_edge: bool,
    pub flipped: bool,
}

impl ZigzagLine {
    pub fn new(x: u16, y: u16, len: u16, style: BorderStyle) -> Self {
        Self {
            x,
            y,
            len,
            style,
            straight_edge: false,
            flipped: false,
        }
    }

    pub fn straight_edge(mut self, on: bool) -> Self {
        self.straight_edge = on;
        self
    }

    pub fn flipped(mut self, on: bool) -> Self {
        self.flipped = on;
        self
    }

    /// The two glyph rows, as (row starting at `x`, row starting at `x + 1`).
    pub fn rows(&self) -> (String, String) {
        zigzag_line_rows(self.len as usize, self.style, self.straight_edge, self.flipped)
    }
}

impl Primitive for ZigzagLine {
    fn name(&self) -> &'static str {
        "zigzag line"
    }

    fn validate(&self, grid_w: u16, grid_h: u16) -> Result<(), GeometryError> {
        // Needs two rows.
        check_origin(self.name(), self.x, self.y, grid_w, grid_h.saturating_sub(1))?;
        check_extent(self.name(), Axis::Horizontal, self.x, self.len, grid_w)?;
        check_min(self.name(), self.len, 2)
    }

    fn runs(&self) -> Vec<GlyphRun> {
        let (outer, inner) = self.rows();
        let (outer_y, inner_y) = if self.flipped {
            (self.y + 1, self.y)
        } else {
            (self.y, self.y + 1)
        };
        vec![
            GlyphRun::new(self.x, outer_y, outer),
            GlyphRun::new(self.x + 1, inner_y, inner),
        ]
    }
}

/// Build both rows of a zigzag line of `width` cells.
///
/// Steps a four-glyph fragment pair across the width. At the midpoint the
/// stepping is adjusted according to `width % 4` so both halves line up:
/// 0 repeats the previous glyph, 1 backs up one glyph and emits three,
/// 2 advances the fragment one extra step, 3 needs no adjustment.
pub fn zigzag_line_rows(
    width: usize,
    style: BorderStyle,
    straight_edge: bool,
    flipped: bool,
) -> (String, String) {
    let h = horizontal(style);
    let (tl, tr) = (plain(Corner::TopLeft, style), plain(Corner::TopRight, style));
    let (bl, br) = (plain(Corner::BottomLeft, style), plain(Corner::BottomRight, style));
    let fragment: [[char; 4]; 2] = if flipped {
        [[bl, h, br, ' '], [tr, ' ', tl, h]]
    } else {
        [[tl, h, tr, ' '], [br, ' ', bl, h]]
    };

    let zags = width / 4;
    let remainder = width % 4;
    let mid_points_up = zags % 2 == 0;

    let mut outer: Vec<char> = Vec::with_capacity(width);
    let mut inner: Vec<char> = Vec::with_capacity(width);
    let mut fi = 1usize;

    outer.push(if straight_edge { h } else { fragment[0][0] });

    let step = |outer: &mut Vec<char>, inner: &mut Vec<char>, fi: &mut usize| {
        if *fi >= 4 {
            *fi = 0;
        }
        outer.push(fragment[0][*fi]);
        inner.push(fragment[1][*fi]);
        *fi += 1;
    };

    let mut li = 1usize;
    while li + 1 < width {
        if li == width / 2 && remainder != 3 {
            if mid_points_up {
                fi += 1;
            }
            match remainder {
                0 => {
                    if let Some(&c) = outer.last() {
                        outer.push(c);
                    }
                    if let Some(&c) = inner.last() {
                        inner.push(c);
                    }
                }
                1 => {
                    outer.pop();
                    inner.pop();
                    for _ in 0..3 {
                        step(&mut outer, &mut inner, &mut fi);
                    }
                    li += 1;
                    fi += 1;
                }
                _ => {
                    if !mid_points_up {
                        fi += 1;
                    }
                    step(&mut outer, &mut inner, &mut fi);
                }
            }
            li += 1;
            continue;
        }

        step(&mut outer, &mut inner, &mut fi);
        li += 1;
    }

    if width >= 2 {
        outer.push(if straight_edge { h } else { fragment[0][2] });
    }

    (outer.into_iter().collect(), inner.into_iter().collect())
}

/// Three-column zigzag separator running downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZigzagColumn {
    pub x: u16,
    pub y: u16,
    pub len: u16,
    pub style: BorderStyle,
    pub straight_edge: bool,
    pub mirrored: bool,
}

impl ZigzagColumn {
    pub fn new(x: u16, y: u16, len: u16, style: BorderStyle) -> Self {
        Self {
            x,
            y,
            len,
            style,
            straight_edge: false,
            mirrored: false,
        }
    }

    pub fn straight_edge(mut self, on: bool) -> Self {
        self.straight_edge = on;
        self
    }

    pub fn mirrored(mut self, on: bool) -> Self {
        self.mirrored = on;
        self
    }
}

impl Primitive for ZigzagColumn {
    fn name(&self) -> &'static str {
        "zigzag column"
    }

    fn validate(&self, grid_w: u16, grid_h: u16) -> Result<(), GeometryError> {
        check_origin(self.name(), self.x, self.y, grid_w, grid_h)?;
        check_extent(self.name(), Axis::Horizontal, self.x, 3, grid_w)?;
        check_extent(self.name(), Axis::Vertical, self.y, self.len, grid_h)?;
        check_min(self.name(), self.len, 4)
    }

    fn runs(&self) -> Vec<GlyphRun> {
        zigzag_column_rows(self.len as usize, self.style, self.straight_edge, self.mirrored)
            .into_iter()
            .enumerate()
            .map(|(i, (dx, text))| GlyphRun::new(self.x + dx, self.y + i as u16, text))
            .collect()
    }
}

/// Rows of a zigzag column of `height` rows, each as (column offset, glyphs).
///
/// Odd heights get one straight vertical row at the midpoint.
pub fn zigzag_column_rows(
    height: usize,
    style: BorderStyle,
    straight_edge: bool,
    mirrored: bool,
) -> Vec<(u16, String)> {
    let (h, v) = (horizontal(style), vertical(style));
    let fragment: [[char; 3]; 2] = [
        [plain(Corner::TopLeft, style), h, plain(Corner::BottomRight, style)],
        [plain(Corner::BottomLeft, style), h, plain(Corner::TopRight, style)],
    ];
    let row = |f: usize| fragment[f].iter().collect::<String>();
    let end_dx = if mirrored { 2 } else { 0 };

    let mut rows = Vec::with_capacity(height);
    if height < 2 {
        return rows;
    }

    let first = if straight_edge {
        v
    } else if mirrored {
        fragment[1][2]
    } else {
        fragment[0][0]
    };
    rows.push((end_dx, first.to_string()));

    let odd_height = height % 2 == 1;
    let mut line = 0usize;

    while line < (height - 2) / 2 {
        let odd_line = line % 2 == 1;
        rows.push((0, row(if mirrored ^ odd_line { 0 } else { 1 })));
        line += 1;
    }

    if odd_height {
        let odd_zags = height >= 5 && (height - 5) % 4 == 0;
        let straight = if mirrored ^ odd_zags {
            format!("  {v}")
        } else {
            format!("{v}  ")
        };
        rows.push((0, straight));
        line += 1;
    }

    while line < height - 2 {
        let odd_line = line % 2 == 1;
        rows.push((0, row(if mirrored ^ (odd_line ^ odd_height) { 0 } else { 1 })));
        line += 1;
    }

    let last = if straight_edge {
        v
    } else if mirrored {
        fragment[0][2]
    } else {
        fragment[1][0]
    };
    rows.push((end_dx, last.to_string()));
    rows
}

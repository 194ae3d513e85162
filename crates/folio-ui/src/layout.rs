//! Block-flow layout estimate.
//!
//! Hosts without a browser engine (the native simulator, tests) still need
//! rectangles to intersect against the viewport. This pass approximates CSS
//! block and flex flow with monospace text metrics: good enough to decide
//! which blocks are on screen at a given scroll offset, not for painting.

use std::collections::HashMap;

use folio_core::{FlexDirection, PositionType, Rect, TextTag, View, ViewId, ViewKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Advance of one glyph as a fraction of the font size.
    pub char_width_em: f32,
    pub line_height: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width_em: 0.6,
            line_height: 1.7,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Layout {
    rects: HashMap<ViewId, Rect>,
    pub content_height: f32,
}

impl Layout {
    pub fn rect(&self, id: ViewId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, Rect)> + '_ {
        self.rects.iter().map(|(id, r)| (*id, *r))
    }
}

pub fn layout(root: &View, width: f32, metrics: LayoutMetrics) -> Layout {
    let mut out = Layout::default();
    let h = place(root, 0.0, 0.0, width, &metrics, &mut out);
    out.content_height = h;
    out
}

// Lays out `view` with its border box starting at (x, y); returns the
// outer height including vertical margins.
fn place(view: &View, x: f32, y: f32, avail: f32, m: &LayoutMetrics, out: &mut Layout) -> f32 {
    let md = &view.modifier;

    if md.position_type == Some(PositionType::FixedBottom) {
        // Out of flow; the overlay never scrolls with content.
        return 0.0;
    }

    let width = md.max_width.map(|w| w.min(avail)).unwrap_or(avail);
    let x = if md.margin_horizontal_auto {
        x + (avail - width) / 2.0
    } else {
        x
    };
    let top = y + md.margin_top.unwrap_or(0.0);

    let (pad_left, pad_top) = match (md.padding_values, md.padding) {
        (Some(p), _) => (p.left, p.top),
        (None, Some(p)) => (p, p),
        (None, None) => (0.0, 0.0),
    };
    let border_top = md.border.map(|b| b.width).unwrap_or(0.0)
        + md.border_top.map(|b| b.width).unwrap_or(0.0);
    let border_left = md.border.map(|b| b.width).unwrap_or(0.0);
    let inner_x = x + border_left + pad_left;
    let inner_y = top + border_top + pad_top;
    let inner_w = (width - md.horizontal_insets()).max(0.0);
    let gap = md.gap.unwrap_or(0.0);

    let content_h = match &view.kind {
        ViewKind::Text { spans, style } => {
            let per_line = chars_per_line(inner_w, style.size, m);
            let mut lines = 0usize;
            let mut current = 0usize;
            for s in spans {
                if s.is_line_break() {
                    lines += current.div_ceil(per_line).max(1);
                    current = 0;
                } else {
                    current += s.text.chars().count();
                }
            }
            lines += current.div_ceil(per_line).max(1);
            if style.no_wrap {
                lines = spans.iter().filter(|s| s.is_line_break()).count() + 1;
            }
            let lh = style.line_height.unwrap_or(match style.tag {
                TextTag::Heading => 1.0,
                _ => m.line_height,
            });
            lines as f32 * style.size * lh
        }
        ViewKind::Link { style, .. } => style.size * style.line_height.unwrap_or(m.line_height),
        _ if md.grid.is_some() => {
            let grid = md.grid.as_ref().map(|g| (g.tracks.len().max(1), g.gap));
            let (cols, grid_gap) = grid.unwrap_or((1, 0.0));
            let col_w = (inner_w - grid_gap * (cols as f32 - 1.0)).max(0.0) / cols as f32;
            let mut col = 0usize;
            let mut row_y = inner_y;
            let mut row_h = 0.0f32;
            for child in &view.children {
                let span = (child.modifier.grid_col_span.unwrap_or(1) as usize).clamp(1, cols);
                if col + span > cols {
                    row_y += row_h + grid_gap;
                    row_h = 0.0;
                    col = 0;
                }
                let cx = inner_x + col as f32 * (col_w + grid_gap);
                let cw = col_w * span as f32 + grid_gap * (span as f32 - 1.0);
                row_h = row_h.max(place(child, cx, row_y, cw, m, out));
                col += span;
            }
            if view.children.is_empty() {
                0.0
            } else {
                row_y + row_h - inner_y
            }
        }
        _ if md.flex_dir == Some(FlexDirection::Row) && md.flex_wrap => {
            // Children keep their natural width and wrap onto new lines.
            let mut cx = 0.0f32;
            let mut row_y = inner_y;
            let mut row_h = 0.0f32;
            for child in &view.children {
                let w = intrinsic_width(child, m).min(inner_w);
                if cx > 0.0 && cx + w > inner_w {
                    row_y += row_h + gap;
                    row_h = 0.0;
                    cx = 0.0;
                }
                row_h = row_h.max(place(child, inner_x + cx, row_y, w, m, out));
                cx += w + gap;
            }
            if view.children.is_empty() {
                0.0
            } else {
                row_y + row_h - inner_y
            }
        }
        _ if md.flex_dir == Some(FlexDirection::Row) => {
            let n = view.children.len();
            if n == 0 {
                0.0
            } else {
                let cw = (inner_w - gap * (n as f32 - 1.0)).max(0.0) / n as f32;
                view.children
                    .iter()
                    .enumerate()
                    .map(|(i, c)| place(c, inner_x + i as f32 * (cw + gap), inner_y, cw, m, out))
                    .fold(0.0, f32::max)
            }
        }
        _ => {
            let mut cy = inner_y;
            let mut placed = 0usize;
            for child in &view.children {
                if child.modifier.position_type == Some(PositionType::FixedBottom) {
                    continue;
                }
                if placed > 0 {
                    cy += gap;
                }
                cy += place(child, inner_x, cy, inner_w, m, out);
                placed += 1;
            }
            cy - inner_y
        }
    };

    let mut border_box_h = content_h + md.vertical_insets();
    if let Some(h) = md.height {
        border_box_h = h;
    }
    if view.id != 0 {
        out.rects
            .insert(view.id, Rect::new(x, top, width, border_box_h));
    }

    md.margin_top.unwrap_or(0.0) + border_box_h + md.margin_bottom.unwrap_or(0.0)
}

fn chars_per_line(width: f32, font_size: f32, m: &LayoutMetrics) -> usize {
    let advance = (font_size * m.char_width_em).max(1.0);
    ((width / advance).floor() as usize).max(1)
}

// Single-line width of text and links; anything else takes what it is given.
fn intrinsic_width(view: &View, m: &LayoutMetrics) -> f32 {
    let (chars, size) = match &view.kind {
        ViewKind::Text { spans, style } => (
            spans
                .iter()
                .filter(|s| !s.is_line_break())
                .map(|s| s.text.chars().count())
                .sum::<usize>(),
            style.size,
        ),
        ViewKind::Link { label, style, .. } => (label.chars().count(), style.size),
        _ => return f32::INFINITY,
    };
    // One pixel of slack so the text fits on one line at exactly this width.
    chars as f32 * size * m.char_width_em + view.modifier.horizontal_insets() + 1.0
}

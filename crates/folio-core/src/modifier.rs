use crate::{AnimationSpec, Color, Transform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSide {
    pub width: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JustifyContent {
    Start,
    Center,
    SpaceBetween,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignItems {
    Start,
    Center,
    Stretch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Relative track sizes, `0.0` meaning "auto".
    pub tracks: Vec<f32>,
    pub gap: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    /// Pinned to the bottom edge of the viewport.
    FixedBottom,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub max_width: Option<f32>,
    pub min_height_vh: Option<f32>,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_horizontal_auto: bool,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub border_top: Option<BorderSide>,
    pub border_bottom: Option<BorderSide>,
    pub border_right: Option<BorderSide>,
    pub flex_dir: Option<FlexDirection>,
    pub flex_grow: Option<f32>,
    pub flex_wrap: bool,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f32>,
    pub grid: Option<GridConfig>,
    pub grid_col_span: Option<u16>,
    pub position_type: Option<PositionType>,
    pub z_index: Option<i32>,
    pub backdrop_blur: Option<f32>,
    pub height: Option<f32>,
    pub alpha: Option<f32>,
    pub transform: Option<Transform>,
    /// Animated properties and the spec they share.
    pub transition: Option<(Vec<&'static str>, AnimationSpec)>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn max_width(mut self, w: f32) -> Self {
        self.max_width = Some(w);
        self
    }
    pub fn min_height_viewport(mut self, percent: f32) -> Self {
        self.min_height_vh = Some(percent);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    pub fn margin_top(mut self, v: f32) -> Self {
        self.margin_top = Some(v);
        self
    }
    pub fn margin_bottom(mut self, v: f32) -> Self {
        self.margin_bottom = Some(v);
        self
    }
    pub fn center_horizontally(mut self) -> Self {
        self.margin_horizontal_auto = true;
        self
    }
    /// Set a solid color background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn border_top(mut self, width: f32, color: Color) -> Self {
        self.border_top = Some(BorderSide { width, color });
        self
    }
    pub fn border_bottom(mut self, width: f32, color: Color) -> Self {
        self.border_bottom = Some(BorderSide { width, color });
        self
    }
    pub fn border_right(mut self, width: f32, color: Color) -> Self {
        self.border_right = Some(BorderSide { width, color });
        self
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_wrap(mut self) -> Self {
        self.flex_wrap = true;
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items = Some(a);
        self
    }
    pub fn gap(mut self, v: f32) -> Self {
        self.gap = Some(v);
        self
    }
    pub fn grid(mut self, tracks: Vec<f32>, gap: f32) -> Self {
        self.grid = Some(GridConfig { tracks, gap });
        self
    }
    pub fn grid_span(mut self, col_span: u16) -> Self {
        self.grid_col_span = Some(col_span);
        self
    }
    pub fn fixed_bottom(mut self) -> Self {
        self.position_type = Some(PositionType::FixedBottom);
        self
    }
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }
    pub fn backdrop_blur(mut self, radius: f32) -> Self {
        self.backdrop_blur = Some(radius);
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a.clamp(0.0, 1.0));
        self
    }
    pub fn translate(mut self, x: f32, y: f32) -> Self {
        let t = self.transform.unwrap_or_else(Transform::identity);
        self.transform = Some(t.combine(&Transform::translate(x, y)));
        self
    }
    pub fn transition(mut self, properties: Vec<&'static str>, spec: AnimationSpec) -> Self {
        self.transition = Some((properties, spec));
        self
    }

    /// Vertical space the modifier adds around its content, used by the
    /// layout estimate.
    pub fn vertical_insets(&self) -> f32 {
        let pad = match (self.padding_values, self.padding) {
            (Some(p), _) => p.top + p.bottom,
            (None, Some(p)) => p * 2.0,
            (None, None) => 0.0,
        };
        let borders = self.border.map(|b| b.width * 2.0).unwrap_or(0.0)
            + self.border_top.map(|b| b.width).unwrap_or(0.0)
            + self.border_bottom.map(|b| b.width).unwrap_or(0.0);
        pad + borders
    }

    pub fn horizontal_insets(&self) -> f32 {
        let pad = match (self.padding_values, self.padding) {
            (Some(p), _) => p.left + p.right,
            (None, Some(p)) => p * 2.0,
            (None, None) => 0.0,
        };
        pad + self.border.map(|b| b.width * 2.0).unwrap_or(0.0)
    }
}

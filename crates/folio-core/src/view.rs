use crate::{Color, Modifier};

pub type ViewId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    Mono,
    /// Serif display face for the hero heading.
    Display,
    /// Geometric sans for card and row titles.
    Title,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTag {
    #[default]
    Span,
    Paragraph,
    Heading,
    Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub tag: TextTag,
    pub font: FontFamily,
    pub size: f32,
    pub weight: Option<u16>,
    pub color: Color,
    pub line_height: Option<f32>,
    pub letter_spacing_em: Option<f32>,
    pub uppercase: bool,
    pub no_wrap: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            tag: TextTag::Span,
            font: FontFamily::Mono,
            size: 15.0,
            weight: None,
            color: Color::WHITE,
            line_height: None,
            letter_spacing_em: None,
            uppercase: false,
            no_wrap: false,
        }
    }
}

/// A run of text with optional emphasis. `"\n"` runs render as line breaks.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub bold: bool,
    pub color: Option<Color>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            color: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            color: None,
        }
    }

    pub fn line_break() -> Self {
        Self::plain("\n")
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    /// Page root.
    Surface,
    Box,
    Row,
    Column,
    /// A labelled page region, addressable for active-section tracking.
    Section {
        name: String,
    },
    /// Wrapper whose opacity/offset is driven by a reveal instance.
    Reveal,
    Text {
        spans: Vec<TextSpan>,
        style: TextStyle,
    },
    Link {
        href: String,
        label: String,
        new_tab: bool,
        style: TextStyle,
    },
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Surface => "Surface",
            ViewKind::Box => "Box",
            ViewKind::Row => "Row",
            ViewKind::Column => "Column",
            ViewKind::Section { .. } => "Section",
            ViewKind::Reveal => "Reveal",
            ViewKind::Text { .. } => "Text",
            ViewKind::Link { .. } => "Link",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_id(mut self, id: ViewId) -> Self {
        self.id = id;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Plain text of this view and its descendants, spans joined as-is.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            ViewKind::Text { spans, .. } => {
                for s in spans {
                    out.push_str(&s.text);
                }
            }
            ViewKind::Link { label, .. } => out.push_str(label),
            _ => {}
        }
        for c in &self.children {
            c.collect_text(out);
        }
    }

    /// Depth-first search by id.
    pub fn find(&self, id: ViewId) -> Option<&View> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: ViewId) -> Option<&mut View> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Pre-order walk.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }
}

#![allow(non_snake_case)]
//! Widgets, scroll-reveal wrappers and section tracking.
//!
//! Widget constructors are plain functions returning [`View`]s, styled with
//! [`Modifier`] chains and the [`TextExt`] helpers:
//!
//! ```rust
//! use folio_core::*;
//! use folio_ui::*;
//!
//! let card = Column(Modifier::new().padding(28.0).gap(8.0)).child((
//!     Text("Image Convolution Engine").size(19.0).weight(700),
//!     Text("C++20").size(10.0),
//! ));
//! assert_eq!(card.children.len(), 2);
//! ```
//!
//! Views start with id `0`; ids that the host must address (reveal
//! wrappers, sections) are taken from the [`Scheduler`] when the view is
//! built, and [`assign_ids`] fills in the rest before layout.

pub mod anim;
pub mod layout;
pub mod reveal;
pub mod rich_text;
pub mod sections;

pub use anim::{RevealAnimator, RevealPresentation};
pub use layout::{Layout, LayoutMetrics, layout};
pub use reveal::{Reveal, RevealConfig, RevealOnVisible, RevealPhase};
pub use rich_text::parse_emphasis;
pub use sections::{SectionTracker, active_section, reset_active_section};

use folio_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier.flex_dir(FlexDirection::Row))
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier.flex_dir(FlexDirection::Column))
}

/// A named page region. `id` must come from the page's [`Scheduler`] so the
/// section tracker can address it.
pub fn Section(id: ViewId, name: impl Into<String>, modifier: Modifier) -> View {
    View::new(id, ViewKind::Section { name: name.into() }).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    RichText(vec![TextSpan::plain(text)])
}

pub fn RichText(spans: Vec<TextSpan>) -> View {
    View::new(
        0,
        ViewKind::Text {
            spans,
            style: TextStyle::default(),
        },
    )
}

pub fn Paragraph(text: impl Into<String>) -> View {
    Text(text).tag(TextTag::Paragraph)
}

pub fn Link(label: impl Into<String>, href: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Link {
            href: href.into(),
            label: label.into(),
            new_tab: false,
            style: TextStyle::default(),
        },
    )
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

/// One-pixel rule that stretches to fill the rest of a row.
pub fn Divider(color: Color) -> View {
    Box(Modifier::new().flex_grow(1.0).height(1.0).background(color))
}

pub fn Grid(tracks: Vec<f32>, gap: f32, modifier: Modifier, children: Vec<View>) -> View {
    Box(modifier.grid(tracks, gap)).with_children(children)
}

/// Give every view still carrying id `0` a fresh id.
pub fn assign_ids(view: &mut View, sched: &mut Scheduler) {
    if view.id == 0 {
        view.id = sched.id();
    }
    for child in &mut view.children {
        assign_ids(child, sched);
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// Text styling for `Text` and `Link` views; a no-op on other kinds.
pub trait TextExt {
    fn size(self, px: f32) -> View;
    fn color(self, c: Color) -> View;
    fn weight(self, w: u16) -> View;
    fn font(self, f: FontFamily) -> View;
    fn tag(self, t: TextTag) -> View;
    fn line_height(self, lh: f32) -> View;
    fn letter_spacing(self, em: f32) -> View;
    fn uppercase(self) -> View;
    fn no_wrap(self) -> View;
    fn new_tab(self) -> View;
}

fn text_style_mut(v: &mut View) -> Option<&mut TextStyle> {
    match &mut v.kind {
        ViewKind::Text { style, .. } | ViewKind::Link { style, .. } => Some(style),
        _ => None,
    }
}

impl TextExt for View {
    fn size(mut self, px: f32) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.size = px;
        }
        self
    }
    fn color(mut self, c: Color) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.color = c;
        }
        self
    }
    fn weight(mut self, w: u16) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.weight = Some(w);
        }
        self
    }
    fn font(mut self, f: FontFamily) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.font = f;
        }
        self
    }
    fn tag(mut self, t: TextTag) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.tag = t;
        }
        self
    }
    fn line_height(mut self, lh: f32) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.line_height = Some(lh);
        }
        self
    }
    fn letter_spacing(mut self, em: f32) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.letter_spacing_em = Some(em);
        }
        self
    }
    fn uppercase(mut self) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.uppercase = true;
        }
        self
    }
    fn no_wrap(mut self) -> View {
        if let Some(s) = text_style_mut(&mut self) {
            s.no_wrap = true;
        }
        self
    }
    fn new_tab(mut self) -> View {
        if let ViewKind::Link { new_tab, .. } = &mut self.kind {
            *new_tab = true;
        }
        self
    }
}

use crate::{RenderError, View};

/// Turns a composed view tree into backend output (markup, a display list…).
pub trait RenderBackend {
    type Output;

    fn render(&mut self, root: &View) -> Result<Self::Output, RenderError>;
}

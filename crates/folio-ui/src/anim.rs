use folio_core::animation::{AnimatedValue, AnimationSpec};
use web_time::Instant;

/// What a reveal wrapper looks like at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPresentation {
    pub opacity: f32,
    /// Downward offset in px; `0.0` is the natural position.
    pub offset_y: f32,
}

impl RevealPresentation {
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }

    pub fn hidden(offset: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y: offset,
        }
    }

    pub fn for_flag(visible: bool, hidden_offset: f32) -> Self {
        if visible {
            Self::shown()
        } else {
            Self::hidden(hidden_offset)
        }
    }
}

/// Opacity and offset tracks sharing one spec, so both properties start,
/// move and settle together like a pair of CSS transitions would.
#[derive(Clone, Debug)]
pub struct RevealAnimator {
    opacity: AnimatedValue<f32>,
    offset: AnimatedValue<f32>,
    hidden_offset: f32,
}

impl RevealAnimator {
    pub fn new(visible: bool, hidden_offset: f32, spec: AnimationSpec) -> Self {
        let p = RevealPresentation::for_flag(visible, hidden_offset);
        Self {
            opacity: AnimatedValue::new(p.opacity, spec),
            offset: AnimatedValue::new(p.offset_y, spec),
            hidden_offset,
        }
    }

    pub fn retarget(&mut self, visible: bool, at: Instant) {
        let p = RevealPresentation::for_flag(visible, self.hidden_offset);
        self.opacity.set_target_at(p.opacity, at);
        self.offset.set_target_at(p.offset_y, at);
    }

    pub fn snap(&mut self, visible: bool) {
        let p = RevealPresentation::for_flag(visible, self.hidden_offset);
        self.opacity.snap_to(p.opacity);
        self.offset.snap_to(p.offset_y);
    }

    pub fn sample(&mut self, at: Instant) -> RevealPresentation {
        self.opacity.update_at(at);
        self.offset.update_at(at);
        RevealPresentation {
            opacity: *self.opacity.get(),
            offset_y: *self.offset.get(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.offset.is_animating()
    }

    /// When the running transition leaves its delay, if one is running.
    pub fn motion_start(&self) -> Option<Instant> {
        self.opacity.motion_start()
    }

    pub fn motion_end(&self) -> Option<Instant> {
        self.opacity.motion_end()
    }

    pub fn spec(&self) -> &AnimationSpec {
        self.opacity.spec()
    }
}

//! # Scroll reveal
//!
//! [`Reveal`] is the state behind one [`RevealOnVisible`] wrapper. It owns a
//! single visibility subscription against its wrapper view and keeps a
//! `visible` flag equal to the most recent report from the host:
//!
//! - mounted with an observer: starts hidden, flips on every crossing of the
//!   threshold in either direction (scrolling back up hides content again);
//! - mounted without one, or when the host refuses the subscription: shown
//!   immediately and never observed (fail-open);
//! - unmounted: the subscription is released and later callbacks are
//!   ignored.
//!
//! With [`RevealConfig::once`] set, the first `true` report also releases the
//! subscription and the wrapper stays shown.
//!
//! ```rust
//! use folio_core::*;
//! use folio_ui::*;
//!
//! let mut sched = Scheduler::new();
//! let reveal = Reveal::new(&mut sched, RevealConfig::delayed(100));
//! let view = RevealOnVisible(&reveal, Text("About"));
//! assert_eq!(view.id, reveal.id());
//! assert!(!reveal.is_visible());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use folio_core::animation::{AnimationSpec, Easing};
use folio_core::{
    Dispose, IntersectionEntry, Modifier, ObserveOptions, Scheduler, SharedObserver, Signal,
    SubId, View, ViewId, ViewKind, current_scope, signal,
};
use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use crate::anim::{RevealAnimator, RevealPresentation};
use crate::{IntoChildren, ViewExt};

pub const REVEAL_THRESHOLD: f32 = 0.12;
pub const REVEAL_OFFSET: f32 = 32.0;
pub const REVEAL_DURATION_MS: u64 = 600;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Wait before the transition starts, in both directions.
    pub delay_ms: u64,
    /// Fraction of the wrapper that must be on screen to count as visible.
    pub threshold: f32,
    /// Downward offset while hidden, px.
    pub hidden_offset: f32,
    pub duration_ms: u64,
    /// Stop observing after the first reveal.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            threshold: REVEAL_THRESHOLD,
            hidden_offset: REVEAL_OFFSET,
            duration_ms: REVEAL_DURATION_MS,
            once: false,
        }
    }
}

impl RevealConfig {
    pub fn delayed(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(Duration::from_millis(self.duration_ms), Easing::Ease)
            .with_delay(self.delay())
    }

    fn clamped_threshold(&self) -> f32 {
        if self.threshold.is_nan() {
            return REVEAL_THRESHOLD;
        }
        self.threshold.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Built but not mounted yet.
    Idle,
    /// Holding a live subscription.
    Observing,
    /// Revealed in `once` mode; subscription released.
    Settled,
    /// No observer available; shown without observing.
    FailOpen,
    TornDown,
}

struct RevealInner {
    id: ViewId,
    config: RevealConfig,
    visible: Signal<bool>,
    phase: Cell<RevealPhase>,
    subscription: RefCell<Option<Dispose>>,
    animator: RefCell<RevealAnimator>,
}

impl RevealInner {
    fn release(&self) {
        let sub = self.subscription.borrow_mut().take();
        if let Some(d) = sub {
            d.run();
        }
    }

    fn deliver(&self, entries: &[IntersectionEntry]) {
        match self.phase.get() {
            RevealPhase::Observing => {}
            phase => {
                log::trace!("reveal {}: dropping late entries in {:?}", self.id, phase);
                return;
            }
        }

        // Only the latest report for our own target counts.
        let Some(entry) = entries.iter().rev().find(|e| e.target == self.id) else {
            return;
        };
        self.apply(entry.is_intersecting, entry.time);

        if self.config.once && entry.is_intersecting {
            self.phase.set(RevealPhase::Settled);
            self.release();
            log::debug!("reveal {}: settled, observer released", self.id);
        }
    }

    fn apply(&self, visible: bool, at: Instant) {
        if self.visible.get() != visible {
            log::debug!(
                "reveal {}: {} (delay {}ms)",
                self.id,
                if visible { "shown" } else { "hidden" },
                self.config.delay_ms
            );
            self.animator.borrow_mut().retarget(visible, at);
        }
        // Every report is written through, even a repeat of the current value.
        self.visible.set(visible);
    }
}

impl Drop for RevealInner {
    fn drop(&mut self) {
        self.release();
    }
}

/// Handle to one reveal instance. Clones share state.
#[derive(Clone)]
pub struct Reveal(Rc<RevealInner>);

impl std::fmt::Debug for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reveal")
            .field("id", &self.0.id)
            .field("visible", &self.0.visible.get())
            .field("phase", &self.0.phase.get())
            .field("delay_ms", &self.0.config.delay_ms)
            .finish()
    }
}

impl Reveal {
    pub fn new(sched: &mut Scheduler, config: RevealConfig) -> Self {
        Self::with_id(sched.id(), config)
    }

    pub fn with_id(id: ViewId, config: RevealConfig) -> Self {
        let animator = RevealAnimator::new(false, config.hidden_offset, config.animation_spec());
        Self(Rc::new(RevealInner {
            id,
            config,
            visible: signal(false),
            phase: Cell::new(RevealPhase::Idle),
            subscription: RefCell::new(None),
            animator: RefCell::new(animator),
        }))
    }

    pub fn id(&self) -> ViewId {
        self.0.id
    }

    pub fn config(&self) -> &RevealConfig {
        &self.0.config
    }

    pub fn phase(&self) -> RevealPhase {
        self.0.phase.get()
    }

    pub fn is_visible(&self) -> bool {
        self.0.visible.get()
    }

    pub fn has_subscription(&self) -> bool {
        self.0.subscription.borrow().is_some()
    }

    /// Start observing the wrapper through `observer`, or fail open when
    /// there is none. Mounting twice is ignored.
    ///
    /// Inside `Scope::run` the teardown is also registered with the scope,
    /// so disposing the scope unmounts the reveal.
    pub fn mount(&self, observer: Option<&SharedObserver>) {
        if self.phase() != RevealPhase::Idle {
            log::warn!("reveal {}: already mounted ({:?})", self.id(), self.phase());
            return;
        }

        let Some(observer) = observer else {
            log::debug!("reveal {}: no visibility observer, showing", self.id());
            self.fail_open();
            return;
        };

        let weak: Weak<RevealInner> = Rc::downgrade(&self.0);
        let callback = Rc::new(move |entries: &[IntersectionEntry]| {
            if let Some(inner) = weak.upgrade() {
                inner.deliver(entries);
            }
        });

        // Phase first: the host may report the initial state synchronously.
        self.0.phase.set(RevealPhase::Observing);
        let options = ObserveOptions::threshold(self.0.config.clamped_threshold());
        match observer.observe(&[self.id()], options, callback) {
            Ok(d) => {
                if self.phase() == RevealPhase::Observing {
                    *self.0.subscription.borrow_mut() = Some(d);
                } else {
                    // Settled during the synchronous initial report.
                    d.run();
                }
            }
            Err(e) => {
                log::warn!("reveal {}: {e}; showing without observing", self.id());
                self.fail_open();
                return;
            }
        }

        if let Some(scope) = current_scope() {
            let weak = Rc::downgrade(&self.0);
            scope.add_disposer(move || {
                if let Some(inner) = weak.upgrade() {
                    Reveal(inner).unmount();
                }
            });
        }
    }

    fn fail_open(&self) {
        self.0.phase.set(RevealPhase::FailOpen);
        self.0.animator.borrow_mut().snap(true);
        self.0.visible.set(true);
    }

    /// Release the subscription. Idempotent; the flag keeps its last value.
    pub fn unmount(&self) {
        if self.phase() == RevealPhase::TornDown {
            return;
        }
        self.0.phase.set(RevealPhase::TornDown);
        self.0.release();
    }

    /// Called with the new flag after every report.
    pub fn on_change(&self, f: impl Fn(bool) + 'static) -> SubId {
        self.0.visible.subscribe(move |v| f(*v))
    }

    pub fn remove_listener(&self, id: SubId) -> bool {
        self.0.visible.unsubscribe(id)
    }

    /// Where the wrapper is headed: the end state of the current transition.
    pub fn target_presentation(&self) -> RevealPresentation {
        RevealPresentation::for_flag(self.is_visible(), self.0.config.hidden_offset)
    }

    /// Interpolated presentation at `at`, for hosts that animate themselves.
    pub fn presentation_at(&self, at: Instant) -> RevealPresentation {
        self.0.animator.borrow_mut().sample(at)
    }

    pub fn motion_start(&self) -> Option<Instant> {
        self.0.animator.borrow().motion_start()
    }

    pub fn is_animating(&self) -> bool {
        self.0.animator.borrow().is_animating()
    }

    /// Target style plus a `transition` over opacity and transform, for
    /// hosts that let the renderer interpolate (CSS).
    pub fn style_modifier(&self) -> Modifier {
        let p = self.target_presentation();
        Modifier::new()
            .alpha(p.opacity)
            .translate(0.0, p.offset_y)
            .transition(vec!["opacity", "transform"], self.0.config.animation_spec())
    }
}

/// Wrap `content` in a view driven by `reveal`.
pub fn RevealOnVisible(reveal: &Reveal, content: impl IntoChildren) -> View {
    View::new(reveal.id(), ViewKind::Reveal)
        .modifier(reveal.style_modifier())
        .child(content)
}

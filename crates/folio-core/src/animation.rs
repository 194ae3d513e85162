use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

thread_local! {
    static CLOCK: RefCell<Option<Rc<dyn Clock>>> = const { RefCell::new(None) };
}

/// Current time according to the installed clock (system time if none).
pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().as_ref().map(|c| c.now()).unwrap_or_else(Instant::now))
}

/// Timing curves. `Ease` follows CSS `cubic-bezier()` semantics exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
        }
    }

    /// Timing function as written in a CSS `transition` declaration.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
        }
    }
}

// Solve x(s) = t for the curve parameter s, then return y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    let bez = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let bez_dx = |s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * x1 + 6.0 * inv * s * (x2 - x1) + 3.0 * s * s * (1.0 - x2)
    };

    // Newton first; fall back to bisection where the slope flattens out.
    let mut s = t;
    for _ in 0..8 {
        let err = bez(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return bez(y1, y2, s);
        }
        let d = bez_dx(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bez(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bez(y1, y2, s)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::Ease,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    /// The scroll-reveal curve: 600ms CSS `ease`.
    pub fn reveal() -> Self {
        Self::tween(Duration::from_millis(600), Easing::Ease)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// `"<property> <secs>s <easing> <delay>ms"`, one entry of a CSS
    /// `transition` list.
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{property} {}s {} {}ms",
            self.duration.as_secs_f32(),
            self.easing.css(),
            self.delay.as_millis()
        )
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// Animation clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Install the animation clock for the current thread. The platform runner
/// installs `SystemClock`; tests install a `ManualClock`.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = Some(clock));
}

pub fn clear_clock() {
    CLOCK.with(|c| *c.borrow_mut() = None);
}

/// A clock driven by hand, for deterministic tests and scripted runs.
#[derive(Clone)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Rc::new(Cell::new(start)),
        }
    }

    /// Creates a clock starting now and installs it on this thread.
    pub fn install() -> Self {
        let clock = Self::new(Instant::now());
        set_clock(Rc::new(clock.clone()));
        clock
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Animated value that transitions smoothly
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate + Clone + PartialEq> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone + PartialEq> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T) {
        self.set_target_at(target, now());
    }

    /// Retarget at `at`. An in-flight animation restarts from wherever it
    /// has got to, and the configured delay applies again.
    pub fn set_target_at(&mut self, target: T, at: Instant) {
        self.update_at(at);
        if self.start_time.is_none() && self.current == target {
            return;
        }
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(at);
    }

    /// Jump straight to `value` without animating.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    pub fn update(&mut self) -> bool {
        self.update_at(now())
    }

    /// Advance to `at`; returns whether the animation is still running.
    pub fn update_at(&mut self, at: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = at.saturating_duration_since(start);

        if elapsed < self.spec.delay {
            return true; // Still waiting for delay
        }

        let animation_time = elapsed - self.spec.delay;

        if animation_time >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }

    /// Instant the current transition leaves its delay and starts moving.
    /// `None` when idle or when the delay runs past what `Instant` can hold.
    pub fn motion_start(&self) -> Option<Instant> {
        self.start_time?.checked_add(self.spec.delay)
    }

    /// Instant the current transition settles on its target.
    pub fn motion_end(&self) -> Option<Instant> {
        self.motion_start()?.checked_add(self.spec.duration)
    }
}

//! The seam between components and the host's visibility primitive.
//!
//! Components never compute intersections themselves. They hand the host a
//! set of target views and a threshold, and the host calls back with
//! [`IntersectionEntry`] batches whenever a target crosses the threshold.
//! The host also delivers one entry per target right after observation
//! starts, so observers learn the initial state without polling.

use std::rc::Rc;

use web_time::Instant;

use crate::{Dispose, ObserveError, ViewId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: ViewId,
    /// Fraction of the target's area inside the viewport.
    pub ratio: f32,
    /// `ratio >= threshold` at the time of the crossing.
    pub is_intersecting: bool,
    pub time: Instant,
}

pub type IntersectionCallback = Rc<dyn Fn(&[IntersectionEntry])>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f32,
}

impl ObserveOptions {
    pub fn threshold(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> Result<(), ObserveError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(ObserveError::InvalidThreshold(self.threshold))
        }
    }
}

pub trait VisibilityObserver {
    /// Start observing `targets`. Running the returned `Dispose` disconnects
    /// the subscription; the host must not invoke `callback` afterwards.
    fn observe(
        &self,
        targets: &[ViewId],
        options: ObserveOptions,
        callback: IntersectionCallback,
    ) -> Result<Dispose, ObserveError>;
}

/// What a component sees of its host: the visibility primitive, if any.
pub type SharedObserver = Rc<dyn VisibilityObserver>;

use crate::{Size, ViewId};

/// Hands out view ids while a page is being composed and carries the
/// viewport the page is composed for.
pub struct Scheduler {
    next_id: ViewId,
    pub viewport: Size,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            viewport: Size {
                width: 1280.0,
                height: 800.0,
            },
        }
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size { width, height };
        self
    }

    pub fn id(&mut self) -> ViewId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next_id - 1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f32 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Overlap of two rects, `None` when they only touch or are disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        })
    }

    /// Fraction of `self`'s area that lies inside `viewport`, in `[0, 1]`.
    ///
    /// A zero-area target counts as fully visible when it sits inside the
    /// viewport edges, matching how browsers treat empty boxes.
    pub fn intersection_ratio(&self, viewport: &Rect) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            let inside = self.x >= viewport.x
                && self.right() <= viewport.right()
                && self.y >= viewport.y
                && self.bottom() <= viewport.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        match self.intersect(viewport) {
            Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

/// 2D translation, the only transform reveal wrappers need.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
        }
    }

    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
        }
    }

    /// CSS `transform` value.
    pub fn css(&self) -> String {
        let out = format!("translateY({}px)", self.translate_y);
        if self.translate_x != 0.0 {
            return format!("translateX({}px) {out}", self.translate_x);
        }
        out
    }
}

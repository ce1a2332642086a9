use bytemuck::{Pod, Zeroable};

/// One of the two layout axes. Used to index `Rect::min` / `Rect::max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned box given by its `min` and `max` corners.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: [0.0, 0.0],
        max: [0.0, 0.0],
    };

    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Rect {
            min: [x0, y0],
            max: [x1, y1],
        }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Rect::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn extent(&self, axis: Axis) -> f32 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Shrink by `amount` on all four sides. Negative amounts grow the box.
    /// Not clamped: an inset larger than half an extent inverts that axis.
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.min[0] + amount,
            self.min[1] + amount,
            self.max[0] - amount,
            self.max[1] - amount,
        )
    }

    /// `max(w/h, h/w)`. A box with a non-positive side is infinitely bad.
    pub fn aspect(&self) -> f32 {
        let (w, h) = (self.width(), self.height());
        if w <= 0.0 || h <= 0.0 {
            return f32::INFINITY;
        }
        (w / h).max(h / w)
    }

    /// Whether `other` lies inside `self`, allowing `eps` of slack per edge.
    pub fn contains_rect(&self, other: &Rect, eps: f32) -> bool {
        other.min[0] >= self.min[0] - eps
            && other.min[1] >= self.min[1] - eps
            && other.max[0] <= self.max[0] + eps
            && other.max[1] <= self.max[1] + eps
    }

    /// Area shared by two boxes (0 when disjoint or touching).
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let w = self.max[0].min(other.max[0]) - self.min[0].max(other.min[0]);
        let h = self.max[1].min(other.max[1]) - self.min[1].max(other.min[1]);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_every_side() {
        let r = Rect::from_size(100.0, 50.0).inset(10.0);
        assert_eq!(r, Rect::new(10.0, 10.0, 90.0, 40.0));
        assert_eq!(r.extent(Axis::X), 80.0);
        assert_eq!(r.extent(Axis::Y), 30.0);
    }

    #[test]
    fn aspect_is_symmetric_and_degenerate_is_infinite() {
        assert_eq!(Rect::from_size(200.0, 50.0).aspect(), 4.0);
        assert_eq!(Rect::from_size(50.0, 200.0).aspect(), 4.0);
        assert_eq!(Rect::from_size(0.0, 10.0).aspect(), f32::INFINITY);
        assert_eq!(Rect::from_size(10.0, 10.0).inset(6.0).aspect(), f32::INFINITY);
    }

    #[test]
    fn overlap_of_touching_boxes_is_zero() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        let c = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.overlap_area(&b), 0.0);
        assert_eq!(a.overlap_area(&c), 25.0);
        assert!(Rect::from_size(20.0, 10.0).contains_rect(&b, 0.0));
        assert!(!a.contains_rect(&c, 0.0));
    }
}

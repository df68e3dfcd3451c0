/// Tracks the item whose angular position is closest to the scroll value.
///
/// The tracker holds a plain index into the current layout pass plus that item's angle. It is
/// reset at the start of every pass and fed each item in order; ties keep the first item seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NearestItemTracker {
    nearest: Option<Nearest>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Nearest {
    index: usize,
    theta: f32,
}

impl NearestItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.nearest = None;
    }

    /// Offers an item to the tracker. It replaces the current nearest only when strictly closer.
    pub fn consider(&mut self, index: usize, theta: f32, value: f32) {
        match self.nearest {
            Some(cur) if (value - theta).abs() >= (value - cur.theta).abs() => {}
            _ => self.nearest = Some(Nearest { index, theta }),
        }
    }

    /// Overrides the nearest item until the next pass re-derives it.
    pub fn focus(&mut self, index: usize, theta: f32) {
        self.nearest = Some(Nearest { index, theta });
    }

    pub fn index(&self) -> Option<usize> {
        self.nearest.map(|n| n.index)
    }

    pub fn theta(&self) -> Option<f32> {
        self.nearest.map(|n| n.theta)
    }

    /// Signed distance from `value` to the nearest item; `0` when there is none.
    pub fn offset_from(&self, value: f32) -> f32 {
        self.theta().map_or(0.0, |theta| theta - value)
    }
}

use crate::timestamps::format_hms;
use serde::{Deserialize, Serialize};

/// A `{start, end}` pair of second offsets, always with `end >= start`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub start: u64,
    pub end: u64,
}

impl TimeWindow {
    /// Build a window from two bounds given in either order.
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Window of `pad` seconds on each side of `point`, clamped at zero.
    pub fn around(point: u64, pad: u64) -> Self {
        Self {
            start: point.saturating_sub(pad),
            end: point.saturating_add(pad),
        }
    }

    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    pub fn contains(&self, seconds: u64) -> bool {
        seconds >= self.start && seconds <= self.end
    }

    /// Whether the closed interval `[start, end]` touches this window
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        end >= self.start as f64 && start <= self.end as f64
    }

    /// `HH:MM:SS-HH:MM:SS`
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            format_hms(self.start as f64),
            format_hms(self.end as f64)
        )
    }
}

use std::fmt;

/// Geometry of a tracked element at the moment a scroll or resize event fired.
///
/// Built fresh for every event and thrown away once the derived values have
/// been pushed into view state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub bounding_top: f64,
    pub bounding_bottom: f64,
    pub bounding_height: f64,
    pub offset_top: f64,
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Any part of the element overlaps the viewport.
    pub fn is_in_view(&self) -> bool {
        self.bounding_top <= self.viewport_height && self.bounding_bottom >= 0.0
    }

    /// Distance the page can scroll while the element still covers the viewport.
    pub fn scrollable_range(&self) -> f64 {
        self.bounding_height - self.viewport_height
    }

    /// Document-offset based progress: 0 when the element's top reaches the
    /// top of the viewport, 1 once its bottom lines up with the viewport bottom.
    pub fn progress(&self) -> f64 {
        let range = self.scrollable_range();
        if range.is_nan() || range <= 0.0 {
            return 1.0;
        }
        clamp_unit((self.scroll_y - self.offset_top) / range)
    }

    /// Rect based progress for sticky sections. Same shape as `progress` but
    /// measured from the live bounding rect instead of the document offset.
    pub fn pinned_progress(&self) -> f64 {
        let total = self.scrollable_range();
        if total.is_nan() || total <= 0.0 {
            return 1.0;
        }
        let scrolled = (-self.bounding_top).max(0.0).min(total);
        clamp_unit(scrolled / total)
    }
}

/// What `use_parallax` exposes to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxState {
    pub visible: bool,
    pub progress: f64,
}

impl ParallaxState {
    /// Mounting only checks visibility; progress waits for the first scroll.
    pub fn mounted(sample: &ScrollSample) -> Self {
        Self {
            visible: sample.is_in_view(),
            progress: 0.0,
        }
    }

    /// Progress follows the sample while the element is on screen and keeps
    /// its last value once it leaves.
    pub fn after_scroll(self, sample: &ScrollSample) -> Self {
        let visible = sample.is_in_view();
        let progress = if visible {
            sample.progress()
        } else {
            self.progress
        };
        Self { visible, progress }
    }
}

/// Clamp into [0, 1], mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linear fade over `[start, start + span]` of a progress value.
pub fn window_fade(progress: f64, start: f64, span: f64) -> f64 {
    if span.is_nan() || span <= 0.0 {
        return if progress >= start { 1.0 } else { 0.0 };
    }
    clamp_unit((progress - start) / span)
}

/// Splits progress into one fade-in window per item, optionally followed by
/// a plateau during which the last item stays fully visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeInSchedule {
    items: usize,
    plateau: f64,
}

impl FadeInSchedule {
    pub fn new(items: usize, plateau: f64) -> Self {
        // a plateau of 1 would leave no room for the items themselves
        let plateau = if plateau.is_finite() {
            plateau.clamp(0.0, 0.99)
        } else {
            0.0
        };
        Self { items, plateau }
    }

    pub fn even(items: usize) -> Self {
        Self::new(items, 0.0)
    }

    pub fn item_span(&self) -> f64 {
        if self.items == 0 {
            return 0.0;
        }
        (1.0 - self.plateau) / self.items as f64
    }

    /// Progress range over which the last item is held at full opacity.
    pub fn plateau_range(&self) -> (f64, f64) {
        let start = self.item_span() * self.items as f64;
        (start, start + self.plateau)
    }

    pub fn opacity(&self, index: usize, progress: f64) -> f64 {
        if index >= self.items {
            return 0.0;
        }
        let span = self.item_span();
        let start = index as f64 * span;
        let progress = clamp_unit(progress);

        if index == self.items - 1 {
            // The last item never fades out, the plateau just keeps it at 1.
            let (plateau_start, _) = self.plateau_range();
            if progress > plateau_start {
                return 1.0;
            }
            if progress > start {
                return clamp_unit((progress - start) / span);
            }
            return 0.0;
        }

        window_fade(progress, start, span)
    }

    pub fn opacities(&self, progress: f64) -> Vec<f64> {
        (0..self.items).map(|i| self.opacity(i, progress)).collect()
    }

    pub fn hidden(&self) -> Vec<f64> {
        vec![0.0; self.items]
    }

    /// Opacities for a pinned section, all zero while it is off screen.
    pub fn for_sample(&self, sample: &ScrollSample) -> Vec<f64> {
        if sample.is_in_view() {
            self.opacities(sample.pinned_progress())
        } else {
            self.hidden()
        }
    }
}

const STAR_RGB: &str = "217, 217, 217";
const EMPTY_STAR_ALPHA: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StarFill {
    Full,
    Partial(f64),
    Empty,
}

impl StarFill {
    pub fn css_color(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StarFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarFill::Full => write!(f, "#D9D9D9"),
            StarFill::Partial(alpha) => write!(f, "rgba({}, {})", STAR_RGB, alpha),
            StarFill::Empty => write!(f, "rgba({}, {})", STAR_RGB, EMPTY_STAR_ALPHA),
        }
    }
}

/// Fill for the star at `index` when `progress` of the rating has been revealed.
///
/// `floor(progress * star_count)` stars are solid, the next one carries the
/// fractional remainder as its alpha and the rest stay faint.
pub fn star_fill(index: usize, progress: f64, star_count: usize) -> StarFill {
    let scaled = clamp_unit(progress) * star_count as f64;
    let filled = scaled.floor() as usize;
    if index < filled {
        StarFill::Full
    } else if index == filled {
        StarFill::Partial(scaled.fract())
    } else {
        StarFill::Empty
    }
}

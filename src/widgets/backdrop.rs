//! Decorative "XX" backdrop and scroll-to-top threshold

/// Number of shapes scattered over the hero background
pub const XX_COUNT: usize = 5;

/// Scroll offset past which the back-to-top button shows
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Placement and timing of one floating shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XxShape {
    /// Percent of the container height
    pub top: f64,
    /// Percent of the container width
    pub left: f64,
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
}

impl XxShape {
    /// Scatter `count` shapes using `random`, which yields values in `[0, 1)`
    pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Self> {
        (0..count)
            .map(|_| XxShape {
                top: random() * 90.0,
                left: random() * 90.0,
                duration: random() * 5.0 + 5.0,
                delay: random() * 5.0,
            })
            .collect()
    }

    /// Inline style for the shape element
    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.top, self.left, self.duration, self.delay
        )
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

//! Chapter activation
//!
//! Maps a scroll position onto the chapter that should be "active". The
//! look-ahead point sits a third of the way down the viewport, so a chapter
//! activates slightly before its top reaches the top of the screen:
//!
//! ```text
//! scroll_pos = scroll_y + viewport_height / 1.5
//! active     = last chapter with top < scroll_pos
//! ```

use super::color::prefers_dark_text;
use super::lock::TransitionLock;
use crate::content::Chapter;

/// Divisor applied to the viewport height to get the look-ahead bias
pub const LOOK_AHEAD_DIVISOR: f64 = 1.5;

/// Window scroll state sampled by the adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollFrame {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
        }
    }

    /// Point in document coordinates that decides activation
    pub fn scroll_pos(&self) -> f64 {
        self.scroll_y + self.viewport_height / LOOK_AHEAD_DIVISOR
    }
}

/// Index of the chapter that should be active, if any
///
/// `tops` are the chapters' document-space top offsets in display order.
/// Returns `None` while the look-ahead point is still above the first chapter.
pub fn active_index(frame: ScrollFrame, tops: &[f64]) -> Option<usize> {
    let scroll_pos = frame.scroll_pos();
    let mut active = None;

    for (i, &top) in tops.iter().enumerate() {
        if scroll_pos > top {
            active = Some(i);
        }
    }

    active
}

/// Which optional behaviors a page wires into its activator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationVariant {
    /// Block re-evaluation while a cross-fade is running
    pub transition_lock: bool,
    /// Translate chapter images with the scroll
    pub parallax: bool,
    /// Flip to dark text on light chapter backgrounds
    pub luminance: bool,
}

impl ActivationVariant {
    /// Background switch only
    pub const PLAIN: Self = Self {
        transition_lock: false,
        parallax: false,
        luminance: false,
    };

    /// Storyline page: cross-fade, parallax and text contrast
    pub const STORYLINE: Self = Self {
        transition_lock: true,
        parallax: true,
        luminance: true,
    };

    /// Gallery page chapter rooms: parallax without the cross-fade
    pub const GALLERY: Self = Self {
        transition_lock: false,
        parallax: true,
        luminance: false,
    };
}

/// A change of active chapter the adapter must apply to the page
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub index: usize,
    pub previous: Option<usize>,
    /// New page background color
    pub background: String,
    /// `Some` when the variant checks luminance
    pub dark_text: Option<bool>,
    /// Whether a cross-fade was started (and the lock taken)
    pub transition: bool,
}

/// Active-chapter state for one rendered page
#[derive(Debug, Clone)]
pub struct ScrollActivator {
    backgrounds: Vec<String>,
    active: Option<usize>,
    variant: ActivationVariant,
    lock: TransitionLock,
}

impl ScrollActivator {
    /// Create an activator over the rendered chapters, none active yet
    pub fn new(chapters: &[Chapter], variant: ActivationVariant) -> Self {
        Self {
            backgrounds: chapters.iter().map(|c| c.bg.clone()).collect(),
            active: None,
            variant,
            lock: TransitionLock::default(),
        }
    }

    pub fn variant(&self) -> ActivationVariant {
        self.variant
    }

    /// Currently active chapter
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Whether a cross-fade currently blocks evaluation
    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.variant.transition_lock && self.lock.is_held(now_ms)
    }

    /// Release the cross-fade lock early (the adapter's timer fired)
    pub fn release(&mut self) {
        self.lock.release();
    }

    /// Evaluate one scroll event
    ///
    /// Returns the activation to apply, or `None` when nothing changes: the
    /// lock is held, no chapter has been reached yet, or the match is
    /// already active.
    pub fn on_scroll(
        &mut self,
        frame: ScrollFrame,
        tops: &[f64],
        now_ms: f64,
    ) -> Option<Activation> {
        if self.is_locked(now_ms) {
            tracing::trace!(now_ms, "Activation suppressed by transition lock");
            return None;
        }

        let index = active_index(frame, tops)?;
        if self.active == Some(index) {
            return None;
        }

        let transition = self.variant.transition_lock && self.lock.try_acquire(now_ms);
        let previous = self.active.replace(index);
        let background = self.backgrounds.get(index).cloned().unwrap_or_default();
        let dark_text = self
            .variant
            .luminance
            .then(|| prefers_dark_text(&background));

        tracing::debug!(index, ?previous, %background, "Chapter activated");

        Some(Activation {
            index,
            previous,
            background,
            dark_text,
            transition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters(bgs: &[&str]) -> Vec<Chapter> {
        bgs.iter()
            .enumerate()
            .map(|(i, bg)| Chapter::new(i.to_string(), format!("Chapter {}", i)).bg(*bg))
            .collect()
    }

    const TOPS: [f64; 4] = [0.0, 1000.0, 2000.0, 3000.0];

    #[test]
    fn test_scroll_pos_uses_look_ahead() {
        let frame = ScrollFrame::new(100.0, 900.0);
        assert_eq!(frame.scroll_pos(), 700.0);
    }

    #[test]
    fn test_active_index_is_last_top_passed() {
        // viewport 900 → look-ahead 600
        assert_eq!(active_index(ScrollFrame::new(0.0, 900.0), &TOPS), Some(0));
        assert_eq!(active_index(ScrollFrame::new(399.0, 900.0), &TOPS), Some(0));
        assert_eq!(active_index(ScrollFrame::new(401.0, 900.0), &TOPS), Some(1));
        assert_eq!(active_index(ScrollFrame::new(2500.0, 900.0), &TOPS), Some(3));
        assert_eq!(active_index(ScrollFrame::new(90_000.0, 900.0), &TOPS), Some(3));
    }

    #[test]
    fn test_exact_boundary_belongs_to_previous_chapter() {
        // scroll_pos == 1000 exactly: chapter 1's top is not yet strictly passed
        assert_eq!(active_index(ScrollFrame::new(400.0, 900.0), &TOPS), Some(0));
    }

    #[test]
    fn test_no_chapter_reached() {
        let tops = [800.0, 1600.0];
        assert_eq!(active_index(ScrollFrame::new(0.0, 900.0), &tops), None);
        assert_eq!(active_index(ScrollFrame::new(0.0, 900.0), &[]), None);
    }

    #[test]
    fn test_at_most_one_active_matches_last_passed_for_every_position() {
        let tops = [620.0, 950.0, 951.0, 2400.0, 2900.0];
        let mut activator = ScrollActivator::new(
            &chapters(&["#000", "#111", "#222", "#333", "#444"]),
            ActivationVariant::PLAIN,
        );

        // scroll_pos starts at 400, short of the first chapter
        assert_eq!(activator.on_scroll(ScrollFrame::new(0.0, 600.0), &tops, 0.0), None);
        assert_eq!(activator.active(), None);

        let mut y = 0.0;
        while y < 3000.0 {
            let frame = ScrollFrame::new(y, 600.0);
            activator.on_scroll(frame, &tops, y);
            let expected = tops.iter().rposition(|&t| t < frame.scroll_pos());
            assert_eq!(activator.active(), expected, "scroll_y = {}", y);
            let active_count = (0..tops.len()).filter(|&i| activator.is_active(i)).count();
            assert!(active_count <= 1);
            y += 37.0;
        }
    }

    #[test]
    fn test_activation_reports_background_once() {
        let mut activator =
            ScrollActivator::new(&chapters(&["#101010", "#fafafa"]), ActivationVariant::PLAIN);
        let tops = [0.0, 1000.0];

        let first = activator.on_scroll(ScrollFrame::new(0.0, 900.0), &tops, 0.0).unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.previous, None);
        assert_eq!(first.background, "#101010");
        assert_eq!(first.dark_text, None);
        assert!(!first.transition);

        // Same chapter again: nothing to apply
        assert!(activator.on_scroll(ScrollFrame::new(10.0, 900.0), &tops, 1.0).is_none());

        let second = activator.on_scroll(ScrollFrame::new(500.0, 900.0), &tops, 2.0).unwrap();
        assert_eq!(second.index, 1);
        assert_eq!(second.previous, Some(0));
        assert_eq!(second.background, "#fafafa");
    }

    #[test]
    fn test_storyline_lock_blocks_for_600ms() {
        let mut activator = ScrollActivator::new(
            &chapters(&["#101010", "#fafafa", "#202020"]),
            ActivationVariant::STORYLINE,
        );
        let tops = [0.0, 1000.0, 2000.0];

        let first = activator.on_scroll(ScrollFrame::new(0.0, 900.0), &tops, 0.0).unwrap();
        assert!(first.transition);
        assert_eq!(first.dark_text, Some(false));

        // Rapid scroll into chapter 2 while the fade is running: suppressed
        assert!(activator.is_locked(300.0));
        assert!(activator.on_scroll(ScrollFrame::new(1500.0, 900.0), &tops, 300.0).is_none());
        assert_eq!(activator.active(), Some(0));

        // Released unconditionally after the timeout; the suppressed event is not replayed
        assert!(!activator.is_locked(600.0));
        let next = activator.on_scroll(ScrollFrame::new(500.0, 900.0), &tops, 650.0).unwrap();
        assert_eq!(next.index, 1);
        assert_eq!(next.dark_text, Some(true));
    }

    #[test]
    fn test_release_unblocks_early() {
        let mut activator =
            ScrollActivator::new(&chapters(&["#000", "#fff"]), ActivationVariant::STORYLINE);
        let tops = [0.0, 1000.0];

        activator.on_scroll(ScrollFrame::new(0.0, 900.0), &tops, 0.0);
        assert!(activator.is_locked(10.0));
        activator.release();
        assert!(!activator.is_locked(10.0));
    }

    #[test]
    fn test_missing_background_is_empty() {
        let mut activator = ScrollActivator::new(&chapters(&["#000"]), ActivationVariant::PLAIN);
        let act = activator
            .on_scroll(ScrollFrame::new(2000.0, 900.0), &[0.0, 1000.0], 0.0)
            .unwrap();
        assert_eq!(act.index, 1);
        assert_eq!(act.background, "");
    }
}

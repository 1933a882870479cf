// SPDX-License-Identifier: MPL-2.0
//! Slideshow controller for the wayfinding map viewer.
//!
//! The controller owns an ordered set of slide identifiers, a cursor, and a
//! paused flag. Navigation clamps at both ends instead of wrapping, and
//! autoplay always halts on the terminal slide so the walking directions end
//! where the visitor should end. The rules are deliberately pure state
//! transitions: the timer itself lives in the application's subscription,
//! which only runs while [`Slideshow::autoplay_running`] reports true.

use std::time::Duration;

use crate::config;

/// Identifier of a single slide, an embedded asset path.
pub type SlideId = String;

/// Ordered, non-wrapping slideshow with pause-aware autoplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    slides: Vec<SlideId>,
    current_index: usize,
    is_paused: bool,
}

impl Slideshow {
    /// Build a slideshow positioned on the first slide.
    ///
    /// An empty or single-slide set starts paused; there is nothing for a
    /// timer to advance through.
    pub fn new(slides: Vec<SlideId>) -> Self {
        let is_paused = slides.len() <= 1;
        Self {
            slides,
            current_index: 0,
            is_paused,
        }
    }

    pub fn slides(&self) -> &[SlideId] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Cursor position, or `None` when there are no slides.
    pub fn current_index(&self) -> Option<usize> {
        if self.slides.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    /// The slide under the cursor, if any.
    pub fn current_slide(&self) -> Option<&str> {
        self.slides.get(self.current_index).map(String::as_str)
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Whether the autoplay timer should be live right now.
    pub fn autoplay_running(&self) -> bool {
        !self.is_paused && self.slides.len() > 1
    }

    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_at_last(&self) -> bool {
        !self.slides.is_empty() && self.current_index == self.slides.len() - 1
    }

    /// Step forward one slide, clamping at the end.
    pub fn next(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1).min(self.slides.len() - 1);
        self.apply_terminal_rule();
    }

    /// Step back one slide, clamping at the start. Stepping away from the
    /// terminal slide restarts autoplay.
    pub fn previous(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
        self.apply_terminal_rule();
    }

    /// Jump straight to a slide. Out-of-range targets clamp to the last
    /// slide rather than being rejected, so a stale dot press still lands
    /// somewhere sensible.
    pub fn go_to(&mut self, index: usize) {
        if self.slides.is_empty() {
            return;
        }
        self.current_index = index.min(self.slides.len() - 1);
        self.apply_terminal_rule();
    }

    /// Pause autoplay (pointer hover, or an explicit stop).
    pub fn pause(&mut self) {
        self.is_paused = true;
    }

    /// Resume autoplay. Suppressed on the terminal slide and for sets too
    /// small to animate, where running a timer would be meaningless.
    pub fn resume(&mut self) {
        if self.slides.len() > 1 && !self.is_at_last() {
            self.is_paused = false;
        }
    }

    /// Advance on a timer tick. A tick that lands while paused is dropped,
    /// which covers the race between the timer firing and the subscription
    /// being torn down.
    pub fn tick(&mut self) {
        if self.is_paused || self.slides.len() <= 1 {
            return;
        }
        self.next();
    }

    // Every cursor move funnels through here: the show is paused exactly
    // when it sits on the terminal slide or has nothing to animate.
    fn apply_terminal_rule(&mut self) {
        self.is_paused = self.slides.len() <= 1 || self.is_at_last();
    }
}

/// Autoplay period in milliseconds, clamped to the configurable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            config::MIN_AUTOPLAY_INTERVAL_MS,
            config::MAX_AUTOPLAY_INTERVAL_MS,
        ))
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(config::DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(n: usize) -> Slideshow {
        Slideshow::new((1..=n).map(|i| format!("slide-{i}.svg")).collect())
    }

    #[test]
    fn new_show_starts_on_first_slide_with_autoplay() {
        let show = show(3);
        assert_eq!(show.current_index(), Some(0));
        assert!(!show.is_paused());
        assert!(show.autoplay_running());
    }

    #[test]
    fn empty_show_is_inert() {
        let mut show = Slideshow::new(Vec::new());
        assert!(show.is_empty());
        assert_eq!(show.current_index(), None);
        assert_eq!(show.current_slide(), None);
        assert!(!show.autoplay_running());

        show.next();
        show.previous();
        show.go_to(5);
        show.tick();
        show.resume();
        assert_eq!(show.current_index(), None);
        assert!(show.is_paused());
    }

    #[test]
    fn single_slide_show_starts_paused_and_stays_put() {
        let mut show = show(1);
        assert!(show.is_paused());
        assert!(!show.autoplay_running());

        show.resume();
        assert!(show.is_paused());

        show.tick();
        assert_eq!(show.current_index(), Some(0));
    }

    #[test]
    fn next_clamps_at_the_last_slide() {
        let mut show = show(3);
        show.next();
        show.next();
        assert!(show.is_at_last());

        show.next();
        assert_eq!(show.current_index(), Some(2));
    }

    #[test]
    fn previous_clamps_at_the_first_slide() {
        let mut show = show(3);
        show.previous();
        assert_eq!(show.current_index(), Some(0));
        assert!(show.is_at_first());
    }

    #[test]
    fn reaching_the_last_slide_pauses_autoplay() {
        let mut show = show(3);
        show.next();
        assert!(show.autoplay_running());

        show.next();
        assert!(show.is_at_last());
        assert!(show.is_paused());
        assert!(!show.autoplay_running());
    }

    #[test]
    fn stepping_back_from_the_last_slide_resumes_autoplay() {
        let mut show = show(3);
        show.go_to(2);
        assert!(show.is_paused());

        show.previous();
        assert_eq!(show.current_index(), Some(1));
        assert!(!show.is_paused());
    }

    #[test]
    fn go_to_jumps_and_applies_the_terminal_rule() {
        let mut show = show(4);
        show.go_to(2);
        assert_eq!(show.current_index(), Some(2));
        assert!(!show.is_paused());

        show.go_to(3);
        assert!(show.is_paused());
    }

    #[test]
    fn go_to_clamps_out_of_range_targets() {
        let mut show = show(3);
        show.go_to(99);
        assert_eq!(show.current_index(), Some(2));
        assert!(show.is_paused());
    }

    #[test]
    fn tick_advances_exactly_one_slide() {
        let mut show = show(4);
        show.tick();
        assert_eq!(show.current_index(), Some(1));
        show.tick();
        assert_eq!(show.current_index(), Some(2));
    }

    #[test]
    fn tick_while_paused_is_dropped() {
        let mut show = show(4);
        show.pause();
        show.tick();
        assert_eq!(show.current_index(), Some(0));
        assert!(show.is_paused());
    }

    #[test]
    fn ticks_walk_to_the_end_and_stop() {
        let mut show = show(3);
        for _ in 0..10 {
            show.tick();
        }
        assert!(show.is_at_last());
        assert!(show.is_paused());
    }

    #[test]
    fn hover_pause_and_resume_round_trip() {
        let mut show = show(3);
        show.pause();
        assert!(show.is_paused());

        show.resume();
        assert!(!show.is_paused());
    }

    #[test]
    fn resume_is_suppressed_on_the_terminal_slide() {
        let mut show = show(3);
        show.go_to(2);
        show.resume();
        assert!(show.is_paused());
    }

    #[test]
    fn current_slide_follows_the_cursor() {
        let mut show = show(2);
        assert_eq!(show.current_slide(), Some("slide-1.svg"));
        show.next();
        assert_eq!(show.current_slide(), Some("slide-2.svg"));
    }

    #[test]
    fn autoplay_interval_clamps_to_the_allowed_range() {
        assert_eq!(AutoplayInterval::new(10).millis(), config::MIN_AUTOPLAY_INTERVAL_MS);
        assert_eq!(
            AutoplayInterval::new(120_000).millis(),
            config::MAX_AUTOPLAY_INTERVAL_MS
        );
        assert_eq!(AutoplayInterval::default().millis(), 4_000);
        assert_eq!(
            AutoplayInterval::new(4_000).as_duration(),
            Duration::from_millis(4_000)
        );
    }
}

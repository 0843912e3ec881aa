//! Testimonial carousel state and the timers that drive it.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::{AUTO_ADVANCE_MS, RESUME_AFTER_MS};
use crate::timers::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// Automatic advance; ignored while paused.
    Tick,
    GoTo(usize),
    Next,
    Previous,
    Resume,
}

impl CarouselAction {
    /// Actions coming from the visitor rather than a timer.
    pub fn is_manual(self) -> bool {
        matches!(
            self,
            CarouselAction::GoTo(_) | CarouselAction::Next | CarouselAction::Previous
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    auto_playing: bool,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            auto_playing: true,
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn auto_playing(&self) -> bool {
        self.auto_playing
    }

    fn wrap(&self, index: usize) -> usize {
        if self.len == 0 {
            0
        } else {
            index % self.len
        }
    }

    fn go_to(&self, index: usize) -> Self {
        Self {
            index: self.wrap(index),
            auto_playing: false,
            len: self.len,
        }
    }

    pub fn apply(&self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Tick if self.auto_playing => Self {
                index: self.wrap(self.index + 1),
                ..self.clone()
            },
            CarouselAction::Tick => self.clone(),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::Next => self.go_to(self.index + 1),
            CarouselAction::Previous => self.go_to(self.index + self.len.max(1) - 1),
            CarouselAction::Resume => Self {
                auto_playing: true,
                ..self.clone()
            },
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        debug!(
            "carousel {:?}: slide {} -> {}, autoplay {}",
            action, self.index, next.index, next.auto_playing
        );
        Rc::new(next)
    }
}

/// Owns the carousel's two scheduled tasks: the repeating advance and the
/// one-shot resume after a manual navigation. Both feed actions back through
/// `dispatch`. Dropping this value cancels everything.
pub struct CarouselTimers<S: Scheduler> {
    scheduler: S,
    dispatch: Callback<CarouselAction>,
    advance: Option<S::Handle>,
    resume: Option<S::Handle>,
}

impl<S: Scheduler> CarouselTimers<S> {
    pub fn new(scheduler: S, dispatch: Callback<CarouselAction>) -> Self {
        Self {
            scheduler,
            dispatch,
            advance: None,
            resume: None,
        }
    }

    /// Arms the advance task when autoplay is on and drops it when off.
    /// At most one advance task exists at a time.
    pub fn sync_autoplay(&mut self, auto_playing: bool) {
        match (auto_playing, self.advance.is_some()) {
            (true, false) => {
                let dispatch = self.dispatch.clone();
                self.advance = Some(self.scheduler.every(
                    AUTO_ADVANCE_MS,
                    Box::new(move || dispatch.emit(CarouselAction::Tick)),
                ));
            }
            (false, true) => self.advance = None,
            _ => {}
        }
    }

    /// Manual navigation: stop advancing now and restart the resume countdown.
    pub fn interrupt(&mut self) {
        self.advance = None;
        let dispatch = self.dispatch.clone();
        self.resume = Some(self.scheduler.after(
            RESUME_AFTER_MS,
            Box::new(move || dispatch.emit(CarouselAction::Resume)),
        ));
    }

    pub fn cancel_all(&mut self) {
        self.advance = None;
        self.resume = None;
    }

    #[cfg(test)]
    pub fn is_advancing(&self) -> bool {
        self.advance.is_some()
    }

    #[cfg(test)]
    pub fn is_resume_pending(&self) -> bool {
        self.resume.is_some()
    }
}

/// Filled flags for a five star row.
pub fn star_fill(rating: u8) -> [bool; 5] {
    let mut stars = [false; 5];
    for star in stars.iter_mut().take(usize::from(rating.min(5))) {
        *star = true;
    }
    stars
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::timers::ManualClock;

    const N: usize = 6;

    /// Wires state and timers together the way the Testimonials component
    /// does: timer actions go through the reducer and then resync autoplay,
    /// manual actions also interrupt.
    struct Harness {
        clock: ManualClock,
        state: Rc<RefCell<CarouselState>>,
        timers: Rc<RefCell<CarouselTimers<ManualClock>>>,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            let clock = ManualClock::default();
            let state = Rc::new(RefCell::new(CarouselState::new(len)));
            let timers = Rc::new_cyclic(|weak: &Weak<RefCell<CarouselTimers<ManualClock>>>| {
                let state = state.clone();
                let weak = weak.clone();
                let dispatch = Callback::from(move |action: CarouselAction| {
                    let auto_playing = {
                        let mut state = state.borrow_mut();
                        *state = state.apply(action);
                        state.auto_playing()
                    };
                    if let Some(timers) = weak.upgrade() {
                        timers.borrow_mut().sync_autoplay(auto_playing);
                    }
                });
                RefCell::new(CarouselTimers::new(clock.clone(), dispatch))
            });
            timers.borrow_mut().sync_autoplay(true);
            Self {
                clock,
                state,
                timers,
            }
        }

        fn navigate(&self, action: CarouselAction) {
            assert!(action.is_manual());
            let next = self.state.borrow().apply(action);
            *self.state.borrow_mut() = next;
            self.timers.borrow_mut().interrupt();
        }

        fn index(&self) -> usize {
            self.state.borrow().index()
        }

        fn auto_playing(&self) -> bool {
            self.state.borrow().auto_playing()
        }
    }

    #[test]
    fn starts_on_first_slide_playing() {
        let state = CarouselState::new(N);
        assert_eq!(state.index(), 0);
        assert!(state.auto_playing());
    }

    #[test]
    fn go_to_selects_slide_and_pauses() {
        let state = CarouselState::new(N);
        for i in 0..N {
            let next = state.apply(CarouselAction::GoTo(i));
            assert_eq!(next.index(), i);
            assert!(!next.auto_playing());
        }
    }

    #[test]
    fn go_to_wraps_out_of_range_index() {
        let state = CarouselState::new(N).apply(CarouselAction::GoTo(N + 2));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn next_wraps_to_first() {
        let last = CarouselState::new(N).apply(CarouselAction::GoTo(N - 1));
        assert_eq!(last.apply(CarouselAction::Next).index(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let state = CarouselState::new(N).apply(CarouselAction::Previous);
        assert_eq!(state.index(), N - 1);
        assert!(!state.auto_playing());
    }

    #[test]
    fn three_nexts_walk_forward_paused() {
        let mut state = CarouselState::new(N);
        for expected in 1..=3 {
            state = state.apply(CarouselAction::Next);
            assert_eq!(state.index(), expected);
            assert!(!state.auto_playing());
        }
    }

    #[test]
    fn tick_is_ignored_while_paused() {
        let paused = CarouselState::new(N).apply(CarouselAction::GoTo(2));
        assert_eq!(paused.apply(CarouselAction::Tick), paused);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let state = CarouselState::new(0);
        assert_eq!(state.apply(CarouselAction::Tick).index(), 0);
        assert_eq!(state.apply(CarouselAction::Next).index(), 0);
        assert_eq!(state.apply(CarouselAction::Previous).index(), 0);
    }

    #[test]
    fn reduce_keeps_rc_when_nothing_changes() {
        let paused = Rc::new(CarouselState::new(N).apply(CarouselAction::GoTo(1)));
        let same = paused.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&paused, &same));
    }

    #[test]
    fn autoplay_advances_every_period() {
        let h = Harness::new(N);
        h.clock.advance(u64::from(AUTO_ADVANCE_MS) - 1);
        assert_eq!(h.index(), 0);
        h.clock.advance(1);
        assert_eq!(h.index(), 1);

        for step in 2..=14 {
            h.clock.advance(u64::from(AUTO_ADVANCE_MS));
            assert_eq!(h.index(), step % N);
        }
        assert!(h.auto_playing());
    }

    #[test]
    fn only_one_advance_task_is_armed() {
        let h = Harness::new(N);
        h.timers.borrow_mut().sync_autoplay(true);
        h.timers.borrow_mut().sync_autoplay(true);
        assert_eq!(h.clock.pending(), 1);
        h.clock.advance(u64::from(AUTO_ADVANCE_MS));
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn manual_navigation_cancels_pending_tick() {
        let h = Harness::new(N);
        h.clock.advance(u64::from(AUTO_ADVANCE_MS) - 1);
        h.navigate(CarouselAction::Next);
        assert_eq!(h.index(), 1);
        assert!(!h.timers.borrow().is_advancing());

        h.clock.advance(1);
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn resumes_after_idle_period() {
        let h = Harness::new(N);
        h.navigate(CarouselAction::GoTo(3));

        h.clock.advance(u64::from(RESUME_AFTER_MS) - 1);
        assert!(!h.auto_playing());
        assert_eq!(h.index(), 3);

        h.clock.advance(1);
        assert!(h.auto_playing());
        assert!(h.timers.borrow().is_advancing());
        assert_eq!(h.index(), 3);

        h.clock.advance(u64::from(AUTO_ADVANCE_MS));
        assert_eq!(h.index(), 4);
    }

    #[test]
    fn second_navigation_restarts_resume_wait() {
        let h = Harness::new(N);
        h.navigate(CarouselAction::Next);
        h.clock.advance(6_000);
        h.navigate(CarouselAction::Next);
        assert_eq!(h.clock.pending(), 1);

        h.clock.advance(u64::from(RESUME_AFTER_MS) - 1);
        assert!(!h.auto_playing());
        h.clock.advance(1);
        assert!(h.auto_playing());
        assert_eq!(h.index(), 2);
    }

    #[test]
    fn cancel_all_stops_everything() {
        let h = Harness::new(N);
        h.navigate(CarouselAction::Previous);
        h.timers.borrow_mut().cancel_all();
        assert!(!h.timers.borrow().is_resume_pending());

        h.clock.advance(60_000);
        assert_eq!(h.index(), N - 1);
        assert!(!h.auto_playing());
        assert_eq!(h.clock.pending(), 0);
    }

    #[test]
    fn dropping_timers_cancels_tasks() {
        let h = Harness::new(N);
        let Harness {
            clock,
            state,
            timers,
        } = h;
        drop(timers);
        clock.advance(60_000);
        assert_eq!(state.borrow().index(), 0);
    }

    #[test]
    fn star_fill_matches_rating() {
        for rating in 0..=5u8 {
            let stars = star_fill(rating);
            let filled = stars.iter().filter(|s| **s).count();
            assert_eq!(filled, usize::from(rating));
            assert_eq!(stars.len() - filled, 5 - usize::from(rating));
            assert!(stars[..filled].iter().all(|s| *s));
        }
    }

    #[test]
    fn star_fill_caps_at_five() {
        assert_eq!(star_fill(9), [true; 5]);
    }
}

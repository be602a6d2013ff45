use std::rc::Rc;

use serde::Deserialize;
use tracing::debug;

// how far the track moves per slide
//
// the markup was built for five slides, each a fifth of the track, so the stock
// behaviour is a fixed 20% step regardless of how many items exist.  PerSlide derives
// the step from the item count instead (100 / N), which is only identical when N = 5
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SlideGeometry {
    FixedStep { percent: f64 },
    PerSlide,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        SlideGeometry::FixedStep { percent: 20.0 }
    }
}

// carousel position
//
// index is always a valid position in [0, len), and len never changes after construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    // a carousel without items disables itself entirely
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }

        Some(CarouselState { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // never true, construction refuses zero items
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            debug!({ index = index, len = self.len }, "ignoring out of range slide");
            return;
        }

        self.index = index;
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn is_active(&self, dot: usize) -> bool {
        dot == self.index
    }

    pub fn offset_percent(&self, geometry: SlideGeometry) -> f64 {
        let step = match geometry {
            SlideGeometry::FixedStep { percent } => percent,
            SlideGeometry::PerSlide => 100.0 / self.len as f64,
        };

        self.index as f64 * step
    }

    pub fn track_transform(&self, geometry: SlideGeometry) -> String {
        format!("translateX(-{}%)", self.offset_percent(geometry))
    }
}

pub fn dot_label(dot: usize) -> String {
    format!("Ir para imagem {}", dot + 1)
}

// anything that can run a callback periodically
//
// dropping the returned handle must cancel the timer
pub trait IntervalScheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

// auto-advance
//
// holds at most one live timer.  resuming never picks up the remaining time of the
// previous period; it always arms a fresh, full one
pub struct Autoplay<S: IntervalScheduler> {
    scheduler: S,
    period_ms: u32,
    tick: Rc<dyn Fn()>,
    handle: Option<S::Handle>,
}

impl<S: IntervalScheduler> Autoplay<S> {
    pub fn new(scheduler: S, period_ms: u32, tick: impl Fn() + 'static) -> Self {
        Autoplay {
            scheduler,
            period_ms,
            tick: Rc::new(tick),
            handle: None,
        }
    }

    pub fn start(&mut self) {
        let tick = Rc::clone(&self.tick);

        // replacing the handle drops (and so cancels) any previous timer
        self.handle = Some(self.scheduler.every(self.period_ms, Box::new(move || tick())));
    }

    pub fn pause(&mut self) {
        if self.handle.take().is_some() {
            debug!("carousel autoplay paused");
        }
    }

    pub fn resume(&mut self) {
        debug!("carousel autoplay resumed");
        self.start();
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    struct Timer {
        period: u64,
        next_fire: u64,
        tick: Box<dyn FnMut()>,
        live: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        timers: Vec<Timer>,
    }

    // virtual time for driving an Autoplay without a browser
    #[derive(Clone, Default)]
    pub(crate) struct ManualClock {
        inner: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl IntervalScheduler for ManualClock {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut clock = self.inner.borrow_mut();
            let live = Rc::new(Cell::new(true));
            let period = u64::from(period_ms);
            let next_fire = clock.now + period;

            clock.timers.push(Timer {
                period,
                next_fire,
                tick,
                live: Rc::clone(&live),
            });

            ManualHandle(live)
        }
    }

    impl ManualClock {
        pub(crate) fn advance(&self, ms: u64) {
            let mut clock = self.inner.borrow_mut();
            let target = clock.now + ms;

            clock.timers.retain(|t| t.live.get());

            loop {
                let due = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.live.get() && t.next_fire <= target)
                    .min_by_key(|(_, t)| t.next_fire)
                    .map(|(i, _)| i);

                let Some(i) = due else { break };

                clock.now = clock.timers[i].next_fire;
                let timer = &mut clock.timers[i];
                timer.next_fire += timer.period;
                (timer.tick)();
            }

            clock.now = target;
        }

        pub(crate) fn live_timers(&self) -> usize {
            self.inner
                .borrow()
                .timers
                .iter()
                .filter(|t| t.live.get())
                .count()
        }
    }

    fn autoplay(len: usize) -> (ManualClock, Rc<RefCell<CarouselState>>, Autoplay<ManualClock>) {
        let clock = ManualClock::default();
        let state = Rc::new(RefCell::new(CarouselState::new(len).unwrap()));

        let ticked = Rc::clone(&state);
        let autoplay = Autoplay::new(clock.clone(), 5000, move || ticked.borrow_mut().next());

        (clock, state, autoplay)
    }

    #[test]
    fn empty_carousel_is_disabled() {
        assert!(CarouselState::new(0).is_none());

        let state = CarouselState::new(1).unwrap();
        assert!(!state.is_empty());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut state = CarouselState::new(3).unwrap();

        state.prev();
        assert_eq!(state.index(), 2);

        state.next();
        assert_eq!(state.index(), 0);

        state.next();
        state.next();
        state.next();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut state = CarouselState::new(1).unwrap();

        state.next();
        assert_eq!(state.index(), 0);
        state.prev();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut state = CarouselState::new(5).unwrap();

        state.go_to(3);
        assert_eq!(state.index(), 3);

        state.go_to(5);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn exactly_one_active_dot() {
        let mut state = CarouselState::new(4).unwrap();
        state.go_to(2);

        let active: Vec<_> = (0..state.len()).filter(|&d| state.is_active(d)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn fixed_step_geometry_ignores_item_count() {
        let mut state = CarouselState::new(3).unwrap();
        let geometry = SlideGeometry::default();

        assert_eq!(state.track_transform(geometry), "translateX(-0%)");

        state.go_to(2);
        assert_eq!(state.offset_percent(geometry), 40.0);
        assert_eq!(state.track_transform(geometry), "translateX(-40%)");
    }

    #[test]
    fn per_slide_geometry_divides_the_track() {
        let mut state = CarouselState::new(4).unwrap();
        state.go_to(3);

        assert_eq!(state.offset_percent(SlideGeometry::PerSlide), 75.0);
    }

    #[test]
    fn dot_labels_are_one_based() {
        assert_eq!(dot_label(0), "Ir para imagem 1");
        assert_eq!(dot_label(4), "Ir para imagem 5");
    }

    #[test]
    fn autoplay_advances_every_period() {
        let (clock, state, mut autoplay) = autoplay(5);
        autoplay.start();

        clock.advance(4999);
        assert_eq!(state.borrow().index(), 0);

        clock.advance(1);
        assert_eq!(state.borrow().index(), 1);

        clock.advance(15000);
        assert_eq!(state.borrow().index(), 4);

        clock.advance(5000);
        assert_eq!(state.borrow().index(), 0);
    }

    #[test]
    fn hover_pauses_and_leave_rearms_a_full_period() {
        let (clock, state, mut autoplay) = autoplay(5);
        autoplay.start();

        clock.advance(5000);
        clock.advance(3000);
        assert_eq!(state.borrow().index(), 1);

        autoplay.pause();
        assert!(!autoplay.is_running());
        clock.advance(60_000);
        assert_eq!(state.borrow().index(), 1);

        autoplay.resume();
        clock.advance(4999);
        assert_eq!(state.borrow().index(), 1);

        clock.advance(1);
        assert_eq!(state.borrow().index(), 2);
    }

    #[test]
    fn restarting_keeps_a_single_timer() {
        let (clock, state, mut autoplay) = autoplay(5);

        autoplay.start();
        autoplay.resume();
        autoplay.resume();
        assert_eq!(clock.live_timers(), 1);

        clock.advance(5000);
        assert_eq!(state.borrow().index(), 1);

        drop(autoplay);
        assert_eq!(clock.live_timers(), 0);
    }
}

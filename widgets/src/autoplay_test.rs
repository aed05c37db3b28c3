use super::*;

use std::cell::Cell;
use std::rc::Rc;

/// Timer stand-in that tracks how many handles are alive.
struct Handle {
    live: Rc<Cell<usize>>,
}

impl Handle {
    fn start(live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self { live: Rc::clone(live) }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[test]
fn new_slot_is_stopped() {
    let slot = Autoplay::<Handle>::new(5000);
    assert!(!slot.is_running());
    assert_eq!(slot.period_ms(), 5000);
}

#[test]
fn resume_passes_period_to_starter() {
    let live = Rc::new(Cell::new(0));
    let mut slot = Autoplay::new(1234);
    let mut seen = 0;
    slot.resume(|period| {
        seen = period;
        Handle::start(&live)
    });
    assert_eq!(seen, 1234);
    assert!(slot.is_running());
    assert_eq!(live.get(), 1);
}

#[test]
fn resume_while_running_replaces_timer() {
    let live = Rc::new(Cell::new(0));
    let mut slot = Autoplay::new(5000);
    slot.resume(|_| Handle::start(&live));
    slot.resume(|_| Handle::start(&live));
    slot.resume(|_| Handle::start(&live));
    assert_eq!(live.get(), 1);
}

#[test]
fn pause_cancels_running_timer() {
    let live = Rc::new(Cell::new(0));
    let mut slot = Autoplay::new(5000);
    slot.resume(|_| Handle::start(&live));
    assert!(slot.pause());
    assert_eq!(live.get(), 0);
    assert!(!slot.is_running());
}

#[test]
fn pause_when_stopped_is_noop() {
    let mut slot = Autoplay::<Handle>::new(5000);
    assert!(!slot.pause());
    assert!(!slot.pause());
}

#[test]
fn hover_cycle_never_stacks_timers() {
    let live = Rc::new(Cell::new(0));
    let mut slot = Autoplay::new(5000);
    slot.resume(|_| Handle::start(&live));
    for _ in 0..10 {
        slot.pause();
        slot.resume(|_| Handle::start(&live));
        slot.resume(|_| Handle::start(&live));
        assert_eq!(live.get(), 1);
    }
}

#[test]
fn dropping_slot_cancels_timer() {
    let live = Rc::new(Cell::new(0));
    {
        let mut slot = Autoplay::new(5000);
        slot.resume(|_| Handle::start(&live));
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}

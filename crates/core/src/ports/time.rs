use chrono::{DateTime, Duration, Local, TimeZone};
use std::cell::RefCell;
use std::rc::Rc;

/// Real-time source sampled by the simulated clock
pub trait Clock {
    type Tz: TimeZone;

    /// Current wall-clock time
    fn now(&self) -> DateTime<Self::Tz>;
}

/// System clock implementation, in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Hand-advanced clock for tests. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock<Tz: TimeZone> {
    now: Rc<RefCell<DateTime<Tz>>>,
}

impl<Tz: TimeZone> ManualClock<Tz> {
    pub fn new(start: DateTime<Tz>) -> Self {
        Self {
            now: Rc::new(RefCell::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Tz>) {
        *self.now.borrow_mut() = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.borrow_mut();
        let next = now.clone() + by;
        *now = next;
    }
}

impl<Tz: TimeZone> Clock for ManualClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.now.borrow().clone()
    }
}

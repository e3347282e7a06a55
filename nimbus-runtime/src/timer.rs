//! One-shot timers on embassy-time
//!
//! Deadlines live in a small shared table. The event loop waits on the
//! earliest one and reports expiry with the handle that was issued, so
//! the face can tell its readiness fallback from a loading frame.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Instant};
use heapless::Vec;

use nimbus_core::traits::{ServiceError, TimerHandle, TimerService};

/// Timers that may be pending at once
const MAX_TIMERS: usize = 4;

type Deadlines = Vec<(TimerHandle, Instant), MAX_TIMERS>;

static DEADLINES: Mutex<CriticalSectionRawMutex, RefCell<Deadlines>> =
    Mutex::new(RefCell::new(Vec::new()));

/// The earliest pending deadline, if any
pub fn pending() -> Option<(TimerHandle, Instant)> {
    DEADLINES.lock(|table| table.borrow().iter().copied().min_by_key(|&(_, at)| at))
}

/// Remove `handle` from the table
///
/// Returns whether it was there, i.e. whether `handle` was still live.
pub fn take(handle: TimerHandle) -> bool {
    DEADLINES.lock(|table| {
        let mut table = table.borrow_mut();
        match table.iter().position(|&(pending, _)| pending == handle) {
            Some(index) => {
                table.swap_remove(index);
                true
            }
            None => false,
        }
    })
}

/// [`TimerService`] backed by the shared deadline table
pub struct EmbassyTimers {
    next_handle: u32,
}

impl EmbassyTimers {
    pub const fn new() -> Self {
        Self { next_handle: 1 }
    }
}

impl Default for EmbassyTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService for EmbassyTimers {
    fn schedule(&mut self, delay_ms: u32) -> Result<TimerHandle, ServiceError> {
        let handle = TimerHandle(self.next_handle);
        let at = Instant::now() + Duration::from_millis(u64::from(delay_ms));

        DEADLINES
            .lock(|table| table.borrow_mut().push((handle, at)))
            .map_err(|_| ServiceError::NoTimers)?;

        self.next_handle = self.next_handle.wrapping_add(1).max(1);
        defmt::trace!("timer {} due in {} ms", handle.0, delay_ms);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if take(handle) {
            defmt::trace!("timer {} cancelled", handle.0);
        }
    }
}

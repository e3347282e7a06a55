//! Minute ticks
//!
//! [`minute_ticks`] wakes at every minute boundary of the board clock and
//! posts a [`HostEvent::Tick`] while the face holds a tick subscription.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Timer};

use nimbus_core::clock::{TickEvent, TimeUnits};
use nimbus_core::traits::{Clock, ServiceError, TickService};

use crate::channels::{HostEvent, HOST_EVENTS};

static SUBSCRIBED: Mutex<CriticalSectionRawMutex, Cell<Option<TimeUnits>>> =
    Mutex::new(Cell::new(None));

fn subscription() -> Option<TimeUnits> {
    SUBSCRIBED.lock(|s| s.get())
}

/// [`TickService`] that arms the shared tick task
#[derive(Default)]
pub struct MinuteTicks;

impl TickService for MinuteTicks {
    fn subscribe_ticks(&mut self, units: TimeUnits) -> Result<(), ServiceError> {
        SUBSCRIBED.lock(|s| {
            if s.get().is_some() {
                return Err(ServiceError::AlreadySubscribed);
            }
            s.set(Some(units));
            Ok(())
        })
    }

    fn unsubscribe_ticks(&mut self) {
        SUBSCRIBED.lock(|s| s.set(None));
    }
}

/// Tick loop; run it from a board task
///
/// Sleeps to the next minute boundary, reads the clock and reports the
/// units that changed since the previous tick. Ticks whose changes do not
/// include a subscribed unit are dropped.
pub async fn minute_ticks<C: Clock>(clock: C) -> ! {
    defmt::info!("tick task started");

    let mut prev = clock.now();
    loop {
        let to_boundary = 60 - u64::from(prev.second.min(59));
        Timer::after(Duration::from_secs(to_boundary)).await;

        let now = clock.now();
        let units = TimeUnits::between(&prev, &now);
        prev = now;

        let Some(wanted) = subscription() else {
            continue;
        };
        if units.bits() & wanted.bits() == 0 {
            continue;
        }

        if HOST_EVENTS.try_send(HostEvent::Tick(TickEvent::new(now, units))).is_err() {
            defmt::warn!("host event channel full, dropping tick");
        }
    }
}

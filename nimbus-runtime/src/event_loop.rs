//! Watchface event loop
//!
//! Owns the [`Watchface`] for its whole life and feeds it one event at a
//! time: host events, companion messages, timers and the stop signal.
//! Handlers never block, so a single select is the scheduler.

use core::future::pending;

use embassy_futures::select::{select4, Either4};
use embassy_time::Timer;

use nimbus_core::traits::{FaceDisplay, Platform, Storage, TimerHandle, WeatherLink};
use nimbus_core::{FaceError, Watchface};

use crate::channels::{HostEvent, HOST_EVENTS, INBOUND, STOP};
use crate::timer;

/// Start the face and run it until [`STOP`] is signalled
///
/// Startup errors are returned with everything already rolled back. On
/// stop the face is shut down before returning.
pub async fn run<P, L, S, D>(face: &mut Watchface<P, L, S, D>) -> Result<(), FaceError>
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    STOP.reset();
    face.start()?;
    defmt::info!("event loop running");

    loop {
        let event = select4(
            HOST_EVENTS.receive(),
            INBOUND.receive(),
            timer_expiry(),
            STOP.wait(),
        )
        .await;

        match event {
            Either4::First(host) => handle_host_event(face, host),
            Either4::Second(message) => {
                defmt::debug!("inbound {}", message.name());
                face.on_message(message);
            }
            Either4::Third(handle) => {
                if timer::take(handle) {
                    face.on_timer(handle);
                }
            }
            Either4::Fourth(()) => break,
        }
    }

    defmt::info!("event loop stopping");
    face.stop();
    Ok(())
}

fn handle_host_event<P, L, S, D>(face: &mut Watchface<P, L, S, D>, event: HostEvent)
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    match event {
        HostEvent::Tick(tick) => {
            let plan = face.on_tick(&tick);
            defmt::trace!("tick {}:{} -> {}", tick.time.hour, tick.time.minute, plan);
        }
        HostEvent::Connection(connected) => face.on_connection(connected),
        HostEvent::Battery(state) => face.on_battery(state),
    }
}

/// Resolve when the earliest deadline passes, or never if none is pending
///
/// The slot is re-read on every loop iteration, so a timer scheduled or
/// cancelled by a handler is picked up on the next select.
async fn timer_expiry() -> TimerHandle {
    match timer::pending() {
        Some((handle, at)) => {
            Timer::at(at).await;
            handle
        }
        None => pending().await,
    }
}

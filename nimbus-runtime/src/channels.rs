//! Inter-task communication channels
//!
//! Everything the event loop reacts to arrives through these statics.
//! Producers may be tasks or interrupt handlers.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use nimbus_core::clock::TickEvent;
use nimbus_core::traits::BatteryState;
use nimbus_protocol::{CompanionMessage, WatchMessage};

/// Channel capacity for host service events
const HOST_EVENT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for decoded companion messages
const INBOUND_CHANNEL_SIZE: usize = 4;

/// Channel capacity for messages waiting to go out on the link
const OUTBOUND_CHANNEL_SIZE: usize = 2;

/// Notification from a host service
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum HostEvent {
    /// Clock tick (only sent while ticks are subscribed)
    Tick(TickEvent),
    /// Phone connection changed
    Connection(bool),
    /// Battery state changed
    Battery(BatteryState),
}

/// Host service events (ticks, connectivity, battery)
pub static HOST_EVENTS: Channel<CriticalSectionRawMutex, HostEvent, HOST_EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Messages decoded from the companion link
pub static INBOUND: Channel<CriticalSectionRawMutex, CompanionMessage, INBOUND_CHANNEL_SIZE> =
    Channel::new();

/// Messages queued for the companion link
pub static OUTBOUND: Channel<CriticalSectionRawMutex, WatchMessage, OUTBOUND_CHANNEL_SIZE> =
    Channel::new();

/// Ask the event loop to shut the face down and return
pub static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

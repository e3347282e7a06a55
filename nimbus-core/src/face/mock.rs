//! Recording collaborators for face tests

use heapless::String;
use nimbus_protocol::WeatherRequest;

use super::Watchface;
use crate::clock::{TimeUnits, WallTime, Weekday};
use crate::color::BackgroundColor;
use crate::config::{save_state, FaceConfig, HourFormat, PersistedState, Settings};
use crate::traits::{
    BatteryMonitor, BatteryState, Clock, Connectivity, DisplayError, FaceDisplay, Haptics,
    LayerId, LinkError, Rect, ServiceError, Storage, StorageError, StorageKey, TickService,
    TimerHandle, TimerService, VibePattern, WeatherLink, WeatherView, LAYER_COUNT,
};
use crate::weather::WeatherData;

pub type MockFace = Watchface<MockPlatform, MockLink, MockStorage, MockDisplay>;

/// 2023-11-14 local time at `hour:minute`
pub fn at(hour: u8, minute: u8) -> WallTime {
    WallTime {
        epoch: 1_700_000_000,
        year: 2023,
        month: 11,
        day: 14,
        weekday: Weekday::Tuesday,
        hour,
        minute,
        second: 0,
    }
}

pub fn face() -> MockFace {
    face_with(
        MockPlatform::default(),
        MockLink::default(),
        MockStorage::default(),
        MockDisplay::default(),
    )
}

pub fn face_with(
    platform: MockPlatform,
    link: MockLink,
    storage: MockStorage,
    display: MockDisplay,
) -> MockFace {
    Watchface::new(platform, link, storage, display, FaceConfig::default())
}

/// Storage holding a previous session's state with background `color`
pub fn persisted(color: &str) -> MockStorage {
    let mut weather = WeatherData::new();
    weather.temperature = 55;
    weather.updated = 1_699_990_000;
    let mut state = PersistedState::capture(&Settings::default(), &weather);
    state.color = String::try_from(color).unwrap();

    let mut storage = MockStorage::default();
    save_state(&mut storage, &state).unwrap();
    storage.writes = 0;
    storage
}

pub struct MockPlatform {
    pub now: WallTime,
    pub elapsed_ms: u32,
    next_handle: u32,
    pub scheduled: Vec<u32>,
    pub cancelled: Vec<TimerHandle>,
    pub ticks_subscribed: bool,
    pub fail_tick_subscribe: bool,
    pub connected: bool,
    pub connection_subscribed: bool,
    pub battery: BatteryState,
    pub battery_subscribed: bool,
    pub vibes: Vec<VibePattern>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            now: at(9, 41),
            elapsed_ms: 0,
            next_handle: 1,
            scheduled: Vec::new(),
            cancelled: Vec::new(),
            ticks_subscribed: false,
            fail_tick_subscribe: false,
            connected: true,
            connection_subscribed: false,
            battery: BatteryState {
                percent: 80,
                charging: false,
                plugged: false,
            },
            battery_subscribed: false,
            vibes: Vec::new(),
        }
    }
}

impl MockPlatform {
    /// Platform whose tick service refuses subscriptions
    pub fn failing_ticks() -> Self {
        Self {
            fail_tick_subscribe: true,
            ..Self::default()
        }
    }

    pub fn advance_ms(&mut self, ms: u32) {
        self.elapsed_ms += ms;
    }
}

impl Clock for MockPlatform {
    fn now(&self) -> WallTime {
        self.now
    }
}

impl TimerService for MockPlatform {
    fn schedule(&mut self, delay_ms: u32) -> Result<TimerHandle, ServiceError> {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.scheduled.push(delay_ms);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.cancelled.push(handle);
    }
}

impl TickService for MockPlatform {
    fn subscribe_ticks(&mut self, _units: TimeUnits) -> Result<(), ServiceError> {
        if self.fail_tick_subscribe {
            return Err(ServiceError::AlreadySubscribed);
        }
        self.ticks_subscribed = true;
        Ok(())
    }

    fn unsubscribe_ticks(&mut self) {
        self.ticks_subscribed = false;
    }
}

impl Connectivity for MockPlatform {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn subscribe_connection(&mut self) -> Result<(), ServiceError> {
        self.connection_subscribed = true;
        Ok(())
    }

    fn unsubscribe_connection(&mut self) {
        self.connection_subscribed = false;
    }
}

impl BatteryMonitor for MockPlatform {
    fn battery(&self) -> BatteryState {
        self.battery
    }

    fn subscribe_battery(&mut self) -> Result<(), ServiceError> {
        self.battery_subscribed = true;
        Ok(())
    }

    fn unsubscribe_battery(&mut self) {
        self.battery_subscribed = false;
    }
}

impl Haptics for MockPlatform {
    fn vibrate(&mut self, pattern: VibePattern) {
        self.vibes.push(pattern);
    }
}

#[derive(Default)]
pub struct MockLink {
    pub opened: bool,
    pub closed: bool,
    pub close_count: u32,
    pub attempts: u32,
    pub requests: Vec<WeatherRequest>,
    pub fail_open: bool,
    pub fail_requests: Option<LinkError>,
}

impl WeatherLink for MockLink {
    fn open(&mut self) -> Result<(), LinkError> {
        if self.fail_open {
            return Err(LinkError::Disconnected);
        }
        self.opened = true;
        self.closed = false;
        Ok(())
    }

    fn request_weather(&mut self, request: &WeatherRequest) -> Result<(), LinkError> {
        self.attempts += 1;
        if let Some(e) = self.fail_requests {
            return Err(e);
        }
        self.requests.push(request.clone());
        Ok(())
    }

    fn close(&mut self) {
        self.opened = false;
        self.closed = true;
        self.close_count += 1;
    }
}

#[derive(Default, Clone)]
pub struct MockStorage {
    pub value: Option<Vec<u8>>,
    pub writes: u32,
    pub fail_reads: bool,
}

impl Storage for MockStorage {
    fn read(&mut self, _key: StorageKey, buf: &mut [u8]) -> Result<usize, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Io);
        }
        let value = self.value.as_ref().ok_or(StorageError::NotFound)?;
        if value.len() > buf.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buf[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    fn write(&mut self, _key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        self.value = Some(data.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Display calls, in the order they were made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    PushWindow,
    ReleaseWindow,
    Background(BackgroundColor),
    CreateLayer(LayerId),
    Destroy(LayerId),
    Time,
    Date,
    Weather,
    Animate,
    Debug,
    Battery,
    Connection(bool),
}

#[derive(Default)]
pub struct MockDisplay {
    pub calls: Vec<Call>,
    pub window: bool,
    pub layers: [bool; LAYER_COUNT],
    pub background: Option<BackgroundColor>,
    pub last_view: Option<WeatherView>,
    pub battery: Option<BatteryState>,
    pub battery_visible: Option<bool>,
    pub connection: Option<bool>,
    pub fail_layer: Option<LayerId>,
    pub fail_weather: bool,
}

impl MockDisplay {
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl FaceDisplay for MockDisplay {
    fn push_window(&mut self) -> Result<(), DisplayError> {
        self.window = true;
        self.calls.push(Call::PushWindow);
        Ok(())
    }

    fn release_window(&mut self) {
        self.window = false;
        self.calls.push(Call::ReleaseWindow);
    }

    fn set_background(&mut self, color: BackgroundColor) -> Result<(), DisplayError> {
        self.background = Some(color);
        self.calls.push(Call::Background(color));
        Ok(())
    }

    fn create_layer(&mut self, id: LayerId, _frame: Rect) -> Result<(), DisplayError> {
        if self.fail_layer == Some(id) {
            return Err(DisplayError::OutOfMemory);
        }
        self.layers[id.index()] = true;
        self.calls.push(Call::CreateLayer(id));
        Ok(())
    }

    fn destroy_layer(&mut self, id: LayerId) {
        self.layers[id.index()] = false;
        self.calls.push(Call::Destroy(id));
    }

    fn update_time(&mut self, _time: &WallTime, _format: HourFormat) -> Result<(), DisplayError> {
        self.calls.push(Call::Time);
        Ok(())
    }

    fn update_date(&mut self, _time: &WallTime) -> Result<(), DisplayError> {
        self.calls.push(Call::Date);
        Ok(())
    }

    fn update_weather(
        &mut self,
        _weather: &WeatherData,
        view: &WeatherView,
    ) -> Result<(), DisplayError> {
        if self.fail_weather {
            return Err(DisplayError::Backend);
        }
        self.last_view = Some(*view);
        self.calls.push(Call::Weather);
        Ok(())
    }

    fn animate_weather(
        &mut self,
        _weather: &WeatherData,
        _view: &WeatherView,
    ) -> Result<(), DisplayError> {
        self.calls.push(Call::Animate);
        Ok(())
    }

    fn update_debug(&mut self, _weather: &WeatherData, _enabled: bool) -> Result<(), DisplayError> {
        self.calls.push(Call::Debug);
        Ok(())
    }

    fn update_battery(&mut self, state: BatteryState, enabled: bool) -> Result<(), DisplayError> {
        self.battery = Some(state);
        self.battery_visible = Some(enabled);
        self.calls.push(Call::Battery);
        Ok(())
    }

    fn update_connection(&mut self, connected: bool) -> Result<(), DisplayError> {
        self.connection = Some(connected);
        self.calls.push(Call::Connection(connected));
        Ok(())
    }
}

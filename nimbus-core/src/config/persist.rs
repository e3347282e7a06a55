//! Persisted face state
//!
//! Settings and the last weather record survive restarts so the face can
//! draw something useful before the companion answers. Stored as one
//! postcard blob under [`StorageKey::FaceState`].

use heapless::String;
use serde::{Deserialize, Serialize};

use nimbus_protocol::reports::MAX_TOKEN_LEN;

use super::settings::Settings;
use crate::color::BackgroundColor;
use crate::traits::{Storage, StorageError, StorageKey};
use crate::weather::WeatherData;

/// Magic number to identify a face state record
pub const STATE_MAGIC: u32 = 0x4E4D4253; // "NMBS"

/// Current state format version
pub const STATE_VERSION: u8 = 1;

/// Upper bound for an encoded record
pub const MAX_STATE_SIZE: usize = 256;

/// Record written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Background color token
    pub color: String<MAX_TOKEN_LEN>,
    pub settings: Settings,
    pub weather: WeatherData,
}

impl PersistedState {
    /// Snapshot the live state
    pub fn capture(settings: &Settings, weather: &WeatherData) -> Self {
        Self {
            magic: STATE_MAGIC,
            version: STATE_VERSION,
            color: String::try_from(weather.color.token()).unwrap_or_default(),
            settings: *settings,
            weather: weather.clone(),
        }
    }

    /// Check if the header matches this build
    pub fn is_valid(&self) -> bool {
        self.magic == STATE_MAGIC && self.version == STATE_VERSION
    }

    /// Turn the record back into live state
    ///
    /// The color token goes through the color mapper, so anything the
    /// mapper does not know comes back as the default.
    pub fn restore(self) -> (Settings, WeatherData) {
        let mut weather = self.weather;
        weather.color = BackgroundColor::from_token(&self.color);
        (self.settings, weather)
    }

    /// Serialize into `buf`, returning the used prefix
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], StorageError> {
        postcard::to_slice(self, buf).map_err(|_| StorageError::BufferTooSmall)
    }

    /// Deserialize and validate
    pub fn decode(bytes: &[u8]) -> Result<Self, StorageError> {
        let state: PersistedState =
            postcard::from_bytes(bytes).map_err(|_| StorageError::Corrupted)?;
        if !state.is_valid() {
            return Err(StorageError::Corrupted);
        }
        Ok(state)
    }
}

/// Load the persisted state
///
/// A missing, truncated or foreign record is treated as absent. Only
/// backend failures are returned as errors.
pub fn load_state<S: Storage>(storage: &mut S) -> Result<Option<PersistedState>, StorageError> {
    let mut buf = [0u8; MAX_STATE_SIZE];
    let len = match storage.read(StorageKey::FaceState, &mut buf) {
        Ok(len) => len,
        Err(StorageError::NotFound) => return Ok(None),
        Err(StorageError::BufferTooSmall | StorageError::Corrupted) => {
            log_warn!("stored face state unreadable, ignoring");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match PersistedState::decode(&buf[..len.min(MAX_STATE_SIZE)]) {
        Ok(state) => Ok(Some(state)),
        Err(_) => {
            log_warn!("stored face state invalid, ignoring");
            Ok(None)
        }
    }
}

/// Write the state to storage
pub fn save_state<S: Storage>(storage: &mut S, state: &PersistedState) -> Result<(), StorageError> {
    let mut buf = [0u8; MAX_STATE_SIZE];
    let used = state.encode(&mut buf)?;
    storage.write(StorageKey::FaceState, used)
}

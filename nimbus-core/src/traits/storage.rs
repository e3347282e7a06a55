//! Persistent key-value storage

/// Errors from the storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Nothing stored under the key
    NotFound,
    /// Stored value does not fit the read buffer
    BufferTooSmall,
    /// Stored value failed validation
    Corrupted,
    /// No room left for the value
    Full,
    /// Backend I/O failure
    Io,
}

/// Keys used by the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum StorageKey {
    /// Settings and last weather record
    FaceState = 0,
}

impl StorageKey {
    pub const fn id(self) -> u32 {
        self as u32
    }
}

/// Trait for persistent storage
///
/// Values are opaque byte blobs; the face owns their encoding.
pub trait Storage {
    /// Read the value for `key` into `buf`, returning its length
    fn read(&mut self, key: StorageKey, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Replace the value for `key`
    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;
}

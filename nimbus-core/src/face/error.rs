//! Face error type

use nimbus_protocol::FrameError;

use crate::config::ConfigError;
use crate::traits::{DisplayError, LinkError, ServiceError, StorageError};

/// Errors surfaced by the watchface
///
/// Each collaborator boundary keeps its own enum; this wraps them so `?`
/// composes across a startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    Display(DisplayError),
    Link(LinkError),
    Storage(StorageError),
    Service(ServiceError),
    Frame(FrameError),
    Config(ConfigError),
    /// `start` called on a running face
    AlreadyRunning,
}

impl From<DisplayError> for FaceError {
    fn from(e: DisplayError) -> Self {
        FaceError::Display(e)
    }
}

impl From<LinkError> for FaceError {
    fn from(e: LinkError) -> Self {
        FaceError::Link(e)
    }
}

impl From<StorageError> for FaceError {
    fn from(e: StorageError) -> Self {
        FaceError::Storage(e)
    }
}

impl From<ServiceError> for FaceError {
    fn from(e: ServiceError) -> Self {
        FaceError::Service(e)
    }
}

impl From<FrameError> for FaceError {
    fn from(e: FrameError) -> Self {
        FaceError::Frame(e)
    }
}

impl From<ConfigError> for FaceError {
    fn from(e: ConfigError) -> Self {
        FaceError::Config(e)
    }
}

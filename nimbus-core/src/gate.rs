//! Readiness gate for the first weather request
//!
//! The companion needs a moment after launch before it can service
//! requests. It says so with a ready message; if that never arrives, a
//! fallback timer opens the gate instead. Both paths call [`ReadinessGate::open`]
//! and only the first one wins.

/// What opened the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Ready message from the companion
    Signal,
    /// Fallback timer expired
    Timeout,
}

/// Gate states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateState {
    /// No request may be issued yet
    #[default]
    Waiting,
    /// Requests allowed for the rest of the process lifetime
    Ready(Trigger),
}

/// Two-state WAITING → READY latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadinessGate {
    state: GateState,
}

impl ReadinessGate {
    pub const fn new() -> Self {
        Self {
            state: GateState::Waiting,
        }
    }

    /// Current state
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether periodic requests are allowed
    pub fn is_open(&self) -> bool {
        matches!(self.state, GateState::Ready(_))
    }

    /// Which trigger opened the gate, if any
    pub fn opened_by(&self) -> Option<Trigger> {
        match self.state {
            GateState::Waiting => None,
            GateState::Ready(trigger) => Some(trigger),
        }
    }

    /// Attempt the WAITING → READY transition
    ///
    /// Returns `true` only for the call that performed the transition. The
    /// caller issues the initial request exactly when this returns `true`.
    pub fn open(&mut self, trigger: Trigger) -> bool {
        match self.state {
            GateState::Waiting => {
                self.state = GateState::Ready(trigger);
                true
            }
            GateState::Ready(_) => false,
        }
    }
}

//! Mediator runtime for one buffer pairing.
//!
//! The mediator owns a [`duet_engine::BufferState`], funnels notifications
//! from both buffer drivers plus the token timeout through a single queue,
//! and executes the engine's corrective actions against the drivers. Events
//! are processed strictly one at a time in arrival order; the engine itself
//! stays free of I/O and timers.
//!
//! Echo suppression is a driver obligation: a driver must not re-report a
//! change the mediator is applying through it, or the correction loop feeds
//! back on itself. See [`driver`] for the exact contracts.

/// Pairing configuration.
pub mod config;
/// Driver seams toward the live buffers and the user signal channel.
pub mod driver;
/// Sender half of the mediator's event queue.
pub mod handle;
/// The serialized event loop.
pub mod mediator;

pub use config::{ConfigError, SyncConfig};
pub use driver::{DriverError, PrimaryDriver, SecondaryDriver, UserSignal};
pub use handle::{MediatorClosed, MediatorHandle};
pub use mediator::Mediator;

//! Algolens Engine
//!
//! Connects the stepper to the scene: the executor plays queued animation
//! plans against the scene one timed step per tick pulse, and the
//! controller sequences stepper, dispatcher, executor and scene behind the
//! single public control surface.
//!
//! # Time model
//!
//! Everything is single-threaded and cooperative. An external pulse source
//! calls back periodically; the executor consumes exactly one unit of plan
//! progress per pulse. The stepper advances only on explicit request; the
//! scene intentionally lags the logical state, bounded by the plan queue.

mod controller;
mod error;
mod executor;
mod pulse;
mod registry;
mod session;

pub use controller::{Controller, ControllerConfig};
pub use error::{EngineError, Result};
pub use executor::Executor;
pub use pulse::{ManualPulse, TickPulse, TICK_MS};
pub use registry::{AlgorithmFactory, AlgorithmRegistry};
pub use session::{SessionId, Sessions};

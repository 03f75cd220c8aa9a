//! Algolens Dispatch
//!
//! Translates semantic events into timed animation plans. Handlers are pure
//! functions: dispatching builds a plan, and nothing touches the scene until
//! the executor runs the plan's steps. That separation lets plans queue up
//! and replay independent of real-time pressure.

mod dispatcher;
mod handlers;
mod plan;

pub use dispatcher::{DispatchContext, Dispatcher, Handler, Timing};
pub use handlers::register_defaults;
pub use plan::{AnimationPlan, PlanBuilder, PlanStep};

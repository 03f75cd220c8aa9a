//! Algolens Scene
//!
//! The one component allowed to mutate visual state. The scene owns a
//! bijective slot-to-visual mapping and exposes the narrow [`SceneOps`]
//! capability that animation steps run against. Concrete rendering sits
//! behind the [`Renderer`] collaborator; the scene never talks to a
//! rendering API directly.
//!
//! # Lifecycle
//!
//! `on_start` creates one visual per slot, `clean_up` destroys them all.
//! Every other operation between those two validates its slot and fails
//! with [`SceneError`] rather than corrupting the mapping.

mod capability;
mod renderer;
mod scene;

pub use capability::{Effect, SceneError, SceneOps};
pub use renderer::{DisplayHandle, HeadlessRenderer, ObjectState, Renderer};
pub use scene::Scene;

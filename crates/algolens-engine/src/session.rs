//! Session-keyed store for concurrently hosted visualizations.

use std::collections::HashMap;

use algolens_scene::Renderer;

use crate::controller::Controller;
use crate::pulse::TickPulse;

/// Identity of one hosted visualization session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Explicit session-to-controller store.
///
/// Owned by whichever host runs multiple visualizations at once and passed
/// around by handle; there is no ambient global registry. Replacing or
/// removing a session tears its controller down first.
#[derive(Default)]
pub struct Sessions<R: Renderer, P: TickPulse, Q: TickPulse> {
    controllers: HashMap<SessionId, Controller<R, P, Q>>,
}

impl<R: Renderer, P: TickPulse, Q: TickPulse> Sessions<R, P, Q> {
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }

    /// Install a controller for a session, tearing down any previous one.
    pub fn insert(&mut self, id: SessionId, controller: Controller<R, P, Q>) {
        if let Some(mut previous) = self.controllers.insert(id, controller) {
            previous.cleanup();
            tracing::info!(session = id.0, "replaced existing visualization");
        }
    }

    /// Borrow a session's controller.
    pub fn get(&self, id: SessionId) -> Option<&Controller<R, P, Q>> {
        self.controllers.get(&id)
    }

    /// Mutably borrow a session's controller.
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Controller<R, P, Q>> {
        self.controllers.get_mut(&id)
    }

    /// Remove a session, tearing its controller down.
    ///
    /// Returns `false` if the session did not exist.
    pub fn remove(&mut self, id: SessionId) -> bool {
        match self.controllers.remove(&id) {
            Some(mut controller) => {
                controller.cleanup();
                true
            }
            None => false,
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Check whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Ids of live sessions.
    pub fn ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.controllers.keys().copied()
    }
}

//! The visual-object collaborator behind the scene.

use std::collections::HashMap;

use glam::DVec3;

use algolens_model::Severity;

/// Opaque handle to one visual object owned by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub u64);

/// The scene's only dependency on concrete rendering.
///
/// A renderer owns the actual visual objects (display entities, meshes,
/// terminal cells, whatever the host draws with) and a status display.
/// The scene addresses objects exclusively through handles.
pub trait Renderer {
    /// Create a visual object at `position` showing `label`.
    fn create(&mut self, position: DVec3, label: &str) -> DisplayHandle;

    /// Destroy a visual object.
    fn remove(&mut self, handle: DisplayHandle);

    /// Move a visual object.
    fn move_to(&mut self, handle: DisplayHandle, position: DVec3);

    /// Toggle a visual object's highlight.
    fn set_highlight(&mut self, handle: DisplayHandle, highlighted: bool);

    /// Replace a visual object's label.
    fn set_label(&mut self, handle: DisplayHandle, text: &str);

    /// Update the status display.
    fn set_status(&mut self, text: &str, severity: Severity);
}

/// Recorded state of one headless visual object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectState {
    pub position: DVec3,
    pub label: String,
    pub highlighted: bool,
}

/// In-memory renderer.
///
/// Backs every test and any host without a rendering surface; records the
/// state each object would be drawn with.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    objects: HashMap<DisplayHandle, ObjectState>,
    next_id: u64,
    status: Option<(String, Severity)>,
    created: usize,
    removed: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a live object, if the handle is valid.
    pub fn object(&self, handle: DisplayHandle) -> Option<&ObjectState> {
        self.objects.get(&handle)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check whether no objects are live.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Last status text set, with its severity.
    pub fn status(&self) -> Option<&(String, Severity)> {
        self.status.as_ref()
    }

    /// Total objects created over the renderer's lifetime.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Total objects removed over the renderer's lifetime.
    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl Renderer for HeadlessRenderer {
    fn create(&mut self, position: DVec3, label: &str) -> DisplayHandle {
        let handle = DisplayHandle(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.objects.insert(
            handle,
            ObjectState {
                position,
                label: label.to_string(),
                highlighted: false,
            },
        );
        handle
    }

    fn remove(&mut self, handle: DisplayHandle) {
        if self.objects.remove(&handle).is_some() {
            self.removed += 1;
        } else {
            tracing::warn!(?handle, "remove of unknown display handle");
        }
    }

    fn move_to(&mut self, handle: DisplayHandle, position: DVec3) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.position = position;
        }
    }

    fn set_highlight(&mut self, handle: DisplayHandle, highlighted: bool) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.highlighted = highlighted;
        }
    }

    fn set_label(&mut self, handle: DisplayHandle, text: &str) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.label = text.to_string();
        }
    }

    fn set_status(&mut self, text: &str, severity: Severity) {
        self.status = Some((text.to_string(), severity));
    }
}

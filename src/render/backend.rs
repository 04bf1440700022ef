use crate::foundation::error::VitalityResult;
use crate::foundation::value::{PropMap, PropValue};

/// Opaque handle to a rendered object, issued by a [`Renderer`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Handle(pub u64);

/// Content drawn inside an object.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Content {
    /// Plain text, escaped by the renderer.
    Text(String),
    /// Foreign markup embedded verbatim.
    Html(String),
}

/// Everything a renderer needs to create one object.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectSpec {
    /// Primitive kind (`rect`, `text`, `tspan`, `html`, ...).
    pub kind: String,
    /// Presentation attributes.
    pub attrs: PropMap,
    /// Style properties.
    pub style: PropMap,
    /// Inner content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Containing object; destroying the parent destroys this object too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Handle>,
}

impl ObjectSpec {
    /// Empty spec of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: PropMap::new(),
            style: PropMap::new(),
            content: None,
            parent: None,
        }
    }

    /// Set an attribute.
    pub fn attr(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.attrs.insert(key.to_owned(), value.into());
        self
    }

    /// Set a style property.
    pub fn style(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.style.insert(key.to_owned(), value.into());
        self
    }

    /// Set the inner content.
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Nest this object inside `parent`.
    pub fn parent(mut self, parent: Handle) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Target state of a property animation.
///
/// Interpolation is always linear; the renderer starts from whatever values the object holds when
/// the call arrives.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimateSpec {
    /// Target attributes.
    pub attrs: PropMap,
    /// Target style properties.
    pub style: PropMap,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

/// The drawing surface the presenter drives.
///
/// Implementations own every object they create. Animations are fire-and-forget: the presenter
/// never waits on them and never cancels them; destroying an object silently ends any animation
/// still running on it.
pub trait Renderer {
    /// Create an object and return its handle.
    fn create_object(&mut self, spec: &ObjectSpec) -> VitalityResult<Handle>;

    /// Remove an object (and its children) from the canvas.
    fn destroy_object(&mut self, handle: Handle) -> VitalityResult<()>;

    /// Show or hide an object without destroying it.
    fn set_visibility(&mut self, handle: Handle, visible: bool) -> VitalityResult<()>;

    /// Start interpolating an object's properties toward `spec`.
    fn animate(&mut self, handle: Handle, spec: &AnimateSpec) -> VitalityResult<()>;

    /// Set the canvas background color.
    fn set_background(&mut self, color: &str) -> VitalityResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn create_object(&mut self, spec: &ObjectSpec) -> VitalityResult<Handle> {
        (**self).create_object(spec)
    }

    fn destroy_object(&mut self, handle: Handle) -> VitalityResult<()> {
        (**self).destroy_object(handle)
    }

    fn set_visibility(&mut self, handle: Handle, visible: bool) -> VitalityResult<()> {
        (**self).set_visibility(handle, visible)
    }

    fn animate(&mut self, handle: Handle, spec: &AnimateSpec) -> VitalityResult<()> {
        (**self).animate(handle, spec)
    }

    fn set_background(&mut self, color: &str) -> VitalityResult<()> {
        (**self).set_background(color)
    }
}

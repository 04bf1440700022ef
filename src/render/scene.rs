use std::collections::BTreeMap;
use std::time::Duration;

use crate::foundation::error::{VitalityError, VitalityResult};
use crate::foundation::value::PropMap;
use crate::render::animator::{AnimFrame, Animator};
use crate::render::backend::{AnimateSpec, Content, Handle, ObjectSpec, Renderer};

/// Primitive kinds a scene accepts.
pub const KNOWN_KINDS: &[&str] = &[
    "circle", "ellipse", "g", "html", "image", "line", "path", "polygon", "polyline", "rect",
    "text", "tspan",
];

/// One retained object.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Primitive kind.
    pub kind: String,
    /// Current attribute values.
    pub attrs: PropMap,
    /// Current style values.
    pub style: PropMap,
    /// Inner content.
    pub content: Option<Content>,
    /// Containing node.
    pub parent: Option<Handle>,
    /// Child nodes, in creation order.
    pub children: Vec<Handle>,
    /// Visibility flag; hidden nodes hide their children too.
    pub visible: bool,
}

/// Retained-mode renderer holding a tree of nodes.
///
/// Animations advance only when the host moves the scene clock with
/// [`SceneRenderer::advance_clock`] or jumps to their end with [`SceneRenderer::settle`].
#[derive(Debug)]
pub struct SceneRenderer {
    size: kurbo::Size,
    background: String,
    next: u64,
    nodes: BTreeMap<Handle, Node>,
    roots: Vec<Handle>,
    animator: Animator,
    now: Duration,
}

impl SceneRenderer {
    /// Empty scene of the given design size.
    pub fn new(size: kurbo::Size) -> Self {
        Self {
            size,
            background: crate::scene::model::default_background(),
            next: 0,
            nodes: BTreeMap::new(),
            roots: Vec::new(),
            animator: Animator::new(),
            now: Duration::ZERO,
        }
    }

    /// Design size.
    pub fn size(&self) -> kurbo::Size {
        self.size
    }

    /// Current background color.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Node for `handle`.
    pub fn node(&self, handle: Handle) -> Option<&Node> {
        self.nodes.get(&handle)
    }

    /// Top-level nodes in drawing order.
    pub fn roots(&self) -> &[Handle] {
        &self.roots
    }

    /// Number of nodes, children included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Scene clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether any animation is still running.
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    /// Move the scene clock forward and apply in-flight animations.
    pub fn advance_clock(&mut self, dt: Duration) {
        self.now += dt;
        let frames = self.animator.tick(self.now);
        self.apply(frames);
    }

    /// Finish every running animation at its target values.
    pub fn settle(&mut self) {
        let frames = self.animator.settle();
        self.apply(frames);
    }

    /// Current frame as an SVG document.
    pub fn to_svg(&self) -> String {
        crate::render::svg::to_svg(self)
    }

    fn apply(&mut self, frames: Vec<AnimFrame>) {
        for frame in frames {
            if let Some(node) = self.nodes.get_mut(&frame.handle) {
                node.attrs.extend(frame.attrs);
                node.style.extend(frame.style);
            }
        }
    }

    fn node_mut(&mut self, handle: Handle, op: &str) -> VitalityResult<&mut Node> {
        self.nodes.get_mut(&handle).ok_or_else(|| {
            VitalityError::render(format!("{op} on unknown handle {}", handle.0))
        })
    }
}

fn check_kind(kind: &str) -> VitalityResult<()> {
    if KNOWN_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(VitalityError::render(format!("unknown primitive kind \"{kind}\"")))
    }
}

/// Property keys look like `x`, `font-size`, `stroke_width` or `xlink:href`.
fn check_keys(map: &PropMap, what: &str) -> VitalityResult<()> {
    for key in map.keys() {
        let mut chars = key.chars();
        let ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));
        if !ok {
            return Err(VitalityError::render(format!("malformed {what} key \"{key}\"")));
        }
    }
    Ok(())
}

impl Renderer for SceneRenderer {
    fn create_object(&mut self, spec: &ObjectSpec) -> VitalityResult<Handle> {
        check_kind(&spec.kind)?;
        check_keys(&spec.attrs, "attribute")?;
        check_keys(&spec.style, "style")?;
        let handle = Handle(self.next);
        match spec.parent {
            Some(parent) => self.node_mut(parent, "create child")?.children.push(handle),
            None => self.roots.push(handle),
        }
        self.next += 1;
        self.nodes.insert(
            handle,
            Node {
                kind: spec.kind.clone(),
                attrs: spec.attrs.clone(),
                style: spec.style.clone(),
                content: spec.content.clone(),
                parent: spec.parent,
                children: Vec::new(),
                visible: true,
            },
        );
        Ok(handle)
    }

    fn destroy_object(&mut self, handle: Handle) -> VitalityResult<()> {
        let parent = self.node_mut(handle, "destroy")?.parent;
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(p) => p.children.retain(|&c| c != handle),
            None => self.roots.retain(|&r| r != handle),
        }
        let mut doomed = vec![handle];
        while let Some(h) = doomed.pop() {
            if let Some(node) = self.nodes.remove(&h) {
                doomed.extend(node.children);
            }
            self.animator.cancel(h);
        }
        Ok(())
    }

    fn set_visibility(&mut self, handle: Handle, visible: bool) -> VitalityResult<()> {
        self.node_mut(handle, "set_visibility")?.visible = visible;
        Ok(())
    }

    fn animate(&mut self, handle: Handle, spec: &AnimateSpec) -> VitalityResult<()> {
        check_keys(&spec.attrs, "attribute")?;
        check_keys(&spec.style, "style")?;
        let Some(node) = self.nodes.get(&handle) else {
            return Err(VitalityError::render(format!("animate on unknown handle {}", handle.0)));
        };
        self.animator
            .start(handle, self.now, &node.attrs, &node.style, spec);
        Ok(())
    }

    fn set_background(&mut self, color: &str) -> VitalityResult<()> {
        color.clone_into(&mut self.background);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;

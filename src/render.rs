//! The renderer boundary and the renderers shipped with the crate.

/// Time-driven property interpolation.
pub mod animator;
/// The `Renderer` trait and its call types.
pub mod backend;
/// Call-recording renderer.
pub mod recording;
/// Retained-scene renderer.
pub mod scene;
/// SVG export of a retained scene.
pub mod svg;

//! Vitality is a slide-deck presentation engine.
//!
//! A deck is a JSON document of slides, each with a layout and free-form visual objects. The
//! [`Presenter`] walks the deck one build step or one slide at a time and drives a [`Renderer`]:
//!
//! - Objects sharing an `id` across two consecutive slides survive a forward advance and morph
//!   into their new attributes instead of being redrawn.
//! - Objects marked with `build` start hidden and are revealed in groups before the slide moves on.
//! - Jumps by index or name rebuild the target slide from scratch and can be undone once.
//!
//! Drawing is delegated through the [`Renderer`] trait. [`RecordingRenderer`] records calls for
//! tests and traces; [`SceneRenderer`] keeps a retained scene and exports SVG frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Navigation engine.
pub mod engine;
/// Host input handling.
pub mod input;
/// Renderer boundary and implementations.
pub mod render;
/// Boundary deck model.
pub mod scene;
/// Canvas placement inside a window.
pub mod viewport;

pub use crate::foundation::error::{VitalityError, VitalityResult};
pub use crate::foundation::value::{Lerp, PropMap, PropValue};

pub use crate::engine::builds::BuildController;
pub use crate::engine::diff::{ObjectStep, TransitionPlan, plan_transition};
pub use crate::engine::presenter::{Mode, Position, Presenter, PresenterOpts};
pub use crate::engine::registry::{ObjectRegistry, RegistryEntry};
pub use crate::input::cursor::CursorIdle;
pub use crate::input::keymap::{Command, Key, KeyMap, parse_keys};
pub use crate::render::animator::{AnimFrame, Animator};
pub use crate::render::backend::{AnimateSpec, Content, Handle, ObjectSpec, Renderer};
pub use crate::render::recording::{DrawCommand, RecordingRenderer};
pub use crate::render::scene::{Node, SceneRenderer};
pub use crate::scene::deck::Deck;
pub use crate::scene::model::{Build, DeckDef, LayoutDef, ObjectDef, SlideDef};
pub use crate::viewport::{Viewport, fit};

use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::error::{VitalityError, VitalityResult};
use crate::render::backend::{AnimateSpec, Handle, ObjectSpec, Renderer};

/// One renderer call, as received.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// `create_object`.
    Create {
        /// Issued handle.
        handle: Handle,
        /// Requested object.
        spec: ObjectSpec,
    },
    /// `destroy_object`.
    Destroy {
        /// Destroyed handle.
        handle: Handle,
    },
    /// `set_visibility`.
    SetVisibility {
        /// Target handle.
        handle: Handle,
        /// New visibility.
        visible: bool,
    },
    /// `animate`.
    Animate {
        /// Target handle.
        handle: Handle,
        /// Animation target.
        spec: AnimateSpec,
    },
    /// `set_background`.
    SetBackground {
        /// New background color.
        color: String,
    },
}

/// Renderer that draws nothing and records every call.
///
/// It still tracks which handles are alive so that a call on a destroyed object is reported as an
/// error, which keeps the presenter honest about double destroys.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next: u64,
    commands: Vec<DrawCommand>,
    parents: BTreeMap<Handle, Handle>,
    live: BTreeSet<Handle>,
    hidden: BTreeSet<Handle>,
}

impl RecordingRenderer {
    /// Fresh recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, keeping object state.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Whether `handle` exists.
    pub fn is_live(&self, handle: Handle) -> bool {
        self.live.contains(&handle)
    }

    /// Whether `handle` exists and has not been hidden.
    pub fn is_visible(&self, handle: Handle) -> bool {
        self.is_live(handle) && !self.hidden.contains(&handle)
    }

    /// Number of live objects, children included.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn check_live(&self, handle: Handle, op: &str) -> VitalityResult<()> {
        if self.live.contains(&handle) {
            Ok(())
        } else {
            Err(VitalityError::render(format!("{op} on unknown handle {}", handle.0)))
        }
    }
}

impl Renderer for RecordingRenderer {
    fn create_object(&mut self, spec: &ObjectSpec) -> VitalityResult<Handle> {
        if let Some(parent) = spec.parent {
            self.check_live(parent, "create child")?;
        }
        let handle = Handle(self.next);
        self.next += 1;
        if let Some(parent) = spec.parent {
            self.parents.insert(handle, parent);
        }
        self.live.insert(handle);
        self.commands.push(DrawCommand::Create {
            handle,
            spec: spec.clone(),
        });
        Ok(handle)
    }

    fn destroy_object(&mut self, handle: Handle) -> VitalityResult<()> {
        self.check_live(handle, "destroy")?;
        let mut doomed = vec![handle];
        while let Some(h) = doomed.pop() {
            self.live.remove(&h);
            self.hidden.remove(&h);
            self.parents.remove(&h);
            doomed.extend(
                self.parents
                    .iter()
                    .filter(|&(_, &p)| p == h)
                    .map(|(&c, _)| c),
            );
        }
        self.commands.push(DrawCommand::Destroy { handle });
        Ok(())
    }

    fn set_visibility(&mut self, handle: Handle, visible: bool) -> VitalityResult<()> {
        self.check_live(handle, "set_visibility")?;
        if visible {
            self.hidden.remove(&handle);
        } else {
            self.hidden.insert(handle);
        }
        self.commands
            .push(DrawCommand::SetVisibility { handle, visible });
        Ok(())
    }

    fn animate(&mut self, handle: Handle, spec: &AnimateSpec) -> VitalityResult<()> {
        self.check_live(handle, "animate")?;
        self.commands.push(DrawCommand::Animate {
            handle,
            spec: spec.clone(),
        });
        Ok(())
    }

    fn set_background(&mut self, color: &str) -> VitalityResult<()> {
        self.commands.push(DrawCommand::SetBackground {
            color: color.to_owned(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;

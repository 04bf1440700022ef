use std::collections::BTreeMap;

use crate::foundation::error::VitalityResult;
use crate::render::backend::{Handle, Renderer};
use crate::scene::model::Build;

/// Gathers build groups while a slide renders.
///
/// Every gated object lands in a numbered slot: `build: k` uses slot `k`, `build: true` takes the
/// slot after the highest one used so far. Groups replay in ascending slot order with empty slots
/// dropped.
#[derive(Debug, Default)]
pub(crate) struct BuildCollector {
    slots: BTreeMap<u64, Vec<Handle>>,
}

impl BuildCollector {
    pub(crate) fn push(&mut self, build: Build, handle: Handle) {
        let slot = match build {
            Build::Immediate => return,
            Build::Step => self.slots.last_key_value().map_or(0, |(k, _)| k + 1),
            Build::Group(k) => k,
        };
        self.slots.entry(slot).or_default().push(handle);
    }

    pub(crate) fn finish(self) -> BuildController {
        BuildController {
            groups: self.slots.into_values().filter(|g| !g.is_empty()).collect(),
            index: 0,
        }
    }
}

/// Staged-reveal state of the slide on screen.
///
/// `index` counts revealed groups and always stays within `[0, groups.len()]`; the slide is fully
/// revealed when it equals `groups.len()`.
#[derive(Debug, Default)]
pub struct BuildController {
    groups: Vec<Vec<Handle>>,
    index: usize,
}

impl BuildController {
    /// Number of build groups on this slide.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the slide has no build groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups currently revealed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether every group is revealed.
    pub fn is_complete(&self) -> bool {
        self.index == self.groups.len()
    }

    /// Handles of group `idx`.
    pub fn group(&self, idx: usize) -> Option<&[Handle]> {
        self.groups.get(idx).map(Vec::as_slice)
    }

    /// Reveal the next group. Returns `false` when already complete.
    pub(crate) fn reveal_next<R: Renderer>(&mut self, renderer: &mut R) -> VitalityResult<bool> {
        let Some(group) = self.groups.get(self.index) else {
            return Ok(false);
        };
        for &h in group {
            renderer.set_visibility(h, true)?;
        }
        self.index += 1;
        Ok(true)
    }

    /// Hide the most recently revealed group. Returns `false` at index 0.
    pub(crate) fn hide_last<R: Renderer>(&mut self, renderer: &mut R) -> VitalityResult<bool> {
        if self.index == 0 {
            return Ok(false);
        }
        for &h in &self.groups[self.index - 1] {
            renderer.set_visibility(h, false)?;
        }
        self.index -= 1;
        Ok(true)
    }

    /// Reveal groups `0..target` at once (clamped to the group count).
    pub(crate) fn restore<R: Renderer>(
        &mut self,
        target: usize,
        renderer: &mut R,
    ) -> VitalityResult<()> {
        while self.index < target.min(self.groups.len()) {
            self.reveal_next(renderer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/builds.rs"]
mod tests;

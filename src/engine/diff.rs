use std::collections::{BTreeMap, BTreeSet};

use crate::engine::registry::{ObjectRegistry, RegistryEntry};
use crate::render::backend::Handle;
use crate::scene::model::SlideDef;

/// What happens to each object of an incoming slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectStep {
    /// Draw `slide.objects[index]` from scratch.
    Create {
        /// Index into the incoming slide's objects.
        index: usize,
    },
    /// Morph the surviving instance in `entry` toward `slide.objects[index]`.
    Animate {
        /// Index into the incoming slide's objects.
        index: usize,
        /// Matched id.
        id: String,
        /// Outgoing registry entry; its `transition_ms` is the morph duration.
        entry: RegistryEntry,
    },
}

/// Classification of one slide change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionPlan {
    /// Whether identity matching was attempted.
    pub animated: bool,
    /// Ids present in both slides whose instances survive.
    pub transitioning: BTreeMap<String, RegistryEntry>,
    /// Live instances to remove before drawing the incoming slide.
    pub destroy: Vec<Handle>,
    /// One step per incoming object, in slide order.
    pub steps: Vec<ObjectStep>,
}

impl TransitionPlan {
    /// Number of objects the plan creates.
    pub fn created(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, ObjectStep::Create { .. }))
            .count()
    }

    /// Number of objects the plan animates.
    pub fn animated_count(&self) -> usize {
        self.steps.len() - self.created()
    }
}

/// Decide which live objects die, which survive and morph, and which are created fresh.
///
/// Only immediately visible objects of `incoming` can be matched; an object gated behind a build
/// step is always created anew, hidden. When `animated` is false nothing is matched and every live
/// object is destroyed.
pub fn plan_transition(
    registry: &ObjectRegistry,
    live: &[Handle],
    incoming: &SlideDef,
    animated: bool,
) -> TransitionPlan {
    let mut transitioning = BTreeMap::new();
    if animated {
        let targets: BTreeSet<&str> = incoming
            .objects
            .iter()
            .filter(|o| o.is_transition_target())
            .filter_map(|o| o.id.as_deref())
            .collect();
        for (id, entry) in registry.iter() {
            if targets.contains(id) {
                transitioning.insert(id.to_owned(), entry);
            }
        }
    }

    let kept: BTreeSet<Handle> = transitioning.values().map(|e| e.handle).collect();
    let destroy = live
        .iter()
        .copied()
        .filter(|h| !kept.contains(h))
        .collect();

    let steps = incoming
        .objects
        .iter()
        .enumerate()
        .map(|(index, obj)| {
            let matched = obj
                .id
                .as_deref()
                .filter(|_| obj.is_transition_target())
                .and_then(|id| transitioning.get_key_value(id));
            match matched {
                Some((id, entry)) => ObjectStep::Animate {
                    index,
                    id: id.clone(),
                    entry: *entry,
                },
                None => ObjectStep::Create { index },
            }
        })
        .collect();

    TransitionPlan {
        animated,
        transitioning,
        destroy,
        steps,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/diff.rs"]
mod tests;

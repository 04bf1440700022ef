use std::collections::BTreeMap;
use std::time::Duration;

use crate::foundation::value::{Lerp, PropMap, PropValue};
use crate::render::backend::{AnimateSpec, Handle};

#[derive(Clone, Debug)]
struct Track {
    from: PropValue,
    to: PropValue,
}

#[derive(Clone, Debug)]
struct Animation {
    start: Duration,
    duration: Duration,
    attrs: BTreeMap<String, Track>,
    style: BTreeMap<String, Track>,
}

impl Animation {
    fn sample(&self, t: f64) -> (PropMap, PropMap) {
        let eval = |tracks: &BTreeMap<String, Track>| {
            tracks
                .iter()
                .map(|(k, tr)| (k.clone(), PropValue::lerp(&tr.from, &tr.to, t)))
                .collect::<PropMap>()
        };
        (eval(&self.attrs), eval(&self.style))
    }

    fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }
}

/// Interpolated property values for one object at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimFrame {
    /// Animated object.
    pub handle: Handle,
    /// Current values of the animated attributes.
    pub attrs: PropMap,
    /// Current values of the animated style properties.
    pub style: PropMap,
    /// Whether this is the final frame of the animation.
    pub done: bool,
}

/// Linear property animations keyed by handle.
///
/// Starting an animation on an object that is already animating replaces the running one, taking
/// the object's current values as the new origins.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    running: BTreeMap<Handle, Animation>,
}

impl Animator {
    /// Empty animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `handle` from `attrs`/`style` toward `spec`, beginning at `now`.
    ///
    /// Properties absent from the current values jump to their target.
    pub fn start(
        &mut self,
        handle: Handle,
        now: Duration,
        attrs: &PropMap,
        style: &PropMap,
        spec: &AnimateSpec,
    ) {
        let tracks = |current: &PropMap, target: &PropMap| -> BTreeMap<String, Track> {
            target
                .iter()
                .map(|(k, to)| {
                    let from = current.get(k).cloned().unwrap_or_else(|| to.clone());
                    (k.clone(), Track { from, to: to.clone() })
                })
                .collect()
        };
        self.running.insert(
            handle,
            Animation {
                start: now,
                duration: Duration::from_millis(spec.duration_ms),
                attrs: tracks(attrs, &spec.attrs),
                style: tracks(style, &spec.style),
            },
        );
    }

    /// Sample every running animation at `now`, dropping the ones that finish.
    pub fn tick(&mut self, now: Duration) -> Vec<AnimFrame> {
        let frames: Vec<AnimFrame> = self
            .running
            .iter()
            .map(|(&handle, anim)| {
                let t = anim.progress(now);
                let (attrs, style) = anim.sample(t);
                AnimFrame {
                    handle,
                    attrs,
                    style,
                    done: t >= 1.0,
                }
            })
            .collect();
        self.running.retain(|_, anim| anim.progress(now) < 1.0);
        frames
    }

    /// Final values of every running animation; leaves the animator idle.
    pub fn settle(&mut self) -> Vec<AnimFrame> {
        std::mem::take(&mut self.running)
            .into_iter()
            .map(|(handle, anim)| {
                let (attrs, style) = anim.sample(1.0);
                AnimFrame {
                    handle,
                    attrs,
                    style,
                    done: true,
                }
            })
            .collect()
    }

    /// Drop the animation on `handle`, if any.
    pub fn cancel(&mut self, handle: Handle) {
        self.running.remove(&handle);
    }

    /// Whether `handle` is animating.
    pub fn is_running(&self, handle: Handle) -> bool {
        self.running.contains_key(&handle)
    }

    /// Whether nothing is animating.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/animator.rs"]
mod tests;

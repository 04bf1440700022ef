use std::mem;

use crate::engine::builds::{BuildCollector, BuildController};
use crate::engine::diff::{ObjectStep, plan_transition};
use crate::engine::layout::{instantiate, render_layout};
use crate::engine::registry::ObjectRegistry;
use crate::foundation::error::{VitalityError, VitalityResult};
use crate::input::keymap::{Command, Key, KeyMap};
use crate::render::backend::{AnimateSpec, Handle, Renderer};
use crate::scene::deck::Deck;

/// Where the presentation is: a slide and how many of its build groups are revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Position {
    /// 0-based slide index.
    pub slide: usize,
    /// Number of revealed build groups.
    pub build: usize,
}

impl Position {
    /// Position at `slide`, `build`.
    pub fn new(slide: usize, build: usize) -> Self {
        Self { slide, build }
    }
}

/// Engine knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenterOpts {
    /// Morph duration for objects that omit `transition_length`.
    pub default_transition_ms: u64,
    /// Idle-mode key bindings.
    pub keymap: KeyMap,
}

impl Default for PresenterOpts {
    fn default() -> Self {
        Self {
            default_transition_ms: 250,
            keymap: KeyMap::default(),
        }
    }
}

/// Input mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys map to navigation commands.
    #[default]
    Idle,
    /// Keys are collected into a jump buffer.
    JumpCapture(String),
}

/// Navigation engine for one deck and one renderer.
///
/// Owns every piece of presenting state: the current and previous position, the object registry,
/// the live handles and the build controller of the slide on screen. Navigation never fails on
/// user input; errors only come from the renderer.
#[derive(Debug)]
pub struct Presenter<R: Renderer> {
    deck: Deck,
    renderer: R,
    opts: PresenterOpts,
    position: Position,
    previous: Option<Position>,
    registry: ObjectRegistry,
    live: Vec<Handle>,
    builds: BuildController,
    mode: Mode,
}

impl<R: Renderer> Presenter<R> {
    /// Validate `deck` and draw its first slide.
    pub fn new(deck: Deck, renderer: R) -> VitalityResult<Self> {
        Self::with_opts(deck, renderer, PresenterOpts::default())
    }

    /// Like [`Presenter::new`] with explicit options.
    pub fn with_opts(deck: Deck, renderer: R, opts: PresenterOpts) -> VitalityResult<Self> {
        deck.validate()?;
        let mut presenter = Self {
            deck,
            renderer,
            opts,
            position: Position::default(),
            previous: None,
            registry: ObjectRegistry::default(),
            live: Vec::new(),
            builds: BuildController::default(),
            mode: Mode::Idle,
        };
        presenter.render_slide(0, 0, false)?;
        Ok(presenter)
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Snapshot a return would go back to.
    pub fn previous(&self) -> Option<Position> {
        self.previous
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Jump buffer contents while capturing.
    pub fn jump_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::JumpCapture(buf) => Some(buf),
            Mode::Idle => None,
        }
    }

    /// Whether keys are being collected into the jump buffer.
    pub fn is_capturing_jump(&self) -> bool {
        matches!(self.mode, Mode::JumpCapture(_))
    }

    /// The deck being presented.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer access, for hosts that drive its clock.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the presenter and hand back its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Id registry of the slide on screen.
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Build state of the slide on screen.
    pub fn builds(&self) -> &BuildController {
        &self.builds
    }

    /// Top-level handles of the slide on screen.
    pub fn live(&self) -> &[Handle] {
        &self.live
    }

    /// Reveal the next build group, or move to the next slide with an animated transition.
    ///
    /// On the last slide, once fully revealed, the slide is rendered again from build 0.
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self) -> VitalityResult<()> {
        if self.builds.is_complete() {
            let next = (self.position.slide + 1).min(self.deck.last_index());
            return self.render_slide(next, 0, true);
        }
        self.builds.reveal_next(&mut self.renderer)?;
        self.position.build = self.builds.index();
        Ok(())
    }

    /// Hide the last revealed build group, or rebuild the previous slide from scratch.
    #[tracing::instrument(skip(self))]
    pub fn retreat(&mut self) -> VitalityResult<()> {
        if self.builds.index() == 0 {
            let prev = self.position.slide.saturating_sub(1);
            return self.render_slide(prev, 0, false);
        }
        self.builds.hide_last(&mut self.renderer)?;
        self.position.build = self.builds.index();
        Ok(())
    }

    /// Go to the first slide.
    pub fn jump_to_start(&mut self) -> VitalityResult<()> {
        self.jump(Position::default())
    }

    /// Go to `slide` with `build` groups revealed. Out-of-range slides are ignored.
    pub fn go_to(&mut self, slide: usize, build: usize) -> VitalityResult<()> {
        if slide > self.deck.last_index() {
            tracing::debug!(slide, "ignoring jump past the last slide");
            return Ok(());
        }
        self.jump(Position::new(slide, build))
    }

    /// Go to the slide registered under `name`. Unknown names are ignored.
    pub fn go_to_name(&mut self, name: &str) -> VitalityResult<()> {
        match self.deck.resolve_name(name) {
            Some(slide) => self.jump(Position::new(slide, 0)),
            None => {
                tracing::debug!(name, "ignoring unknown slide name");
                Ok(())
            }
        }
    }

    /// Start collecting a jump target. Any previous buffer is discarded.
    pub fn begin_jump(&mut self) {
        self.mode = Mode::JumpCapture(String::new());
    }

    /// Append `c` to the jump buffer; ignored outside capture mode.
    pub fn push_jump_char(&mut self, c: char) {
        if let Mode::JumpCapture(buf) = &mut self.mode {
            buf.push(c);
        }
    }

    /// Leave capture mode without jumping.
    pub fn cancel_jump(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Resolve the jump buffer and leave capture mode.
    ///
    /// An integer buffer is a slide index and is ignored when out of range. Anything else is looked
    /// up as a slide name.
    #[tracing::instrument(skip(self))]
    pub fn confirm_jump(&mut self) -> VitalityResult<()> {
        let Mode::JumpCapture(buffer) = mem::replace(&mut self.mode, Mode::Idle) else {
            return Ok(());
        };
        let target = match buffer.trim().parse::<i64>() {
            Ok(n) => usize::try_from(n)
                .ok()
                .filter(|&idx| idx <= self.deck.last_index()),
            Err(_) => self.deck.resolve_name(&buffer),
        };
        match target {
            Some(slide) => self.jump(Position::new(slide, 0)),
            None => {
                tracing::debug!(buffer = %buffer, "jump target did not resolve");
                Ok(())
            }
        }
    }

    /// Go back to the position held before the last jump, once.
    pub fn return_to_previous(&mut self) -> VitalityResult<()> {
        let Some(prev) = self.previous.take() else {
            tracing::debug!("no previous position to return to");
            return Ok(());
        };
        self.render_slide(prev.slide, prev.build, false)
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> VitalityResult<()> {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::JumpToStart => self.jump_to_start(),
            Command::BeginJump => {
                self.begin_jump();
                Ok(())
            }
            Command::JumpChar(c) => {
                self.push_jump_char(c);
                Ok(())
            }
            Command::ConfirmJump => self.confirm_jump(),
            Command::CancelJump => {
                self.cancel_jump();
                Ok(())
            }
            Command::ReturnToPrevious => self.return_to_previous(),
        }
    }

    /// Translate `key` through the key map for the current mode and apply it.
    pub fn handle_key(&mut self, key: Key) -> VitalityResult<()> {
        match self.opts.keymap.resolve(key, self.is_capturing_jump()) {
            Some(command) => self.handle(command),
            None => Ok(()),
        }
    }

    fn jump(&mut self, target: Position) -> VitalityResult<()> {
        self.previous = Some(self.position);
        self.render_slide(target.slide, target.build, false)
    }

    /// Draw `slide` and reveal `build` groups.
    ///
    /// Position, registry and builds are reset to the target slide before the first renderer call,
    /// so a renderer error leaves the engine on that slide with whatever was drawn so far.
    #[tracing::instrument(skip(self))]
    fn render_slide(&mut self, slide: usize, build: usize, animated: bool) -> VitalityResult<()> {
        let Some(def) = self.deck.slide(slide) else {
            return Err(VitalityError::validation(format!("slide {slide} does not exist")));
        };

        let plan = plan_transition(&self.registry, &self.live, def, animated);
        self.registry.clear();
        self.builds = BuildController::default();
        self.position = Position::new(slide, 0);

        for &handle in &plan.destroy {
            self.renderer.destroy_object(handle)?;
            self.live.retain(|&h| h != handle);
        }

        self.renderer.set_background(&def.background_color)?;
        let mut collector = BuildCollector::default();
        let layout = render_layout(
            &def.layout,
            self.deck.size().height,
            &mut self.renderer,
            &mut collector,
        )?;
        self.live.extend(layout);

        let default_ms = self.opts.default_transition_ms;
        for step in &plan.steps {
            match step {
                ObjectStep::Animate { index, id, entry } => {
                    let obj = &def.objects[*index];
                    let spec = AnimateSpec {
                        attrs: obj.attrs.clone(),
                        style: obj.style.clone(),
                        duration_ms: entry.transition_ms,
                    };
                    self.renderer.animate(entry.handle, &spec)?;
                    self.registry
                        .put(id.as_str(), entry.handle, obj.transition_ms(default_ms));
                }
                ObjectStep::Create { index } => {
                    let obj = &def.objects[*index];
                    let handle = instantiate(obj, &mut self.renderer)?;
                    self.live.push(handle);
                    if let Some(id) = &obj.id {
                        self.registry
                            .put(id.as_str(), handle, obj.transition_ms(default_ms));
                    }
                    if obj.build.is_gated() {
                        self.renderer.set_visibility(handle, false)?;
                        collector.push(obj.build, handle);
                    }
                }
            }
        }

        self.builds = collector.finish();
        self.builds.restore(build, &mut self.renderer)?;
        self.position.build = self.builds.index();

        tracing::debug!(
            destroyed = plan.destroy.len(),
            animated = plan.animated_count(),
            created = plan.created(),
            builds = self.builds.len(),
            "slide rendered"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/presenter.rs"]
mod tests;

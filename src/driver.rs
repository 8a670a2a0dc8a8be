//! Animation driver: tick scheduling with an explicit lifecycle
//!
//! A [`Scene`] is one visual system (state, stepper policy, renderer, rng).
//! An [`AnimationDriver`] owns a scene plus its surface and advances it one
//! tick per host frame while its [`Lifecycle`] is running. The browser
//! drives [`AnimationDriver::frame`] from `requestAnimationFrame`; tests and
//! headless callers use the bounded [`AnimationDriver::run`] loop.

use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;

use crate::config::BackdropConfig;
use crate::error::Result;
use crate::render::{RenderReport, Renderer, Surface};
use crate::simulation::{BoundaryPolicy, SimulationState, StepReport, step};

/// Synthetic frame spacing used by [`AnimationDriver::run`] (60 Hz)
const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Log an FPS sample every this many ticks
const FPS_SAMPLE_TICKS: u64 = 60;

/// Animation lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is paused (e.g., tab hidden)
    Paused,
    /// Animation has been stopped; terminal
    Stopped,
}

/// Shared cancellation token checked once per frame
///
/// Clones observe the same state. `Stopped` is terminal: `resume` and
/// `pause` have no effect once stopped.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: Rc<Cell<AnimationState>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(AnimationState::Running)),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state.get()
    }

    pub fn pause(&self) {
        if self.state() == AnimationState::Running {
            self.state.set(AnimationState::Paused);
        }
    }

    pub fn resume(&self) {
        if self.state() == AnimationState::Paused {
            self.state.set(AnimationState::Running);
        }
    }

    pub fn stop(&self) {
        self.state.set(AnimationState::Stopped);
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == AnimationState::Stopped
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame timing information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Host timestamp in milliseconds
    pub timestamp: f64,
    /// Milliseconds since the previous frame
    pub delta: f64,
    /// Instantaneous frames per second
    pub fps: f64,
}

impl FrameTiming {
    pub const fn initial(timestamp: f64) -> Self {
        Self {
            timestamp,
            delta: 0.0,
            fps: 60.0,
        }
    }

    pub fn next(self, timestamp: f64) -> Self {
        let delta = timestamp - self.timestamp;
        let fps = if delta > 0.0 { 1000.0 / delta } else { 60.0 };

        Self {
            timestamp,
            delta,
            fps,
        }
    }
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based tick number
    pub tick: u64,
    pub step: StepReport,
    pub render: RenderReport,
}

/// One visual system: simulation state plus how to step and paint it
#[derive(Debug, Clone)]
pub struct Scene<R> {
    state: SimulationState,
    policy: BoundaryPolicy,
    renderer: Renderer,
    rng: R,
    ticks: u64,
}

impl<R: Rng> Scene<R> {
    /// Seed a new scene for a `width` x `height` surface
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the size is not positive.
    pub fn new(config: &BackdropConfig, width: f64, height: f64, mut rng: R) -> Result<Self> {
        let state = SimulationState::seed(config, width, height, &mut rng)?;
        Self::from_state(state, config, rng)
    }

    /// Wrap an existing state (used for scripted scenarios)
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn from_state(state: SimulationState, config: &BackdropConfig, rng: R) -> Result<Self> {
        Ok(Self {
            state,
            policy: config.boundary,
            renderer: Renderer::from_config(config)?,
            rng,
            ticks: 0,
        })
    }

    /// Step then render, strictly in that order
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the render pass. The step has already
    /// been applied when rendering fails.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<TickReport> {
        let step = step(&mut self.state, self.policy);
        let render = self.renderer.render(&self.state, surface, &mut self.rng)?;
        self.ticks += 1;
        Ok(TickReport {
            tick: self.ticks,
            step,
            render,
        })
    }

    /// # Errors
    ///
    /// Returns an error for non-finite or non-positive dimensions.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.state.resize(width, height)
    }

    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Result of offering one host frame to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered(TickReport),
    /// Paused: nothing stepped or drawn, keep scheduling
    Skipped,
    /// Stopped: do not schedule another frame
    Stopped,
}

/// Owns a scene, its surface and the lifecycle that gates ticking
#[derive(Debug)]
pub struct AnimationDriver<S, R> {
    scene: Scene<R>,
    surface: S,
    lifecycle: Lifecycle,
    timing: Option<FrameTiming>,
}

impl<S: Surface, R: Rng> AnimationDriver<S, R> {
    pub fn new(scene: Scene<R>, surface: S) -> Self {
        Self::with_lifecycle(scene, surface, Lifecycle::new())
    }

    pub const fn with_lifecycle(scene: Scene<R>, surface: S, lifecycle: Lifecycle) -> Self {
        Self {
            scene,
            surface,
            lifecycle,
            timing: None,
        }
    }

    /// A handle on this driver's lifecycle; stopping it ends the loop
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    /// Offer one host frame at `timestamp` (milliseconds)
    ///
    /// # Errors
    ///
    /// Propagates tick errors. The lifecycle is left as is; the caller
    /// decides whether to stop.
    pub fn frame(&mut self, timestamp: f64) -> Result<FrameOutcome> {
        match self.lifecycle.state() {
            AnimationState::Stopped => return Ok(FrameOutcome::Stopped),
            AnimationState::Paused => {
                // Resuming after a pause should not report one giant delta.
                self.timing = None;
                return Ok(FrameOutcome::Skipped);
            }
            AnimationState::Running => {}
        }

        let timing = self
            .timing
            .map_or_else(|| FrameTiming::initial(timestamp), |t| t.next(timestamp));
        self.timing = Some(timing);

        let report = self.scene.tick(&mut self.surface)?;
        if report.tick % FPS_SAMPLE_TICKS == 0 {
            tracing::trace!(tick = report.tick, fps = timing.fps, "frame sample");
        }
        Ok(FrameOutcome::Rendered(report))
    }

    /// Offer up to `max_frames` synthetic 60 Hz frames, returning how many
    /// ticks ran
    ///
    /// The lifecycle is checked before every frame, so stopping it (from a
    /// surface, another handle, or a test) ends the loop deterministically.
    ///
    /// # Errors
    ///
    /// Propagates the first tick error.
    pub fn run(&mut self, max_frames: u64) -> Result<u64> {
        let mut rendered = 0;
        let mut timestamp = self.timing.map_or(0.0, |t| t.timestamp);
        for _ in 0..max_frames {
            if self.lifecycle.is_stopped() {
                break;
            }
            timestamp += FRAME_INTERVAL_MS;
            match self.frame(timestamp)? {
                FrameOutcome::Rendered(_) => rendered += 1,
                FrameOutcome::Skipped => {}
                FrameOutcome::Stopped => break,
            }
        }
        Ok(rendered)
    }

    /// Forward a new surface size to the simulation; never reseeds
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite or non-positive dimensions.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        tracing::debug!(width, height, "resizing scene");
        self.scene.resize(width, height)
    }

    pub const fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn timing(&self) -> Option<FrameTiming> {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn driver(config: &BackdropConfig) -> Result<AnimationDriver<RecordingSurface, StdRng>> {
        let scene = Scene::new(config, 800.0, 600.0, StdRng::seed_from_u64(21))?;
        Ok(AnimationDriver::new(scene, RecordingSurface::default()))
    }

    #[test]
    fn test_frame_timing_initial() {
        let timing = FrameTiming::initial(1000.0);
        assert!((timing.timestamp - 1000.0).abs() < f64::EPSILON);
        assert!(timing.delta.abs() < f64::EPSILON);
        assert!((timing.fps - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_timing_next() {
        let next = FrameTiming::initial(1000.0).next(1016.67);
        assert!((next.delta - 16.67).abs() < 0.01);
        assert!((next.fps - 60.0).abs() < 1.0);
    }

    #[test]
    fn test_frame_timing_non_positive_delta() {
        let next = FrameTiming::initial(1000.0).next(1000.0);
        assert!((next.fps - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), AnimationState::Running);

        lifecycle.pause();
        assert_eq!(lifecycle.state(), AnimationState::Paused);

        lifecycle.resume();
        assert_eq!(lifecycle.state(), AnimationState::Running);

        lifecycle.stop();
        lifecycle.resume();
        lifecycle.pause();
        assert!(lifecycle.is_stopped());
    }

    #[test]
    fn test_lifecycle_clones_share_state() {
        let lifecycle = Lifecycle::new();
        let handle = lifecycle.clone();
        handle.stop();
        assert!(lifecycle.is_stopped());
    }

    #[test]
    fn test_run_bounded_ticks() -> Result<()> {
        let mut driver = driver(&BackdropConfig::particles())?;
        let rendered = driver.run(5)?;

        assert_eq!(rendered, 5);
        assert_eq!(driver.scene().ticks(), 5);
        assert_eq!(driver.surface().frames(), 5);
        let timing = driver.timing().ok_or(crate::error::BackdropError::Canvas(
            "no timing recorded".to_string(),
        ))?;
        assert!((timing.fps - 60.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_stopped_driver_does_nothing() -> Result<()> {
        let mut driver = driver(&BackdropConfig::network())?;
        driver.lifecycle().stop();

        assert_eq!(driver.frame(16.0)?, FrameOutcome::Stopped);
        assert_eq!(driver.run(100)?, 0);
        assert_eq!(driver.surface().frames(), 0);
        Ok(())
    }

    #[test]
    fn test_paused_frames_are_skipped() -> Result<()> {
        let mut driver = driver(&BackdropConfig::particles())?;
        driver.lifecycle().pause();

        assert_eq!(driver.frame(16.0)?, FrameOutcome::Skipped);
        assert_eq!(driver.run(10)?, 0);
        assert_eq!(driver.scene().ticks(), 0);

        driver.lifecycle().resume();
        assert_eq!(driver.run(3)?, 3);
        Ok(())
    }

    #[test]
    fn test_resize_does_not_reseed() -> Result<()> {
        let mut driver = driver(&BackdropConfig::particles())?;
        let count = driver.scene().state().len();
        driver.resize(320.0, 240.0)?;
        driver.run(2)?;

        assert_eq!(driver.scene().state().len(), count);
        assert!((driver.scene().state().width() - 320.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_scene_policy_follows_config() -> Result<()> {
        let scene = Scene::new(
            &BackdropConfig::network(),
            100.0,
            100.0,
            StdRng::seed_from_u64(1),
        )?;
        assert_eq!(scene.policy(), BoundaryPolicy::ReflectAndClamp);
        Ok(())
    }

    #[test]
    fn test_from_state_rejects_invalid_config() -> Result<()> {
        let state = SimulationState::seed(
            &BackdropConfig::network(),
            100.0,
            100.0,
            &mut StdRng::seed_from_u64(3),
        )?;
        let config = BackdropConfig {
            pulse_probability: 2.0,
            ..BackdropConfig::network()
        };

        let result = Scene::from_state(state, &config, StdRng::seed_from_u64(3));
        assert!(matches!(
            result,
            Err(crate::error::BackdropError::InvalidConfig(_))
        ));
        Ok(())
    }
}

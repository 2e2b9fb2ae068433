//! Background animation state and the per-frame render entry point.

use neonfolio_canvas::Surface;
use neonfolio_core::{AnimationSpeed, PointerState, ViewportState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animations::{grid, hexfield, overlay, ribbons, shooting, stars};
use crate::animations::grid::GridLayout;
use crate::animations::shooting::ShootingStar;
use crate::animations::stars::Star;

/// Owns the backdrop simulation and redraws the full scene every frame.
///
/// The host forwards resize and pointer notifications through the
/// setters and calls [`render_frame`] from its frame loop; the return
/// value is the reschedule request, so after [`teardown`] the loop stops
/// on its own. The RNG is injectable so tests can drive spawn decisions
/// deterministically.
///
/// [`render_frame`]: BackgroundAnimator::render_frame
/// [`teardown`]: BackgroundAnimator::teardown
#[derive(Debug)]
pub struct BackgroundAnimator<R: Rng = StdRng> {
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
    pointer: PointerState,
    viewport: ViewportState,
    speed: AnimationSpeed,
    rng: R,
    running: bool,
    frames: u64,
}

impl BackgroundAnimator<StdRng> {
    /// Animator with an entropy-seeded RNG.
    pub fn new(speed: AnimationSpeed) -> Self {
        Self::with_rng(StdRng::from_entropy(), speed)
    }

    /// Animator with a fixed seed; identical seeds replay identically.
    pub fn from_seed(seed: u64, speed: AnimationSpeed) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), speed)
    }
}

impl<R: Rng> BackgroundAnimator<R> {
    pub fn with_rng(rng: R, speed: AnimationSpeed) -> Self {
        Self {
            stars: Vec::new(),
            shooting: Vec::new(),
            pointer: PointerState::default(),
            viewport: ViewportState::default(),
            speed,
            rng,
            running: false,
            frames: 0,
        }
    }

    /// Store the viewport and seed the star collection. A zero-area
    /// viewport seeds nothing and every later frame is a silent no-op.
    pub fn initialize(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
        self.stars = stars::seed(&mut self.rng, viewport);
        self.shooting.clear();
        self.running = true;
        log::debug!(
            "backdrop initialized: {}x{} @{}x, {} stars",
            viewport.width,
            viewport.height,
            viewport.scale,
            self.stars.len()
        );
    }

    /// Update the viewport after a resize. Star positions are preserved;
    /// the wrap band adjusts on the next update.
    pub fn on_resize(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    /// Normalize an absolute pointer position into the parallax offset.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = PointerState::normalize(x, y, self.viewport);
    }

    /// Draw one frame and advance the simulation. Returns `true` while
    /// the animator wants the next frame scheduled; after [`teardown`]
    /// it draws nothing and returns `false`.
    ///
    /// [`teardown`]: BackgroundAnimator::teardown
    pub fn render_frame(&mut self, surface: &mut Surface, elapsed_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        if self.viewport.is_empty() || surface.is_empty() {
            // Nothing drawn this frame, but the loop stays alive.
            return true;
        }

        let t = elapsed_ms as f32 * self.speed.time_scale();
        let layout = GridLayout::new(self.viewport, self.pointer);

        surface.clear();
        overlay::backdrop(surface, self.viewport);

        stars::render(surface, &self.stars, self.pointer, t);
        stars::update(&mut self.stars, self.viewport.height);

        ribbons::render(surface, self.viewport, t);
        grid::render(surface, self.viewport, layout);
        hexfield::render(surface, self.viewport, layout, self.pointer, t);

        shooting::maybe_spawn(&mut self.shooting, self.viewport, &mut self.rng);
        shooting::update(&mut self.shooting);
        shooting::render(surface, &self.shooting);
        shooting::retire(&mut self.shooting, self.viewport);

        overlay::scan_line(surface, self.viewport, t);
        overlay::glitch(surface, self.viewport, layout.horizon, &mut self.rng);
        overlay::vignette(surface, self.viewport);

        self.frames += 1;
        true
    }

    /// Stop the animation and drop the particle collections. Safe to
    /// call any number of times.
    pub fn teardown(&mut self) {
        if self.running {
            log::debug!("backdrop torn down after {} frames", self.frames);
        }
        self.running = false;
        self.stars.clear();
        self.shooting.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning;
    use rand::rngs::mock::StepRng;

    fn viewport() -> ViewportState {
        ViewportState::new(160.0, 90.0, 1.0)
    }

    fn surface() -> Surface {
        Surface::new(viewport())
    }

    #[test]
    fn initialize_seeds_stars_and_starts_the_loop() {
        let mut a = BackgroundAnimator::from_seed(9, AnimationSpeed::Medium);
        a.initialize(viewport());
        assert!(a.is_running());
        assert_eq!(a.stars().len(), tuning::STAR_COUNT);
    }

    #[test]
    fn star_wrap_invariant_holds_over_many_frames() {
        let mut a = BackgroundAnimator::from_seed(11, AnimationSpeed::Fast);
        a.initialize(viewport());
        let mut s = surface();
        for frame in 0..300 {
            assert!(a.render_frame(&mut s, frame * 16));
            let h = a.viewport().height;
            for star in a.stars() {
                assert!(star.y >= -tuning::STAR_WRAP_MARGIN);
                assert!(star.y < h + tuning::STAR_WRAP_MARGIN);
            }
        }
    }

    #[test]
    fn shooting_population_respects_the_cap_under_forced_spawns() {
        let mut a =
            BackgroundAnimator::with_rng(StepRng::new(0, 0), AnimationSpeed::Medium);
        a.initialize(viewport());
        let mut s = surface();
        for frame in 0..400 {
            a.render_frame(&mut s, frame * 16);
            assert!(a.shooting_stars().len() <= tuning::SHOOTING_STAR_CAP);
        }
    }

    #[test]
    fn resize_preserves_star_positions() {
        let mut a = BackgroundAnimator::from_seed(5, AnimationSpeed::Medium);
        a.initialize(viewport());
        let before: Vec<_> = a.stars().to_vec();
        a.on_resize(ViewportState::new(320.0, 180.0, 2.0));
        assert_eq!(a.stars(), before.as_slice());
        assert_eq!(a.viewport().scale, 2.0);
    }

    #[test]
    fn pointer_moves_normalize_against_the_viewport() {
        let mut a = BackgroundAnimator::from_seed(1, AnimationSpeed::Medium);
        a.initialize(viewport());
        a.on_pointer_move(160.0, 45.0);
        assert_eq!(a.pointer().x, 1.0);
        assert_eq!(a.pointer().y, 0.0);
    }

    #[test]
    fn teardown_is_idempotent_and_stops_rescheduling() {
        let mut a = BackgroundAnimator::from_seed(2, AnimationSpeed::Medium);
        a.initialize(viewport());
        let mut s = surface();
        assert!(a.render_frame(&mut s, 0));

        a.teardown();
        a.teardown();
        assert!(!a.is_running());
        assert!(a.stars().is_empty());

        s.clear();
        assert!(!a.render_frame(&mut s, 16));
        // Nothing was drawn by the dead animator.
        assert!(s.pixels().iter().all(|p| *p == [0.0; 3]));
    }

    #[test]
    fn zero_area_viewport_renders_nothing_but_stays_alive() {
        let mut a = BackgroundAnimator::from_seed(3, AnimationSpeed::Medium);
        a.initialize(ViewportState::default());
        assert!(a.stars().is_empty());
        let mut s = Surface::new(ViewportState::default());
        assert!(a.render_frame(&mut s, 0));
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let mut a = BackgroundAnimator::from_seed(77, AnimationSpeed::Medium);
        let mut b = BackgroundAnimator::from_seed(77, AnimationSpeed::Medium);
        a.initialize(viewport());
        b.initialize(viewport());
        let mut sa = surface();
        let mut sb = surface();
        for frame in 0..120 {
            a.render_frame(&mut sa, frame * 16);
            b.render_frame(&mut sb, frame * 16);
        }
        assert_eq!(a.stars(), b.stars());
        assert_eq!(a.shooting_stars(), b.shooting_stars());
        assert_eq!(sa.pixels(), sb.pixels());
    }
}

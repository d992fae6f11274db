//! Application facade: owns every subsystem and advances them one
//! frame at a time. The host feeds input and a wall-clock delta, then
//! reads back render instances, minimap commands, and UI events.

use glam::Vec2;
use log::{debug, info, warn};

use crate::camera::OrbitCamera;
use crate::core::clock::SimulationClock;
use crate::core::clock::TimeDirection;
use crate::ephemeris::{Date, Ephemeris};
use crate::input::queue::{InputEvent, InputQueue, Intent, TapTracker};
use crate::model::catalog::{
    ASTEROID_BELT_COUNT, ASTEROID_BELT_INNER, ASTEROID_BELT_JITTER, ASTEROID_BELT_OUTER,
    ASTEROID_BELT_SPIN, OUTER_BELT_COUNT, OUTER_BELT_INNER, OUTER_BELT_JITTER, OUTER_BELT_OUTER,
    OUTER_BELT_SPIN,
};
use crate::model::hierarchy::{Hierarchy, K_ORBIT};
use crate::render::instance::InstanceBuffer;
use crate::systems::audio::{AudioCommand, MusicControl};
use crate::systems::belt::BeltCloud;
use crate::systems::flare::FlarePool;
use crate::systems::focus::{FocusState, PickTable};
use crate::systems::lens_flare::{self, LensFlare};
use crate::systems::minimap::{self, MinimapCmd};

use super::types::UiEvent;

/// Calendar days per nominal orbital year of the unit-speed body.
const DAYS_PER_YEAR: f64 = 365.25;

/// Host-toggled visibility switches. Whether a hidden layer keeps
/// simulating is decided per layer: belts freeze, the flare fountain
/// only runs while shown.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub labels: bool,
    pub orbits: bool,
    pub effects: bool,
    pub belts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            labels: true,
            orbits: true,
            effects: true,
            belts: true,
        }
    }
}

pub struct Orrery {
    clock: SimulationClock,
    hierarchy: Hierarchy,
    pick_table: PickTable,
    flares: FlarePool,
    asteroid_belt: BeltCloud,
    outer_belt: BeltCloud,
    camera: OrbitCamera,
    focus: FocusState,
    taps: TapTracker,
    settings: Settings,
    music: MusicControl,
    ephemeris: Box<dyn Ephemeris>,
    instances: InstanceBuffer,
    /// Base of the displayed calendar, in days from J2000. Sim time
    /// zero maps to this date.
    base_date_days: f64,
    minimap_size: f32,
    shown_date: Date,
    events: Vec<UiEvent>,
}

impl Orrery {
    pub fn new(aspect: f32, start_date: Date, ephemeris: Box<dyn Ephemeris>, seed: u64) -> Self {
        let mut hierarchy = Hierarchy::from_catalog();
        match ephemeris.angles_for_date(start_date) {
            Some(angles) => {
                let n = hierarchy.set_initial_angles(&angles);
                info!("initialized {n} orbital angles for {start_date:?}");
            }
            None => warn!("no ephemeris data for start date {start_date:?}, using zero angles"),
        }
        let pick_table = PickTable::from_hierarchy(&hierarchy);
        Self {
            clock: SimulationClock::new(),
            hierarchy,
            pick_table,
            flares: FlarePool::new(seed),
            asteroid_belt: BeltCloud::generate(
                ASTEROID_BELT_COUNT,
                ASTEROID_BELT_INNER,
                ASTEROID_BELT_OUTER,
                ASTEROID_BELT_JITTER,
                ASTEROID_BELT_SPIN,
                seed.wrapping_add(1),
            ),
            outer_belt: BeltCloud::generate(
                OUTER_BELT_COUNT,
                OUTER_BELT_INNER,
                OUTER_BELT_OUTER,
                OUTER_BELT_JITTER,
                OUTER_BELT_SPIN,
                seed.wrapping_add(2),
            ),
            camera: OrbitCamera::new(aspect),
            focus: FocusState::new(),
            taps: TapTracker::new(),
            settings: Settings::default(),
            music: MusicControl::new(),
            ephemeris,
            instances: InstanceBuffer::new(),
            base_date_days: start_date.days_from_j2000(),
            minimap_size: minimap::BASE_SIZE,
            shown_date: start_date,
            events: vec![UiEvent::DateDisplay {
                year: start_date.year,
                month: start_date.month,
                day: start_date.day,
            }],
        }
    }

    /// One frame: drain input, advance time, integrate the systems.
    /// `real_dt` is the wall-clock delta in seconds.
    pub fn update(&mut self, real_dt: f64, input: &mut InputQueue) {
        for event in input.drain() {
            self.handle_event(event);
        }

        self.clock.advance(real_dt);
        if !self.clock.is_paused() {
            self.hierarchy
                .integrate_spin(self.clock.effective_rate(), real_dt);
        }
        // The flare fountain is scenery: it keeps running while the
        // clock is paused, but not while the layer is hidden.
        if self.settings.effects {
            self.flares.tick();
        }
        self.asteroid_belt.tick(self.clock.effective_rate());
        self.outer_belt.tick(self.clock.effective_rate());

        if self.focus.is_following() {
            if let Some(id) = self.focus.focused() {
                let body_pos = self.hierarchy.world_position(id, self.clock.time());
                self.camera.follow_step(body_pos, self.focus.offset());
            }
        }

        let date = self.current_date();
        if date != self.shown_date {
            self.shown_date = date;
            self.events.push(UiEvent::DateDisplay {
                year: date.year,
                month: date.month,
                day: date.day,
            });
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { ndc, time_ms } => {
                self.taps.on_down(ndc, time_ms);
                if let Some(AudioCommand::Play) = self.music.on_user_interaction() {
                    self.events.push(UiEvent::Music { playing: true });
                }
            }
            InputEvent::PointerUp { ndc, time_ms } => {
                if let Some(pick_ndc) = self.taps.on_up(ndc, time_ms) {
                    self.pick_at(pick_ndc);
                }
            }
            InputEvent::Intent(intent) => self.handle_intent(intent),
        }
    }

    fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::TogglePause => {
                self.clock.toggle_pause();
                self.emit_speed();
            }
            Intent::SpeedUp => {
                self.clock.step_speed(1);
                self.emit_speed();
            }
            Intent::SlowDown => {
                self.clock.step_speed(-1);
                self.emit_speed();
            }
            Intent::TimeForward => {
                self.clock.set_direction(TimeDirection::Forward);
                self.emit_speed();
            }
            Intent::TimeReverse => {
                self.clock.set_direction(TimeDirection::Reverse);
                self.emit_speed();
            }
            Intent::Unfocus => {
                self.focus.unfocus();
                self.events.push(UiEvent::Unfocused);
            }
            Intent::SetDate(date) => self.set_date(date),
            Intent::Resize { aspect, minimap_size } => {
                self.camera.set_aspect(aspect);
                self.minimap_size = minimap_size;
            }
            Intent::ToggleLabels(on) => self.settings.labels = on,
            Intent::ToggleOrbits(on) => self.settings.orbits = on,
            Intent::ToggleEffects(on) => self.settings.effects = on,
            Intent::ToggleBelts(on) => {
                self.settings.belts = on;
                self.asteroid_belt.visible = on;
                self.outer_belt.visible = on;
            }
            Intent::ToggleMusic => {
                if let Some(cmd) = self.music.toggle() {
                    self.events.push(UiEvent::Music {
                        playing: cmd == AudioCommand::Play,
                    });
                }
            }
            Intent::AudioStarted => self.music.on_started(),
            Intent::AudioDenied => self.music.on_denied(),
        }
    }

    /// Ray-pick at a normalized device coordinate. A miss leaves the
    /// focus state untouched.
    fn pick_at(&mut self, ndc: Vec2) {
        let ray = self.camera.ray_through(ndc);
        match self.pick_table.pick(&self.hierarchy, self.clock.time(), &ray) {
            Some(id) => {
                self.focus.focus(&self.hierarchy, id);
                let body = self.hierarchy.body(id);
                debug!("picked {}", body.name);
                self.events.push(UiEvent::Focused {
                    name: body.name,
                    info: body.info,
                });
            }
            None => debug!("pick miss at {ndc:?}"),
        }
    }

    /// Re-seat the simulation on a new calendar date. A failed lookup
    /// keeps the previous angles and date.
    fn set_date(&mut self, date: Date) {
        match self.ephemeris.angles_for_date(date) {
            Some(angles) => {
                self.hierarchy.set_initial_angles(&angles);
                self.clock.reset();
                self.base_date_days = date.days_from_j2000();
                self.shown_date = date;
                self.events.push(UiEvent::DateDisplay {
                    year: date.year,
                    month: date.month,
                    day: date.day,
                });
            }
            None => warn!("ephemeris lookup failed for {date:?}, keeping previous angles"),
        }
    }

    fn emit_speed(&mut self) {
        self.events.push(UiEvent::Speed {
            magnitude: self.clock.speed_magnitude(),
            reversed: self.clock.direction() == TimeDirection::Reverse,
            paused: self.clock.is_paused(),
        });
    }

    /// Calendar date corresponding to the current sim time.
    pub fn current_date(&self) -> Date {
        let years = self.clock.time() / (std::f64::consts::TAU / K_ORBIT);
        Date::from_days_from_j2000(self.base_date_days + years * DAYS_PER_YEAR)
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn asteroid_belt(&self) -> &BeltCloud {
        &self.asteroid_belt
    }

    pub fn outer_belt(&self) -> &BeltCloud {
        &self.outer_belt
    }

    pub fn flares(&self) -> &FlarePool {
        &self.flares
    }

    /// Per-body render instances for the current frame.
    pub fn render_instances(&mut self) -> &InstanceBuffer {
        let time = self.clock.time();
        self.instances.rebuild(&self.hierarchy, time);
        &self.instances
    }

    /// Minimap draw commands for the current frame.
    pub fn minimap(&self) -> Vec<MinimapCmd> {
        let camera_xz = Vec2::new(self.camera.position.x, self.camera.position.z);
        minimap::project(
            &self.hierarchy,
            self.clock.time(),
            camera_xz,
            self.focus.focused(),
            self.minimap_size,
        )
    }

    /// Lens-flare elements for the current camera. Empty when the
    /// effects layer is hidden.
    pub fn lens_flare(&self) -> LensFlare {
        if !self.settings.effects {
            return LensFlare::default();
        }
        lens_flare::evaluate(&self.camera, glam::Vec3::ZERO)
    }

    /// Take pending UI events, oldest first.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }
}

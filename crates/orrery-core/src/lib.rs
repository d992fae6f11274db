pub mod api;
pub mod camera;
pub mod core;
pub mod ephemeris;
pub mod input;
pub mod model;
pub mod render;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::{Orrery, Settings};
pub use api::types::UiEvent;
pub use camera::{OrbitCamera, Ray, FOLLOW_LERP};
pub use core::clock::{SimulationClock, TimeDirection, DEFAULT_SPEED_INDEX, SPEED_STEPS};
pub use ephemeris::{Date, Ephemeris, MeanLongitudeEphemeris};
pub use input::queue::{InputEvent, InputQueue, Intent, TapTracker};
pub use model::body::{BodyId, BodyInfo, BodyKind};
pub use model::hierarchy::{Body, Hierarchy, K_MOON, K_ORBIT};
pub use render::instance::{BodyInstance, InstanceBuffer};
pub use systems::audio::{AudioCommand, MusicControl, MusicState};
pub use systems::belt::BeltCloud;
pub use systems::flare::{FlarePool, FlareParticle};
pub use systems::focus::{FocusState, PickTable};
pub use systems::lens_flare::{FlareElement, LensFlare};
pub use systems::minimap::MinimapCmd;

pub mod audio;
pub mod belt;
pub mod flare;
pub mod focus;
pub mod lens_flare;
pub mod minimap;
pub mod rng;

// weft-core/src/types/mod.rs

pub mod fill_mode;
pub mod melody_algorithm;
pub mod rhythm_config;

pub use fill_mode::FillMode;
pub use melody_algorithm::MelodyAlgorithm;
pub use rhythm_config::RhythmConfig;

//! Progression systems

pub mod level;

pub use level::{cumulative_experience_for_level, experience_required_for_level, level_from_experience};

// Core algorithm exports
pub mod interests;
pub mod matcher;
pub mod schedules;
pub mod scoring;

pub use interests::interests_compatibility;
pub use matcher::Matcher;
pub use schedules::{sleep_compatibility, work_compatibility};
pub use scoring::{compatibility_score, compatibility_score_opt};

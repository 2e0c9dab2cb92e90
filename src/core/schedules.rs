use crate::models::{SleepSchedule, WorkSchedule};

/// Sleep-schedule compatibility (0-100), looked up on the unordered pair.
/// Pairs not in the table score a neutral 50 - this covers `Other` tags,
/// which never match a known schedule.
pub fn sleep_compatibility(a: &SleepSchedule, b: &SleepSchedule) -> f64 {
    use SleepSchedule::*;

    match (a, b) {
        (EarlyBird, EarlyBird) | (NightOwl, NightOwl) => 100.0,
        (Flexible, Flexible) => 90.0,
        (EarlyBird, Flexible)
        | (Flexible, EarlyBird)
        | (NightOwl, Flexible)
        | (Flexible, NightOwl) => 80.0,
        // Direct conflict
        (EarlyBird, NightOwl) | (NightOwl, EarlyBird) => 30.0,
        _ => 50.0,
    }
}

/// Work-schedule compatibility (0-100), looked up on the unordered pair.
/// Lookup misses score 75.
pub fn work_compatibility(a: &WorkSchedule, b: &WorkSchedule) -> f64 {
    use WorkSchedule::*;

    match (a, b) {
        (Remote, Remote) | (Office, Office) => 100.0,
        (Hybrid, Hybrid) => 95.0,
        (Remote, Office) | (Office, Remote) => 90.0,
        (Student, Student) => 90.0,
        (Hybrid, Remote) | (Remote, Hybrid) | (Hybrid, Office) | (Office, Hybrid) => 85.0,
        (Student, Office) | (Office, Student) | (Student, Hybrid) | (Hybrid, Student) => 85.0,
        (Student, Remote) | (Remote, Student) => 80.0,
        _ => 75.0,
    }
}

//! Domain models module
//!
//! BMI classification, the workout plan catalog and the stopwatch.

pub mod bmi;
pub mod stopwatch;
pub mod workout;

// Re-export commonly used types
pub use bmi::{classify, BmiCategory, BmiReport};
pub use stopwatch::Stopwatch;
pub use workout::{catalog, WorkoutPlan};

//! Seizure analytics
//!
//! Descriptive statistics over a patient's seizure history: windowed
//! frequency, temporal pattern analysis, a calendar aggregation, a daily
//! trend series with a rolling mean, and a combined summary report.
//!
//! Every computation takes its reference instant (or year) as an explicit
//! argument, so results are reproducible and the functions stay pure.
//! Events without a timestamp are excluded from all time-based analysis.

pub mod calendar;
pub mod frequency;
pub mod pattern;
pub mod summary;
pub mod trend;

pub use calendar::{seizure_calendar, CalendarDay};
pub use frequency::{seizure_frequency, FrequencyReport};
pub use pattern::{analyze_patterns, PatternAnalysis};
pub use summary::patient_summary;
pub use trend::{frequency_trend, TrendPoint};

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;

pub use error::AssessmentError;
pub use time::Clock;

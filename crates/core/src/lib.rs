#![forbid(unsafe_code)]

pub mod model;
pub mod questionnaire;
pub mod time;

pub use time::Clock;

pub mod config;
pub mod dataset;
pub mod error;
pub mod followup;
pub mod io;
pub mod navigation;
pub mod paths;
pub mod qa;
pub mod spin;
pub mod types;

pub use dataset::{CandidateTalkingPoint, Dataset};
pub use error::{Result, StumpError};

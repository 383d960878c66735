pub mod convert;
pub mod error;
pub mod git;
pub mod model;
pub mod report;
pub mod stats;

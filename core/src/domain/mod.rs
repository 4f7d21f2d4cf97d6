pub mod bmi;
pub mod common;
pub mod recommendation;
pub mod report;

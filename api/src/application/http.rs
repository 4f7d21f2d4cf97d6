pub mod bmi;
pub mod health;
pub mod report;
pub mod server;

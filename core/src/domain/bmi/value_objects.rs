#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputeBmiInput {
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
}

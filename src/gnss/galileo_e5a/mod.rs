
pub mod pvt;
pub mod telemetry_decode;

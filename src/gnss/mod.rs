
pub mod galileo_e5a;
pub mod telemetry_decode;

pub mod baseline;
pub mod calculator;
pub mod evaluation;
pub mod key_change;
pub mod scenario;
pub mod workload;

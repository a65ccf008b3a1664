pub mod flaky;
pub mod workload;

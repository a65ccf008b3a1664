pub mod audit_log;
pub mod currency;
pub mod record;

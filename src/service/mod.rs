pub mod access;
pub mod conversion;

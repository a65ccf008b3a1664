//! Access-control stub for the audit log.
//!
//! Modules outside the conversion path have no access to the log. There is
//! no caller identity to check, so the request is always refused.

use crate::core::audit_log::AuditLog;
use crate::error::ConversionError;
use crate::rates::source::RateSource;
use crate::service::conversion::ConversionService;

impl<R: RateSource> ConversionService<R> {
    /// Always fails with [`ConversionError::PermissionDenied`].
    pub fn access_audit_logs_from_unauthorized_module(
        &self,
    ) -> Result<&AuditLog, ConversionError> {
        log::warn!("denied audit log access from unauthorized module");
        Err(ConversionError::PermissionDenied)
    }
}

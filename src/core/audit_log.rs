use crate::core::currency::CurrencyCode;
use crate::core::record::ConversionRecord;
use serde::Serialize;

/// Append-only, insertion-ordered log of completed conversions.
///
/// The only way in is the crate-private `append`, which is
/// called by the conversion service after a conversion succeeds. Nothing
/// removes or edits a record once it is in the log.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AuditLog {
    records: Vec<ConversionRecord>,
}

impl AuditLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: ConversionRecord) {
        log::debug!("audit log append #{}: {}", self.records.len(), record);
        self.records.push(record);
    }

    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, record: &ConversionRecord) -> bool {
        self.records.contains(record)
    }

    /// The most recent conversion, if any.
    pub fn last(&self) -> Option<&ConversionRecord> {
        self.records.last()
    }

    /// Conversions for one direction, oldest first.
    pub fn for_pair<'a>(
        &'a self,
        origin: &'a CurrencyCode,
        target: &'a CurrencyCode,
    ) -> impl Iterator<Item = &'a ConversionRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.origin_currency() == origin && r.target_currency() == target)
    }

    /// Sum of converted amounts landing in `target`.
    pub fn total_converted(&self, target: &CurrencyCode) -> f64 {
        self.records
            .iter()
            .filter(|r| r.target_currency() == target)
            .map(|r| r.converted_amount())
            .sum()
    }

    /// Number of records that used the default rate.
    pub fn fallback_count(&self) -> usize {
        self.records.iter().filter(|r| r.used_fallback()).count()
    }
}

impl<'a> IntoIterator for &'a AuditLog {
    type Item = &'a ConversionRecord;
    type IntoIter = std::slice::Iter<'a, ConversionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for AuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Audit Log ===")?;
        writeln!(f, "Conversions:    {}", self.len())?;
        writeln!(f, "Default rate:   {}", self.fallback_count())?;
        for (i, record) in self.records.iter().enumerate() {
            writeln!(f, "  [{}] {}", i, record)?;
        }
        Ok(())
    }
}

//! Per-invocation transaction context.

use chrono::{DateTime, SecondsFormat, Utc};

use ledgerkit_auth::CallerIdentity;

/// Everything the environment supplies for one logical operation: the
/// verified caller and the transaction timestamp.
///
/// Services never retain a context (or anything derived from one) across
/// calls; the store is the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxContext {
    pub identity: CallerIdentity,
    pub timestamp: DateTime<Utc>,
}

impl TxContext {
    pub fn new(identity: CallerIdentity, timestamp: DateTime<Utc>) -> Self {
        Self {
            identity,
            timestamp,
        }
    }

    /// The transaction instant as an ISO-8601 string with millisecond
    /// precision, the format persisted in record stamps.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_renders_iso_8601_with_milliseconds() {
        let identity = CallerIdentity::new("Org1MSP", "x509::CN=a");
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap()
            + chrono::Duration::milliseconds(120);
        let ctx = TxContext::new(identity, instant);
        assert_eq!(ctx.timestamp_iso(), "2024-03-05T12:30:45.120Z");
    }
}

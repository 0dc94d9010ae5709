//! Daily request quota accounting.
//!
//! The upstream provider meters calls against a daily allowance reported by
//! the `status` endpoint. The ledger is owned by the client and mutated in
//! exactly two places: [`CreditLedger::apply_status`] after a status call
//! and [`CreditLedger::spend`] after each successful data call. Counting is
//! best-effort; the server-side counter is only authoritative after a
//! refresh.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Remaining quota against the daily request budget.
///
/// Both counters start as `None`; callers must refresh from the status
/// endpoint before issuing data calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditLedger {
    max_credits: Option<u32>,
    available_credits: Option<u32>,
}

/// Payload shape of the `status` endpoint, reduced to the quota counters.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    api: StatusApi,
}

#[derive(Debug, Deserialize)]
struct StatusApi {
    status: StatusCounters,
}

#[derive(Debug, Deserialize)]
struct StatusCounters {
    requests_limit_day: u32,
    requests: u32,
}

impl CreditLedger {
    /// Set both counters from the daily limit and used-request count
    /// reported by the server.
    ///
    /// One extra credit is reserved on top of the reported usage to cover
    /// an in-flight request the server has not counted yet.
    pub fn apply_status(&mut self, requests_limit_day: u32, requests: u32) {
        let used = requests.saturating_add(1);
        self.max_credits = Some(requests_limit_day);
        self.available_credits = Some(requests_limit_day.saturating_sub(used));
        debug!(
            max = requests_limit_day,
            available = self.available_credits,
            "credit ledger refreshed"
        );
    }

    /// Parse the quota counters out of a raw `status` payload and apply
    /// them.
    pub fn apply_status_payload(&mut self, payload: &Value) -> Result<()> {
        let envelope: StatusEnvelope = serde_json::from_value(payload.clone())?;
        self.apply_status(
            envelope.api.status.requests_limit_day,
            envelope.api.status.requests,
        );
        Ok(())
    }

    /// Record one spent credit after a successful data call. No-op while
    /// uninitialized.
    pub fn spend(&mut self) {
        self.available_credits = self.available_credits.map(|c| c.saturating_sub(1));
    }

    pub fn available(&self) -> Option<u32> {
        self.available_credits
    }

    pub fn max(&self) -> Option<u32> {
        self.max_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_status_reserves_headroom_credit() {
        let mut ledger = CreditLedger::default();
        ledger.apply_status(100, 10);

        assert_eq!(ledger.max(), Some(100));
        assert_eq!(ledger.available(), Some(89));
    }

    #[test]
    fn test_apply_status_saturates_at_zero() {
        let mut ledger = CreditLedger::default();
        ledger.apply_status(100, 100);

        assert_eq!(ledger.available(), Some(0));
    }

    #[test]
    fn test_spend_decrements_until_zero() {
        let mut ledger = CreditLedger::default();
        ledger.apply_status(10, 8);
        assert_eq!(ledger.available(), Some(1));

        ledger.spend();
        assert_eq!(ledger.available(), Some(0));

        ledger.spend();
        assert_eq!(ledger.available(), Some(0));
    }

    #[test]
    fn test_spend_is_noop_while_uninitialized() {
        let mut ledger = CreditLedger::default();
        ledger.spend();
        assert_eq!(ledger.available(), None);
    }

    #[test]
    fn test_apply_status_payload() {
        let payload = json!({
            "api": {
                "status": {
                    "user": "tester",
                    "requests": 10,
                    "requests_limit_day": 100
                }
            }
        });

        let mut ledger = CreditLedger::default();
        ledger.apply_status_payload(&payload).unwrap();
        assert_eq!(ledger.max(), Some(100));
        assert_eq!(ledger.available(), Some(89));
    }

    #[test]
    fn test_apply_status_payload_rejects_missing_counters() {
        let payload = json!({"api": {"status": {}}});

        let mut ledger = CreditLedger::default();
        assert!(ledger.apply_status_payload(&payload).is_err());
        assert_eq!(ledger.available(), None);
    }
}

//! Domain model for a transaction.
use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};
use shared::TransactionType;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Generate a unique transaction ID from its type and creation timestamp.
    /// Format: <type>-<timestamp_ms>-<random_suffix>
    /// Example: in-1625846400123-af3c90d1
    pub fn generate_id(transaction_type: TransactionType, timestamp_ms: i64) -> String {
        let tx_type = match transaction_type {
            TransactionType::Income => "in",
            TransactionType::Expense => "ex",
        };
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", tx_type, timestamp_ms, &suffix[..8])
    }

    /// Parse a client supplied date, either full RFC 3339 or a bare `YYYY-MM-DD`
    /// (interpreted as midnight UTC). Precision is cut to milliseconds, the
    /// resolution dates are stored with.
    pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(input) {
            return Some(date.with_timezone(&Utc).trunc_subsecs(3));
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|date| date.and_utc())
    }

    /// Canonical text form used both on the wire and in storage. Fixed width,
    /// so it sorts chronologically as plain text.
    pub fn format_date(date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generate_id() {
        let income_id = Transaction::generate_id(TransactionType::Income, 1702516122000);
        assert!(income_id.starts_with("in-1702516122000-"));
        assert_eq!(income_id.len(), "in-1702516122000-".len() + 8);

        let expense_id = Transaction::generate_id(TransactionType::Expense, 1702516125000);
        assert!(expense_id.starts_with("ex-1702516125000-"));

        let other = Transaction::generate_id(TransactionType::Expense, 1702516125000);
        assert_ne!(expense_id, other);
    }

    #[test]
    fn test_parse_date() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 14, 14, 30, 0).unwrap();
        assert_eq!(
            Transaction::parse_date("2025-06-14T10:30:00-04:00"),
            Some(expected)
        );

        let midnight = Utc.with_ymd_and_hms(2025, 6, 14, 0, 0, 0).unwrap();
        assert_eq!(Transaction::parse_date("2025-06-14"), Some(midnight));

        let precise = Transaction::parse_date("2025-06-14T10:30:00.123456789Z").unwrap();
        assert_eq!(Transaction::format_date(&precise), "2025-06-14T10:30:00.123Z");
        assert_eq!(Transaction::parse_date(&Transaction::format_date(&precise)), Some(precise));

        assert_eq!(Transaction::parse_date("14/06/2025"), None);
        assert_eq!(Transaction::parse_date(""), None);
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2023, 12, 14, 1, 2, 2).unwrap();
        assert_eq!(Transaction::format_date(&date), "2023-12-14T01:02:02.000Z");
    }
}

//! Transaction models for CSV parsing and reconciliation results.

use crate::amount::Amount;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Date format used by the ledgers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw transaction record as read from a headerless CSV row.
///
/// Fields are kept as strings so a bad date or amount can be reported with
/// a useful message instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct TransactionRecord {
    /// Booking date, `YYYY-MM-DD`
    pub date: String,

    /// Department that booked the transaction
    pub department: String,

    /// Amount as written in the ledger
    pub amount: String,

    /// Who was paid
    pub beneficiary: String,
}

impl TransactionRecord {
    /// Parses the raw CSV record into a typed transaction.
    pub fn parse(&self) -> Result<Transaction, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|e| format!("bad date '{}': {}", self.date, e))?;
        let amount = Amount::from_str(&self.amount)
            .map_err(|e| format!("bad amount '{}': {}", self.amount, e))?;

        Ok(Transaction {
            date,
            department: self.department.trim().to_string(),
            amount,
            beneficiary: self.beneficiary.trim().to_string(),
        })
    }
}

/// A parsed ledger entry.
///
/// Ordering follows field order: date, department, amount, beneficiary.
/// Amounts order by value, not by their text, so `9.50` sorts before
/// `16.00` among entries sharing a date and department.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transaction {
    pub date: NaiveDate,
    pub department: String,
    pub amount: Amount,
    pub beneficiary: String,
}

impl Transaction {
    /// Returns `true` if every field except the date is identical.
    pub fn same_entry(&self, other: &Transaction) -> bool {
        self.department == other.department
            && self.amount == other.amount
            && self.beneficiary == other.beneficiary
    }

    /// CSV fields in ledger column order.
    pub fn fields(&self) -> [String; 4] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.department.clone(),
            self.amount.to_string(),
            self.beneficiary.clone(),
        ]
    }
}

/// Outcome of reconciling one transaction against the other ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// A counterpart was found in the other ledger.
    Found,

    /// No counterpart exists in the other ledger.
    Missing,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Found => "FOUND",
            MatchStatus::Missing => "MISSING",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction tagged with its reconciliation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub transaction: Transaction,
    pub status: MatchStatus,
}

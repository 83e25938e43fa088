//! Ledger reconciliation.
//!
//! Matches the transactions of two ledgers that describe the same money
//! movements but may book them a day apart. Each transaction in either
//! ledger ends up tagged `FOUND` or `MISSING`.

use crate::error::{ExerciseError, Result};
use crate::transaction::{MatchStatus, Reconciled, Transaction, TransactionRecord};
use chrono::{Duration, NaiveDate};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, info};
use std::io::{Read, Write};

/// Days two bookings of the same transaction may lie apart by default.
pub const DEFAULT_MARGIN_DAYS: i64 = 1;

/// Reads a headerless ledger CSV with columns date, department, amount,
/// beneficiary.
///
/// Unlike a lenient streaming import, a single bad row fails the whole
/// read: reconciling a partial ledger would report false `MISSING`s.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
        let row = row_idx + 1;
        let record = result.map_err(|e| ExerciseError::InvalidRecord {
            row,
            message: e.to_string(),
        })?;
        let tx = record
            .parse()
            .map_err(|message| ExerciseError::InvalidRecord { row, message })?;
        transactions.push(tx);
    }

    debug!("Read {} transactions", transactions.len());
    Ok(transactions)
}

/// Writes reconciled transactions as headerless CSV, status last.
pub fn write_reconciled<W: Write>(writer: W, reconciled: &[Reconciled]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for entry in reconciled {
        let [date, department, amount, beneficiary] = entry.transaction.fields();
        csv_writer.write_record([
            date.as_str(),
            department.as_str(),
            amount.as_str(),
            beneficiary.as_str(),
            entry.status.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Matches two ledgers against each other.
///
/// Both ledgers are sorted first. Each left transaction then takes the
/// first unmatched right transaction with the same department, amount and
/// beneficiary whose date lies within the margin. A right transaction is
/// matched at most once.
#[derive(Debug, Clone)]
pub struct Reconciler {
    margin: Duration,
}

impl Reconciler {
    /// Creates a reconciler with a one day margin.
    pub fn new() -> Self {
        Reconciler {
            margin: Duration::days(DEFAULT_MARGIN_DAYS),
        }
    }

    /// Creates a reconciler accepting dates up to `days` apart.
    ///
    /// Fails if `days` is negative or too large to express as a duration.
    pub fn with_margin(days: i64) -> Result<Self> {
        if days < 0 {
            return Err(ExerciseError::InvalidMargin { days });
        }
        let margin = Duration::try_days(days).ok_or(ExerciseError::InvalidMargin { days })?;
        Ok(Reconciler { margin })
    }

    /// Returns `true` if `date` lies within the margin around `reference`.
    ///
    /// A bound that falls outside the calendar range is left open.
    pub fn date_in_margin(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        let after_start = reference
            .checked_sub_signed(self.margin)
            .map_or(true, |start| start <= date);
        let before_end = reference
            .checked_add_signed(self.margin)
            .map_or(true, |end| date <= end);
        after_start && before_end
    }

    /// Reconciles `left` against `right`, returning both ledgers sorted and
    /// tagged.
    pub fn reconcile(
        &self,
        mut left: Vec<Transaction>,
        mut right: Vec<Transaction>,
    ) -> (Vec<Reconciled>, Vec<Reconciled>) {
        left.sort();
        right.sort();

        let mut left_found = vec![false; left.len()];
        let mut right_found = vec![false; right.len()];

        for (i, tx) in left.iter().enumerate() {
            let candidate = right.iter().zip(&right_found).position(|(other, &taken)| {
                !taken && tx.same_entry(other) && self.date_in_margin(tx.date, other.date)
            });

            if let Some(j) = candidate {
                left_found[i] = true;
                right_found[j] = true;
                debug!(
                    "Matched {} {} {} on {} with {}",
                    tx.department, tx.amount, tx.beneficiary, tx.date, right[j].date
                );
            }
        }

        let left = tag(left, &left_found);
        let right = tag(right, &right_found);

        info!(
            "Reconciled {} left and {} right transactions, {} matched",
            left.len(),
            right.len(),
            left_found.iter().filter(|&&found| found).count()
        );

        (left, right)
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

fn tag(transactions: Vec<Transaction>, found: &[bool]) -> Vec<Reconciled> {
    transactions
        .into_iter()
        .zip(found)
        .map(|(transaction, &found)| Reconciled {
            transaction,
            status: if found {
                MatchStatus::Found
            } else {
                MatchStatus::Missing
            },
        })
        .collect()
}

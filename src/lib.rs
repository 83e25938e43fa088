//! # Coding Exercises
//!
//! Three small, independent utilities, each with its own tests:
//!
//! - [`last_lines`]: the lines of a file in reverse order, read backward in
//!   bounded chunks
//! - [`reconcile`]: matching two transaction ledgers whose bookings may be
//!   a day apart
//! - [`computed`]: derived values cached until their dependencies change
//!
//! ## Example
//!
//! ```no_run
//! use coding_exercises::last_lines;
//!
//! let mut lines = last_lines("files/last_lines.txt").unwrap();
//! let newest = lines.next().unwrap().unwrap();
//! print!("{}", newest);
//! ```

pub mod amount;
pub mod computed;
pub mod error;
pub mod last_lines;
pub mod reconcile;
pub mod transaction;

pub use amount::Amount;
pub use computed::{Computed, ComputedProperty};
pub use error::{ExerciseError, Result};
pub use last_lines::{last_lines, LastLines, DEFAULT_BUFFER_SIZE};
pub use reconcile::{read_transactions, write_reconciled, Reconciler, DEFAULT_MARGIN_DAYS};
pub use transaction::{MatchStatus, Reconciled, Transaction, TransactionRecord};

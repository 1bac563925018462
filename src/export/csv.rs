//! CSV Export functionality
//!
//! Writes the expense list, in insertion order, as `date,category,amount`.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;

/// Export all records to CSV
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }

    // An empty export still gets a header row
    if records.is_empty() {
        csv_writer.write_record(["date", "category", "amount"])?;
    }

    csv_writer.flush()?;
    Ok(())
}

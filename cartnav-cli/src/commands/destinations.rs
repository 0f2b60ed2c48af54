//! Destination listing.

use cartnav::destination::DestinationTable;

use crate::error::CliError;

/// List destinations in table order with their coordinates.
pub fn run(table: &DestinationTable) -> Result<(), CliError> {
    for line in listing(table) {
        println!("{}", line);
    }
    Ok(())
}

/// One aligned line per destination.
fn listing(table: &DestinationTable) -> Vec<String> {
    let width = table.names().map(str::len).max().unwrap_or(0);
    table
        .iter()
        .map(|d| format!("{:<width$}  {}", d.name, d.point, width = width))
        .collect()
}

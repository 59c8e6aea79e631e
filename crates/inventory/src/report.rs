//! Console report.

use std::io::{self, Write};

use crate::store::InventoryStore;

pub const REPORT_HEADER: &str = "Items Report";

impl InventoryStore {
    /// Write the header line followed by one `<item> -> <quantity>` line per item.
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (item, qty) in self.iter() {
            writeln!(out, "{item} -> {qty}")?;
        }
        Ok(())
    }

    /// Print the report to stdout.
    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_report(&mut lock)
    }
}

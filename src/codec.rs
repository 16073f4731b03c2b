//! Line-oriented persistence for the catalog and ledger files.
//!
//! The formats are fixed for interchange with existing machine data:
//! one `name, price, stock, image` line per catalog slot and one
//! `denomination: count` line per ledger entry. Loading is strict; any
//! structural defect is fatal so the machine never starts half-initialized.

use crate::catalog::{Catalog, Product, Slot};
use crate::error::{Result, VendingError};
use crate::ledger::Ledger;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SlotRecord {
    name: String,
    price: u32,
    stock: u32,
    image: String,
}

impl From<SlotRecord> for Slot {
    fn from(record: SlotRecord) -> Self {
        // An unnamed row is an unused slot; its other fields carry nothing.
        if record.name.is_empty() {
            Slot::Empty
        } else {
            Slot::Occupied(Product::new(
                record.name,
                record.price,
                record.stock,
                record.image,
            ))
        }
    }
}

/// Reads a catalog of exactly `capacity` slots. A row count mismatch or any
/// unparsable row fails the whole load.
pub fn read_catalog<R: Read>(source: R, capacity: usize) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut slots = Vec::with_capacity(capacity);
    for record in reader.deserialize::<SlotRecord>() {
        slots.push(Slot::from(record?));
    }
    if slots.len() != capacity {
        return Err(VendingError::SlotCount {
            expected: capacity,
            found: slots.len(),
        });
    }
    Ok(Catalog::from_slots(slots))
}

/// Writes the catalog in the `", "`-joined layout the loader (and the
/// original machine data) expects. A plain CSV writer would drop the space
/// after the delimiter.
pub fn write_catalog<W: Write>(mut dest: W, catalog: &Catalog) -> Result<()> {
    for slot in catalog.iter() {
        match slot.product() {
            Some(product) => writeln!(
                dest,
                "{}, {}, {}, {}",
                product.name, product.price, product.stock, product.image
            )?,
            None => writeln!(dest, ", 0, 0, ")?,
        }
    }
    Ok(())
}

/// Reads `denomination: count` lines. The line order fixes the accepted
/// denomination set; counts are free to change between sessions.
pub fn read_ledger<R: Read>(source: R) -> Result<Ledger> {
    let mut counts = Vec::new();
    for (index, line) in BufReader::new(source).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (denomination, count) =
            line.split_once(':')
                .ok_or_else(|| VendingError::LedgerFormat {
                    line: index + 1,
                    reason: "expected `denomination: count`".to_string(),
                })?;
        let parse = |field: &str| {
            field
                .trim()
                .parse::<u32>()
                .map_err(|e| VendingError::LedgerFormat {
                    line: index + 1,
                    reason: e.to_string(),
                })
        };
        counts.push((parse(denomination)?, parse(count)?));
    }
    Ok(Ledger::new(counts))
}

/// Writes `denomination: count` lines, largest denomination first, so a
/// save/load cycle reproduces the ledger exactly.
pub fn write_ledger<W: Write>(mut dest: W, ledger: &Ledger) -> Result<()> {
    for (denomination, count) in ledger.iter_desc() {
        writeln!(dest, "{denomination}: {count}")?;
    }
    Ok(())
}

pub fn load_files(
    catalog_path: &Path,
    ledger_path: &Path,
    capacity: usize,
) -> Result<(Catalog, Ledger)> {
    let catalog = read_catalog(File::open(catalog_path)?, capacity)?;
    let ledger = read_ledger(File::open(ledger_path)?)?;
    Ok((catalog, ledger))
}

pub fn save_files(catalog_path: &Path, ledger_path: &Path, catalog: &Catalog, ledger: &Ledger) -> Result<()> {
    write_catalog(File::create(catalog_path)?, catalog)?;
    write_ledger(File::create(ledger_path)?, ledger)?;
    Ok(())
}

use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};

/// Writes a catalog/ledger file pair into `dir` and returns their paths.
pub fn write_machine_files(
    dir: &Path,
    drinks: &str,
    cash: &str,
) -> Result<(PathBuf, PathBuf), Error> {
    let drinks_path = dir.join("drinks.txt");
    let cash_path = dir.join("cash.txt");
    fs::write(&drinks_path, drinks)?;
    fs::write(&cash_path, cash)?;
    Ok((drinks_path, cash_path))
}

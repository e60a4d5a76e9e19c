//! Package table rendering

use std::io::{self, Write};

use crate::domain::BundlePackage;

const MIN_WIDTH: usize = 16;
const TAB_WIDTH: usize = 8;

/// Write the two-column `Package` / `Version(s)` table
///
/// The name column is at least [`MIN_WIDTH`] wide, rounded up to a tab stop,
/// and always leaves one blank between the longest name and the versions.
pub fn write_package_table<W: Write>(out: &mut W, packages: &[BundlePackage]) -> io::Result<()> {
    let mut rows: Vec<(String, String)> = vec![
        ("Package".to_string(), "Version(s)".to_string()),
        ("-------".to_string(), "----------".to_string()),
    ];
    rows.extend(
        packages
            .iter()
            .map(|p| (p.name.clone(), p.version_names().join(","))),
    );

    let widest = rows
        .iter()
        .map(|(name, _)| console::measure_text_width(name))
        .max()
        .unwrap_or(0);
    let width = column_width(widest);

    for (name, versions) in rows {
        let pad = width - console::measure_text_width(&name);
        writeln!(out, "{name}{:pad$}{versions}", "")?;
    }
    Ok(())
}

fn column_width(widest: usize) -> usize {
    (widest + 1).max(MIN_WIDTH).div_ceil(TAB_WIDTH) * TAB_WIDTH
}

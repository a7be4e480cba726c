use crate::catalog::{page_names, CatalogSource};
use crate::commands::Command;
use crate::domain::constants::HELP_BANNER;
use crate::services::pager::page_range;
use std::io::Write;

pub fn print_help(out: &mut dyn Write, commands: &[Command]) -> anyhow::Result<()> {
    writeln!(out, "{}", HELP_BANNER)?;
    for c in commands {
        writeln!(out, "Command: {}", c.name)?;
        writeln!(out, "Description: {}\n", c.description)?;
    }
    Ok(())
}

/// Prints the listing for `page`, writing each name as soon as it arrives.
///
/// Returns how many names were printed. Items whose body fails to decode
/// are logged and skipped; any other catalog error stops the listing.
pub fn print_page(
    out: &mut dyn Write,
    catalog: &dyn CatalogSource,
    page: u32,
) -> anyhow::Result<usize> {
    writeln!(out, "Locations:")?;
    writeln!(out, "Page {}", page)?;
    out.flush()?;

    let mut printed = 0usize;
    for (index, name) in page_names(catalog, page_range(page)) {
        match name {
            Ok(name) => {
                writeln!(out, "{}", name)?;
                out.flush()?;
                printed += 1;
            }
            Err(e) if !e.is_fatal() => {
                tracing::warn!(index, error = %e, "skipping location area");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(printed)
}

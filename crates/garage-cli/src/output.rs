//! Output formatting module

use std::io::Write;

use garage_domain::{RecordRow, Vehicle, RECORD_HEADERS};
use garage_types::{OutputFormat, Result};

pub fn output_vehicles<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    vehicles: &[Vehicle],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, vehicles)?;
        writeln!(out)?;
        return Ok(());
    }

    if vehicles.is_empty() {
        writeln!(out, "No vehicles registered")?;
        return Ok(());
    }

    writeln!(out, "\nService Queue")?;
    writeln!(out, "=============")?;
    writeln!(
        out,
        "{:<5} {:<6} {:<16} {:<12} {:<14} {:<11} Added",
        "ID", "Type", "Name", "License", "Owner", "Status"
    )?;
    for v in vehicles {
        writeln!(
            out,
            "{:<5} {:<6} {:<16} {:<12} {:<14} {:<11} {}",
            v.id,
            v.kind.label(),
            v.name,
            v.license,
            v.owner,
            v.status.label(),
            v.registered_label()
        )?;
    }
    Ok(())
}

pub fn output_records<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    rows: &[RecordRow],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, rows)?;
        writeln!(out)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(out, "No service records")?;
        return Ok(());
    }

    writeln!(out, "\nService Records")?;
    writeln!(out, "===============")?;
    let [id, vehicle, license, start, end, duration, fuel] = RECORD_HEADERS;
    writeln!(
        out,
        "{:<5} {:<22} {:<12} {:<20} {:<20} {:<10} {}",
        id, vehicle, license, start, end, duration, fuel
    )?;
    for row in rows {
        let marker = if row.in_progress { " *" } else { "" };
        writeln!(
            out,
            "{:<5} {:<22} {:<12} {:<20} {:<20} {:<10} {}{}",
            row.id,
            row.vehicle,
            row.license,
            row.start,
            row.end,
            row.duration,
            row.fuel_efficiency,
            marker
        )?;
    }
    Ok(())
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use serde::Serialize;

use rji_model::{ConsentFileStatus, ListMembershipStatus, MatchStatus, ReconciliationRow};
use rji_reconcile::ReconciliationSummary;

use crate::types::ReconcileOutcome;

pub fn print_summary(outcome: &ReconcileOutcome, details: bool) {
    println!("Data: {}", outcome.data_dir.display());
    println!("Output: {}", outcome.output_dataset);
    if outcome.companions_indexed > 0 {
        println!("Companions indexed: {}", outcome.companions_indexed);
    }
    if outcome.duplicate_companions > 0 {
        println!(
            "Duplicate companion documents: {} (latest registration used)",
            outcome.duplicate_companions
        );
    }
    let summary = &outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Status"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Participants"),
        dim_cell("adults"),
        count_cell(summary.adults, None),
    ]);
    table.add_row(vec![
        Cell::new("Participants"),
        dim_cell("minors"),
        count_cell(summary.minors, None),
    ]);
    let checks: [(&str, &str, usize, Option<Color>); 8] = [
        ("Guardian", MatchStatus::Matched.as_str(), summary.guardian_matched, None),
        ("Guardian", MatchStatus::Missing.as_str(), summary.guardian_missing, Some(Color::Red)),
        ("Consent file", ConsentFileStatus::Present.as_str(), summary.consent_present, None),
        ("Consent file", ConsentFileStatus::Absent.as_str(), summary.consent_absent, Some(Color::Yellow)),
        ("Declared list", ListMembershipStatus::Listed.as_str(), summary.listed, None),
        ("Declared list", ListMembershipStatus::NotListed.as_str(), summary.not_listed, Some(Color::Yellow)),
        ("Declared list", ListMembershipStatus::NoList.as_str(), summary.no_list, Some(Color::Yellow)),
        ("Minors", "fully verified", summary.fully_verified, Some(Color::Green)),
    ];
    for (check, status, count, color) in checks {
        table.add_row(vec![Cell::new(check), status_cell(status), count_cell(count, color)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if details {
        print_observation_table(&outcome.rows);
    }
}

fn print_observation_table(rows: &[ReconciliationRow]) {
    let flagged: Vec<&ReconciliationRow> =
        rows.iter().filter(|row| row.has_observations()).collect();
    if flagged.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Participant"),
        header_cell("Name"),
        header_cell("Guardian"),
        header_cell("Match"),
        header_cell("File"),
        header_cell("List"),
        header_cell("Observations"),
    ]);
    apply_table_style(&mut table);
    for row in flagged {
        table.add_row(vec![
            Cell::new(&row.participant_document),
            Cell::new(&row.full_name),
            if row.declared_guardian.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&row.declared_guardian)
            },
            status_cell(row.guardian_match.as_str()),
            status_cell(row.consent_file.as_str()),
            status_cell(row.list_membership.as_str()),
            Cell::new(row.observations.join("\n")),
        ]);
    }
    println!();
    println!("Observations:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &str) -> Cell {
    match status {
        "OK" | "TRUE" => Cell::new(status).fg(Color::Green),
        "FALTA" => Cell::new(status)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        "FALSE" | "NO_LISTA" => Cell::new(status).fg(Color::Yellow),
        _ => dim_cell(status),
    }
}

fn count_cell(count: usize, color: Option<Color>) -> Cell {
    match color {
        Some(color) if count > 0 => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        _ if count == 0 => dim_cell(count),
        _ => Cell::new(count),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    output: &'a str,
    summary: &'a ReconciliationSummary,
    companions_indexed: usize,
    duplicate_companions: usize,
    rows: &'a [ReconciliationRow],
}

pub fn print_json(outcome: &ReconcileOutcome) -> serde_json::Result<()> {
    let report = JsonReport {
        output: &outcome.output_dataset,
        summary: &outcome.summary,
        companions_indexed: outcome.companions_indexed,
        duplicate_companions: outcome.duplicate_companions,
        rows: &outcome.rows,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

//! Terminal rendering of profiler results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eda_model::{
    ColumnRole, ColumnSpec, CrossTab, ProfileReport, Quartiles, SummaryStatistics, ValueCount,
};

/// Plain-text overview lines printed above the report tables.
pub fn render_overview(report: &ProfileReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rows: {}\n", report.row_count));
    out.push_str(&format!("Columns: {}\n", report.column_count));
    out.push_str(&format!("Duplicate rows: {}\n", report.duplicate_rows));
    out.push_str(&format!("Missing cells: {}\n", report.missing_total()));
    let balance = &report.class_balance;
    let imbalance = balance
        .imbalance_ratio()
        .map(|ratio| format!(", imbalance {ratio:.2}"))
        .unwrap_or_default();
    out.push_str(&format!(
        "Target: {} ({} classes{imbalance})\n",
        report.spec.target(),
        balance.len()
    ));
    if report.redundant_pairs.is_empty() {
        out.push_str("Redundant pairs: none\n");
    } else {
        out.push_str("Redundant pairs:\n");
        for pair in &report.redundant_pairs {
            out.push_str(&format!(
                "- {} ~ {} ({} levels)\n",
                pair.column_a, pair.column_b, pair.levels
            ));
        }
    }
    out
}

pub fn print_report(report: &ProfileReport) {
    print!("{}", render_overview(report));
    println!();
    println!("Numerical columns:");
    println!("{}", statistics_table(&report.numerical));
    println!();
    println!("Class balance:");
    println!("{}", value_count_table(&report.class_balance));
    for counts in &report.categorical {
        println!();
        println!("{}:", counts.column());
        println!("{}", value_count_table(counts));
    }
    let missing: Vec<_> = report.missing.iter().filter(|m| m.count > 0).collect();
    if !missing.is_empty() {
        println!();
        println!("Missing values:");
        let mut table = Table::new();
        table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for entry in missing {
            table.add_row(vec![Cell::new(&entry.column), count_cell(entry.count)]);
        }
        println!("{table}");
    }
}

pub fn statistics_table(stats: &[SummaryStatistics]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("25%"),
        header_cell("50%"),
        header_cell("75%"),
        header_cell("Max"),
        header_cell("IQR"),
    ]);
    apply_table_style(&mut table);
    for index in 1..10 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in stats {
        let quartiles = entry.quartiles.as_ref();
        table.add_row(vec![
            Cell::new(&entry.column).add_attribute(Attribute::Bold),
            Cell::new(entry.count),
            number_cell(entry.mean),
            number_cell(entry.std),
            number_cell(entry.min),
            number_cell(quartiles.map(|q| q.q1)),
            number_cell(quartiles.map(|q| q.median)),
            number_cell(quartiles.map(|q| q.q3)),
            number_cell(entry.max),
            number_cell(quartiles.map(Quartiles::iqr)),
        ]);
    }
    table
}

pub fn value_count_table(counts: &ValueCount) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in counts.entries() {
        let share = counts
            .proportion(&entry.value)
            .map(|p| format!("{:.1}%", p * 100.0))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(entry.value.to_string()),
            Cell::new(entry.count),
            Cell::new(share),
        ]);
    }
    table
}

pub fn cross_tab_table(crosstab: &CrossTab) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell(format!(
        "{} \\ {}",
        crosstab.column_a(),
        crosstab.column_b()
    ))];
    header.extend(
        crosstab
            .column_labels()
            .iter()
            .map(|label| header_cell(label.to_string())),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=crosstab.column_labels().len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (label, row) in crosstab.row_labels().iter().zip(crosstab.counts()) {
        let mut cells = vec![Cell::new(label.to_string()).add_attribute(Attribute::Bold)];
        cells.extend(row.iter().map(|&count| count_cell(count)));
        table.add_row(cells);
    }
    table
}

pub fn schema_table(spec: &ColumnSpec) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Role")]);
    apply_table_style(&mut table);
    for name in spec.columns() {
        let role = spec.role_of(name).map(role_cell).unwrap_or_else(|| dim_cell("-"));
        table.add_row(vec![Cell::new(name), role]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: impl Into<String>) -> Cell {
    Cell::new(label.into())
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string())
        .fg(Color::DarkGrey)
        .add_attribute(Attribute::Dim)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_number(value)),
        None => dim_cell("-"),
    }
}

fn role_cell(role: ColumnRole) -> Cell {
    let color = match role {
        ColumnRole::Numerical => Color::Green,
        ColumnRole::Categorical => Color::Blue,
        ColumnRole::Target => Color::Yellow,
    };
    Cell::new(role.to_string()).fg(color)
}

/// Whole numbers print without a fraction, anything else with three decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{quote::Quote, rate_card::RateCard},
    quantity::{cost::Cost, days::Days},
    statistics::{CostTotals, SurveyRow, fleet_totals, totals_per_kind},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn unknown_cell() -> Cell {
    Cell::new("?").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim)
}

fn naive_daily_cell(naive_daily: Option<Cost>) -> Cell {
    match naive_daily {
        Some(cost) => {
            Cell::new(cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim)
        }
        None => Cell::new("—").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
    }
}

fn savings_cell(savings: Cost) -> Cell {
    Cell::new(savings)
        .set_alignment(CellAlignment::Right)
        .fg(if savings > Cost::ZERO { Color::Green } else { Color::Reset })
}

pub fn build_survey_table(rows: &[SurveyRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Resource", "Kind", "Days", "Blocks", "Billed", "Naive daily", "Savings"]);
    for row in rows {
        let mut cells = vec![
            Cell::new(&row.resource.name),
            Cell::new(row.resource.kind).fg(row.resource.kind.color()),
            Cell::new(row.total_days).set_alignment(CellAlignment::Right),
        ];
        match row.quote {
            Some(quote) => {
                cells.push(Cell::new(quote.allocation));
                cells.push(Cell::new(quote.total_cost).set_alignment(CellAlignment::Right));
                cells.push(naive_daily_cell(
                    row.resource.rates.daily.map(|daily| daily * row.total_days),
                ));
                cells.push(savings_cell(quote.savings));
            }
            None => cells.extend((0..4).map(|_| unknown_cell())),
        }
        table.add_row(cells);
    }
    table
}

pub fn build_totals_table(rows: &[SurveyRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Resources", "Unpriced", "Days", "Billed", "Savings"]);
    for (kind, totals) in totals_per_kind(rows) {
        if totals.n_resources == 0 {
            continue;
        }
        table.add_row(totals_cells(Cell::new(kind).fg(kind.color()), totals));
    }
    table.add_row(totals_cells(
        Cell::new("Fleet").add_attribute(Attribute::Bold),
        fleet_totals(rows),
    ));
    table
}

fn totals_cells(label: Cell, totals: CostTotals) -> Vec<Cell> {
    vec![
        label,
        Cell::new(totals.n_resources).set_alignment(CellAlignment::Right),
        Cell::new(totals.n_unpriced)
            .set_alignment(CellAlignment::Right)
            .fg(if totals.n_unpriced != 0 { Color::Red } else { Color::Reset }),
        Cell::new(totals.total_days).set_alignment(CellAlignment::Right),
        Cell::new(totals.billed).set_alignment(CellAlignment::Right),
        savings_cell(totals.savings),
    ]
}

pub fn build_quote_table(total_days: Days, rates: RateCard, quote: Quote) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Days", "Blocks", "Billed", "Naive daily", "Savings"]);
    table.add_row(vec![
        Cell::new(total_days).set_alignment(CellAlignment::Right),
        Cell::new(quote.allocation),
        Cell::new(quote.total_cost).set_alignment(CellAlignment::Right),
        naive_daily_cell(rates.daily.map(|daily| daily * total_days)),
        savings_cell(quote.savings),
    ]);
    table
}

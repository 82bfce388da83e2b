//! Table formatting for indexed records.

use alloy_primitives::{Address, U256};
use colored::Colorize;
use lendpool_rs_engine::math::rate_to_f64;
use lendpool_rs_engine::{AuditRecord, Market, RateModelConfig, Snapshot, UserPosition};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "Borrowed")]
    borrowed: String,
    #[tabled(rename = "Supplied")]
    supplied: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Borrow Rate")]
    borrow_rate: String,
    #[tabled(rename = "Kink")]
    kink: String,
    #[tabled(rename = "Rate Model")]
    rate_model: String,
    #[tabled(rename = "Users")]
    users: u64,
}

#[derive(Tabled)]
struct RateModelRow {
    #[tabled(rename = "Rate Model")]
    address: String,
    #[tabled(rename = "Scale")]
    scale: String,
}

#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Token")]
    token: String,
    #[tabled(rename = "Deposited")]
    deposited: String,
    #[tabled(rename = "Withdrawn")]
    withdrawn: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "Block")]
    block: u64,
    #[tabled(rename = "Log")]
    log_index: u64,
    #[tabled(rename = "Event")]
    event: &'static str,
    #[tabled(rename = "Emitter")]
    emitter: String,
    #[tabled(rename = "Tx")]
    transaction: String,
}

pub(crate) fn truncate_address(addr: &str) -> String {
    if addr.len() > 10 {
        format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
    } else {
        addr.to_string()
    }
}

fn short(address: &Address) -> String {
    truncate_address(&format!("{}", address))
}

pub(crate) fn format_percent(value: U256) -> String {
    format!("{:.2}%", rate_to_f64(value) * 100.0)
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

pub fn format_markets_table(markets: &[Market]) -> String {
    if markets.is_empty() {
        return "No markets found.".to_string();
    }

    let rows: Vec<MarketRow> = markets
        .iter()
        .map(|m| MarketRow {
            pool: short(&m.id),
            borrowed: m.total_borrow_assets.to_string(),
            supplied: m.total_supply_assets.to_string(),
            utilization: format_percent(m.utilization),
            borrow_rate: format_percent(m.borrow_rate),
            kink: format!(
                "{} @ {}",
                format_percent(m.rate_at_optimal),
                format_percent(m.optimal_utilization)
            ),
            rate_model: m
                .interest_rate_model
                .as_ref()
                .map(short)
                .unwrap_or_else(|| "-".to_string()),
            users: m.users,
        })
        .collect();

    styled(Table::new(rows))
}

pub fn format_rate_models_table(configs: &[RateModelConfig]) -> String {
    if configs.is_empty() {
        return "No rate models found.".to_string();
    }

    let rows: Vec<RateModelRow> = configs
        .iter()
        .map(|c| RateModelRow {
            address: short(&c.id),
            scale: format_percent(c.scaled_percentage),
        })
        .collect();

    styled(Table::new(rows))
}

pub fn format_positions_table(positions: &[UserPosition]) -> String {
    if positions.is_empty() {
        return "No positions found.".to_string();
    }

    let rows: Vec<PositionRow> = positions
        .iter()
        .map(|p| PositionRow {
            pool: short(&p.market),
            user: short(&p.user),
            token: p
                .token
                .as_ref()
                .map(short)
                .unwrap_or_else(|| "-".to_string()),
            deposited: p.total_deposited.to_string(),
            withdrawn: p.total_withdrawn.to_string(),
            balance: p.current_balance.to_string(),
        })
        .collect();

    styled(Table::new(rows))
}

pub fn format_audit_table(records: &[AuditRecord]) -> String {
    if records.is_empty() {
        return "No events found.".to_string();
    }

    let rows: Vec<AuditRow> = records
        .iter()
        .map(|r| AuditRow {
            block: r.meta.block_number,
            log_index: r.meta.log_index,
            event: r.event.name(),
            emitter: short(&r.address),
            transaction: truncate_address(&format!("{}", r.meta.transaction_hash)),
        })
        .collect();

    styled(Table::new(rows))
}

/// All three record tables under section headers.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Markets".cyan().bold()));
    output.push_str(&format!("{}\n\n", format_markets_table(&snapshot.markets)));

    output.push_str(&format!("{}\n", "Rate Models".cyan().bold()));
    output.push_str(&format!(
        "{}\n\n",
        format_rate_models_table(&snapshot.rate_models)
    ));

    output.push_str(&format!("{}\n", "Positions".cyan().bold()));
    output.push_str(&format!("{}\n\n", format_positions_table(&snapshot.positions)));

    output.push_str(&format!("Events applied: {}", snapshot.audit_records));
    output
}

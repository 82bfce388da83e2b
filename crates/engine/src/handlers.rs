//! Event dispatch: one handler per event kind.
//!
//! Every event is mirrored into an [`AuditRecord`]. The stateful subset then
//! updates derived records:
//!
//! - curve configuration events overwrite one market field and recompute
//! - `ScaledPercentageSet` updates the rate model and recomputes every market
//!   linked to it
//! - `Borrow`, `Repay` and `Liquidation` refresh the pool totals and recompute
//! - `SupplyLiquidity` and `WithdrawLiquidity` refresh, recompute, then adjust
//!   the user's position
//!
//! Handlers never fail. A failed total read keeps the previous value.

use alloy_primitives::{Address, U256};
use tracing::{debug, warn};

use crate::events::{AuditRecord, EventKind, LendingEvent};
use crate::irm::update_borrow_rate;
use crate::reader::MarketReader;
use crate::records::Market;
use crate::store::{
    get_or_create_market, get_or_create_position, get_or_create_rate_model, Store,
};

/// Market field set by a curve configuration event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurveParam {
    BaseRate,
    OptimalUtilization,
    RateAtOptimal,
    MaxUtilization,
}

/// Applies one event to the store.
pub fn handle_event<S, R>(store: &mut S, reader: &R, event: &LendingEvent)
where
    S: Store + ?Sized,
    R: MarketReader + ?Sized,
{
    store.save_audit(AuditRecord::from(event));
    debug!(
        event = event.kind.name(),
        address = %event.address,
        block = event.meta.block_number,
        log_index = event.meta.log_index,
        "handling event"
    );

    match &event.kind {
        EventKind::LendingPoolBaseRateSet { lending_pool, rate } => {
            set_curve_param(store, *lending_pool, CurveParam::BaseRate, *rate);
        }
        EventKind::LendingPoolOptimalUtilizationSet {
            lending_pool,
            utilization,
        } => {
            set_curve_param(
                store,
                *lending_pool,
                CurveParam::OptimalUtilization,
                *utilization,
            );
        }
        EventKind::LendingPoolRateAtOptimalSet { lending_pool, rate } => {
            set_curve_param(store, *lending_pool, CurveParam::RateAtOptimal, *rate);
        }
        EventKind::LendingPoolMaxUtilizationSet {
            lending_pool,
            utilization,
        } => {
            set_curve_param(
                store,
                *lending_pool,
                CurveParam::MaxUtilization,
                *utilization,
            );
        }
        EventKind::ScaledPercentageSet { percentage } => {
            set_scaled_percentage(store, event.address, *percentage);
        }
        EventKind::InterestRateModelSet {
            interest_rate_model,
        } => {
            let mut market = get_or_create_market(store, event.address);
            market.interest_rate_model = Some(*interest_rate_model);
            store.save_market(&market);
            update_borrow_rate(store, &mut market);
        }
        EventKind::Borrow { .. } | EventKind::Repay { .. } | EventKind::Liquidation { .. } => {
            refresh_market(store, reader, event.address);
        }
        EventKind::SupplyLiquidity {
            user,
            token,
            amount,
        } => {
            refresh_market(store, reader, event.address);
            let mut position = get_or_create_position(store, event.address, *user);
            position.deposit(*amount, *token);
            store.save_position(&position);
        }
        EventKind::WithdrawLiquidity {
            user,
            token,
            amount,
        } => {
            refresh_market(store, reader, event.address);
            let mut position = get_or_create_position(store, event.address, *user);
            if !position.withdraw(*amount, *token) {
                warn!(
                    market = %event.address,
                    %user,
                    %amount,
                    "withdrawal exceeds tracked balance, flooring at zero"
                );
            }
            store.save_position(&position);
        }
        EventKind::SupplyCollateral { .. }
        | EventKind::WithdrawCollateral { .. }
        | EventKind::BorrowTokenSet { .. }
        | EventKind::CollateralTokenSet { .. }
        | EventKind::LtvSet { .. }
        | EventKind::MinSupplyAmountSet { .. }
        | EventKind::RouterSet { .. }
        | EventKind::Paused { .. }
        | EventKind::Unpaused { .. }
        | EventKind::Initialized { .. }
        | EventKind::Upgraded { .. }
        | EventKind::RoleAdminChanged { .. }
        | EventKind::RoleGranted { .. }
        | EventKind::RoleRevoked { .. } => {}
    }
}

fn set_curve_param<S: Store + ?Sized>(
    store: &mut S,
    lending_pool: Address,
    param: CurveParam,
    value: U256,
) {
    let mut market = get_or_create_market(store, lending_pool);
    match param {
        CurveParam::BaseRate => market.base_rate = value,
        CurveParam::OptimalUtilization => market.optimal_utilization = value,
        CurveParam::RateAtOptimal => market.rate_at_optimal = value,
        CurveParam::MaxUtilization => market.max_utilization = value,
    }
    store.save_market(&market);
    update_borrow_rate(store, &mut market);
}

fn set_scaled_percentage<S: Store + ?Sized>(
    store: &mut S,
    rate_model: Address,
    percentage: U256,
) {
    let mut config = get_or_create_rate_model(store, rate_model);
    config.scaled_percentage = percentage;
    store.save_rate_model(&config);

    for id in store.markets_using_rate_model(rate_model) {
        let mut market = get_or_create_market(store, id);
        update_borrow_rate(store, &mut market);
    }
}

/// Re-reads both totals for `market`, then recomputes its rate.
fn refresh_market<S, R>(store: &mut S, reader: &R, market: Address)
where
    S: Store + ?Sized,
    R: MarketReader + ?Sized,
{
    let mut record = get_or_create_market(store, market);
    apply_totals(&mut record, reader);
    store.save_market(&record);
    update_borrow_rate(store, &mut record);
}

fn apply_totals<R: MarketReader + ?Sized>(market: &mut Market, reader: &R) {
    match reader.total_borrow_assets(market.id) {
        Ok(value) => market.total_borrow_assets = value,
        Err(err) => warn!(%err, "keeping previous total borrow assets"),
    }
    match reader.total_supply_assets(market.id) {
        Ok(value) => market.total_supply_assets = value,
        Err(err) => warn!(%err, "keeping previous total supply assets"),
    }
}

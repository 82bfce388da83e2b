//! Mapping from raw RPC logs to [`LendingEvent`]s.

use alloy::rpc::types::Log;
use alloy::sol_types::SolEventInterface;
use lendpool_rs_engine::{EventKind, EventMeta, LendingEvent};
use tracing::debug;

use crate::error::{ContractError, Result};
use crate::interest_rate_model::IInterestRateModel::IInterestRateModelEvents;
use crate::lending_pool::ILendingPool::ILendingPoolEvents;

/// Decodes a log emitted by a lending pool or an interest rate model.
///
/// Returns `Ok(None)` for logs with an unknown topic and for logs the node
/// flagged as removed by a reorg.
///
/// # Errors
///
/// [`ContractError::Decode`] if a known event carries a malformed payload, and
/// [`ContractError::MissingLogField`] if the node omitted block number,
/// timestamp, transaction hash or log index.
pub fn decode_log(log: &Log) -> Result<Option<LendingEvent>> {
    if log.removed {
        debug!(address = %log.address(), "skipping removed log");
        return Ok(None);
    }
    let Some(topic0) = log.topic0() else {
        return Ok(None);
    };

    let kind = if IInterestRateModelEvents::SELECTORS.contains(&topic0.0) {
        let decoded = IInterestRateModelEvents::decode_log(&log.inner)
            .map_err(|e| ContractError::Decode(e.to_string()))?;
        from_rate_model_event(decoded.data)
    } else if ILendingPoolEvents::SELECTORS.contains(&topic0.0) {
        let decoded = ILendingPoolEvents::decode_log(&log.inner)
            .map_err(|e| ContractError::Decode(e.to_string()))?;
        from_pool_event(decoded.data)
    } else {
        return Ok(None);
    };

    Ok(Some(LendingEvent {
        address: log.address(),
        meta: log_meta(log)?,
        kind,
    }))
}

fn log_meta(log: &Log) -> Result<EventMeta> {
    Ok(EventMeta {
        block_number: log
            .block_number
            .ok_or(ContractError::MissingLogField("block_number"))?,
        block_timestamp: log
            .block_timestamp
            .ok_or(ContractError::MissingLogField("block_timestamp"))?,
        transaction_hash: log
            .transaction_hash
            .ok_or(ContractError::MissingLogField("transaction_hash"))?,
        log_index: log
            .log_index
            .ok_or(ContractError::MissingLogField("log_index"))?,
    })
}

fn from_rate_model_event(event: IInterestRateModelEvents) -> EventKind {
    match event {
        IInterestRateModelEvents::LendingPoolBaseRateSet(e) => EventKind::LendingPoolBaseRateSet {
            lending_pool: e.lendingPool,
            rate: e.rate,
        },
        IInterestRateModelEvents::LendingPoolOptimalUtilizationSet(e) => {
            EventKind::LendingPoolOptimalUtilizationSet {
                lending_pool: e.lendingPool,
                utilization: e.utilization,
            }
        }
        IInterestRateModelEvents::LendingPoolRateAtOptimalSet(e) => {
            EventKind::LendingPoolRateAtOptimalSet {
                lending_pool: e.lendingPool,
                rate: e.rate,
            }
        }
        IInterestRateModelEvents::LendingPoolMaxUtilizationSet(e) => {
            EventKind::LendingPoolMaxUtilizationSet {
                lending_pool: e.lendingPool,
                utilization: e.utilization,
            }
        }
        IInterestRateModelEvents::ScaledPercentageSet(e) => EventKind::ScaledPercentageSet {
            percentage: e.percentage,
        },
    }
}

fn from_pool_event(event: ILendingPoolEvents) -> EventKind {
    match event {
        ILendingPoolEvents::Borrow(e) => EventKind::Borrow {
            user: e.user,
            token: e.token,
            amount: e.amount,
        },
        ILendingPoolEvents::Repay(e) => EventKind::Repay {
            user: e.user,
            token: e.token,
            amount: e.amount,
        },
        ILendingPoolEvents::SupplyLiquidity(e) => EventKind::SupplyLiquidity {
            user: e.user,
            token: e.token,
            amount: e.amount,
        },
        ILendingPoolEvents::WithdrawLiquidity(e) => EventKind::WithdrawLiquidity {
            user: e.user,
            token: e.token,
            amount: e.amount,
        },
        ILendingPoolEvents::Liquidation(e) => EventKind::Liquidation {
            borrower: e.borrower,
            borrow_token: e.borrowToken,
            collateral_token: e.collateralToken,
            user_borrow_assets: e.userBorrowAssets,
            collateral_token_ids: e.collateralTokenIds,
            liquidator_token_ids: e.liquidatorTokenIds,
            borrower_token_ids: e.borrowerTokenIds,
        },
        ILendingPoolEvents::SupplyCollateral(e) => EventKind::SupplyCollateral {
            user: e.user,
            token: e.token,
            token_id: e.tokenId,
        },
        ILendingPoolEvents::WithdrawCollateral(e) => EventKind::WithdrawCollateral {
            user: e.user,
            token: e.token,
            token_id: e.tokenId,
        },
        ILendingPoolEvents::InterestRateModelSet(e) => EventKind::InterestRateModelSet {
            interest_rate_model: e.interestRateModel,
        },
        ILendingPoolEvents::BorrowTokenSet(e) => EventKind::BorrowTokenSet { token: e.token },
        ILendingPoolEvents::CollateralTokenSet(e) => {
            EventKind::CollateralTokenSet { token: e.token }
        }
        ILendingPoolEvents::LtvSet(e) => EventKind::LtvSet { ltv: e.ltv },
        ILendingPoolEvents::MinSupplyAmountSet(e) => EventKind::MinSupplyAmountSet {
            token: e.token,
            amount: e.amount,
        },
        ILendingPoolEvents::RouterSet(e) => EventKind::RouterSet { router: e.router },
        ILendingPoolEvents::Paused(e) => EventKind::Paused { account: e.account },
        ILendingPoolEvents::Unpaused(e) => EventKind::Unpaused { account: e.account },
        ILendingPoolEvents::Initialized(e) => EventKind::Initialized { version: e.version },
        ILendingPoolEvents::Upgraded(e) => EventKind::Upgraded {
            implementation: e.implementation,
        },
        ILendingPoolEvents::RoleAdminChanged(e) => EventKind::RoleAdminChanged {
            role: e.role,
            previous_admin_role: e.previousAdminRole,
            new_admin_role: e.newAdminRole,
        },
        ILendingPoolEvents::RoleGranted(e) => EventKind::RoleGranted {
            role: e.role,
            account: e.account,
            sender: e.sender,
        },
        ILendingPoolEvents::RoleRevoked(e) => EventKind::RoleRevoked {
            role: e.role,
            account: e.account,
            sender: e.sender,
        },
    }
}

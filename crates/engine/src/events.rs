//! Typed lending protocol events as delivered to the engine.
//!
//! Events come from two contracts: the lending pool (supply, borrow, admin)
//! and its interest rate model (curve parameters and scale). The variant names
//! follow the Solidity event names so replay documents and decoded logs read
//! the same way.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Positional metadata attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
    pub log_index: u64,
}

impl EventMeta {
    /// Identifier of the audit record: transaction hash followed by the log
    /// index as a little-endian `i32`.
    pub fn audit_id(&self) -> Bytes {
        let mut id = Vec::with_capacity(36);
        id.extend_from_slice(self.transaction_hash.as_slice());
        id.extend_from_slice(&(self.log_index as i32).to_le_bytes());
        Bytes::from(id)
    }

    /// Position of the event in the chain's total order.
    pub fn position(&self) -> (u64, u64) {
        (self.block_number, self.log_index)
    }
}

/// An event together with the contract that emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingEvent {
    /// Emitting contract
    pub address: Address,
    pub meta: EventMeta,
    #[serde(rename = "event")]
    pub kind: EventKind,
}

/// Event parameters, one variant per Solidity event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all_fields = "camelCase")]
pub enum EventKind {
    // Interest rate model
    LendingPoolBaseRateSet {
        lending_pool: Address,
        rate: U256,
    },
    LendingPoolOptimalUtilizationSet {
        lending_pool: Address,
        utilization: U256,
    },
    LendingPoolRateAtOptimalSet {
        lending_pool: Address,
        rate: U256,
    },
    LendingPoolMaxUtilizationSet {
        lending_pool: Address,
        utilization: U256,
    },
    ScaledPercentageSet {
        percentage: U256,
    },

    // Lending pool
    InterestRateModelSet {
        interest_rate_model: Address,
    },
    Borrow {
        user: Address,
        token: Address,
        amount: U256,
    },
    Repay {
        user: Address,
        token: Address,
        amount: U256,
    },
    Liquidation {
        borrower: Address,
        borrow_token: Address,
        collateral_token: Address,
        user_borrow_assets: U256,
        collateral_token_ids: Vec<U256>,
        liquidator_token_ids: Vec<U256>,
        borrower_token_ids: Vec<U256>,
    },
    SupplyLiquidity {
        user: Address,
        token: Address,
        amount: U256,
    },
    WithdrawLiquidity {
        user: Address,
        token: Address,
        amount: U256,
    },
    SupplyCollateral {
        user: Address,
        token: Address,
        token_id: U256,
    },
    WithdrawCollateral {
        user: Address,
        token: Address,
        token_id: U256,
    },
    BorrowTokenSet {
        token: Address,
    },
    CollateralTokenSet {
        token: Address,
    },
    LtvSet {
        ltv: U256,
    },
    MinSupplyAmountSet {
        token: Address,
        amount: U256,
    },
    RouterSet {
        router: Address,
    },
    Paused {
        account: Address,
    },
    Unpaused {
        account: Address,
    },

    // Emitted by both contracts
    Initialized {
        version: u64,
    },
    Upgraded {
        implementation: Address,
    },
    RoleAdminChanged {
        role: B256,
        previous_admin_role: B256,
        new_admin_role: B256,
    },
    RoleGranted {
        role: B256,
        account: Address,
        sender: Address,
    },
    RoleRevoked {
        role: B256,
        account: Address,
        sender: Address,
    },
}

impl EventKind {
    /// Solidity event name
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::LendingPoolBaseRateSet { .. } => "LendingPoolBaseRateSet",
            EventKind::LendingPoolOptimalUtilizationSet { .. } => {
                "LendingPoolOptimalUtilizationSet"
            }
            EventKind::LendingPoolRateAtOptimalSet { .. } => "LendingPoolRateAtOptimalSet",
            EventKind::LendingPoolMaxUtilizationSet { .. } => "LendingPoolMaxUtilizationSet",
            EventKind::ScaledPercentageSet { .. } => "ScaledPercentageSet",
            EventKind::InterestRateModelSet { .. } => "InterestRateModelSet",
            EventKind::Borrow { .. } => "Borrow",
            EventKind::Repay { .. } => "Repay",
            EventKind::Liquidation { .. } => "Liquidation",
            EventKind::SupplyLiquidity { .. } => "SupplyLiquidity",
            EventKind::WithdrawLiquidity { .. } => "WithdrawLiquidity",
            EventKind::SupplyCollateral { .. } => "SupplyCollateral",
            EventKind::WithdrawCollateral { .. } => "WithdrawCollateral",
            EventKind::BorrowTokenSet { .. } => "BorrowTokenSet",
            EventKind::CollateralTokenSet { .. } => "CollateralTokenSet",
            EventKind::LtvSet { .. } => "LtvSet",
            EventKind::MinSupplyAmountSet { .. } => "MinSupplyAmountSet",
            EventKind::RouterSet { .. } => "RouterSet",
            EventKind::Paused { .. } => "Paused",
            EventKind::Unpaused { .. } => "Unpaused",
            EventKind::Initialized { .. } => "Initialized",
            EventKind::Upgraded { .. } => "Upgraded",
            EventKind::RoleAdminChanged { .. } => "RoleAdminChanged",
            EventKind::RoleGranted { .. } => "RoleGranted",
            EventKind::RoleRevoked { .. } => "RoleRevoked",
        }
    }

    /// Whether handling this event refreshes the emitting pool's totals.
    pub fn refreshes_totals(&self) -> bool {
        matches!(
            self,
            EventKind::Borrow { .. }
                | EventKind::Repay { .. }
                | EventKind::Liquidation { .. }
                | EventKind::SupplyLiquidity { .. }
                | EventKind::WithdrawLiquidity { .. }
        )
    }
}

/// Immutable mirror of a handled event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Transaction hash ++ log index, see [`EventMeta::audit_id`]
    pub id: Bytes,
    pub address: Address,
    pub meta: EventMeta,
    pub event: EventKind,
}

impl From<&LendingEvent> for AuditRecord {
    fn from(event: &LendingEvent) -> Self {
        Self {
            id: event.meta.audit_id(),
            address: event.address,
            meta: event.meta,
            event: event.kind.clone(),
        }
    }
}

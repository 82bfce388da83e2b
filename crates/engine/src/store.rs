//! Record storage and the get-or-create accessors.
//!
//! Every component receives the store explicitly as `&mut S` where
//! `S: Store`. Records are handed out by value: callers mutate their copy and
//! write it back with the matching `save_*` method, which makes it visible to
//! the very next lookup.

use std::collections::BTreeMap;

use alloy_primitives::Address;
use serde::Serialize;
use tracing::debug;

use crate::events::AuditRecord;
use crate::records::{position_id, Market, PositionId, RateModelConfig, UserPosition};

/// Keyed storage for the derived records and the audit log.
pub trait Store {
    fn market(&self, id: Address) -> Option<Market>;
    fn save_market(&mut self, market: &Market);

    fn rate_model(&self, id: Address) -> Option<RateModelConfig>;
    fn save_rate_model(&mut self, config: &RateModelConfig);

    fn position(&self, id: &PositionId) -> Option<UserPosition>;
    fn save_position(&mut self, position: &UserPosition);

    /// Ids of every market linked to the given interest rate model.
    fn markets_using_rate_model(&self, rate_model: Address) -> Vec<Address>;

    fn save_audit(&mut self, record: AuditRecord);
}

/// Returns the market for `id`, creating a zeroed one on first access.
pub fn get_or_create_market<S: Store + ?Sized>(store: &mut S, id: Address) -> Market {
    if let Some(market) = store.market(id) {
        return market;
    }
    debug!(market = %id, "creating market");
    let market = Market::new(id);
    store.save_market(&market);
    market
}

/// Returns the rate model config for `id`, creating one scaled at 100% on
/// first access.
pub fn get_or_create_rate_model<S: Store + ?Sized>(
    store: &mut S,
    id: Address,
) -> RateModelConfig {
    if let Some(config) = store.rate_model(id) {
        return config;
    }
    debug!(rate_model = %id, "creating rate model config");
    let config = RateModelConfig::new(id);
    store.save_rate_model(&config);
    config
}

/// Returns the position for (market, user), creating an empty one on first
/// access.
///
/// Creation bumps the owning market's `users` counter by one and persists the
/// market, so the counter grows exactly once per distinct pair.
pub fn get_or_create_position<S: Store + ?Sized>(
    store: &mut S,
    market: Address,
    user: Address,
) -> UserPosition {
    let id = position_id(market, user);
    if let Some(position) = store.position(&id) {
        return position;
    }

    let mut owner = get_or_create_market(store, market);
    owner.users += 1;
    store.save_market(&owner);
    debug!(%market, %user, users = owner.users, "creating user position");

    let position = UserPosition::new(market, user);
    store.save_position(&position);
    position
}

/// In-memory [`Store`] with deterministic iteration order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    markets: BTreeMap<Address, Market>,
    rate_models: BTreeMap<Address, RateModelConfig>,
    positions: BTreeMap<PositionId, UserPosition>,
    audit_log: Vec<AuditRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markets(&self) -> impl Iterator<Item = &Market> {
        self.markets.values()
    }

    pub fn rate_models(&self) -> impl Iterator<Item = &RateModelConfig> {
        self.rate_models.values()
    }

    pub fn positions(&self) -> impl Iterator<Item = &UserPosition> {
        self.positions.values()
    }

    /// Audit records in arrival order
    pub fn audit_log(&self) -> &[AuditRecord] {
        &self.audit_log
    }

    /// Copies the current records into a serializable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            markets: self.markets.values().cloned().collect(),
            rate_models: self.rate_models.values().cloned().collect(),
            positions: self.positions.values().cloned().collect(),
            audit_records: self.audit_log.len(),
        }
    }
}

impl Store for MemoryStore {
    fn market(&self, id: Address) -> Option<Market> {
        self.markets.get(&id).cloned()
    }

    fn save_market(&mut self, market: &Market) {
        self.markets.insert(market.id, market.clone());
    }

    fn rate_model(&self, id: Address) -> Option<RateModelConfig> {
        self.rate_models.get(&id).cloned()
    }

    fn save_rate_model(&mut self, config: &RateModelConfig) {
        self.rate_models.insert(config.id, config.clone());
    }

    fn position(&self, id: &PositionId) -> Option<UserPosition> {
        self.positions.get(id).cloned()
    }

    fn save_position(&mut self, position: &UserPosition) {
        self.positions.insert(position.id, position.clone());
    }

    fn markets_using_rate_model(&self, rate_model: Address) -> Vec<Address> {
        self.markets
            .values()
            .filter(|m| m.interest_rate_model == Some(rate_model))
            .map(|m| m.id)
            .collect()
    }

    fn save_audit(&mut self, record: AuditRecord) {
        self.audit_log.push(record);
    }
}

/// Point-in-time copy of a [`MemoryStore`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub markets: Vec<Market>,
    pub rate_models: Vec<RateModelConfig>,
    pub positions: Vec<UserPosition>,
    pub audit_records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::WAD;
    use alloy_primitives::{address, U256};

    const POOL: Address = address!("1111111111111111111111111111111111111111");
    const IRM: Address = address!("2222222222222222222222222222222222222222");
    const ALICE: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const BOB: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    #[test]
    fn test_get_or_create_market_creates_once() {
        let mut store = MemoryStore::new();
        let first = get_or_create_market(&mut store, POOL);
        let second = get_or_create_market(&mut store, POOL);

        assert_eq!(first, second);
        assert_eq!(store.markets().count(), 1);
    }

    #[test]
    fn test_get_or_create_market_returns_existing_unchanged() {
        let mut store = MemoryStore::new();
        let mut market = get_or_create_market(&mut store, POOL);
        market.base_rate = U256::from(42);
        store.save_market(&market);

        let loaded = get_or_create_market(&mut store, POOL);
        assert_eq!(loaded.base_rate, U256::from(42));
    }

    #[test]
    fn test_get_or_create_rate_model_defaults() {
        let mut store = MemoryStore::new();
        let config = get_or_create_rate_model(&mut store, IRM);
        assert_eq!(config.scaled_percentage, WAD);

        let mut changed = config.clone();
        changed.scaled_percentage = WAD / U256::from(2);
        store.save_rate_model(&changed);

        let again = get_or_create_rate_model(&mut store, IRM);
        assert_eq!(again.scaled_percentage, WAD / U256::from(2));
        assert_eq!(store.rate_models().count(), 1);
    }

    #[test]
    fn test_position_creation_counts_users_once() {
        let mut store = MemoryStore::new();

        get_or_create_position(&mut store, POOL, ALICE);
        assert_eq!(store.market(POOL).map(|m| m.users), Some(1));

        get_or_create_position(&mut store, POOL, ALICE);
        get_or_create_position(&mut store, POOL, ALICE);
        assert_eq!(store.market(POOL).map(|m| m.users), Some(1));

        get_or_create_position(&mut store, POOL, BOB);
        assert_eq!(store.market(POOL).map(|m| m.users), Some(2));
        assert_eq!(store.positions().count(), 2);
    }

    #[test]
    fn test_position_creation_keeps_market_fields() {
        let mut store = MemoryStore::new();
        let mut market = get_or_create_market(&mut store, POOL);
        market.base_rate = U256::from(7);
        store.save_market(&market);

        get_or_create_position(&mut store, POOL, ALICE);

        let market = store.market(POOL).unwrap();
        assert_eq!(market.base_rate, U256::from(7));
        assert_eq!(market.users, 1);
    }

    #[test]
    fn test_markets_using_rate_model() {
        let mut store = MemoryStore::new();
        let mut linked = get_or_create_market(&mut store, POOL);
        linked.interest_rate_model = Some(IRM);
        store.save_market(&linked);
        get_or_create_market(&mut store, ALICE);

        assert_eq!(store.markets_using_rate_model(IRM), vec![POOL]);
        assert!(store.markets_using_rate_model(BOB).is_empty());
    }

    #[test]
    fn test_snapshot_counts() {
        let mut store = MemoryStore::new();
        get_or_create_position(&mut store, POOL, ALICE);
        get_or_create_rate_model(&mut store, IRM);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.markets.len(), 1);
        assert_eq!(snapshot.rate_models.len(), 1);
        assert_eq!(snapshot.positions.len(), 1);
        assert_eq!(snapshot.audit_records, 0);
    }
}

//! Interest rate model interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IInterestRateModel {
        // Per-pool curve parameters, all WAD-scaled
        event LendingPoolBaseRateSet(address indexed lendingPool, uint256 rate);
        event LendingPoolOptimalUtilizationSet(address indexed lendingPool, uint256 utilization);
        event LendingPoolRateAtOptimalSet(address indexed lendingPool, uint256 rate);
        event LendingPoolMaxUtilizationSet(address indexed lendingPool, uint256 utilization);

        event ScaledPercentageSet(uint256 percentage);
    }
}

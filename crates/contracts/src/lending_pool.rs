//! Lending pool interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ILendingPool {
        // Asset movements
        event Borrow(address indexed user, address indexed token, uint256 amount);
        event Repay(address indexed user, address indexed token, uint256 amount);
        event SupplyLiquidity(address indexed user, address indexed token, uint256 amount);
        event WithdrawLiquidity(address indexed user, address indexed token, uint256 amount);
        event Liquidation(
            address indexed borrower,
            address indexed borrowToken,
            address indexed collateralToken,
            uint256 userBorrowAssets,
            uint256[] collateralTokenIds,
            uint256[] liquidatorTokenIds,
            uint256[] borrowerTokenIds
        );

        // Collateral
        event SupplyCollateral(address indexed user, address indexed token, uint256 tokenId);
        event WithdrawCollateral(address indexed user, address indexed token, uint256 tokenId);

        // Configuration
        event InterestRateModelSet(address indexed interestRateModel);
        event BorrowTokenSet(address indexed token);
        event CollateralTokenSet(address indexed token);
        event LtvSet(uint256 ltv);
        event MinSupplyAmountSet(address indexed token, uint256 amount);
        event RouterSet(address indexed router);

        // Administration
        event Paused(address account);
        event Unpaused(address account);
        event Initialized(uint64 version);
        event Upgraded(address indexed implementation);
        event RoleAdminChanged(
            bytes32 indexed role,
            bytes32 indexed previousAdminRole,
            bytes32 indexed newAdminRole
        );
        event RoleGranted(bytes32 indexed role, address indexed account, address indexed sender);
        event RoleRevoked(bytes32 indexed role, address indexed account, address indexed sender);

        // View functions
        function totalBorrowAssets() external view returns (uint256);
        function totalSupplyAssets() external view returns (uint256);
    }
}

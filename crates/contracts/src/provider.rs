//! Provider type definitions for read clients.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{ContractError, Result};

/// The provider type used by [`LendingPoolReader`](crate::LendingPoolReader).
///
/// Read-only, so no wallet or nonce fillers are attached; the concrete filler
/// stack is erased to keep the type nameable.
pub type HttpProvider = DynProvider;

/// Connects an HTTP provider to `rpc_url`.
pub fn connect_http(rpc_url: &str) -> Result<HttpProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}

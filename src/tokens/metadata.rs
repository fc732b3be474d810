/// Token metadata cache with in-flight request de-duplication
///
/// Session-scoped: create one per application session and share it via Arc.
/// Concurrent fetches for the same contract share a single view call; the
/// result lands in the cache and every waiter gets a clone. Metadata fetch
/// failures degrade to placeholder metadata rather than erroring - a token
/// with unknown decimals still renders, it just uses the default.
use crate::config::NATIVE_TOKEN_ID;
use crate::logger::{self, LogTag};
use crate::tokens::{native_metadata, TokenMetadata};
use crate::wallet::Wallet;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type SharedFetch = Shared<BoxFuture<'static, TokenMetadata>>;

pub struct MetadataCache {
    cached: Mutex<HashMap<String, TokenMetadata>>,
    in_flight: Mutex<HashMap<String, SharedFetch>>,
}

impl MetadataCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            cached: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        })
    }

    /// Cached metadata for a contract, if present
    pub fn get(&self, contract_id: &str) -> Option<TokenMetadata> {
        self.cached.lock().unwrap().get(contract_id).cloned()
    }

    /// Insert metadata directly (e.g. from a bundled token list)
    pub fn put(&self, contract_id: &str, metadata: TokenMetadata) {
        self.cached
            .lock()
            .unwrap()
            .insert(contract_id.to_string(), metadata);
    }

    /// Whether a fetch for this contract is currently running
    pub fn has_in_flight(&self, contract_id: &str) -> bool {
        self.in_flight.lock().unwrap().contains_key(contract_id)
    }

    /// Resolve metadata for a contract, fetching through the wallet's view
    /// call on a cache miss
    pub async fn fetch(self: &Arc<Self>, wallet: Arc<dyn Wallet>, contract_id: &str) -> TokenMetadata {
        if contract_id == NATIVE_TOKEN_ID {
            return native_metadata();
        }
        if let Some(found) = self.get(contract_id) {
            return found;
        }

        let fetch = {
            let mut in_flight = self.in_flight.lock().unwrap();
            if let Some(existing) = in_flight.get(contract_id) {
                existing.clone()
            } else {
                let cache = Arc::clone(self);
                let contract = contract_id.to_string();

                let fetch: SharedFetch = async move {
                    logger::debug(
                        LogTag::Tokens,
                        "METADATA_FETCH",
                        &format!("ft_metadata for {}", contract),
                    );

                    let metadata = match wallet.view(&contract, "ft_metadata", json!({})).await {
                        Ok(result) => TokenMetadata::from_view_result(&contract, &result),
                        Err(e) => {
                            logger::warning(
                                LogTag::Tokens,
                                "METADATA_FALLBACK",
                                &format!("{}: {}", contract, e),
                            );
                            TokenMetadata::fallback(&contract)
                        }
                    };

                    cache.put(&contract, metadata.clone());
                    cache.in_flight.lock().unwrap().remove(&contract);
                    metadata
                }
                .boxed()
                .shared();

                in_flight.insert(contract_id.to_string(), fetch.clone());
                fetch
            }
        };

        fetch.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::mock::MockWallet;
    use std::time::Duration;

    fn metadata_wallet() -> Arc<MockWallet> {
        Arc::new(MockWallet::new(Some("alice.near")).with_view_response(
            "usdt.tether-token.near",
            "ft_metadata",
            json!({ "name": "Tether USD", "symbol": "USDT", "decimals": 6 }),
        ))
    }

    #[tokio::test]
    async fn fetch_caches_view_result() {
        let cache = MetadataCache::new();
        let wallet = metadata_wallet();

        let metadata = cache
            .fetch(wallet.clone(), "usdt.tether-token.near")
            .await;
        assert_eq!(metadata.symbol, "USDT");
        assert_eq!(metadata.decimals, 6);

        // Second fetch is a cache hit, not another view call
        cache.fetch(wallet.clone(), "usdt.tether-token.near").await;
        assert_eq!(wallet.view_call_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_fetches_share_one_view_call() {
        let cache = MetadataCache::new();
        let wallet = Arc::new(
            MockWallet::new(Some("alice.near"))
                .with_view_response(
                    "usdt.tether-token.near",
                    "ft_metadata",
                    json!({ "name": "Tether USD", "symbol": "USDT", "decimals": 6 }),
                )
                .with_view_delay(Duration::from_millis(25)),
        );

        let first = cache.fetch(wallet.clone(), "usdt.tether-token.near");
        let second = cache.fetch(wallet.clone(), "usdt.tether-token.near");
        let (a, b) = tokio::join!(first, second);

        assert_eq!(a, b);
        assert_eq!(wallet.view_call_count(), 1);
        assert!(!cache.has_in_flight("usdt.tether-token.near"));
    }

    #[tokio::test]
    async fn view_failure_degrades_to_fallback_metadata() {
        let cache = MetadataCache::new();
        let wallet = Arc::new(MockWallet::new(None).with_view_failure("rpc down"));

        let metadata = cache.fetch(wallet, "shit-1170.meme-cooking.near").await;
        assert_eq!(metadata.symbol, "SHIT-1170");
        assert_eq!(metadata.decimals, 18);
        // Fallback results are cached like successful ones
        assert!(cache.get("shit-1170.meme-cooking.near").is_some());
    }

    #[tokio::test]
    async fn native_token_never_hits_the_wallet() {
        let cache = MetadataCache::new();
        let wallet = Arc::new(MockWallet::new(None));

        let metadata = cache.fetch(wallet.clone(), "near").await;
        assert_eq!(metadata.decimals, 24);
        assert_eq!(wallet.view_call_count(), 0);
    }
}

/// Token catalog: types, metadata lookups, prices and persistence
///
/// Tokens are identified by contract id. The chain's native asset uses the
/// sentinel id "near" and is special-cased throughout: fixed 24-decimal
/// metadata, priced through its wrapped form.

pub mod metadata;
pub mod price;
pub mod service;
pub mod store;
pub mod types;

pub use metadata::MetadataCache;
pub use store::TokenStore;
pub use types::{PreparedToken, Token, TokenMetadata};

use crate::config::{NATIVE_TOKEN_DECIMALS, NATIVE_TOKEN_ID};

/// The native asset entry shown at the top of every token list
pub fn native_token() -> Token {
    Token {
        contract_id: NATIVE_TOKEN_ID.to_string(),
        display_name: "NEAR".to_string(),
        is_native: true,
        metadata: Some(native_metadata()),
    }
}

/// Fixed metadata for the native asset (never fetched)
pub fn native_metadata() -> TokenMetadata {
    TokenMetadata {
        name: "NEAR".to_string(),
        symbol: "NEAR".to_string(),
        decimals: NATIVE_TOKEN_DECIMALS,
        icon: None,
    }
}

/// Assemble the selectable token catalog: the native asset first, then the
/// persisted entries
///
/// A persisted native entry is skipped so the sentinel never appears twice.
pub fn available_tokens(store: &TokenStore) -> Result<Vec<Token>, rusqlite::Error> {
    let mut tokens = vec![native_token()];
    for token in store.get_all()? {
        if !token.is_native {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_native_first_without_duplicates() {
        let store = TokenStore::open_in_memory().unwrap();
        store
            .put_many(&[
                Token {
                    contract_id: "usdt.tether-token.near".to_string(),
                    display_name: "USDT".to_string(),
                    is_native: false,
                    metadata: None,
                },
                // A persisted native entry must not shadow the sentinel
                native_token(),
            ])
            .unwrap();

        let catalog = available_tokens(&store).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog[0].is_native);
        assert_eq!(catalog[0].contract_id, "near");
        assert_eq!(catalog[1].contract_id, "usdt.tether-token.near");
    }

    #[test]
    fn empty_store_still_offers_the_native_asset() {
        let store = TokenStore::open_in_memory().unwrap();
        let catalog = available_tokens(&store).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog[0].is_native);
    }
}

/// Scripted wallet implementation for tests
use super::{FunctionCallAction, Wallet, WalletError, WalletTransaction};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory wallet with canned view responses and captured batches
pub struct MockWallet {
    account: Option<String>,
    /// Keyed by (contract_id, method_name)
    view_responses: HashMap<(String, String), Value>,
    /// When set, every view call fails with this message
    view_failure: Option<String>,
    /// Artificial latency per view call, for de-duplication tests
    view_delay: Option<Duration>,
    /// When set, send_transactions fails with this error
    send_failure: Option<WalletError>,
    pub view_calls: Mutex<Vec<(String, String)>>,
    pub sent_batches: Mutex<Vec<Vec<WalletTransaction>>>,
}

impl MockWallet {
    pub fn new(account: Option<&str>) -> Self {
        Self {
            account: account.map(str::to_string),
            view_responses: HashMap::new(),
            view_failure: None,
            view_delay: None,
            send_failure: None,
            view_calls: Mutex::new(Vec::new()),
            sent_batches: Mutex::new(Vec::new()),
        }
    }

    pub fn with_view_response(mut self, contract_id: &str, method_name: &str, value: Value) -> Self {
        self.view_responses
            .insert((contract_id.to_string(), method_name.to_string()), value);
        self
    }

    pub fn with_view_failure(mut self, message: &str) -> Self {
        self.view_failure = Some(message.to_string());
        self
    }

    pub fn with_view_delay(mut self, delay: Duration) -> Self {
        self.view_delay = Some(delay);
        self
    }

    pub fn with_send_failure(mut self, err: WalletError) -> Self {
        self.send_failure = Some(err);
        self
    }

    /// Number of view calls made so far
    pub fn view_call_count(&self) -> usize {
        self.view_calls.lock().unwrap().len()
    }

    /// Actions of the first sent transaction, for assertions
    pub fn first_sent_actions(&self) -> Vec<FunctionCallAction> {
        self.sent_batches.lock().unwrap()[0][0].actions.clone()
    }
}

#[async_trait]
impl Wallet for MockWallet {
    fn account_id(&self) -> Option<String> {
        self.account.clone()
    }

    async fn view(
        &self,
        contract_id: &str,
        method_name: &str,
        _args: Value,
    ) -> Result<Value, WalletError> {
        self.view_calls
            .lock()
            .unwrap()
            .push((contract_id.to_string(), method_name.to_string()));

        if let Some(delay) = self.view_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(msg) = &self.view_failure {
            return Err(WalletError::Provider(msg.clone()));
        }

        self.view_responses
            .get(&(contract_id.to_string(), method_name.to_string()))
            .cloned()
            .ok_or_else(|| {
                WalletError::Provider(format!("no canned response for {}.{}", contract_id, method_name))
            })
    }

    async fn request_sign_in(&self) -> Result<(), WalletError> {
        Ok(())
    }

    fn sign_out(&self) {}

    async fn send_transactions(
        &self,
        transactions: Vec<WalletTransaction>,
    ) -> Result<(), WalletError> {
        if let Some(err) = &self.send_failure {
            return Err(err.clone());
        }
        self.sent_batches.lock().unwrap().push(transactions);
        Ok(())
    }
}

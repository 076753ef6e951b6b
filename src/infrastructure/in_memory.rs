use crate::domain::merchant::MerchantConfig;
use crate::domain::order::{OrderId, OrderSnapshot, OrderStatus};
use crate::domain::ports::{ConfigStore, NoticeSink, OrderSystem, Severity};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct OrderRecord {
    snapshot: OrderSnapshot,
    status: OrderStatus,
    /// Every status transition with its note, oldest first.
    history: Vec<(OrderStatus, String)>,
}

/// A thread-safe in-memory order book.
///
/// Orders start out `Pending`. Clones share the same underlying map, so a
/// test can keep a handle while the orchestrator owns another.
#[derive(Default, Clone)]
pub struct InMemoryOrderSystem {
    orders: Arc<RwLock<HashMap<OrderId, OrderRecord>>>,
}

impl InMemoryOrderSystem {
    /// Creates a new, empty in-memory order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an order; it starts out `Pending` with no history.
    pub async fn insert(&self, order: OrderSnapshot) {
        let mut orders = self.orders.write().await;
        orders.insert(
            order.id,
            OrderRecord {
                snapshot: order,
                status: OrderStatus::Pending,
                history: Vec::new(),
            },
        );
    }

    /// Current status, or `None` for an unknown order.
    pub async fn status(&self, id: OrderId) -> Option<OrderStatus> {
        let orders = self.orders.read().await;
        orders.get(&id).map(|record| record.status)
    }

    /// Status transitions recorded for the order, oldest first.
    pub async fn history(&self, id: OrderId) -> Vec<(OrderStatus, String)> {
        let orders = self.orders.read().await;
        orders
            .get(&id)
            .map(|record| record.history.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl OrderSystem for InMemoryOrderSystem {
    async fn get_order(&self, id: OrderId) -> Result<OrderSnapshot> {
        let orders = self.orders.read().await;
        orders
            .get(&id)
            .map(|record| record.snapshot.clone())
            .ok_or(PaymentError::OrderNotFound(id))
    }

    async fn set_order_status(&self, id: OrderId, status: OrderStatus, note: &str) -> Result<()> {
        let mut orders = self.orders.write().await;
        let record = orders.get_mut(&id).ok_or(PaymentError::OrderNotFound(id))?;
        record.status = status;
        record.history.push((status, note.to_string()));
        Ok(())
    }
}

/// Merchant settings keyed by gateway id.
#[derive(Default, Clone)]
pub struct InMemoryConfigStore {
    configs: Arc<RwLock<HashMap<String, MerchantConfig>>>,
}

impl InMemoryConfigStore {
    /// Creates a new, empty in-memory settings store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `config` under `gateway_id`, replacing any previous entry.
    pub async fn insert(&self, gateway_id: &str, config: MerchantConfig) {
        let mut configs = self.configs.write().await;
        configs.insert(gateway_id.to_string(), config);
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn merchant_config(&self, gateway_id: &str) -> Result<Option<MerchantConfig>> {
        let configs = self.configs.read().await;
        Ok(configs.get(gateway_id).cloned())
    }
}

/// Collects notices for later inspection.
#[derive(Default, Clone)]
pub struct MemoryNoticeSink {
    notices: Arc<RwLock<Vec<(String, Severity)>>>,
}

impl MemoryNoticeSink {
    /// Creates a new sink with no notices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notice received so far, in order.
    pub async fn notices(&self) -> Vec<(String, Severity)> {
        self.notices.read().await.clone()
    }
}

#[async_trait]
impl NoticeSink for MemoryNoticeSink {
    async fn add_notice(&self, message: &str, severity: Severity) {
        let mut notices = self.notices.write().await;
        notices.push((message.to_string(), severity));
    }
}

//! Scriptable in-memory backend for tests.
//!
//! [`StubApi`] answers from canned replies instead of the network and records
//! every lead it receives. It can also be paused so tests can observe state
//! while a request is in flight. Clones share state.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::api::BullionApi;
use crate::error::ApiError;
use crate::model::{HealthStatus, LeadForm, LeadReceipt, Product, SpotPrice};

/// Message the real backend sends for an accepted lead.
pub const ACCEPTED_MESSAGE: &str =
    "Thank you for your inquiry. Our team will contact you within 24 hours.";

/// A canned failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubFailure {
    /// Answer with this non-2xx status.
    Status(u16),
    /// Behave as if the connection was refused.
    Unreachable,
}

impl StubFailure {
    fn into_error(self) -> ApiError {
        match self {
            Self::Status(status) => ApiError::Rejected {
                status,
                body: format!("stub status {status}"),
            },
            Self::Unreachable => ApiError::Unreachable("connection refused (stub)".to_owned()),
        }
    }
}

/// Reply to a single `submit_lead` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadReply {
    Accept(String),
    Fail(StubFailure),
}

#[derive(Debug)]
struct StubState {
    lead_replies: VecDeque<LeadReply>,
    products: Result<Vec<Product>, StubFailure>,
    spot_price: Result<SpotPrice, StubFailure>,
    health: Result<(), StubFailure>,
    leads: Vec<LeadForm>,
    product_calls: usize,
    spot_calls: usize,
}

/// In-memory [`BullionApi`].
#[derive(Debug, Clone)]
pub struct StubApi {
    state: Arc<Mutex<StubState>>,
    open: Arc<watch::Sender<bool>>,
    requests: Arc<watch::Sender<usize>>,
}

impl StubApi {
    /// Empty catalog, no spot price, every lead accepted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                lead_replies: VecDeque::new(),
                products: Ok(Vec::new()),
                spot_price: Err(StubFailure::Status(503)),
                health: Ok(()),
                leads: Vec::new(),
                product_calls: 0,
                spot_calls: 0,
            })),
            open: Arc::new(watch::channel(true).0),
            requests: Arc::new(watch::channel(0).0),
        }
    }

    pub async fn set_products(&self, products: Vec<Product>) {
        self.state.lock().await.products = Ok(products);
    }

    pub async fn fail_products(&self, failure: StubFailure) {
        self.state.lock().await.products = Err(failure);
    }

    pub async fn set_spot_price(&self, spot: SpotPrice) {
        self.state.lock().await.spot_price = Ok(spot);
    }

    pub async fn fail_spot_price(&self, failure: StubFailure) {
        self.state.lock().await.spot_price = Err(failure);
    }

    pub async fn fail_health(&self, failure: StubFailure) {
        self.state.lock().await.health = Err(failure);
    }

    /// Queue the reply for the next lead. Once the queue is empty, leads are
    /// accepted with [`ACCEPTED_MESSAGE`].
    pub async fn push_lead_reply(&self, reply: LeadReply) {
        self.state.lock().await.lead_replies.push_back(reply);
    }

    /// Every lead received so far, in arrival order.
    pub async fn leads(&self) -> Vec<LeadForm> {
        self.state.lock().await.leads.clone()
    }

    pub async fn product_calls(&self) -> usize {
        self.state.lock().await.product_calls
    }

    pub async fn spot_calls(&self) -> usize {
        self.state.lock().await.spot_calls
    }

    /// Hold every request after it has been recorded until [`resume`](Self::resume).
    pub fn pause(&self) {
        self.open.send_replace(false);
    }

    pub fn resume(&self) {
        self.open.send_replace(true);
    }

    /// Wait until at least `n` requests of any kind have arrived.
    pub async fn wait_for_requests(&self, n: usize) {
        let mut rx = self.requests.subscribe();
        let _ = rx.wait_for(|count| *count >= n).await;
    }

    async fn arrive(&self) {
        self.requests.send_modify(|count| *count += 1);
        let mut open = self.open.subscribe();
        let _ = open.wait_for(|open| *open).await;
    }
}

impl Default for StubApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BullionApi for StubApi {
    async fn submit_lead(&self, lead: &LeadForm) -> Result<LeadReceipt, ApiError> {
        let reply = {
            let mut state = self.state.lock().await;
            state.leads.push(lead.clone());
            state.lead_replies.pop_front()
        };
        self.arrive().await;

        match reply.unwrap_or_else(|| LeadReply::Accept(ACCEPTED_MESSAGE.to_owned())) {
            LeadReply::Accept(message) => Ok(LeadReceipt { id: None, message }),
            LeadReply::Fail(failure) => Err(failure.into_error()),
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = {
            let mut state = self.state.lock().await;
            state.product_calls += 1;
            state.products.clone()
        };
        self.arrive().await;
        products.map_err(StubFailure::into_error)
    }

    async fn spot_price(&self) -> Result<SpotPrice, ApiError> {
        let spot = {
            let mut state = self.state.lock().await;
            state.spot_calls += 1;
            state.spot_price.clone()
        };
        self.arrive().await;
        spot.map_err(StubFailure::into_error)
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.state
            .lock()
            .await
            .health
            .clone()
            .map_err(StubFailure::into_error)?;
        Ok(HealthStatus {
            status: "healthy".to_owned(),
            service: "stub".to_owned(),
        })
    }
}

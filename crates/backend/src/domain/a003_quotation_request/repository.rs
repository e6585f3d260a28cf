use std::sync::{Arc, PoisonError, RwLock};

use contracts::domain::a003_quotation_request::QuotationRequest;

#[derive(Clone, Default)]
pub struct QuotationStore {
    requests: Arc<RwLock<Vec<QuotationRequest>>>,
}

impl QuotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_all(&self) -> Vec<QuotationRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn insert(&self, request: QuotationRequest) {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }
}

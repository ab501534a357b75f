//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::SignInService;

/// Handler state. Immutable once built, so it is safe to share across
/// concurrently running requests.
#[derive(Clone)]
pub struct AppState {
    pub signin_service: Arc<SignInService>,
}

impl AppState {
    pub fn new(signin_service: Arc<SignInService>) -> Self {
        Self { signin_service }
    }

    /// State wired to the single demo account.
    pub fn example() -> Self {
        Self::new(Arc::new(SignInService::example()))
    }
}

use async_trait::async_trait;

use crate::{errors::ProviderError, models::Flight};

pub mod aviation;

pub use aviation::AviationStackProvider;

/// Upstream source of live flights. May fail transiently.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Flight>, ProviderError>;
}

/// Serves a fixed flight list. Used offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticFlightProvider {
    flights: Vec<Flight>,
}

impl StaticFlightProvider {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }
}

#[async_trait]
impl FlightProvider for StaticFlightProvider {
    async fn fetch(&self) -> Result<Vec<Flight>, ProviderError> {
        Ok(self.flights.clone())
    }
}

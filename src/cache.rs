use std::time::Duration;

use ::redis::aio::ConnectionManager;
use async_trait::async_trait;

use crate::{errors::StoreError, models::Flight};

pub const FLIGHTS_CACHE_KEY: &str = "flights:all";

/// Short-lived copy of the full flight list. Only an optimisation: callers treat
/// every error as a miss.
#[async_trait]
pub trait FlightCache: Send + Sync {
    async fn get(&self) -> Result<Option<Vec<Flight>>, StoreError>;
    async fn set(&self, flights: &[Flight], ttl: Duration) -> Result<(), StoreError>;
    async fn invalidate(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct RedisFlightCache {
    conn: ConnectionManager,
}

impl RedisFlightCache {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl FlightCache for RedisFlightCache {
    async fn get(&self) -> Result<Option<Vec<Flight>>, StoreError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = ::redis::cmd("GET")
            .arg(FLIGHTS_CACHE_KEY)
            .query_async(&mut conn)
            .await?;

        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, flights: &[Flight], ttl: Duration) -> Result<(), StoreError> {
        let payload = serde_json::to_string(flights)?;
        let mut conn = self.conn.clone();
        ::redis::cmd("SET")
            .arg(FLIGHTS_CACHE_KEY)
            .arg(payload)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        ::redis::cmd("DEL")
            .arg(FLIGHTS_CACHE_KEY)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}

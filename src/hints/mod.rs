use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::rng::GameRng;

mod facts;

/// Memoised trivia picks keyed by (flight id, city).
#[derive(Default)]
pub struct FactCache {
    entries: RwLock<HashMap<(String, String), String>>,
}

impl FactCache {
    pub fn get(&self, flight_id: &str, city: &str) -> Option<String> {
        self.entries
            .read()
            .get(&(flight_id.to_string(), city.to_string()))
            .cloned()
    }

    /// Keeps the first stored fact if another caller won the race.
    pub fn get_or_insert(&self, flight_id: &str, city: &str, fact: String) -> String {
        self.entries
            .write()
            .entry((flight_id.to_string(), city.to_string()))
            .or_insert(fact)
            .clone()
    }

    /// Drops every memoised fact whose flight id fails `keep`.
    pub fn retain_flights(&self, keep: impl Fn(&str) -> bool) {
        self.entries.write().retain(|(flight_id, _), _| keep(flight_id));
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct CityFacts {
    table: HashMap<&'static str, &'static [&'static str]>,
    cache: FactCache,
    rng: Arc<GameRng>,
}

impl CityFacts {
    pub fn new(rng: Arc<GameRng>) -> Self {
        Self {
            table: facts::CITY_FACTS.iter().copied().collect(),
            cache: FactCache::default(),
            rng,
        }
    }

    /// One trivia line about `city`, stable for the same flight. `None` for an empty city.
    pub fn fact_for(&self, flight_id: &str, city: &str) -> Option<String> {
        if city.is_empty() {
            return None;
        }
        if let Some(fact) = self.cache.get(flight_id, city) {
            return Some(fact);
        }

        let pool = self
            .table
            .get(city)
            .copied()
            .filter(|facts| !facts.is_empty())
            .unwrap_or(facts::FALLBACK_FACTS);
        let fact = pool[self.rng.index(pool.len())].to_string();

        Some(self.cache.get_or_insert(flight_id, city, fact))
    }

    pub fn knows_city(&self, city: &str) -> bool {
        self.table.contains_key(city)
    }

    pub fn cache(&self) -> &FactCache {
        &self.cache
    }
}

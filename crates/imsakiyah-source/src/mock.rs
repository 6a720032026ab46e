//! Mock schedule source for testing

use async_trait::async_trait;
use imsakiyah_api::{ImsakiyahData, ImsakiyahDay};
use imsakiyah_util::LocationKey;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::debug;

use crate::{ScheduleSource, SourceError, SourceResult};

/// In-memory schedule source for unit/integration testing
#[derive(Default)]
pub struct MockScheduleSource {
    cities: HashMap<String, Vec<String>>,
    schedules: HashMap<LocationKey, Vec<ImsakiyahData>>,
    requests: AtomicUsize,

    /// Make every request fail with `SourceError::Http`
    fail_requests: AtomicBool,
}

impl MockScheduleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location with a generated schedule of `days` days
    pub fn with_location(self, location: LocationKey, days: usize) -> Self {
        let data = sample_schedule(&location, days);
        self.with_schedule(location, vec![data])
    }

    /// Register a location with explicit schedule data (may be empty)
    pub fn with_schedule(mut self, location: LocationKey, data: Vec<ImsakiyahData>) -> Self {
        let cities = self.cities.entry(location.province.clone()).or_default();
        if !cities.contains(&location.city) {
            cities.push(location.city.clone());
        }
        self.schedules.insert(location, data);
        self
    }

    pub fn set_fail_requests(&self, fail: bool) {
        self.fail_requests.store(fail, Ordering::SeqCst);
    }

    /// Number of requests served (including failed ones)
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin(&self, what: &str) -> SourceResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        debug!(request = what, "Mock schedule source request");
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(SourceError::Http("Mock request failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ScheduleSource for MockScheduleSource {
    async fn provinces(&self) -> SourceResult<Vec<String>> {
        self.begin("provinces")?;
        let mut provinces: Vec<String> = self.cities.keys().cloned().collect();
        provinces.sort();
        Ok(provinces)
    }

    async fn cities(&self, province: &str) -> SourceResult<Vec<String>> {
        self.begin("cities")?;
        Ok(self.cities.get(province).cloned().unwrap_or_default())
    }

    async fn schedule(&self, location: &LocationKey) -> SourceResult<Vec<ImsakiyahData>> {
        self.begin("schedule")?;
        Ok(self.schedules.get(location).cloned().unwrap_or_default())
    }
}

/// A plausible schedule with `days` entries and fixed times
pub fn sample_schedule(location: &LocationKey, days: usize) -> ImsakiyahData {
    let days = (1..=days as u32)
        .map(|day| ImsakiyahDay {
            day,
            imsak: "04:28".into(),
            subuh: "04:38".into(),
            terbit: "05:53".into(),
            dhuha: "06:21".into(),
            dzuhur: "12:05".into(),
            ashar: "15:10".into(),
            maghrib: "18:11".into(),
            isya: "19:20".into(),
        })
        .collect();

    ImsakiyahData {
        province: location.province.clone(),
        city: location.city.clone(),
        hijri: "Ramadhan 1446".into(),
        gregorian: "2025".into(),
        days,
    }
}

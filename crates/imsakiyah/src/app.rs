//! Command handling

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use imsakiyah_api::{Event, EventPayload, FetchTarget, ImsakiyahData, Severity};
use imsakiyah_config::{Settings, load_config_or_default};
use imsakiyah_core::{
    FastingLedger, InitReport, LedgerError, LedgerWarning, Pager, load_last_search,
    prune_records_before, save_last_search,
};
use imsakiyah_http::HttpScheduleSource;
use imsakiyah_source::{ScheduleSource, SourceError};
use imsakiyah_store::{KeyValueStore, SqliteStore};
use imsakiyah_util::{
    DateKey, ImsakiyahError, LocationKey, db_path_in, format_clock_time, now, today,
};
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::render;
use crate::{Command, LocationArgs, TrackerAction};

/// Application state shared by all commands
pub struct App {
    settings: Settings,
    store: Arc<dyn KeyValueStore>,
    source: Arc<dyn ScheduleSource>,
}

impl App {
    pub fn new(config_path: &Path, data_dir: Option<&Path>) -> Result<Self> {
        // Load configuration
        let settings = load_config_or_default(config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?;

        info!(
            config_path = %config_path.display(),
            api = %settings.api.base_url,
            "Configuration loaded"
        );

        let data_dir = data_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| settings.data_dir.clone());

        // Initialize store
        let db_path = db_path_in(&data_dir);
        let store: Arc<dyn KeyValueStore> = Arc::new(
            SqliteStore::open(&db_path)
                .with_context(|| format!("Failed to open database {:?}", db_path))?,
        );

        if !store.is_healthy() {
            warn!(db_path = %db_path.display(), "Store reports unhealthy");
        }
        info!(db_path = %db_path.display(), "Store initialized");

        let source: Arc<dyn ScheduleSource> = Arc::new(
            HttpScheduleSource::new(settings.api.base_url.clone(), settings.api.timeout)
                .context("Failed to create schedule source")?,
        );

        Ok(Self {
            settings,
            store,
            source,
        })
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        let mut out = String::new();
        let today = today();

        match command {
            Command::Provinces => {
                let provinces = self.source.provinces().await.map_err(|e| {
                    self.fetch_failed(FetchTarget::Provinces, e, "Failed to fetch provinces")
                })?;
                for province in provinces {
                    writeln!(out, "{}", province)?;
                }
            }

            Command::Cities { province } => {
                let cities = self.source.cities(&province).await.map_err(|e| {
                    self.fetch_failed(FetchTarget::Cities, e, "Failed to fetch cities")
                })?;
                for city in cities {
                    writeln!(out, "{}", city)?;
                }
            }

            Command::Search { province, city } => {
                let location = LocationKey::new(province.trim(), city.trim());
                if !location.is_complete() {
                    self.notify(EventPayload::LocationIncomplete);
                    return Err(ImsakiyahError::IncompleteLocation.into());
                }

                let data = self.load_schedule(&location).await?;

                if let Err(e) = save_last_search(self.store.as_ref(), &location) {
                    warn!(error = %e, "Failed to save last search");
                }
                self.notify(EventPayload::ScheduleLoaded {
                    location: location.clone(),
                });

                // A new schedule rebuilds the tracker for its days
                let mut ledger = FastingLedger::new(self.store.clone());
                let report = ledger.on_schedule_changed(&data.days, today)?;
                self.report_warnings(&report);

                render::today_card(&mut out, &data, today)?;
                writeln!(out)?;
                render::schedule_table(&mut out, &data, today)?;
            }

            Command::Schedule { location, daily } => {
                let location = self.resolve_location(location)?;
                let data = self.load_schedule(&location).await?;
                if daily {
                    render::daily_view(&mut out, &data, today)?;
                } else {
                    render::schedule_table(&mut out, &data, today)?;
                }
            }

            Command::Today { location } => {
                let location = self.resolve_location(location)?;
                let data = self.load_schedule(&location).await?;
                render::today_card(&mut out, &data, today)?;
                writeln!(out)?;
                writeln!(out, "Sekarang pukul {}", format_clock_time(&now()))?;
            }

            Command::Tracker { location, action } => {
                self.tracker(&mut out, location, action, today).await?;
            }
        }

        print!("{}", out);
        Ok(())
    }

    async fn tracker(
        &self,
        out: &mut String,
        location: LocationArgs,
        action: TrackerAction,
        today: NaiveDate,
    ) -> Result<()> {
        // Pruning works on stored records only
        if let TrackerAction::Prune { before } = &action {
            let cutoff = match before {
                Some(raw) => DateKey::parse(raw)
                    .ok_or_else(|| anyhow!("Invalid date {:?}, expected YYYY-MM-DD", raw))?,
                None => DateKey::new(today),
            };
            let removed = prune_records_before(self.store.as_ref(), cutoff)
                .context("Failed to prune fasting records")?;
            writeln!(out, "{} catatan sebelum {} dihapus", removed, cutoff)?;
            return Ok(());
        }

        let location = self.resolve_location(location)?;
        let data = self.load_schedule(&location).await?;

        let mut ledger = FastingLedger::new(self.store.clone());
        let report = ledger.initialize(&data.days, today)?;
        self.report_warnings(&report);

        match action {
            TrackerAction::Show { page, page_size } => {
                let len = ledger.len();
                let mut pager = Pager::new(page_size.unwrap_or(self.settings.page_size))?;
                pager.go_to_page(page, len);
                if pager.page() != page {
                    warn!(requested = page, shown = pager.page(), "Page out of range");
                }

                render::progress(out, ledger.progress(), ledger.completed_count(), len)?;
                writeln!(out, "{}", pager.range_label(len))?;
                writeln!(out)?;

                let current = pager.slice(ledger.records());
                render::tracker_page(out, &current, &data.days)?;

                if current.total_pages > 1 {
                    writeln!(out)?;
                    writeln!(out, "{}", render::page_selector(&pager.window(len), pager.page()))?;
                }
            }

            TrackerAction::Toggle { day } => {
                let index = day_index(day, ledger.len())?;
                let result = ledger.toggle_completion(index);
                self.flush_events(&mut ledger);

                let record = result.map_err(|e| persist_error(e, day))?;
                let status = if record.completed {
                    "Selesai"
                } else {
                    "Belum Selesai"
                };
                writeln!(out, "{}: {}", record.date_label, status)?;
                render::progress(out, ledger.progress(), ledger.completed_count(), ledger.len())?;
            }

            TrackerAction::Note { day, text } => {
                let index = day_index(day, ledger.len())?;
                ledger
                    .update_notes(index, text)
                    .map_err(|e| persist_error(e, day))?;
                let record = &ledger.records()[index];
                writeln!(out, "Catatan untuk {} disimpan", record.date_label)?;
            }

            TrackerAction::Progress => {
                render::progress(out, ledger.progress(), ledger.completed_count(), ledger.len())?;
            }

            TrackerAction::Prune { .. } => {}
        }

        Ok(())
    }

    /// Explicit flags, then the last search, then the configured default
    fn resolve_location(&self, args: LocationArgs) -> Result<LocationKey> {
        let location = match (args.province, args.city) {
            (Some(province), Some(city)) => LocationKey::new(province.trim(), city.trim()),
            (None, None) => {
                return load_last_search(self.store.as_ref())
                    .or_else(|| self.settings.default_location.clone())
                    .ok_or_else(|| ImsakiyahError::NoLocation.into());
            }
            _ => LocationKey::default(),
        };

        if !location.is_complete() {
            self.notify(EventPayload::LocationIncomplete);
            return Err(ImsakiyahError::IncompleteLocation.into());
        }
        debug!(location = %location, "Using location from arguments");
        Ok(location)
    }

    async fn load_schedule(&self, location: &LocationKey) -> Result<ImsakiyahData> {
        match self.source.first_schedule(location).await {
            Ok(data) => {
                info!(location = %location, days = data.days.len(), "Schedule loaded");
                Ok(data)
            }
            Err(SourceError::NotFound(location)) => {
                self.notify(EventPayload::ScheduleNotFound {
                    location: location.clone(),
                });
                Err(ImsakiyahError::ScheduleNotFound(location).into())
            }
            Err(e) => Err(self.fetch_failed(
                FetchTarget::Schedule,
                e,
                &format!("Failed to fetch schedule for {}", location),
            )),
        }
    }

    fn fetch_failed(&self, target: FetchTarget, error: SourceError, context: &str) -> anyhow::Error {
        self.notify(EventPayload::FetchFailed { target });
        anyhow::Error::new(error).context(context.to_string())
    }

    fn flush_events(&self, ledger: &mut FastingLedger) {
        for event in ledger.drain_events() {
            if let Some(payload) = event.notification() {
                self.notify(payload);
            }
        }
    }

    fn report_warnings(&self, report: &InitReport) {
        for warning in &report.warnings {
            match warning {
                LedgerWarning::CorruptRecord { key, message, .. } => {
                    eprintln!("Peringatan: catatan {} rusak ({}), memakai nilai awal", key, message);
                }
                LedgerWarning::PersistenceFailure { key, message, .. } => {
                    eprintln!("Peringatan: gagal menyimpan {} ({})", key, message);
                }
            }
        }
    }

    fn notify(&self, payload: EventPayload) {
        let event = Event::new(payload);
        let at = format_clock_time(&event.timestamp);
        match event.payload.severity() {
            Severity::Default => info!(at = %at, title = event.payload.title(), "Notification"),
            Severity::Destructive => warn!(at = %at, title = event.payload.title(), "Notification"),
        }
        eprintln!("{}", render::notification(&event.payload));
    }
}

/// 1-based schedule day to ledger index
fn day_index(day: usize, len: usize) -> Result<usize> {
    if day == 0 || day > len {
        return Err(ImsakiyahError::InvalidDay { day, len }.into());
    }
    Ok(day - 1)
}

fn persist_error(error: LedgerError, day: usize) -> anyhow::Error {
    match error {
        LedgerError::PersistenceFailure { .. } => {
            anyhow::Error::new(error).context(format!("Day {} changed but was not saved", day))
        }
        other => other.into(),
    }
}

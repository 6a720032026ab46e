//! Saved search preferences

use imsakiyah_store::{KeyValueStore, StoreResult, load_json, save_json};
use imsakiyah_util::LocationKey;
use tracing::warn;

/// Key holding the last searched `{"province", "city"}`
pub const LAST_SEARCH_KEY: &str = "imsakiyah_last_search";

/// The last location searched, if one was saved and is still readable.
///
/// An unreadable or incomplete value is treated as absent.
pub fn load_last_search(store: &dyn KeyValueStore) -> Option<LocationKey> {
    match load_json::<LocationKey>(store, LAST_SEARCH_KEY) {
        Ok(Some(location)) if location.is_complete() => Some(location),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable last search");
            None
        }
    }
}

pub fn save_last_search(store: &dyn KeyValueStore, location: &LocationKey) -> StoreResult<()> {
    save_json(store, LAST_SEARCH_KEY, location)
}

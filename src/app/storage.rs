use leptos::prelude::window;
use models::KeyValueStore;

/// The browser's `localStorage`, read-only.
///
/// Every read goes to the browser, so a value written by another part of the page is
/// seen by the next request. Unavailable storage reads as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let storage = match window().local_storage() {
            Ok(Some(storage)) => storage,
            Ok(None) => {
                log::warn!("localStorage is not available");
                return None;
            }
            Err(err) => {
                log::warn!("Failed to access localStorage: {err:?}");
                return None;
            }
        };
        storage.get_item(key).unwrap_or_else(|err| {
            log::warn!("Failed to read `{key}` from localStorage: {err:?}");
            None
        })
    }
}

//! Client-local key-value storage for the readme cache.
//!
//! In the browser this is `localStorage`; server-side rendering never
//! resolves readmes, so other builds fall back to an in-memory store.

#[cfg(feature = "web")]
mod local {
    use cookbook::error::{StoreError, StoreResult};
    use cookbook::KeyValueStore;

    /// `window.localStorage`, looked up on every access.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        fn storage() -> StoreResult<web_sys::Storage> {
            let window =
                web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
            window
                .local_storage()
                .map_err(|e| StoreError::Backend(format!("{:?}", e)))?
                .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))
        }
    }

    impl KeyValueStore for LocalStorageStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StoreError::Backend(format!("{:?}", e)))
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            // Quota errors surface here
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(format!("{:?}", e)))
        }
    }
}

#[cfg(feature = "web")]
pub type BrowserStore = local::LocalStorageStore;

#[cfg(not(feature = "web"))]
pub type BrowserStore = cookbook::MemoryStore;

/// Store backing the readme cache in this build.
pub fn browser_store() -> BrowserStore {
    BrowserStore::default()
}

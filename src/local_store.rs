use std::rc::Rc;

use cartela_core::{KeyValueStore, MemoryStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub(crate) fn js_err(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|json| json.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage` behind the core storage seam.
pub(crate) struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub(crate) fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: js_err(err),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: js_err(err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: js_err(err),
            })
    }
}

/// Falls back to an in-memory store when the browser denies localStorage;
/// the card then only lives for the current page.
pub(crate) fn open_storage() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Some(store) => Rc::new(store),
        None => {
            gloo::console::warn!("storage: localStorage unavailable, using memory store");
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartela_core::{SelectionStore, Selections};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "cartela.test.local_store";

    #[wasm_bindgen_test]
    fn local_store_round_trips_strings() {
        let store = LocalStore::open().expect("localStorage available");
        store.set(TEST_KEY, "valor").unwrap();
        assert_eq!(store.get(TEST_KEY).unwrap().as_deref(), Some("valor"));
        store.remove(TEST_KEY).unwrap();
        assert_eq!(store.get(TEST_KEY).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn selections_persist_through_local_storage() {
        let store = LocalStore::open().expect("localStorage available");
        let selections = SelectionStore::new(&store);
        let mut card = Selections::empty();
        card.set(3, "Ada");
        selections.save(&card).unwrap();
        assert_eq!(selections.load().value.get(3), "Ada");
        selections.clear().unwrap();
    }

    #[wasm_bindgen_test]
    fn js_err_prefers_plain_strings() {
        assert_eq!(js_err(JsValue::from_str("quota")), "quota");
    }

    #[wasm_bindgen_test]
    fn js_err_describes_undefined_and_objects() {
        assert!(js_err(JsValue::UNDEFINED).contains("undefined"));
        let object = js_sys::Object::new();
        js_sys::Reflect::set(&object, &"name".into(), &"QuotaExceededError".into()).unwrap();
        assert_eq!(js_err(object.into()), r#"{"name":"QuotaExceededError"}"#);
    }
}

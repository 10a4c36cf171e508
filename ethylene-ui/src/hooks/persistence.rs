// ethylene-ui/src/hooks/persistence.rs
//!
//! Browser persistence for the simulation form.
//! The last submitted inputs are kept in localStorage so a reload (or the
//! header's click-to-reload) brings the user back to the same package.

use ethylene_core::RawInputs;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "ethylene_inputs";

/// Form state persisted to localStorage between sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedInputs {
    pub inputs: RawInputs,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedInputs {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(inputs: RawInputs) -> Self {
        Self {
            inputs,
            version: Self::CURRENT_VERSION,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the last submitted inputs.
/// Returns None if nothing was saved, parsing fails, or storage is unavailable.
pub fn load_inputs() -> Option<RawInputs> {
    let json = storage()?.get_item(STORAGE_KEY).ok()??;

    match serde_json::from_str::<PersistedInputs>(&json) {
        Ok(state) if state.version == PersistedInputs::CURRENT_VERSION => {
            log::info!("Restored inputs from localStorage");
            Some(state.inputs)
        }
        Ok(state) => {
            log::warn!(
                "Ignoring saved inputs with version {} (current: {})",
                state.version,
                PersistedInputs::CURRENT_VERSION
            );
            None
        }
        Err(e) => {
            log::warn!("Failed to parse saved inputs: {}", e);
            None
        }
    }
}

/// Save inputs. Logs a warning if storage is unavailable or full.
pub fn save_inputs(inputs: &RawInputs) {
    let Some(storage) = storage() else {
        return;
    };

    match serde_json::to_string(&PersistedInputs::new(inputs.clone())) {
        Ok(json) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                log::warn!("Failed to save inputs to localStorage: {:?}", e);
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize inputs: {}", e);
        }
    }
}

/// Forget saved inputs.
pub fn clear_inputs() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use ethylene_core::Field;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn saved_inputs_come_back() {
        let mut inputs = RawInputs::default();
        inputs.set(Field::FruitMass, "1.25".to_string());
        inputs.set(Field::TestDays, "7".to_string());

        save_inputs(&inputs);
        assert_eq!(load_inputs(), Some(inputs));

        clear_inputs();
        assert_eq!(load_inputs(), None);
    }

    #[wasm_bindgen_test]
    fn unknown_version_is_ignored() {
        let stale = r#"{"inputs":{"fruit_mass":"1","storage_temperature":"","perforation_diameter":"","perforation_count":"","scavenger_mass":"","package_volume":"","test_days":""},"version":0}"#;
        storage().unwrap().set_item(STORAGE_KEY, stale).unwrap();
        assert_eq!(load_inputs(), None);
        clear_inputs();
    }
}

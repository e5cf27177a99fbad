/// Browser capabilities used by the popup: tab management and the snap sound
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

use crate::tab_data::{CreateProperties, TabInfo};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(props: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTabs(tab_ids: JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("browser call failed: {0}")]
    Bridge(String),
    #[error("failed to parse host value: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("audio playback failed: {0}")]
    Audio(String),
}

/// Tab management offered by the host browser
#[allow(async_fn_in_trait)]
pub trait TabHost {
    /// All tabs in the window the popup belongs to
    async fn query_current_window(&self) -> Result<Vec<TabInfo>, HostError>;

    async fn create(&self, props: CreateProperties) -> Result<TabInfo, HostError>;

    async fn remove(&self, tab_ids: Vec<i32>) -> Result<(), HostError>;
}

/// A reusable sound effect
pub trait SoundPlayer {
    fn load(&self);

    fn play(&self) -> Result<(), HostError>;
}

/// `chrome.tabs`, reached through popup.js
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeTabs;

impl TabHost for ChromeTabs {
    async fn query_current_window(&self) -> Result<Vec<TabInfo>, HostError> {
        let tabs_js = getCurrentWindowTabs()
            .await
            .map_err(|e| HostError::Bridge(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(tabs_js).map_err(|e| HostError::Decode(format!("{:?}", e)))
    }

    async fn create(&self, props: CreateProperties) -> Result<TabInfo, HostError> {
        let props_js = serde_wasm_bindgen::to_value(&props)
            .map_err(|e| HostError::Encode(format!("{:?}", e)))?;

        let tab_js = createTab(props_js)
            .await
            .map_err(|e| HostError::Bridge(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(tab_js).map_err(|e| HostError::Decode(format!("{:?}", e)))
    }

    async fn remove(&self, tab_ids: Vec<i32>) -> Result<(), HostError> {
        let tab_ids_js = serde_wasm_bindgen::to_value(&tab_ids)
            .map_err(|e| HostError::Encode(format!("{:?}", e)))?;

        removeTabs(tab_ids_js)
            .await
            .map_err(|e| HostError::Bridge(format!("{:?}", e)))
    }
}

/// The finger snap, backed by a single `<audio>` element
pub struct SnapSound {
    audio: Option<HtmlAudioElement>,
}

impl SnapSound {
    /// A sound whose element could not be created stays silent
    pub fn new(src: &str) -> Self {
        let audio = match HtmlAudioElement::new_with_src(src) {
            Ok(audio) => Some(audio),
            Err(e) => {
                warn!("Could not create audio element for {}: {:?}", src, e);
                None
            }
        };

        SnapSound { audio }
    }
}

impl SoundPlayer for SnapSound {
    fn load(&self) {
        if let Some(audio) = &self.audio {
            audio.load();
        }
    }

    fn play(&self) -> Result<(), HostError> {
        let Some(audio) = &self.audio else {
            debug!("No audio element; skipping snap");
            return Ok(());
        };

        let promise = audio
            .play()
            .map_err(|e| HostError::Audio(format!("{:?}", e)))?;

        // The autoplay policy rejects asynchronously
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("Snap sound rejected: {:?}", e);
            }
        });

        Ok(())
    }
}

/// Popup configuration: packaged assets and prompt text
#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    /// Played once per decimation
    pub snap_sound: String,
    /// Shown while nothing has been closed
    pub idle_image: String,
    /// Shown above the list of closed tabs
    pub decimated_image: String,
    pub prompt_title: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            snap_sound: "fingerSnap.mp3".to_string(),
            idle_image: "snap_before.png".to_string(),
            decimated_image: "snap_sound.png".to_string(),
            prompt_title: "Click to decimate".to_string(),
        }
    }
}

// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// What the page field shows: a URL or a local file path.
    pub page_text: String,

    /// Save-As dialog path field.
    pub save_path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 600,
            page_text: s!(),
            save_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

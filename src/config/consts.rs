// src/config/consts.rs

// Extraction
pub const LINK_MARKER: &str = "/translate/";
pub const SOURCE_LANG: &str = "es";
pub const TARGET_LANG: &str = "en";
pub const SOURCE_CLASS: &str = "word";
pub const TARGET_CLASS: &str = "translation";

// Message exchange
pub const ACTION_FIND_LINKS: &str = "findTranslateLinks";

// Export
pub const CSV_FILENAME: &str = "translation_links.csv";
pub const CSV_HEADERS: [&str; 3] = ["Spanish", "English", "Link"];
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const BOM: char = '\u{FEFF}';
pub const DEFAULT_OUT_DIR: &str = "out";

// Table messages
pub const NO_RESULTS_MESSAGE: &str = "No translation links found on this page";
pub const TABLE_COLUMNS: usize = 3;

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 20;
pub const USER_AGENT: &str = concat!("translink/", env!("CARGO_PKG_VERSION"));

// Local
pub const LOG_FILE: &str = ".store/debug.log";

// Transport failures
pub const ERR_NO_RECEIVER: &str = "Could not establish connection. Receiving end does not exist.";
pub const ERR_PORT_CLOSED: &str = "The message port closed before a response was received.";

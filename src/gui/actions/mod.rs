// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::{scan, export, save, cancel_save}.

mod export;
mod scan;

pub use export::{cancel_save, export, save};
pub use scan::scan;

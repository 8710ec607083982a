// src/gui/components/mod.rs
pub mod results_table;
pub mod save_dialog;
pub mod scan_bar;

// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.status.lock() {
            *guard = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, stage: &str) {
        self.done += 1;
        logd!("Scan: stage {} done ({}/{})", stage, self.done, self.total);
    }
    fn finish(&mut self) {
        if self.done < self.total {
            // Stopped early; the table carries the error, the status says where.
            self.set_status(format!("Scan failed at step {}/{}", self.done + 1, self.total));
        }
    }
}

// src/progress.rs
/// Progress reporting for a scan.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a scan starts, with the number of stages it will go through.
    fn begin(&mut self, _stages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes (resolve, inject, exchange).
    fn item_done(&mut self, _stage: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

//! Test doubles for the progress module.

use super::surface::{BarSpec, RenderSurface, SurfaceBar};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// An in-memory writer whose contents remain readable after it has been moved into a tracker.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Everything a [`RecordingBar`] has been told.
#[derive(Debug, Clone)]
pub struct BarRecord {
    pub spec: BarSpec,
    pub current: u64,
    pub total: u64,
    pub annotation: String,
    pub completed: bool,

    /// `(current, total)` after every call that changed either.
    pub history: Vec<(u64, u64)>,
}

#[derive(Debug, Clone)]
pub struct RecordingBar(Arc<Mutex<BarRecord>>);

impl RecordingBar {
    fn record(&self, f: impl FnOnce(&mut BarRecord)) {
        let mut rec = self.0.lock().unwrap();
        f(&mut rec);
        let point = (rec.current, rec.total);
        rec.history.push(point);
    }
}

impl SurfaceBar for RecordingBar {
    fn set_current(&self, current: u64) {
        self.record(|rec| rec.current = current);
    }

    fn current(&self) -> u64 {
        self.0.lock().unwrap().current
    }

    fn set_total(&self, total: u64) {
        self.record(|rec| rec.total = total);
    }

    fn total(&self) -> u64 {
        self.0.lock().unwrap().total
    }

    fn set_annotation(&self, annotation: &str) {
        annotation.clone_into(&mut self.0.lock().unwrap().annotation);
    }

    fn complete(&self) {
        self.0.lock().unwrap().completed = true;
    }
}

#[derive(Debug, Default)]
struct SurfaceRecord {
    bars: Vec<Arc<Mutex<BarRecord>>>,
    waits: usize,
}

/// A surface that remembers every call so tests can inspect it after handing a clone to a tracker.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface(Arc<Mutex<SurfaceRecord>>);

impl RecordingSurface {
    pub fn bar(&self, index: usize) -> BarRecord {
        self.0.lock().unwrap().bars[index].lock().unwrap().clone()
    }

    pub fn bar_count(&self) -> usize {
        self.0.lock().unwrap().bars.len()
    }

    pub fn waits(&self) -> usize {
        self.0.lock().unwrap().waits
    }
}

impl RenderSurface for RecordingSurface {
    type Bar = RecordingBar;

    fn add_bar(&mut self, spec: BarSpec) -> Self::Bar {
        let total = spec.total;
        let rec = Arc::new(Mutex::new(BarRecord {
            spec,
            current: 0,
            total,
            annotation: String::new(),
            completed: false,
            history: Vec::new(),
        }));
        self.0.lock().unwrap().bars.push(Arc::clone(&rec));
        RecordingBar(rec)
    }

    fn wait(&mut self) {
        self.0.lock().unwrap().waits += 1;
    }
}

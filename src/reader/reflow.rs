//! Reflowable-content reading. Position is the engine's own: this session
//! holds only the document handle and delegates pagination.

use log::info;

use crate::engine::{ReflowDocument, ReflowEngine};
use crate::error::ReaderError;

pub struct ReflowReader {
    doc: Box<dyn ReflowDocument>,
}

impl ReflowReader {
    /// Open `url` through `engine` and request the initial render.
    pub(crate) fn open(engine: &dyn ReflowEngine, url: &str) -> Result<Self, ReaderError> {
        info!("opening reflow document: {url}");
        let mut doc = engine
            .open(url)
            .map_err(|e| ReaderError::DocumentLoad(e.to_string()))?;
        doc.display()
            .map_err(|e| ReaderError::DocumentLoad(e.to_string()))?;
        Ok(Self { doc })
    }

    /// Advance; the engine no-ops at its own boundary.
    pub fn next(&mut self) {
        self.doc.next();
    }

    /// Go back; the engine no-ops at its own boundary.
    pub fn prev(&mut self) {
        self.doc.prev();
    }
}

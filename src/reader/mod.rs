//! Document reader: kind dispatch and the two reading sessions.

mod raster;
mod reflow;
mod state;

pub use raster::RasterReader;
pub use reflow::ReflowReader;
pub use state::{
    clamp_scale, DEFAULT_SCALE, Effect, MAX_SCALE, MIN_SCALE, NavCommand, ReaderSession,
    SCALE_STEP,
};

use std::fmt;

use log::warn;

use crate::catalog::{BookRecord, DocumentDescriptor, FileKind};
use crate::chrome::{Panel, ReaderChrome};
use crate::engine::{RasterEngine, ReflowEngine, RenderSurface};
use crate::error::ReaderError;

/// The reading session produced by a successful open. The strategy is fixed
/// at open time and never switched.
pub enum ActiveSession {
    Raster(RasterReader),
    Reflow(ReflowReader),
}

// The readers hold boxed engine handles, so only the variant is printable.
impl fmt::Debug for ActiveSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster(_) => f.write_str("ActiveSession::Raster"),
            Self::Reflow(_) => f.write_str("ActiveSession::Reflow"),
        }
    }
}

/// Dispatcher over the two rendering strategies. Owns the injected engines
/// and the raster output surface until `open` hands them to a session.
pub struct DocumentReader {
    raster: Box<dyn RasterEngine>,
    reflow: Box<dyn ReflowEngine>,
    surface: Box<dyn RenderSurface>,
}

impl DocumentReader {
    #[must_use]
    pub fn new(
        raster: Box<dyn RasterEngine>,
        reflow: Box<dyn ReflowEngine>,
        surface: Box<dyn RenderSurface>,
    ) -> Self {
        Self {
            raster,
            reflow,
            surface,
        }
    }

    /// Open a catalog document, dispatching on its file kind.
    ///
    /// Exactly one reader container becomes visible on success, and only
    /// after the document has loaded. On failure the status banner shows the
    /// category message and both containers stay hidden; no engine is
    /// invoked for descriptors without a file or with an unsupported kind.
    pub fn open(
        self,
        descriptor: &DocumentDescriptor,
        chrome: &mut dyn ReaderChrome,
    ) -> Result<ActiveSession, ReaderError> {
        let id = descriptor.id;
        let result = self.dispatch(descriptor, chrome);
        if let Err(ref err) = result {
            warn!("failed to open book {id}: {err}");
            chrome.show_error(err.user_message());
        }
        result
    }

    /// Full page-load flow: surface the title and download link, then open.
    pub fn open_book(
        self,
        base_url: &str,
        record: &BookRecord,
        chrome: &mut dyn ReaderChrome,
    ) -> Result<ActiveSession, ReaderError> {
        chrome.set_title(&record.display_title());
        let descriptor = DocumentDescriptor::from_record(base_url, record);
        chrome.set_download_url(descriptor.download_url());
        self.open(&descriptor, chrome)
    }

    fn dispatch(
        self,
        descriptor: &DocumentDescriptor,
        chrome: &mut dyn ReaderChrome,
    ) -> Result<ActiveSession, ReaderError> {
        if !descriptor.has_file {
            return Err(ReaderError::NoFileAvailable);
        }

        let url = descriptor.inline_url();
        match descriptor.kind {
            FileKind::Pdf => {
                let reader = RasterReader::open(self.raster.as_ref(), &url, self.surface)?;
                chrome.show_panel(Panel::Raster);
                Ok(ActiveSession::Raster(reader))
            }
            FileKind::Epub => {
                let reader = ReflowReader::open(self.reflow.as_ref(), &url)?;
                chrome.show_panel(Panel::Reflow);
                Ok(ActiveSession::Reflow(reader))
            }
            FileKind::Unknown => Err(ReaderError::UnsupportedKind(descriptor.raw_kind.clone())),
        }
    }
}

//! Paged raster reading: one page drawn at a time at the session's zoom
//! scale.

use log::{debug, info};

use super::state::{Effect, NavCommand, ReaderSession};
use crate::engine::{RasterDocument, RasterEngine, RenderSurface};
use crate::error::ReaderError;

/// An open raster document plus its navigation session and output surface.
///
/// Renders are serialized by construction: every mutating operation takes
/// `&mut self` and completes its render before returning, so a second
/// navigation request cannot start while one is in flight.
pub struct RasterReader {
    doc: Box<dyn RasterDocument>,
    surface: Box<dyn RenderSurface>,
    session: ReaderSession,
}

impl RasterReader {
    /// Open `url` through `engine` and render the first page at the default
    /// scale.
    pub(crate) fn open(
        engine: &dyn RasterEngine,
        url: &str,
        surface: Box<dyn RenderSurface>,
    ) -> Result<Self, ReaderError> {
        info!("opening raster document: {url}");
        let doc = engine
            .open(url)
            .map_err(|e| ReaderError::DocumentLoad(e.to_string()))?;

        let page_count = doc.page_count();
        if page_count == 0 {
            return Err(ReaderError::DocumentLoad("document has no pages".into()));
        }

        let mut session = ReaderSession::new();
        let _ = session.apply(NavCommand::SetPageCount(page_count));
        info!("raster document loaded: {page_count} pages");

        let mut reader = Self {
            doc,
            surface,
            session,
        };
        reader.render()?;
        Ok(reader)
    }

    #[must_use]
    pub fn session(&self) -> &ReaderSession {
        &self.session
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.session.current_page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.session.page_count
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.session.scale
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self) -> Result<(), ReaderError> {
        self.apply(NavCommand::NextPage)
    }

    /// Go back one page; no-op on the first page.
    pub fn prev(&mut self) -> Result<(), ReaderError> {
        self.apply(NavCommand::PrevPage)
    }

    /// Zoom in one step; no-op at the maximum scale.
    pub fn zoom_in(&mut self) -> Result<(), ReaderError> {
        self.apply(NavCommand::ZoomIn)
    }

    /// Zoom out one step; no-op at the minimum scale.
    pub fn zoom_out(&mut self) -> Result<(), ReaderError> {
        self.apply(NavCommand::ZoomOut)
    }

    fn apply(&mut self, cmd: NavCommand) -> Result<(), ReaderError> {
        let effects = self.session.apply(cmd);
        for effect in effects {
            match effect {
                Effect::RenderCurrentPage => self.render()?,
            }
        }
        Ok(())
    }

    /// Draw the current page. The surface is resized to the page viewport
    /// before the engine draws into it.
    fn render(&mut self) -> Result<(), ReaderError> {
        let page = self.session.current_page;
        let scale = self.session.scale;

        let viewport = self
            .doc
            .viewport(page, scale)
            .map_err(|e| ReaderError::Render(e.to_string()))?;
        self.surface.resize(viewport);

        debug!(
            "rendering page {page}/{count} at scale {scale}",
            count = self.session.page_count
        );
        self.doc
            .render(page, scale, self.surface.as_mut())
            .map_err(|e| ReaderError::Render(e.to_string()))
    }
}

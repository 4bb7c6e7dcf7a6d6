//! Capability seams for the external rendering engines.
//!
//! Both engines are opaque collaborators: the reader hands them a URL and
//! drives whatever handle comes back. The core never assumes a concrete
//! rendering library exists in the environment; everything arrives through
//! these traits, which also keeps the session logic testable with fakes.

use thiserror::Error;

/// Opaque failure reported by a rendering engine.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Pixel dimensions of a page rendered at a given scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Output surface the raster engine draws into. Resized to the page
/// viewport before every draw.
pub trait RenderSurface {
    fn resize(&mut self, viewport: Viewport);
}

/// Paged raster engine (PDF): opens a document by URL and produces a
/// page-indexed handle.
pub trait RasterEngine {
    fn open(&self, url: &str) -> Result<Box<dyn RasterDocument>, EngineError>;
}

/// Handle to an open raster document. Pages are 1-indexed.
pub trait RasterDocument {
    fn page_count(&self) -> usize;

    /// Dimensions of `page` at `scale`, computed without drawing.
    fn viewport(&self, page: usize, scale: f32) -> Result<Viewport, EngineError>;

    /// Draw `page` at `scale` into `surface`.
    fn render(
        &mut self,
        page: usize,
        scale: f32,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), EngineError>;
}

/// Reflowable-content engine (EPUB): opens a document bound to the host's
/// viewport container.
pub trait ReflowEngine {
    fn open(&self, url: &str) -> Result<Box<dyn ReflowDocument>, EngineError>;
}

/// Handle to an open reflow document. Pagination lives inside the engine;
/// `next`/`prev` are trusted to no-op at the engine's own boundaries.
pub trait ReflowDocument {
    /// Initial render into the bound container.
    fn display(&mut self) -> Result<(), EngineError>;

    fn next(&mut self);
    fn prev(&mut self);
}

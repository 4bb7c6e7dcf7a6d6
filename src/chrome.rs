//! Presentation seam between the reader core and the host page.
//!
//! The core never touches a widget tree. The host hands in a `ReaderChrome`
//! and the core drives container visibility, the status banner, the title
//! line and the download control through it.

/// The two reader containers. Exactly one may be visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// Paged raster output (canvas-like surface with page/zoom controls).
    Raster,
    /// Reflowable-content viewport.
    Reflow,
}

pub trait ReaderChrome {
    /// Reveal one reader container. The core calls this at most once per
    /// open, and only after the document has loaded; implementations must
    /// keep the other container hidden.
    fn show_panel(&mut self, panel: Panel);

    /// Show the status banner (hidden by default) with a user-facing
    /// message.
    fn show_error(&mut self, message: &str);

    /// Header line for the open book ("Titulo — Autor").
    fn set_title(&mut self, title: &str);

    /// Point the download control at the save-as URL.
    fn set_download_url(&mut self, url: &str);
}

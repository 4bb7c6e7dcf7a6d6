//! Session state for the paged raster reader.
//!
//! Navigation mutates the session through commands and returns the render
//! effects the owning reader must execute. Commands that would cross a
//! boundary (first/last page, zoom limits) change nothing and return no
//! effects.

/// Minimum allowed zoom scale.
pub const MIN_SCALE: f32 = 0.6;
/// Maximum allowed zoom scale.
pub const MAX_SCALE: f32 = 3.0;
/// Scale change per zoom step.
pub const SCALE_STEP: f32 = 0.2;
/// Scale a document opens at.
pub const DEFAULT_SCALE: f32 = 1.2;

/// Per-document state of the raster reader. Created at open, destroyed with
/// the reader; never shared.
#[derive(Clone, Debug)]
pub struct ReaderSession {
    /// Current page, 1-indexed. Always within `[1, page_count]` once the
    /// document has loaded.
    pub current_page: usize,

    /// Total page count, 0 until the document handle resolves.
    pub page_count: usize,

    /// Current zoom scale, always within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f32,
}

impl Default for ReaderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: 1,
            page_count: 0,
            scale: DEFAULT_SCALE,
        }
    }

    /// Apply a navigation command and return the resulting effects.
    #[must_use]
    pub fn apply(&mut self, cmd: NavCommand) -> Vec<Effect> {
        match cmd {
            NavCommand::NextPage => {
                if self.current_page < self.page_count {
                    self.current_page += 1;
                    vec![Effect::RenderCurrentPage]
                } else {
                    vec![]
                }
            }

            NavCommand::PrevPage => {
                if self.current_page > 1 {
                    self.current_page -= 1;
                    vec![Effect::RenderCurrentPage]
                } else {
                    vec![]
                }
            }

            NavCommand::ZoomIn => self.set_scale(self.scale + SCALE_STEP),

            NavCommand::ZoomOut => self.set_scale(self.scale - SCALE_STEP),

            NavCommand::SetPageCount(count) => {
                self.page_count = count;
                if self.current_page > count {
                    self.current_page = count.max(1);
                }
                vec![]
            }
        }
    }

    fn set_scale(&mut self, requested: f32) -> Vec<Effect> {
        let clamped = clamp_scale(requested);
        if (self.scale - clamped).abs() > f32::EPSILON {
            self.scale = clamped;
            vec![Effect::RenderCurrentPage]
        } else {
            vec![]
        }
    }
}

/// Clamp a requested scale into the allowed zoom range, defusing NaN/Inf.
#[must_use]
pub fn clamp_scale(scale: f32) -> f32 {
    if !scale.is_finite() {
        DEFAULT_SCALE
    } else {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }
}

/// Navigation commands on a raster session.
#[derive(Clone, Copy, Debug)]
pub enum NavCommand {
    NextPage,
    PrevPage,
    ZoomIn,
    ZoomOut,
    /// Record the page count once the document handle resolves.
    SetPageCount(usize),
}

/// Effects produced by state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    RenderCurrentPage,
}

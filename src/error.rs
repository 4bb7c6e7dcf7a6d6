//! Reader error taxonomy and the user-facing banner messages.
//!
//! Every failure is terminal for the current open attempt: nothing here is
//! retried, and the host surfaces exactly one message through the status
//! banner (`ReaderChrome::show_error`).

use thiserror::Error;

/// Failures of the reader itself, as opposed to engine-internal faults
/// (those arrive as [`crate::engine::EngineError`] and are converted at the
/// call site).
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The catalog record has no attached document file.
    #[error("book has no attached document file")]
    NoFileAvailable,

    /// The attached file's kind is not one this reader renders.
    /// Carries the raw `tipoArquivo` value for diagnostics.
    #[error("unsupported document kind: {0:?}")]
    UnsupportedKind(String),

    /// The rendering engine failed to open the document.
    #[error("failed to load document: {0}")]
    DocumentLoad(String),

    /// The rendering engine failed while drawing a page.
    #[error("render failed: {0}")]
    Render(String),
}

impl ReaderError {
    /// Fixed localized message for the status banner.
    ///
    /// Load and render failures deliberately share the generic message; the
    /// distinction only matters in logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoFileAvailable => "Este livro não possui arquivo disponível.",
            Self::UnsupportedKind(_) => "Tipo de arquivo não suportado neste leitor.",
            Self::DocumentLoad(_) | Self::Render(_) => {
                "Falha ao carregar o livro. Tente novamente."
            }
        }
    }
}

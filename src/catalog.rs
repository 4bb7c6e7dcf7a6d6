//! Catalog records, file-kind detection and download URL construction.

use log::debug;
use serde::Deserialize;

/// Format of a book's attached document file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Epub,
    /// Anything the reader does not render (MOBI, DJVU, absent, ...).
    Unknown,
}

impl FileKind {
    /// Detect the kind from the catalog's `tipoArquivo` value.
    /// Matching is case-insensitive; unrecognized values map to `Unknown`
    /// rather than failing, so dispatch can reject them with a message.
    pub fn detect(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PDF" => Self::Pdf,
            "EPUB" => Self::Epub,
            _ => Self::Unknown,
        }
    }
}

/// Author block of the catalog wire shape.
#[derive(Clone, Debug, Deserialize)]
pub struct Autor {
    pub nome: String,
}

/// A book record as the catalog service sends it.
///
/// Field names follow the service's JSON; optional fields degrade to their
/// defaults instead of failing deserialization.
#[derive(Clone, Debug, Deserialize)]
pub struct BookRecord {
    pub id: u64,
    #[serde(default)]
    pub titulo: String,
    #[serde(rename = "temArquivo", default)]
    pub tem_arquivo: bool,
    #[serde(rename = "tipoArquivo", default)]
    pub tipo_arquivo: Option<String>,
    #[serde(default)]
    pub autor: Option<Autor>,
}

impl BookRecord {
    /// Parse a record from the catalog's JSON response body.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Title line for the reader header: "Titulo — Autor". The title falls
    /// back to "Livro" when the catalog sent none; the author is omitted
    /// when absent.
    pub fn display_title(&self) -> String {
        let titulo = match self.titulo.trim() {
            "" => "Livro",
            t => t,
        };
        match self.autor.as_ref().filter(|a| !a.nome.trim().is_empty()) {
            Some(autor) => format!("{titulo} — {}", autor.nome),
            None => titulo.to_string(),
        }
    }
}

/// Immutable description of the document to open, resolved from a catalog
/// record. Owns both halves of the download URL pair: `inline=true` asks the
/// server for an in-browser disposition, the bare URL is a file save.
#[derive(Clone, Debug)]
pub struct DocumentDescriptor {
    pub id: u64,
    pub kind: FileKind,
    /// Raw `tipoArquivo` value as the catalog sent it, kept for diagnostics.
    pub raw_kind: String,
    /// Download endpoint without a disposition flag.
    pub source_url: String,
    pub has_file: bool,
}

impl DocumentDescriptor {
    /// Build a descriptor from a catalog record and the service base URL
    /// (e.g. `/api/livros`).
    pub fn from_record(base_url: &str, record: &BookRecord) -> Self {
        let raw_kind = record.tipo_arquivo.clone().unwrap_or_default();
        let kind = FileKind::detect(&raw_kind);
        let source_url = format!("{}/{}/download", base_url.trim_end_matches('/'), record.id);
        debug!(
            "descriptor for book {}: kind={kind:?} has_file={}",
            record.id, record.tem_arquivo
        );
        Self {
            id: record.id,
            kind,
            raw_kind,
            source_url,
            has_file: record.tem_arquivo,
        }
    }

    /// URL that requests in-browser rendering instead of a save-as
    /// disposition.
    pub fn inline_url(&self) -> String {
        format!("{}?inline=true", self.source_url)
    }

    /// URL for the download control.
    pub fn download_url(&self) -> &str {
        &self.source_url
    }
}

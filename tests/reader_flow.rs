//! End-to-end reader flows against fake engines: catalog record in,
//! dispatch, panel visibility, banner messages, navigation.

use std::cell::RefCell;
use std::rc::Rc;

use leitor::chrome::Panel;
use leitor::reader::{DEFAULT_SCALE, SCALE_STEP};
use leitor::test_utils::{
    BASE_PAGE_HEIGHT, BASE_PAGE_WIDTH, EngineLog, FakeChrome, FakeRasterEngine, FakeReflowEngine,
    FakeSurface,
};
use leitor::{ActiveSession, BookRecord, DocumentDescriptor, DocumentReader, ReaderError};

const BASE_URL: &str = "/api/livros";

fn reader_with_pages(log: &Rc<RefCell<EngineLog>>, pages: usize) -> DocumentReader {
    DocumentReader::new(
        Box::new(FakeRasterEngine::new(log.clone(), pages)),
        Box::new(FakeReflowEngine::new(log.clone())),
        Box::new(FakeSurface::new(log.clone())),
    )
}

fn record(json: &str) -> BookRecord {
    BookRecord::from_json(json).unwrap()
}

#[test]
fn pdf_record_opens_inline_url_and_renders_first_page() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = reader_with_pages(&log, 42);
    let mut chrome = FakeChrome::default();

    let record = record(
        r#"{
            "id": 1,
            "titulo": "Dom Casmurro",
            "temArquivo": true,
            "tipoArquivo": "PDF",
            "autor": { "nome": "Machado de Assis" }
        }"#,
    );

    let session = reader.open_book(BASE_URL, &record, &mut chrome).unwrap();

    assert_eq!(chrome.title.as_deref(), Some("Dom Casmurro — Machado de Assis"));
    assert_eq!(chrome.download_url.as_deref(), Some("/api/livros/1/download"));
    assert_eq!(chrome.shown_panels, vec![Panel::Raster]);
    assert!(chrome.errors.is_empty());

    let log = log.borrow();
    assert_eq!(log.raster_opened, vec!["/api/livros/1/download?inline=true"]);
    assert!(log.reflow_opened.is_empty());
    assert_eq!(log.rendered, vec![(1, DEFAULT_SCALE)]);

    // Surface was resized to the page viewport before the draw.
    assert_eq!(log.resized.len(), 1);
    assert_eq!(log.resized[0].width, BASE_PAGE_WIDTH * DEFAULT_SCALE);
    assert_eq!(log.resized[0].height, BASE_PAGE_HEIGHT * DEFAULT_SCALE);

    assert_eq!(format!("{session:?}"), "ActiveSession::Raster");

    match session {
        ActiveSession::Raster(raster) => {
            assert_eq!(raster.current_page(), 1);
            assert_eq!(raster.page_count(), 42);
            assert_eq!(raster.scale(), DEFAULT_SCALE);
        }
        ActiveSession::Reflow(_) => panic!("PDF must open the raster reader"),
    }
}

#[test]
fn epub_record_opens_only_the_reflow_panel() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = reader_with_pages(&log, 0);
    let mut chrome = FakeChrome::default();

    let record = record(
        r#"{ "id": 2, "titulo": "Iracema", "temArquivo": true, "tipoArquivo": "EPUB" }"#,
    );

    let session = reader.open_book(BASE_URL, &record, &mut chrome).unwrap();

    assert_eq!(chrome.shown_panels, vec![Panel::Reflow]);
    assert!(chrome.errors.is_empty());

    {
        let log = log.borrow();
        assert_eq!(log.reflow_opened, vec!["/api/livros/2/download?inline=true"]);
        assert!(log.raster_opened.is_empty());
        assert_eq!(log.display_calls, 1);
    }

    assert_eq!(format!("{session:?}"), "ActiveSession::Reflow");

    // Pagination delegates straight to the engine.
    let ActiveSession::Reflow(mut reflow) = session else {
        panic!("EPUB must open the reflow reader");
    };
    reflow.next();
    reflow.next();
    reflow.prev();

    let log = log.borrow();
    assert_eq!(log.next_calls, 2);
    assert_eq!(log.prev_calls, 1);
}

#[test]
fn record_without_file_never_touches_an_engine() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = reader_with_pages(&log, 42);
    let mut chrome = FakeChrome::default();

    let record = record(r#"{ "id": 3, "titulo": "Sem Arquivo", "temArquivo": false }"#);

    let err = reader.open_book(BASE_URL, &record, &mut chrome).unwrap_err();

    assert!(matches!(err, ReaderError::NoFileAvailable));
    assert!(chrome.shown_panels.is_empty());
    assert_eq!(chrome.errors, vec!["Este livro não possui arquivo disponível."]);
    // Title and download link were still surfaced, matching the page flow.
    assert_eq!(chrome.title.as_deref(), Some("Sem Arquivo"));

    let log = log.borrow();
    assert!(log.raster_opened.is_empty());
    assert!(log.reflow_opened.is_empty());
    assert!(log.rendered.is_empty());
}

#[test]
fn unsupported_kind_shows_banner_and_no_panel() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = reader_with_pages(&log, 42);
    let mut chrome = FakeChrome::default();

    let record = record(
        r#"{ "id": 4, "titulo": "Formato Antigo", "temArquivo": true, "tipoArquivo": "MOBI" }"#,
    );

    let err = reader.open_book(BASE_URL, &record, &mut chrome).unwrap_err();

    assert!(matches!(err, ReaderError::UnsupportedKind(ref raw) if raw == "MOBI"));
    assert!(chrome.shown_panels.is_empty());
    assert_eq!(chrome.errors, vec!["Tipo de arquivo não suportado neste leitor."]);

    let log = log.borrow();
    assert!(log.raster_opened.is_empty());
    assert!(log.reflow_opened.is_empty());
}

#[test]
fn raster_load_failure_keeps_containers_hidden() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = DocumentReader::new(
        Box::new(FakeRasterEngine::failing(log.clone())),
        Box::new(FakeReflowEngine::new(log.clone())),
        Box::new(FakeSurface::new(log.clone())),
    );
    let mut chrome = FakeChrome::default();

    let record = record(
        r#"{ "id": 5, "titulo": "Corrompido", "temArquivo": true, "tipoArquivo": "PDF" }"#,
    );

    let err = reader.open_book(BASE_URL, &record, &mut chrome).unwrap_err();

    assert!(matches!(err, ReaderError::DocumentLoad(_)));
    assert!(chrome.shown_panels.is_empty());
    assert_eq!(chrome.errors, vec!["Falha ao carregar o livro. Tente novamente."]);
    assert!(log.borrow().rendered.is_empty());
}

#[test]
fn reflow_load_failure_shows_generic_banner() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = DocumentReader::new(
        Box::new(FakeRasterEngine::new(log.clone(), 42)),
        Box::new(FakeReflowEngine::failing(log.clone())),
        Box::new(FakeSurface::new(log.clone())),
    );
    let mut chrome = FakeChrome::default();

    let record = record(
        r#"{ "id": 6, "titulo": "Quebrado", "temArquivo": true, "tipoArquivo": "EPUB" }"#,
    );

    let err = reader.open_book(BASE_URL, &record, &mut chrome).unwrap_err();

    assert!(matches!(err, ReaderError::DocumentLoad(_)));
    assert!(chrome.shown_panels.is_empty());
    assert_eq!(chrome.errors, vec!["Falha ao carregar o livro. Tente novamente."]);
}

#[test]
fn zero_page_document_is_a_load_failure() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = reader_with_pages(&log, 0);
    let mut chrome = FakeChrome::default();

    let record = record(
        r#"{ "id": 8, "titulo": "Vazio", "temArquivo": true, "tipoArquivo": "PDF" }"#,
    );

    let err = reader.open_book(BASE_URL, &record, &mut chrome).unwrap_err();

    assert!(matches!(err, ReaderError::DocumentLoad(_)));
    assert!(chrome.shown_panels.is_empty());
    assert!(log.borrow().rendered.is_empty());
}

#[test]
fn navigation_and_zoom_render_each_change_and_skip_boundaries() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let reader = reader_with_pages(&log, 3);
    let mut chrome = FakeChrome::default();

    let descriptor = DocumentDescriptor::from_record(
        BASE_URL,
        &record(r#"{ "id": 9, "titulo": "Paginado", "temArquivo": true, "tipoArquivo": "PDF" }"#),
    );

    let ActiveSession::Raster(mut raster) = reader.open(&descriptor, &mut chrome).unwrap() else {
        panic!("PDF must open the raster reader");
    };

    raster.next().unwrap();
    raster.next().unwrap();
    raster.next().unwrap(); // already on the last page
    raster.prev().unwrap();
    raster.zoom_in().unwrap();
    raster.zoom_out().unwrap();

    assert_eq!(raster.current_page(), 2);

    let zoomed = DEFAULT_SCALE + SCALE_STEP;
    let back = zoomed - SCALE_STEP;
    assert_eq!(raster.scale(), back);

    let log = log.borrow();
    assert_eq!(
        log.rendered,
        vec![
            (1, DEFAULT_SCALE),
            (2, DEFAULT_SCALE),
            (3, DEFAULT_SCALE),
            (2, DEFAULT_SCALE),
            (2, zoomed),
            (2, back),
        ]
    );
    // One resize per draw, always before it.
    assert_eq!(log.resized.len(), log.rendered.len());
}

//! Shared fakes for exercising the reader without real rendering engines.

use std::cell::RefCell;
use std::rc::Rc;

use crate::chrome::{Panel, ReaderChrome};
use crate::engine::{
    EngineError, RasterDocument, RasterEngine, ReflowDocument, ReflowEngine, RenderSurface,
    Viewport,
};

/// US Letter at 72 dpi; fake viewports scale from this.
pub const BASE_PAGE_WIDTH: f32 = 612.0;
pub const BASE_PAGE_HEIGHT: f32 = 792.0;

/// Call log shared between the fakes a test wires together.
#[derive(Debug, Default)]
pub struct EngineLog {
    pub raster_opened: Vec<String>,
    pub reflow_opened: Vec<String>,
    /// (page, scale) pairs in draw order.
    pub rendered: Vec<(usize, f32)>,
    pub resized: Vec<Viewport>,
    pub display_calls: usize,
    pub next_calls: usize,
    pub prev_calls: usize,
}

/// Raster engine fake. Clone it before boxing to keep the log handle.
#[derive(Clone)]
pub struct FakeRasterEngine {
    log: Rc<RefCell<EngineLog>>,
    page_count: usize,
    fail_open: bool,
}

impl FakeRasterEngine {
    pub fn new(log: Rc<RefCell<EngineLog>>, page_count: usize) -> Self {
        Self {
            log,
            page_count,
            fail_open: false,
        }
    }

    pub fn failing(log: Rc<RefCell<EngineLog>>) -> Self {
        Self {
            log,
            page_count: 0,
            fail_open: true,
        }
    }
}

impl RasterEngine for FakeRasterEngine {
    fn open(&self, url: &str) -> Result<Box<dyn RasterDocument>, EngineError> {
        self.log.borrow_mut().raster_opened.push(url.to_string());
        if self.fail_open {
            return Err(EngineError::new("corrupt document"));
        }
        Ok(Box::new(FakeRasterDocument {
            log: self.log.clone(),
            page_count: self.page_count,
        }))
    }
}

struct FakeRasterDocument {
    log: Rc<RefCell<EngineLog>>,
    page_count: usize,
}

impl RasterDocument for FakeRasterDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn viewport(&self, _page: usize, scale: f32) -> Result<Viewport, EngineError> {
        Ok(Viewport {
            width: BASE_PAGE_WIDTH * scale,
            height: BASE_PAGE_HEIGHT * scale,
        })
    }

    fn render(
        &mut self,
        page: usize,
        scale: f32,
        _surface: &mut dyn RenderSurface,
    ) -> Result<(), EngineError> {
        self.log.borrow_mut().rendered.push((page, scale));
        Ok(())
    }
}

/// Records the resizes the reader performs before each draw.
pub struct FakeSurface {
    log: Rc<RefCell<EngineLog>>,
}

impl FakeSurface {
    pub fn new(log: Rc<RefCell<EngineLog>>) -> Self {
        Self { log }
    }
}

impl RenderSurface for FakeSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.log.borrow_mut().resized.push(viewport);
    }
}

/// Reflow engine fake.
#[derive(Clone)]
pub struct FakeReflowEngine {
    log: Rc<RefCell<EngineLog>>,
    fail_open: bool,
}

impl FakeReflowEngine {
    pub fn new(log: Rc<RefCell<EngineLog>>) -> Self {
        Self {
            log,
            fail_open: false,
        }
    }

    pub fn failing(log: Rc<RefCell<EngineLog>>) -> Self {
        Self {
            log,
            fail_open: true,
        }
    }
}

impl ReflowEngine for FakeReflowEngine {
    fn open(&self, url: &str) -> Result<Box<dyn ReflowDocument>, EngineError> {
        self.log.borrow_mut().reflow_opened.push(url.to_string());
        if self.fail_open {
            return Err(EngineError::new("invalid container"));
        }
        Ok(Box::new(FakeReflowDocument {
            log: self.log.clone(),
        }))
    }
}

struct FakeReflowDocument {
    log: Rc<RefCell<EngineLog>>,
}

impl ReflowDocument for FakeReflowDocument {
    fn display(&mut self) -> Result<(), EngineError> {
        self.log.borrow_mut().display_calls += 1;
        Ok(())
    }

    fn next(&mut self) {
        self.log.borrow_mut().next_calls += 1;
    }

    fn prev(&mut self) {
        self.log.borrow_mut().prev_calls += 1;
    }
}

/// Chrome fake recording everything the core drives.
#[derive(Debug, Default)]
pub struct FakeChrome {
    pub shown_panels: Vec<Panel>,
    pub errors: Vec<String>,
    pub title: Option<String>,
    pub download_url: Option<String>,
}

impl ReaderChrome for FakeChrome {
    fn show_panel(&mut self, panel: Panel) {
        self.shown_panels.push(panel);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_download_url(&mut self, url: &str) {
        self.download_url = Some(url.to_string());
    }
}

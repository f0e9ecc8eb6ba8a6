//! Animated wave band under the home layout

use folio_desktop::{FolioResult, WaveOptions};
use web_sys::{Document, Element};

use crate::dom::{self, JsResultExt};

pub(crate) struct WaveView {
    pub(crate) svg: Element,
    path: Element,
    started_at: f64,
}

impl WaveView {
    pub(crate) fn mount(doc: &Document, now: f64) -> FolioResult<Self> {
        let svg = dom::svg(doc, "svg")?;
        svg.set_attribute("class", "wave").dom("class")?;
        svg.set_attribute("preserveAspectRatio", "none").dom("preserveAspectRatio")?;
        let path = dom::svg(doc, "path")?;
        path.set_attribute("class", "wave-path").dom("class")?;
        dom::append(&svg, &path)?;
        Ok(Self {
            svg,
            path,
            started_at: now,
        })
    }

    /// Redraw for the current time; skipped while the band has no size
    pub(crate) fn update(&self, options: &WaveOptions, now: f64) -> FolioResult<()> {
        let width = self.svg.client_width() as f32;
        let height = self.svg.client_height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }
        let elapsed = ((now - self.started_at) / 1000.0) as f32;
        let wave = options.path(width, height, elapsed);
        self.svg
            .set_attribute("viewBox", &format!("0 0 {} {}", width, height))
            .dom("viewBox")?;
        self.path.set_attribute("d", &wave.d).dom("d")
    }
}

//! DOM construction helpers
//!
//! Thin wrappers over `web-sys` that map `JsValue` failures into
//! [`FolioError::Dom`] so view code can use `?` throughout.

use folio_desktop::content::ExternalLink;
use folio_desktop::{FolioError, FolioResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement};

/// SVG namespace for `createElementNS`
pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Map `Result<T, JsValue>` into the crate error
pub(crate) trait JsResultExt<T> {
    fn dom(self, what: &str) -> FolioResult<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn dom(self, what: &str) -> FolioResult<T> {
        self.map_err(|err| FolioError::Dom(format!("{}: {:?}", what, err)))
    }
}

/// Convert a crate error for return to JavaScript
pub(crate) fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn document() -> FolioResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FolioError::Dom("no document".to_string()))
}

/// Current viewport size in CSS pixels
pub(crate) fn viewport_size() -> FolioResult<folio_desktop::Size> {
    let window = web_sys::window().ok_or_else(|| FolioError::Dom("no window".to_string()))?;
    let width = window.inner_width().dom("innerWidth")?.as_f64().unwrap_or(0.0);
    let height = window.inner_height().dom("innerHeight")?.as_f64().unwrap_or(0.0);
    Ok(folio_desktop::Size::new(width as f32, height as f32))
}

/// Create an HTML element with a class list
pub(crate) fn element(doc: &Document, tag: &str, class: &str) -> FolioResult<HtmlElement> {
    let el = doc
        .create_element(tag)
        .dom(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| FolioError::Dom(format!("<{}> is not an HTML element", tag)))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Create an element holding only text
pub(crate) fn text(doc: &Document, tag: &str, class: &str, text: &str) -> FolioResult<HtmlElement> {
    let el = element(doc, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Create an SVG element
pub(crate) fn svg(doc: &Document, tag: &str) -> FolioResult<Element> {
    doc.create_element_ns(Some(SVG_NS), tag).dom(tag)
}

pub(crate) fn image(doc: &Document, src: &str, alt: &str, size: Option<f32>) -> FolioResult<HtmlImageElement> {
    let img = doc
        .create_element("img")
        .dom("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| FolioError::Dom("<img> is not an image".to_string()))?;
    img.set_src(src);
    img.set_alt(alt);
    if let Some(size) = size {
        img.set_width(size as u32);
        img.set_height(size as u32);
    }
    Ok(img)
}

/// Anchor for an external link, opening a new context when asked to
pub(crate) fn anchor(doc: &Document, link: &ExternalLink, class: &str) -> FolioResult<HtmlAnchorElement> {
    let a = doc
        .create_element("a")
        .dom("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| FolioError::Dom("<a> is not an anchor".to_string()))?;
    a.set_href(link.href);
    if !class.is_empty() {
        a.set_class_name(class);
    }
    if link.new_context {
        a.set_target("_blank");
        a.set_rel("noopener noreferrer");
    }
    Ok(a)
}

pub(crate) fn append(parent: &Element, child: &Element) -> FolioResult<()> {
    parent.append_child(child).dom("appendChild").map(|_| ())
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) -> FolioResult<()> {
    el.style().set_property(property, value).dom(property)
}

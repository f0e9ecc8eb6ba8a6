//! Folio Web
//!
//! Browser front end for the portfolio page. Builds the DOM with `web-sys`,
//! wires events through `gloo`, and drives every state change through
//! [`folio_desktop::Shell`].
//!
//! ## JavaScript surface
//!
//! ```text
//! import init, { start, start_with_config, debug_state } from "./pkg/folio_web.js";
//! await init();
//! start();                                   // default configuration
//! start_with_config('{"sound_volume":0.2}'); // or a JSON configuration
//! console.log(debug_state());                // shell snapshot as JSON
//! ```

mod app;
mod audio;
mod clock;
mod content;
mod dom;
mod home;
mod navbar;
mod wave;
mod window;

use std::cell::RefCell;
use std::rc::Rc;

use folio_desktop::{FolioConfig, FolioError, FolioResult};
use wasm_bindgen::prelude::*;

use app::App;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Log to the browser console
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Milliseconds since the epoch; the single clock for all transitions
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Mount the page with default configuration
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    mount(FolioConfig::default()).map_err(dom::to_js)
}

/// Mount the page with a JSON configuration; missing fields take defaults
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = FolioConfig::from_json(json).map_err(dom::to_js)?;
    mount(config).map_err(dom::to_js)
}

/// Current shell state as JSON
#[wasm_bindgen]
pub fn debug_state() -> Result<String, JsValue> {
    APP.with(|slot| match slot.borrow().as_ref() {
        Some(app) => app.debug_state(),
        None => Err(FolioError::Dom("page not mounted".to_string())),
    })
    .map_err(dom::to_js)
}

fn mount(config: FolioConfig) -> FolioResult<()> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if APP.with(|slot| slot.borrow().is_some()) {
        log("[shell] already mounted");
        return Ok(());
    }

    log("[shell] mounting portfolio...");
    let app = App::new(config)?;
    app.mount()?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

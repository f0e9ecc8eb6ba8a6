//! Home layout: greeting, section buttons, contact links and the mute
//! control

use std::rc::Weak;

use folio_desktop::content::{sound_label, HOME};
use folio_desktop::{FolioConfig, FolioError, FolioResult, WindowKind, FRAME_STYLE};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::app::App;
use crate::dom::{self, JsResultExt};

pub(crate) struct HomeView {
    pub(crate) root: HtmlElement,
    mute: HtmlInputElement,
    mute_label: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl HomeView {
    pub(crate) fn mount(doc: &Document, app: Weak<App>, config: &FolioConfig) -> FolioResult<Self> {
        let root = dom::element(doc, "section", "home")?;
        root.set_id("about");
        let mut listeners = Vec::new();

        dom::append(&root, &*dom::text(doc, "h1", "home-header", HOME.header)?)?;

        let intro = dom::element(doc, "div", "intro")?;
        let greeting = dom::text(doc, "p", "greeting", HOME.greeting)?;
        dom::append(&greeting, &*dom::text(doc, "span", "highlight", HOME.highlight)?)?;
        dom::append(&intro, &greeting)?;
        dom::append(&intro, &*dom::text(doc, "p", "tagline", HOME.tagline)?)?;
        dom::append(&root, &intro)?;

        let buttons = dom::element(doc, "div", "section-buttons")?;
        buttons.set_id("experience");
        for &kind in WindowKind::all() {
            let cfg = kind.config();
            let button = dom::element(doc, "button", "section-button")?;
            let icon = dom::image(
                doc,
                &config.asset_path(cfg.button_icon),
                cfg.button_label,
                Some(FRAME_STYLE.home_icon_size),
            )?;
            dom::append(&button, &icon)?;
            dom::append(&button, &*dom::text(doc, "span", "", cfg.button_label)?)?;
            dom::append(&buttons, &button)?;

            let app = app.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                if let Some(app) = app.upgrade() {
                    app.open(kind);
                }
            }));
        }

        // Resume sits in the button row but is a plain link
        let resume = dom::anchor(doc, &HOME.resume, "section-button resume-button")?;
        if let Some(icon) = HOME.resume.icon {
            let img = dom::image(
                doc,
                &config.asset_path(icon),
                HOME.resume.label,
                Some(FRAME_STYLE.home_icon_size),
            )?;
            dom::append(&resume, &img)?;
        }
        dom::append(&resume, &*dom::text(doc, "span", "", HOME.resume.label)?)?;
        dom::append(&buttons, &resume)?;
        dom::append(&root, &buttons)?;

        let contacts = dom::element(doc, "div", "contacts")?;
        contacts.set_id("contact");
        for link in HOME.contacts.iter() {
            let a = dom::anchor(doc, link, "contact-link")?;
            a.set_attribute("aria-label", link.label).dom("aria-label")?;
            if let Some(icon) = link.icon {
                let img = dom::image(
                    doc,
                    &config.asset_path(icon),
                    link.label,
                    Some(FRAME_STYLE.contact_icon_size),
                )?;
                dom::append(&a, &img)?;
            }
            dom::append(&contacts, &a)?;
        }
        dom::append(&root, &contacts)?;

        let label = dom::element(doc, "label", "mute-toggle")?;
        let mute = doc
            .create_element("input")
            .dom("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| FolioError::Dom("<input> is not an input".to_string()))?;
        mute.set_type("checkbox");
        mute.set_checked(true);
        let mute_label = dom::text(doc, "span", "mute-label", sound_label(false))?;
        dom::append(&label, &mute)?;
        dom::append(&label, &mute_label)?;
        dom::append(&root, &label)?;

        listeners.push(EventListener::new(&mute, "change", move |_| {
            if let Some(app) = app.upgrade() {
                app.toggle_mute();
            }
        }));

        Ok(Self {
            root,
            mute,
            mute_label,
            _listeners: listeners,
        })
    }

    /// Keep the checkbox and its label in step with the shell's mute flag
    ///
    /// The box reads as "sound on", so it is checked while unmuted.
    pub(crate) fn set_muted(&self, muted: bool) {
        self.mute.set_checked(!muted);
        self.mute_label.set_text_content(Some(sound_label(muted)));
    }
}

//! Navigation bar view

use std::rc::Weak;

use folio_desktop::navbar::{MENU_ICON, NAV_LINKS, NAV_TITLE};
use folio_desktop::{FolioConfig, FolioResult};
use gloo::events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::app::App;
use crate::dom::{self, JsResultExt};

pub(crate) struct NavbarView {
    pub(crate) root: HtmlElement,
    menu: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl NavbarView {
    pub(crate) fn mount(doc: &Document, app: Weak<App>, config: &FolioConfig) -> FolioResult<Self> {
        let root = dom::element(doc, "nav", "navbar")?;
        let title = dom::text(doc, "a", "nav-title", NAV_TITLE.label)?;
        title.set_attribute("href", NAV_TITLE.href).dom("href")?;
        dom::append(&root, &title)?;

        let toggle = dom::element(doc, "button", "menu-icon")?;
        toggle.set_attribute("aria-label", "Menu").dom("aria-label")?;
        let icon = dom::image(doc, &config.asset_path(MENU_ICON), "Menu", None)?;
        dom::append(&toggle, &icon)?;
        dom::append(&root, &toggle)?;

        let menu = dom::element(doc, "ul", "nav-menu")?;
        let mut listeners = Vec::new();
        for link in NAV_LINKS.iter() {
            let item = dom::element(doc, "li", "")?;
            let a = dom::text(doc, "a", "nav-link", link.label)?;
            a.set_attribute("href", link.href).dom("href")?;
            dom::append(&item, &a)?;
            dom::append(&menu, &item)?;

            let app = app.clone();
            listeners.push(EventListener::new(&a, "click", move |_| {
                if let Some(app) = app.upgrade() {
                    app.select_nav_link();
                }
            }));
        }
        dom::append(&root, &menu)?;

        listeners.push(EventListener::new(&toggle, "click", move |_| {
            if let Some(app) = app.upgrade() {
                app.toggle_menu();
            }
        }));

        Ok(Self {
            root,
            menu,
            _listeners: listeners,
        })
    }

    pub(crate) fn set_menu_open(&self, open: bool) -> FolioResult<()> {
        self.menu
            .class_list()
            .toggle_with_force("open", open)
            .dom("classList")
            .map(|_| ())
    }
}

//! Window body rendering

use std::rc::Weak;

use folio_desktop::content::{ProfileContent, ToolsContent, WindowContent, WorkContent, WorkEntry};
use folio_desktop::{FolioConfig, FolioResult, WindowKind, FRAME_STYLE};
use gloo::events::EventListener;
use web_sys::{Document, Element, HtmlElement};

use crate::app::App;
use crate::dom::{self, JsResultExt};

/// Rendered window body and the listeners it owns
pub(crate) struct ContentView {
    pub(crate) root: HtmlElement,
    pub(crate) listeners: Vec<EventListener>,
}

pub(crate) fn render(
    doc: &Document,
    kind: WindowKind,
    config: &FolioConfig,
    app: &Weak<App>,
) -> FolioResult<ContentView> {
    let root = dom::element(doc, "div", "window-body")?;
    let listeners = match WindowContent::for_kind(kind) {
        WindowContent::AboutMe(profile) => {
            render_profile(doc, &root, profile, config)?;
            Vec::new()
        }
        WindowContent::Work(work) => {
            render_work(doc, &root, work, config)?;
            Vec::new()
        }
        WindowContent::Tools(tools) => render_tools(doc, &root, tools, kind, app)?,
    };
    Ok(ContentView { root, listeners })
}

fn list(doc: &Document, parent: &Element, items: &[&str]) -> FolioResult<()> {
    let ul = dom::element(doc, "ul", "")?;
    for item in items {
        dom::append(&ul, &*dom::text(doc, "li", "", item)?)?;
    }
    dom::append(parent, &ul)
}

fn render_profile(
    doc: &Document,
    root: &Element,
    profile: &ProfileContent,
    config: &FolioConfig,
) -> FolioResult<()> {
    let header = dom::element(doc, "div", "profile-header")?;
    let photo = dom::image(doc, &config.asset_path(profile.photo), profile.name, None)?;
    photo.set_class_name("profile-photo");
    dom::append(&header, &photo)?;

    let names = dom::element(doc, "div", "profile-names")?;
    dom::append(&names, &*dom::text(doc, "h2", "", profile.name)?)?;
    dom::append(&names, &*dom::text(doc, "p", "role", profile.role)?)?;
    let upcoming = dom::text(doc, "p", "upcoming", profile.upcoming_prefix)?;
    let company = dom::anchor(doc, &profile.upcoming, "")?;
    company.set_text_content(Some(profile.upcoming.label));
    dom::append(&upcoming, &company)?;
    dom::append(&names, &upcoming)?;
    dom::append(&header, &names)?;
    dom::append(root, &header)?;

    dom::append(root, &*dom::text(doc, "p", "intro", profile.intro)?)?;
    list(doc, root, profile.skills)?;

    let contact = dom::text(doc, "p", "", profile.contact_prefix)?;
    let email = dom::anchor(doc, &profile.email, "")?;
    email.set_text_content(Some(profile.email.label));
    dom::append(&contact, &email)?;
    dom::append(root, &contact)?;

    dom::append(root, &*dom::text(doc, "h3", "", "Education")?)?;
    let edu = &profile.education;
    dom::append(root, &*dom::text(doc, "p", "school", edu.school)?)?;
    dom::append(root, &*dom::text(doc, "p", "degree", edu.degree)?)?;
    dom::append(root, &*dom::text(doc, "p", "date", edu.date)?)?;

    dom::append(root, &*dom::text(doc, "h3", "", "Interests")?)?;
    list(doc, root, profile.interests)
}

fn render_entry(
    doc: &Document,
    parent: &Element,
    entry: &WorkEntry,
    config: &FolioConfig,
) -> FolioResult<()> {
    let row = dom::element(doc, "div", "work-entry")?;
    let link = dom::anchor(doc, &entry.link, "work-icon")?;
    if let Some(icon) = entry.link.icon {
        let img = dom::image(
            doc,
            &config.asset_path(icon),
            entry.link.label,
            Some(FRAME_STYLE.career_icon_size),
        )?;
        dom::append(&link, &img)?;
    }
    dom::append(&row, &link)?;

    let text = dom::element(doc, "div", "work-text")?;
    dom::append(&text, &*dom::text(doc, "h4", "", entry.title)?)?;
    dom::append(&text, &*dom::text(doc, "p", "", entry.description)?)?;
    dom::append(&row, &text)?;
    dom::append(parent, &row)
}

fn render_work(
    doc: &Document,
    root: &Element,
    work: &WorkContent,
    config: &FolioConfig,
) -> FolioResult<()> {
    dom::append(root, &*dom::text(doc, "h3", "", "Career")?)?;
    for entry in work.career {
        render_entry(doc, root, entry, config)?;
    }
    dom::append(root, &*dom::text(doc, "h3", "", "Projects")?)?;
    for entry in work.projects {
        render_entry(doc, root, entry, config)?;
    }
    dom::append(root, &*dom::text(doc, "p", "end-note", work.end_note)?)
}

/// Skill chips; each one plays the hover sound on pointer entry
fn render_tools(
    doc: &Document,
    root: &Element,
    tools: &ToolsContent,
    kind: WindowKind,
    app: &Weak<App>,
) -> FolioResult<Vec<EventListener>> {
    let mut listeners = Vec::new();
    for group in tools.groups {
        dom::append(root, &*dom::text(doc, "h3", "chip-heading", group.heading)?)?;
        let chips = dom::element(doc, "div", "chips")?;
        for label in group.chips {
            let chip = dom::text(doc, "button", "chip", label)?;
            chip.set_attribute("type", "button").dom("type")?;
            let app = app.clone();
            listeners.push(EventListener::new(&chip, "mouseenter", move |_| {
                if let Some(app) = app.upgrade() {
                    app.hover(kind);
                }
            }));
            dom::append(&chips, &chip)?;
        }
        dom::append(root, &chips)?;
    }
    Ok(listeners)
}

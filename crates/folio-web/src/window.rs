//! Floating window view
//!
//! One DOM box per open window. The view owns every listener it needs:
//! the drag-bar pointer-down, the close button, chip hovers, a window
//! resize listener, and (only while a drag is active) document-level
//! pointer move/up/cancel listeners. Dropping the view deregisters all of them.

use std::rc::Weak;

use folio_desktop::content::CLOSE_ICON;
use folio_desktop::{FloatingWindow, FolioConfig, FolioResult, Size, Vec2, WindowKind, FRAME_STYLE};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, PointerEvent};

use crate::app::App;
use crate::content;
use crate::dom::{self, set_style, JsResultExt};

/// Document-level listeners alive for the duration of one drag
pub(crate) struct DragListeners {
    _move: EventListener,
    _up: EventListener,
    _cancel: EventListener,
}

pub(crate) struct WindowView {
    kind: WindowKind,
    pub(crate) element: HtmlElement,
    drag: Option<DragListeners>,
    _listeners: Vec<EventListener>,
}

/// Pointer position in viewport coordinates
pub(crate) fn pointer(event: &Event) -> Option<Vec2> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| Vec2::new(e.client_x() as f32, e.client_y() as f32))
}

impl WindowView {
    pub(crate) fn mount(
        doc: &Document,
        kind: WindowKind,
        config: &FolioConfig,
        app: Weak<App>,
    ) -> FolioResult<Self> {
        let window_config = kind.config();
        let element = dom::element(doc, "div", &format!("floating-window {}", window_config.box_class))?;
        element.set_attribute("data-window", kind.id()).dom("data-window")?;
        set_style(&element, "position", "fixed")?;

        let bar = dom::element(doc, "div", "drag-bar")?;
        set_style(&bar, "height", &format!("{}px", FRAME_STYLE.drag_bar_height))?;
        dom::append(&bar, &*dom::text(doc, "span", "window-title", window_config.title)?)?;

        let close = dom::element(doc, "button", "close-button")?;
        close.set_attribute("aria-label", "Close").dom("aria-label")?;
        let icon = dom::image(
            doc,
            &config.asset_path(CLOSE_ICON),
            "Close",
            Some(FRAME_STYLE.close_icon_size),
        )?;
        dom::append(&close, &icon)?;
        dom::append(&bar, &close)?;
        dom::append(&element, &bar)?;

        let body = content::render(doc, kind, config, &app)?;
        dom::append(&element, &body.root)?;

        let mut listeners = body.listeners;
        {
            let app = app.clone();
            let handle = bar.clone();
            listeners.push(EventListener::new(&bar, "pointerdown", move |event| {
                let Some(app) = app.upgrade() else { return };
                let Some(pointer) = pointer(event) else { return };
                // Keeps move/up flowing when the pointer leaves the page.
                // Synthetic or already released pointers cannot be captured.
                if let Some(event) = event.dyn_ref::<PointerEvent>() {
                    let _ = handle.set_pointer_capture(event.pointer_id());
                }
                app.begin_drag(kind, pointer);
            }));
        }
        {
            // Pointer-down on the close button must not start a drag
            listeners.push(EventListener::new(&close, "pointerdown", |event| {
                event.stop_propagation();
            }));
            let app = app.clone();
            listeners.push(EventListener::new(&close, "click", move |_| {
                if let Some(app) = app.upgrade() {
                    app.close(kind);
                }
            }));
        }
        if let Some(window) = web_sys::window() {
            let element = element.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                let Some(app) = app.upgrade() else { return };
                if let Err(err) = sync_layout(&element, app.layout().is_mobile()) {
                    crate::log(&format!("[window] {}", err));
                }
            }));
        }

        Ok(Self {
            kind,
            element,
            drag: None,
            _listeners: listeners,
        })
    }

    pub(crate) fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Rendered size, read fresh for every pointer move
    pub(crate) fn box_size(&self) -> Size {
        let rect = self.element.get_bounding_client_rect();
        Size::new(rect.width() as f32, rect.height() as f32)
    }

    pub(crate) fn set_drag_listeners(&mut self, listeners: DragListeners) {
        self.drag = Some(listeners);
    }

    pub(crate) fn take_drag_listeners(&mut self) -> Option<DragListeners> {
        self.drag.take()
    }

    pub(crate) fn place(&self, position: Vec2) -> FolioResult<()> {
        set_style(&self.element, "left", &format!("{}px", position.x))?;
        set_style(&self.element, "top", &format!("{}px", position.y))
    }

    /// Sync position, stacking and the current animation frame
    pub(crate) fn apply(&self, window: &FloatingWindow, now: f64) -> FolioResult<()> {
        let frame = window.frame(now);
        self.place(window.position())?;
        set_style(&self.element, "z-index", &window.z_index().to_string())?;
        set_style(&self.element, "opacity", &format!("{:.3}", frame.opacity))?;
        set_style(
            &self.element,
            "transform",
            &format!("translateY({:.2}px) scale({:.4})", frame.offset_y, frame.scale),
        )?;
        self.element
            .set_attribute("data-animation", window.animation().variant.class_name())
            .dom("data-animation")?;
        self.element
            .class_list()
            .toggle_with_force("dragging", window.is_dragging())
            .dom("classList")
            .map(|_| ())
    }

    pub(crate) fn sync_layout(&self, mobile: bool) -> FolioResult<()> {
        sync_layout(&self.element, mobile)
    }

    pub(crate) fn unmount(&self) {
        self.element.remove();
    }
}

fn sync_layout(element: &HtmlElement, mobile: bool) -> FolioResult<()> {
    element
        .class_list()
        .toggle_with_force("mobile", mobile)
        .dom("classList")
        .map(|_| ())
}

impl DragListeners {
    /// Track the pointer anywhere on the page until it is released
    ///
    /// A cancelled pointer, or a move with no button held (the release
    /// happened where we could not see it), ends the drag like a pointer-up.
    pub(crate) fn install(doc: &Document, kind: WindowKind, app: Weak<App>) -> Self {
        let move_app = app.clone();
        let on_move = EventListener::new(doc, "pointermove", move |event| {
            let Some(app) = move_app.upgrade() else { return };
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
            if mouse.buttons() == 0 {
                app.end_drag(kind);
                return;
            }
            if let Some(pointer) = pointer(event) {
                app.drag_move(kind, pointer);
            }
        });
        let up_app = app.clone();
        let on_up = EventListener::new(doc, "pointerup", move |_| {
            if let Some(app) = up_app.upgrade() {
                app.end_drag(kind);
            }
        });
        let on_cancel = EventListener::new(doc, "pointercancel", move |_| {
            if let Some(app) = app.upgrade() {
                app.end_drag(kind);
            }
        });
        Self {
            _move: on_move,
            _up: on_up,
            _cancel: on_cancel,
        }
    }
}

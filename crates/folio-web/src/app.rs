//! Mounted page
//!
//! `App` owns the [`Shell`] and every view. Browser callbacks hold a
//! `Weak<App>` and forward into the methods below, which update the shell
//! first and then sync the DOM. One animation-frame loop advances window
//! transitions, unmounts finished windows and redraws the wave.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_desktop::{FolioConfig, FolioError, FolioResult, LayoutMode, Navbar, Shell, Vec2, WindowKind};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, HtmlElement};

use crate::audio::HtmlAudioSink;
use crate::clock::ClockView;
use crate::dom::{self, set_style};
use crate::home::HomeView;
use crate::navbar::NavbarView;
use crate::wave::WaveView;
use crate::window::{DragListeners, WindowView};
use crate::{log, now_ms};

pub(crate) struct App {
    document: Document,
    body: HtmlElement,
    shell: RefCell<Shell<HtmlAudioSink>>,
    navbar: RefCell<Navbar>,
    layer: HtmlElement,
    windows: RefCell<[Option<WindowView>; WindowKind::COUNT]>,
    nav_view: RefCell<Option<NavbarView>>,
    home: RefCell<Option<HomeView>>,
    clock: RefCell<Option<ClockView>>,
    wave: RefCell<Option<WaveView>>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    pub(crate) fn new(config: FolioConfig) -> FolioResult<Rc<Self>> {
        config.validate()?;
        let document = dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| FolioError::Dom("document has no <body>".to_string()))?;
        let layer = dom::element(&document, "div", "window-layer")?;
        let audio = HtmlAudioSink::new(&config);
        let shell = Shell::new(config, dom::viewport_size()?, audio);

        Ok(Rc::new(Self {
            document,
            body,
            shell: RefCell::new(shell),
            navbar: RefCell::new(Navbar::default()),
            layer,
            windows: RefCell::new(Default::default()),
            nav_view: RefCell::new(None),
            home: RefCell::new(None),
            clock: RefCell::new(None),
            wave: RefCell::new(None),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Build the page under `<body>` and start the frame loop
    pub(crate) fn mount(self: &Rc<Self>) -> FolioResult<()> {
        let config = self.shell.borrow().config().clone();
        let weak = Rc::downgrade(self);
        let doc = &self.document;

        let nav = NavbarView::mount(doc, weak.clone(), &config)?;
        dom::append(&self.body, &nav.root)?;

        let home = HomeView::mount(doc, weak.clone(), &config)?;
        let clock = ClockView::mount(doc, config.clock_tick_ms, config.hand_transition_ms)?;
        dom::append(&home.root, &clock.root)?;
        let wave = WaveView::mount(doc, now_ms())?;
        dom::append(&home.root, &wave.svg)?;
        dom::append(&self.body, &home.root)?;
        dom::append(&self.body, &self.layer)?;

        *self.nav_view.borrow_mut() = Some(nav);
        *self.home.borrow_mut() = Some(home);
        *self.clock.borrow_mut() = Some(clock);
        *self.wave.borrow_mut() = Some(wave);

        // Registered before any window's own resize listener, so windows
        // always read the updated layout
        if let Some(window) = web_sys::window() {
            let app = weak.clone();
            self.listeners
                .borrow_mut()
                .push(EventListener::new(&window, "resize", move |_| {
                    if let Some(app) = app.upgrade() {
                        app.resize();
                    }
                }));
        }

        self.schedule_frame();
        log(&format!(
            "[shell] mounted ({:?} layout)",
            self.shell.borrow().viewport().layout_mode()
        ));
        Ok(())
    }

    pub(crate) fn debug_state(&self) -> FolioResult<String> {
        self.shell.borrow().snapshot().to_json()
    }

    pub(crate) fn layout(&self) -> LayoutMode {
        self.shell.borrow().viewport().layout_mode()
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    pub(crate) fn open(self: &Rc<Self>, kind: WindowKind) {
        let now = now_ms();
        let z = self.shell.borrow_mut().open_section(kind, now);

        let mut windows = self.windows.borrow_mut();
        let slot = &mut windows[kind.index()];
        if slot.is_none() {
            let config = self.shell.borrow().config().clone();
            match WindowView::mount(&self.document, kind, &config, Rc::downgrade(self)) {
                Ok(view) => {
                    if let Err(err) = dom::append(&self.layer, &view.element) {
                        log(&format!("[window] {}", err));
                        return;
                    }
                    *slot = Some(view);
                }
                Err(err) => {
                    log(&format!("[window] could not mount {}: {}", kind.id(), err));
                    return;
                }
            }
        }

        if let Some(view) = slot.as_ref() {
            let shell = self.shell.borrow();
            let synced = view
                .sync_layout(shell.viewport().layout_mode().is_mobile())
                .and_then(|_| match shell.window(kind) {
                    Some(window) => view.apply(window, now),
                    None => Ok(()),
                });
            if let Err(err) = synced {
                log(&format!("[window] {}", err));
            }
        }
        log(&format!("[shell] opened {} at z {}", kind.id(), z));
    }

    pub(crate) fn close(&self, kind: WindowKind) {
        if !self.shell.borrow_mut().request_close(kind, now_ms()) {
            return;
        }
        // Closing ends any drag; these listeners are not the caller's
        if let Some(view) = self.windows.borrow_mut()[kind.index()].as_mut() {
            drop(view.take_drag_listeners());
        }
        self.sync_selection();
        log(&format!("[shell] closing {}", kind.id()));
    }

    fn unmount(&self, kind: WindowKind) {
        if let Some(view) = self.windows.borrow_mut()[kind.index()].take() {
            view.unmount();
            log(&format!("[window] unmounted {}", view.kind().id()));
        }
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    pub(crate) fn begin_drag(self: &Rc<Self>, kind: WindowKind, pointer: Vec2) {
        if !self.shell.borrow_mut().begin_drag(kind, pointer) {
            return;
        }
        if let Some(view) = self.windows.borrow_mut()[kind.index()].as_mut() {
            let listeners = DragListeners::install(&self.document, kind, Rc::downgrade(self));
            view.set_drag_listeners(listeners);
        }
        self.sync_selection();
        self.sync_window(kind);
    }

    pub(crate) fn drag_move(&self, kind: WindowKind, pointer: Vec2) {
        let windows = self.windows.borrow();
        let Some(view) = windows[kind.index()].as_ref() else {
            return;
        };
        let moved = self
            .shell
            .borrow_mut()
            .drag_move(kind, pointer, view.box_size());
        if let Some(position) = moved {
            if let Err(err) = view.place(position) {
                log(&format!("[window] {}", err));
            }
        }
    }

    /// Called from the drag's own pointer listeners, so they are released
    /// after the current event finishes dispatching
    pub(crate) fn end_drag(&self, kind: WindowKind) {
        self.shell.borrow_mut().end_drag(kind);
        let released = self.windows.borrow_mut()[kind.index()]
            .as_mut()
            .and_then(|view| view.take_drag_listeners());
        if let Some(listeners) = released {
            wasm_bindgen_futures::spawn_local(async move {
                drop(listeners);
            });
        }
        self.sync_selection();
    }

    /// Suppress text selection on the page while any window is dragged
    fn sync_selection(&self) {
        let value = if self.shell.borrow().is_selection_suppressed() {
            "none"
        } else {
            ""
        };
        if let Err(err) = set_style(&self.body, "user-select", value) {
            log(&format!("[shell] {}", err));
        }
    }

    // =========================================================================
    // Page controls
    // =========================================================================

    pub(crate) fn resize(&self) {
        let size = match dom::viewport_size() {
            Ok(size) => size,
            Err(err) => {
                log(&format!("[shell] {}", err));
                return;
            }
        };
        let before = self.layout();
        let after = self.shell.borrow_mut().resize(size);
        if before != after {
            log(&format!("[shell] layout {:?} -> {:?}", before, after));
        }
    }

    pub(crate) fn toggle_mute(&self) {
        let muted = self.shell.borrow_mut().toggle_mute();
        if let Some(home) = self.home.borrow().as_ref() {
            home.set_muted(muted);
        }
        log(&format!("[shell] muted: {}", muted));
    }

    pub(crate) fn hover(&self, kind: WindowKind) {
        self.shell.borrow_mut().hover(kind);
    }

    pub(crate) fn toggle_menu(&self) {
        let open = self.navbar.borrow_mut().toggle_menu();
        self.sync_menu(open);
    }

    pub(crate) fn select_nav_link(&self) {
        self.navbar.borrow_mut().select_link();
        self.sync_menu(false);
    }

    fn sync_menu(&self, open: bool) {
        if let Some(nav) = self.nav_view.borrow().as_ref() {
            if let Err(err) = nav.set_menu_open(open) {
                log(&format!("[shell] {}", err));
            }
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    fn schedule_frame(self: &Rc<Self>) {
        let app = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(app) = Weak::upgrade(&app) {
                app.frame.borrow_mut().take();
                app.on_frame();
                app.schedule_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(&self) {
        let now = now_ms();
        let finished = self.shell.borrow_mut().tick(now);
        for kind in finished {
            self.unmount(kind);
        }

        for &kind in WindowKind::all() {
            self.sync_window_at(kind, now);
        }

        let wave_options = self.shell.borrow().config().wave;
        if let Some(wave) = self.wave.borrow().as_ref() {
            if let Err(err) = wave.update(&wave_options, now) {
                log(&format!("[shell] {}", err));
            }
        }
    }

    fn sync_window(&self, kind: WindowKind) {
        self.sync_window_at(kind, now_ms());
    }

    fn sync_window_at(&self, kind: WindowKind, now: f64) {
        let windows = self.windows.borrow();
        let shell = self.shell.borrow();
        if let (Some(view), Some(window)) = (windows[kind.index()].as_ref(), shell.window(kind)) {
            if let Err(err) = view.apply(window, now) {
                log(&format!("[window] {}", err));
            }
        }
    }
}

//! Browser host: binds [`PageCore`] to the live document.
//!
//! ARCHITECTURE
//! ============
//! `mount` looks up every element once, loads the core, and registers one
//! listener per behavior. Each listener borrows the shared [`Page`], asks the
//! core what to do, and performs the returned [`Action`]s before returning.
//! Timers hold only a `Weak` handle to the page; dropping a stored
//! `Interval`/`Timeout` cancels it, which is how the cycle timer is replaced.
//!
//! Any element may be missing from the host page. Missing elements disable the
//! behavior that needs them and nothing else.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::consts::{
    ATTR_ARIA_EXPANDED, ATTR_PAGE_CONFIG, ATTR_THEME, CLASS_ACTIVE, CLASS_SCROLLED, CLASS_SHOW, CYCLE_PAUSE_HTML,
    CYCLE_START_HTML, ID_CYCLE_TOGGLE, SECTION_ROOT_MARGIN, SEL_HEADER, SEL_IN_PAGE_ANCHORS, SEL_MENU_TOGGLE,
    SEL_NAV_LINKS, SEL_NAV_MENU, SEL_SECTIONS, SEL_THEME_DROPDOWN, SEL_THEME_OPTIONS, SEL_THEME_SELECTOR,
    SEL_THEME_TOGGLE,
};
use crate::engine::{Action, AnchorTarget, PageCore};
use crate::error::PageError;
use crate::highlight::SectionEntry;
use crate::nav::aria_expanded;
use crate::scroll::fragment_id;
use crate::store::{LocalStore, PreferenceStore};

type SharedPage = Rc<RefCell<Page>>;
type WeakPage = Weak<RefCell<Page>>;

thread_local! {
    /// The mounted page. Listeners and timers only hold weak handles.
    static MOUNTED: RefCell<Option<SharedPage>> = const { RefCell::new(None) };
}

/// Elements the page behavior reads or writes, looked up once at mount.
struct Dom {
    window: Window,
    document: Document,
    root: Option<HtmlElement>,
    header: Option<HtmlElement>,
    menu_toggle: Option<Element>,
    nav_menu: Option<Element>,
    nav_links: Vec<Element>,
    theme_toggle: Option<Element>,
    theme_dropdown: Option<Element>,
    theme_options: Vec<Element>,
    cycle_toggle: Option<Element>,
}

impl Dom {
    fn query(window: Window, document: Document) -> Result<Self, PageError> {
        let root = document.document_element().and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let header = query(&document, SEL_HEADER)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        Ok(Self {
            root,
            header,
            menu_toggle: query(&document, SEL_MENU_TOGGLE)?,
            nav_menu: query(&document, SEL_NAV_MENU)?,
            nav_links: query_all(&document, SEL_NAV_LINKS)?,
            theme_toggle: query(&document, SEL_THEME_TOGGLE)?,
            theme_dropdown: query(&document, SEL_THEME_DROPDOWN)?,
            theme_options: query_all(&document, SEL_THEME_OPTIONS)?,
            cycle_toggle: document.get_element_by_id(ID_CYCLE_TOGGLE),
            window,
            document,
        })
    }

    fn config(&self) -> PageConfig {
        let raw = self.root.as_ref().and_then(|root| root.get_attribute(ATTR_PAGE_CONFIG));
        PageConfig::from_attr(raw.as_deref()).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            PageConfig::default()
        })
    }

    fn nav_hrefs(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect()
    }

    fn header_height(&self) -> f64 {
        self.header.as_ref().map_or(0.0, |header| f64::from(header.offset_height()))
    }

    fn anchor_target(&self, href: &str) -> Option<AnchorTarget> {
        let target = self.document.get_element_by_id(fragment_id(href)?)?;
        let target = target.dyn_ref::<HtmlElement>()?;
        Some(AnchorTarget { offset_top: f64::from(target.offset_top()), header_height: self.header_height() })
    }
}

#[derive(Default)]
struct Timers {
    cycle: Option<Interval>,
    transition: Option<Timeout>,
}

/// The mounted page: core state plus the DOM and timers it drives.
struct Page {
    core: PageCore,
    dom: Dom,
    store: LocalStore,
    timers: Timers,
}

impl Page {
    fn apply(&mut self, weak: &WeakPage, actions: Vec<Action>) {
        for action in actions {
            self.apply_one(weak, action);
        }
    }

    fn apply_one(&mut self, weak: &WeakPage, action: Action) {
        let dom = &self.dom;
        match action {
            Action::SetTheme(theme) => {
                if let Some(root) = &dom.root {
                    warn_on_err(root.set_attribute(ATTR_THEME, theme.id()), "set data-theme");
                }
                if let Some(toggle) = &dom.theme_toggle {
                    toggle.set_text_content(Some(theme.label()));
                }
            }
            Action::PersistTheme(theme) => {
                let key = self.core.config().storage_key.clone();
                self.store.save(&key, theme.id());
            }
            Action::BeginTransition { token, duration_ms } => {
                if let Some(root) = &dom.root {
                    let css = self.core.config().transition_css();
                    warn_on_err(root.style().set_property("transition", &css), "set transition");
                }
                let weak = weak.clone();
                self.timers.transition = Some(Timeout::new(duration_ms, move || {
                    dispatch(&weak, |page| page.core.transition_elapsed(token));
                }));
            }
            Action::EndTransition => {
                if let Some(root) = &dom.root {
                    warn_on_err(root.style().remove_property("transition"), "clear transition");
                }
            }
            Action::StartCycleTimer { token, interval_ms } => {
                let weak = weak.clone();
                self.timers.cycle = Some(Interval::new(interval_ms, move || {
                    dispatch(&weak, |page| page.core.cycle_tick(token));
                }));
            }
            Action::CancelCycleTimer => {
                self.timers.cycle = None;
            }
            Action::SetCycleControl { running } => {
                if let Some(control) = &dom.cycle_toggle {
                    set_class(control, CLASS_ACTIVE, running);
                    control.set_inner_html(if running { CYCLE_PAUSE_HTML } else { CYCLE_START_HTML });
                }
            }
            Action::SetMenuOpen(open) => {
                if let Some(menu) = &dom.nav_menu {
                    set_class(menu, CLASS_ACTIVE, open);
                }
                if let Some(toggle) = &dom.menu_toggle {
                    warn_on_err(toggle.set_attribute(ATTR_ARIA_EXPANDED, aria_expanded(open)), "set aria-expanded");
                }
            }
            Action::SetPickerOpen(open) => {
                if let Some(dropdown) = &dom.theme_dropdown {
                    set_class(dropdown, CLASS_SHOW, open);
                }
            }
            Action::SetHeaderScrolled(scrolled) => {
                if let Some(header) = &dom.header {
                    set_class(header, CLASS_SCROLLED, scrolled);
                }
            }
            Action::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                dom.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::SetActiveLink(active) => {
                for (i, link) in dom.nav_links.iter().enumerate() {
                    set_class(link, CLASS_ACTIVE, active == Some(i));
                }
            }
        }
    }
}

/// Look up the page elements, load the core, and register every listener.
pub fn mount() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    let dom = Dom::query(window, document)?;
    let selector_found = query(&dom.document, SEL_THEME_SELECTOR)?.is_some();
    log::info!(
        "theme elements found: selector={} toggle={} dropdown={} options={}",
        selector_found,
        dom.theme_toggle.is_some(),
        dom.theme_dropdown.is_some(),
        dom.theme_options.len(),
    );

    let config = dom.config();
    let store = LocalStore::new(&dom.window);
    let (core, actions) = PageCore::load(config, &store, dom.nav_hrefs());
    let page: SharedPage = Rc::new(RefCell::new(Page { core, dom, store, timers: Timers::default() }));
    let weak = Rc::downgrade(&page);
    page.borrow_mut().apply(&weak, actions);

    {
        let page = page.borrow();
        bind_navigation(&page.dom, &weak)?;
        bind_scroll(&page.dom, &weak)?;
        bind_theme_picker(&page.dom, &weak)?;
        bind_cycle_control(&page.dom, &weak)?;
        bind_anchors(&page.dom, &weak)?;
        observe_sections(&page.dom, &weak)?;
    }

    MOUNTED.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

// --- Listener wiring ---

fn bind_navigation(dom: &Dom, weak: &WeakPage) -> Result<(), PageError> {
    if let Some(toggle) = &dom.menu_toggle {
        let weak = weak.clone();
        listen(toggle, "click", move |_| dispatch(&weak, |page| page.core.menu_toggled()))?;
    }
    for link in &dom.nav_links {
        let weak = weak.clone();
        listen(link, "click", move |_| dispatch(&weak, |page| page.core.nav_link_activated()))?;
    }
    Ok(())
}

fn bind_scroll(dom: &Dom, weak: &WeakPage) -> Result<(), PageError> {
    let window = dom.window.clone();
    let weak = weak.clone();
    listen(&dom.window, "scroll", move |_| match window.scroll_y() {
        Ok(y) => dispatch(&weak, |page| page.core.scrolled(y)),
        Err(err) => log::warn!("failed to read scroll offset: {err:?}"),
    })
}

fn bind_theme_picker(dom: &Dom, weak: &WeakPage) -> Result<(), PageError> {
    if let (Some(toggle), Some(dropdown)) = (&dom.theme_toggle, &dom.theme_dropdown) {
        let toggle_weak = weak.clone();
        listen(toggle, "click", move |event| {
            event.stop_propagation();
            dispatch(&toggle_weak, |page| page.core.picker_toggled());
        })?;
        listen(dropdown, "click", |event| event.stop_propagation())?;
    }

    let doc_weak = weak.clone();
    listen(&dom.document, "click", move |_| dispatch(&doc_weak, |page| page.core.document_clicked()))?;

    for option in &dom.theme_options {
        let weak = weak.clone();
        let source = option.clone();
        listen(option, "click", move |_| match source.get_attribute(ATTR_THEME) {
            Some(raw) => dispatch(&weak, |page| page.core.theme_option_chosen(&raw)),
            None => log::warn!("theme option without {ATTR_THEME}"),
        })?;
    }
    Ok(())
}

fn bind_cycle_control(dom: &Dom, weak: &WeakPage) -> Result<(), PageError> {
    let Some(control) = &dom.cycle_toggle else {
        return Ok(());
    };
    let weak = weak.clone();
    listen(control, "click", move |_| dispatch(&weak, |page| page.core.cycle_toggled()))
}

fn bind_anchors(dom: &Dom, weak: &WeakPage) -> Result<(), PageError> {
    for anchor in query_all(&dom.document, SEL_IN_PAGE_ANCHORS)? {
        let weak = weak.clone();
        let source = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = source.get_attribute("href").unwrap_or_default();
            dispatch(&weak, |page| {
                let target = page.dom.anchor_target(&href);
                page.core.anchor_activated(target)
            });
        })?;
    }
    Ok(())
}

fn observe_sections(dom: &Dom, weak: &WeakPage) -> Result<(), PageError> {
    let sections = query_all(&dom.document, SEL_SECTIONS)?;
    if sections.is_empty() {
        return Ok(());
    }

    let weak = weak.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let entries: Vec<SectionEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
                .map(|entry| SectionEntry::new(entry.target().id(), entry.is_intersecting()))
                .collect();
            dispatch(&weak, |page| page.core.sections_observed(&entries));
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(SECTION_ROOT_MARGIN);
    options.set_threshold(&JsValue::from(0.0));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}

// --- Helpers ---

/// Run a core handler against the page and perform its actions.
fn dispatch(weak: &WeakPage, handler: impl FnOnce(&mut Page) -> Vec<Action>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut page) = shared.try_borrow_mut() else {
        log::warn!("page busy; dropping re-entrant event");
        return;
    };
    let actions = handler(&mut *page);
    page.apply(weak, actions);
}

/// Register a page-lifetime event listener.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    Ok(document.query_selector(selector)?)
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("failed to toggle .{class}: {err:?}");
    }
}

fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("failed to {what}: {err:?}");
    }
}

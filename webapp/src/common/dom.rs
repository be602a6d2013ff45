// browser capabilities dioxus does not expose directly
//
// everything here goes through web-sys and returns anyhow errors so that components
// can log and carry on; a missing capability only disables the feature that needed it
use anyhow::Context;
use js_sys::{Array, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use site::{config::RevealConfig, scroll};

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn window() -> anyhow::Result<Window> {
    web_sys::window().context("no global window exists")
}

fn document() -> anyhow::Result<Document> {
    window()?.document().context("window has no document")
}

pub fn set_body_overflow(value: &str) -> anyhow::Result<()> {
    let body = document()?.body().context("document has no body")?;

    body.style().set_property("overflow", value).map_err(js_err)
}

// smooth-scroll so that #target_id lands just below the fixed header
//
// returns false when there is no such element, which is not an error
pub fn scroll_below_header(target_id: &str, header_selector: &str) -> anyhow::Result<bool> {
    let document = document()?;

    let Some(target) = document.get_element_by_id(target_id) else {
        debug!("no element #{target_id} to scroll to");
        return Ok(false);
    };

    let target: HtmlElement = target
        .dyn_into()
        .map_err(|_| anyhow::Error::msg(format!("#{target_id} is not an html element")))?;

    let header_height = document
        .query_selector(header_selector)
        .map_err(js_err)?
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(scroll::scroll_top(
        f64::from(target.offset_top()),
        f64::from(header_height),
    ));
    options.set_behavior(ScrollBehavior::Smooth);

    window()?.scroll_to_with_scroll_to_options(&options);

    Ok(true)
}

pub fn scroll_into_view(id: &str) -> anyhow::Result<()> {
    let element = document()?
        .get_element_by_id(id)
        .with_context(|| format!("no element #{id}"))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);

    element.scroll_into_view_with_scroll_into_view_options(&options);

    Ok(())
}

// a document-level event listener, removed again on drop
pub struct DocumentListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Ok(document) = document() {
            let _ = document.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

fn listen(
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> anyhow::Result<DocumentListener> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);

    document()?
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_err)?;

    Ok(DocumentListener { event, callback })
}

pub fn on_keydown(mut handler: impl FnMut(&str) + 'static) -> anyhow::Result<DocumentListener> {
    listen("keydown", move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            handler(&event.key());
        }
    })
}

pub fn on_click(handler: impl FnMut(Event) + 'static) -> anyhow::Result<DocumentListener> {
    listen("click", handler)
}

// whether the event started on #id or anything inside it
pub fn event_within(event: &Event, id: &str) -> bool {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
        return false;
    };

    document()
        .ok()
        .and_then(|document| document.get_element_by_id(id))
        .is_some_and(|element| element.contains(Some(&target)))
}

pub fn supports_intersection_observer() -> bool {
    window()
        .ok()
        .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

// keeps the observer (and the closure it calls back into) alive; disconnects on drop
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// observe every element matching the configured selectors and mark it once it scrolls
// into view.  the class is never removed again
//
// Ok(None) means the browser has no IntersectionObserver and the elements simply keep
// their initial styling
pub fn observe_reveal(config: &RevealConfig) -> anyhow::Result<Option<RevealObserver>> {
    if !supports_intersection_observer() {
        warn!("IntersectionObserver unavailable, skipping reveal animations");
        return Ok(None);
    }

    let class = config.class.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }

                if let Err(err) = entry.target().class_list().add_1(&class) {
                    warn!("failed to mark element visible: {err:?}");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;

    let targets = document()?
        .query_selector_all(&config.selector())
        .map_err(js_err)?;

    for i in 0..targets.length() {
        if let Some(element) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    debug!({ elements = targets.length() }, "observing elements for reveal");

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}

// Viewport-intersection watcher: toggles the visible class on observed
// elements as they cross the configured threshold. The observer callback is
// owned here and lives for the page lifetime.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::types::ObserverSettings;

pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionWatcher {
    pub fn new(settings: &ObserverSettings) -> Result<Self, JsValue> {
        let visible_class = settings.visible_class.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let class_list = entry.target().class_list();
                if entry.is_intersecting() {
                    let _ = class_list.add_1(&visible_class);
                } else {
                    let _ = class_list.remove_1(&visible_class);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&settings.root_margin);
        options.set_threshold(&JsValue::from_f64(settings.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(IntersectionWatcher {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Observe every element currently matching `selector`.
    pub fn observe_selector(&self, document: &Document, selector: &str) -> Result<(), JsValue> {
        let nodes = document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                self.observe(&element);
            }
        }
        Ok(())
    }
}

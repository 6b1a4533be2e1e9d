// enhance_core: Rust/WASM page-enhancement engine for a static site.
// All behavior decisions live here; the page's inline JS is plumbing that
// constructs one PageEnhancer and calls the init/load methods it needs.

mod error;
mod gallery;
mod lightbox;
mod loader;
mod nav;
mod nextshow;
mod observer;
mod scroll;
mod types;
mod volume;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, Window};

pub use error::EnhanceError;
pub use gallery::{filename_from_href, media_path, plan_gallery};
pub use lightbox::{media_markup, Lightbox};
pub use nav::{current_section, link_targets_section, SectionOffset};
pub use nextshow::{format_show_date, NextShowView, FALLBACK_DATE, FALLBACK_NAME};
pub use observer::IntersectionWatcher;
pub use scroll::{stagger_delay_secs, DirectionTracker, ScrollDirection};
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main facade exposed to JavaScript. One instance per page; each method
/// wires one behavior. The loaders are fire-and-forget: they spawn the fetch
/// and return immediately, logging failures to the console.
#[wasm_bindgen]
pub struct PageEnhancer {
    inner: Rc<Enhancer>,
}

struct Enhancer {
    config: EnhanceConfig,
    window: Window,
    document: Document,
    watcher: IntersectionWatcher,
    lightbox: RefCell<Option<Lightbox>>,
    // Monotonic id of the most recent gallery load. A fetch that resolves
    // after a newer load started is dropped instead of racing its render.
    gallery_generation: Cell<u64>,
}

impl Enhancer {
    /// Shared overlay handle, located and close-wired once on first use.
    /// None when the page carries no lightbox markup.
    fn lightbox(&self) -> Result<Option<Lightbox>, JsValue> {
        if let Some(lightbox) = self.lightbox.borrow().as_ref() {
            return Ok(Some(lightbox.clone()));
        }
        let located = Lightbox::locate(&self.document, &self.config.lightbox)?;
        if let Some(lightbox) = &located {
            *self.lightbox.borrow_mut() = Some(lightbox.clone());
        }
        Ok(located)
    }
}

#[wasm_bindgen]
impl PageEnhancer {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<PageEnhancer, JsValue> {
        let config: EnhanceConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let watcher = IntersectionWatcher::new(&config.observer)?;

        Ok(PageEnhancer {
            inner: Rc::new(Enhancer {
                config,
                window,
                document,
                watcher,
                lightbox: RefCell::new(None),
                gallery_generation: Cell::new(0),
            }),
        })
    }

    /// Observe every element matching `selector` for the fade-in toggle.
    pub fn observe_fade_targets(&self, selector: &str) -> Result<(), JsValue> {
        self.inner
            .watcher
            .observe_selector(&self.inner.document, selector)
    }

    pub fn init_volume_control(&self) -> Result<(), JsValue> {
        volume::init_volume_control(&self.inner.document, &self.inner.config.volume)
    }

    /// Bind the lightbox to all elements currently matching `selector`.
    /// Not live: links added later need another call, which the gallery
    /// loader performs with its own node set.
    pub fn init_lightbox(&self, selector: &str) -> Result<(), JsValue> {
        let Some(lightbox) = self.inner.lightbox()? else {
            return Ok(());
        };
        let links = loader::query_elements(&self.inner.document, selector)?;
        lightbox.attach_links(&links)
    }

    /// Register one scroll listener that re-queries `selector` per event and
    /// staggers transition delays in the direction of scroll.
    pub fn init_scroll_animations(&self, selector: &str) -> Result<(), JsValue> {
        let window = self.inner.window.clone();
        let document = self.inner.document.clone();
        let selector = selector.to_string();
        let step = self.inner.config.scroll.stagger_step_secs;
        let mut tracker = DirectionTracker::new(window.page_y_offset().unwrap_or(0.0));

        let on_scroll = Closure::wrap(Box::new(move |_event: Event| {
            let offset = window.page_y_offset().unwrap_or(0.0);
            let direction = tracker.observe(offset);
            let Ok(items) = loader::query_elements(&document, &selector) else {
                return;
            };
            let count = items.len();
            for (index, item) in items.iter().enumerate() {
                if let Some(item) = item.dyn_ref::<HtmlElement>() {
                    let delay = scroll::stagger_delay_secs(index, count, direction, step);
                    let _ = item
                        .style()
                        .set_property("transition-delay", &format!("{delay}s"));
                }
            }
        }) as Box<dyn FnMut(_)>);

        self.inner
            .window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();
        Ok(())
    }

    /// Highlight the nav link of the section the page has scrolled into.
    pub fn init_nav_tracking(&self) -> Result<(), JsValue> {
        let window = self.inner.window.clone();
        let document = self.inner.document.clone();
        let settings = self.inner.config.nav.clone();

        let on_scroll = Closure::wrap(Box::new(move |_event: Event| {
            let scroll_y = window.page_y_offset().unwrap_or(0.0);
            let Ok(section_els) = loader::query_elements(&document, "section, main") else {
                return;
            };
            let sections: Vec<SectionOffset> = section_els
                .iter()
                .filter_map(|el| {
                    let id = el.get_attribute("id")?;
                    let top = f64::from(el.dyn_ref::<HtmlElement>()?.offset_top());
                    Some(SectionOffset::new(id, top))
                })
                .collect();
            let current = nav::current_section(&sections, scroll_y, &settings);

            let Ok(links) = loader::query_elements(&document, &settings.link_selector) else {
                return;
            };
            for link in links {
                let class_list = link.class_list();
                let _ = class_list.remove_1(&settings.active_class);
                let matches = link
                    .get_attribute("href")
                    .is_some_and(|href| nav::link_targets_section(&href, &current));
                if matches {
                    let _ = class_list.add_1(&settings.active_class);
                }
            }
        }) as Box<dyn FnMut(_)>);

        self.inner
            .window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();
        Ok(())
    }

    /// Fetch the next-show record and fill the card, or apply the fixed
    /// fallback when the fetch fails. One attempt, no retry.
    pub fn load_next_show(&self) {
        let inner = Rc::clone(&self.inner);
        spawn_local(async move {
            let outcome = loader::fetch_next_show(&inner.config.endpoints.next_show_url).await;
            if let Err(err) = &outcome {
                loader::console_error(&format!("Error loading next show data: {err}"));
            }
            let view = NextShowView::from_outcome(outcome, &inner.config.paths.next_show_base);
            loader::apply_next_show(&inner.document, &view);
        });
    }

    /// Fetch the caption map and fill static gallery captions. On failure the
    /// placeholder texts stay as they are.
    pub fn load_captions(&self) {
        let inner = Rc::clone(&self.inner);
        spawn_local(async move {
            match loader::fetch_caption_map(&inner.config.endpoints.captions_url).await {
                Ok(captions) => {
                    if let Err(err) = loader::apply_captions(&inner.document, &captions) {
                        loader::console_error(&format!("Error applying captions: {err:?}"));
                    }
                }
                Err(err) => loader::console_error(&format!("Error loading captions: {err}")),
            }
        });
    }

    /// Fetch the caption map and rebuild the gallery container from it,
    /// re-registering the watcher and lightbox over the new nodes. A missing
    /// container aborts silently; a failed fetch leaves the container cleared.
    pub fn load_gallery(&self, container_selector: &str, limit: Option<u32>) {
        let inner = Rc::clone(&self.inner);
        let selector = container_selector.to_string();
        let generation = inner.gallery_generation.get().wrapping_add(1);
        inner.gallery_generation.set(generation);

        spawn_local(async move {
            let container = match inner.document.query_selector(&selector) {
                Ok(Some(el)) => el,
                _ => return,
            };
            container.set_inner_html("");

            match loader::fetch_caption_map(&inner.config.endpoints.captions_url).await {
                Ok(captions) => {
                    if inner.gallery_generation.get() != generation {
                        // A newer load owns the container now.
                        return;
                    }
                    let plan = gallery::plan_gallery(
                        &captions,
                        &inner.config.paths.gallery_base,
                        limit.map(|n| n as usize),
                    );
                    let lightbox = inner.lightbox().unwrap_or(None);
                    let rendered = loader::render_gallery(
                        &inner.document,
                        &container,
                        &plan,
                        &inner.watcher,
                        lightbox.as_ref(),
                    );
                    if let Err(err) = rendered {
                        loader::console_error(&format!("Error rendering gallery: {err:?}"));
                    }
                }
                Err(err) => loader::console_error(&format!("Error loading gallery: {err}")),
            }
        });
    }
}

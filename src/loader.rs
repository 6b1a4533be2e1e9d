// Fetch-and-render: next-show card, static captions, and the dynamic gallery.
// Fetches read the body as text and decode with serde_json so transport and
// decode failures collapse into one error type.

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlImageElement, HtmlVideoElement};

use crate::error::EnhanceError;
use crate::gallery::filename_from_href;
use crate::lightbox::Lightbox;
use crate::nextshow::{NextShowView, FALLBACK_DATE, FALLBACK_NAME};
use crate::observer::IntersectionWatcher;
use crate::types::{CaptionMap, GalleryItem, NextShowRecord};

// Fixed DOM contract of the static pages.
const NEXT_SHOW_NAME_ID: &str = "nextShowName";
const NEXT_SHOW_DATE_ID: &str = "nextShowDate";
const NEXT_SHOW_LINK_ID: &str = "nextShowLink";
const NEXT_SHOW_IMAGE_ID: &str = "nextShowImage";
const CAPTION_SELECTOR: &str = ".media-caption";
const MEDIA_WRAPPER_CLASS: &str = "media-wrapper";
const MEDIA_ITEM_CLASS: &str = "media-item";
const MEDIA_CAPTION_CLASS: &str = "media-caption";

pub async fn fetch_caption_map(url: &str) -> Result<CaptionMap, EnhanceError> {
    let response = Request::get(url).send().await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn fetch_next_show(url: &str) -> Result<NextShowRecord, EnhanceError> {
    let response = Request::get(url).send().await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

pub(crate) fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Fill the four fixed next-show targets, or apply the fallback when the
/// record never arrived. Missing targets are skipped silently.
pub fn apply_next_show(document: &Document, view: &NextShowView) {
    let name_el = document.get_element_by_id(NEXT_SHOW_NAME_ID);
    let date_el = document.get_element_by_id(NEXT_SHOW_DATE_ID);
    let link_el = document.get_element_by_id(NEXT_SHOW_LINK_ID);
    let image_el = document.get_element_by_id(NEXT_SHOW_IMAGE_ID);

    match view {
        NextShowView::Loaded {
            name,
            date_text,
            link,
            image_src,
        } => {
            if let Some(el) = name_el {
                el.set_text_content(Some(name));
            }
            if let Some(el) = date_el {
                el.set_text_content(Some(date_text));
            }
            if let Some(anchor) = link_el.and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok()) {
                anchor.set_href(link);
            }
            if let Some(image) = image_el.and_then(|el| el.dyn_into::<HtmlImageElement>().ok()) {
                image.set_src(image_src);
            }
        }
        NextShowView::Unavailable => {
            if let Some(el) = name_el {
                el.set_text_content(Some(FALLBACK_NAME));
            }
            if let Some(el) = date_el {
                el.set_text_content(Some(FALLBACK_DATE));
            }
            if let Some(link) = link_el.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
                let _ = link.style().set_property("display", "none");
            }
        }
    }
}

/// Fill static caption elements whose enclosing link matches a caption-map
/// key. Elements without a match keep their placeholder text.
pub fn apply_captions(document: &Document, captions: &CaptionMap) -> Result<(), JsValue> {
    for caption_el in query_elements(document, CAPTION_SELECTOR)? {
        let Some(link) = caption_el.closest("a")? else {
            continue;
        };
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if let Some(text) = captions.get(filename_from_href(&href)) {
            caption_el.set_text_content(Some(text));
        }
    }
    Ok(())
}

/// Materialize a gallery plan into the container: per item a link wrapping the
/// media element and its caption. Each media element is handed to the
/// intersection watcher, and the lightbox is attached to exactly the anchors
/// created here.
pub fn render_gallery(
    document: &Document,
    container: &Element,
    plan: &[GalleryItem],
    watcher: &IntersectionWatcher,
    lightbox: Option<&Lightbox>,
) -> Result<(), JsValue> {
    container.set_inner_html("");

    let mut anchors = Vec::with_capacity(plan.len());
    for item in plan {
        let link: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
        link.set_href(&item.media_path);
        link.set_target("_blank");

        let wrapper = document.create_element("div")?;
        wrapper.set_class_name(MEDIA_WRAPPER_CLASS);

        let media = create_media_element(document, item)?;
        wrapper.append_child(&media)?;

        let caption = document.create_element("p")?;
        caption.set_class_name(MEDIA_CAPTION_CLASS);
        caption.set_text_content(Some(&item.caption));

        link.append_child(&wrapper)?;
        link.append_child(&caption)?;
        container.append_child(&link)?;

        watcher.observe(&media);
        anchors.push(Element::from(link));
    }

    if let Some(lightbox) = lightbox {
        lightbox.attach_links(&anchors)?;
    }

    Ok(())
}

fn create_media_element(document: &Document, item: &GalleryItem) -> Result<Element, JsValue> {
    if item.kind.is_video() {
        let video: HtmlVideoElement = document.create_element("video")?.unchecked_into();
        video.set_src(&item.media_path);
        video.set_autoplay(true);
        video.set_muted(true);
        video.set_loop(true);
        video.set_attribute("playsinline", "")?;
        let element = Element::from(video);
        element.set_class_name(MEDIA_ITEM_CLASS);
        element.set_attribute("alt", &item.filename)?;
        Ok(element)
    } else {
        let image: HtmlImageElement = document.create_element("img")?.unchecked_into();
        image.set_src(&item.media_path);
        image.set_alt(&item.filename);
        let element = Element::from(image);
        element.set_class_name(MEDIA_ITEM_CLASS);
        Ok(element)
    }
}

pub(crate) fn query_elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

// Lightbox overlay: intercepts clicks on media links and shows the linked
// image or video full-viewport. One shared overlay element, so at most one
// lightbox is open at a time; closing always clears the injected markup and
// restores page scrolling.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent};

use crate::types::{LightboxSettings, MediaKind};

const MEDIA_SIZING: &str = "max-width: 90vw; max-height: 90vh; border-radius: 10px;";

/// Markup injected into the overlay content container for a media URL.
/// Videos get controls and autoplay; everything else renders as an image.
pub fn media_markup(url: &str) -> String {
    match MediaKind::from_path(url) {
        MediaKind::Video => format!(
            r#"<video src="{url}" controls autoplay loop style="{MEDIA_SIZING}"></video>"#
        ),
        MediaKind::Image => format!(r#"<img src="{url}" style="{MEDIA_SIZING}">"#),
    }
}

/// Handle to the shared overlay. Cheap to clone (element handles only).
#[derive(Clone)]
pub struct Lightbox {
    document: Document,
    overlay: HtmlElement,
    content: Element,
}

impl Lightbox {
    /// Locate the overlay elements and wire the close triggers. Returns None
    /// when the page carries no lightbox markup.
    pub fn locate(
        document: &Document,
        settings: &LightboxSettings,
    ) -> Result<Option<Lightbox>, JsValue> {
        let Some(overlay) = document
            .get_element_by_id(&settings.overlay_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(None);
        };
        let Some(content) = document.get_element_by_id(&settings.content_id) else {
            return Ok(None);
        };
        let Some(close) = document.get_element_by_id(&settings.close_id) else {
            return Ok(None);
        };

        let lightbox = Lightbox {
            document: document.clone(),
            overlay,
            content,
        };
        lightbox.wire_close(&close)?;
        Ok(Some(lightbox))
    }

    /// Bind the open handler to exactly the given node set. Called after each
    /// gallery render with the freshly created anchors, so no ambient
    /// selector re-query is needed.
    pub fn attach_links(&self, links: &[Element]) -> Result<(), JsValue> {
        for link in links {
            let lightbox = self.clone();
            let link_cb = link.clone();
            let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                if let Some(url) = link_cb.get_attribute("href") {
                    let _ = lightbox.open(&url);
                }
            }) as Box<dyn FnMut(_)>);
            link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }
        Ok(())
    }

    pub fn open(&self, url: &str) -> Result<(), JsValue> {
        self.content.set_inner_html(&media_markup(url));
        self.overlay.style().set_property("display", "flex")?;
        if let Some(body) = self.document.body() {
            body.style().set_property("overflow", "hidden")?;
        }
        Ok(())
    }

    pub fn close(&self) -> Result<(), JsValue> {
        self.overlay.style().set_property("display", "none")?;
        self.content.set_inner_html("");
        if let Some(body) = self.document.body() {
            body.style().set_property("overflow", "auto")?;
        }
        Ok(())
    }

    fn wire_close(&self, close: &Element) -> Result<(), JsValue> {
        let lightbox = self.clone();
        let on_close = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let _ = lightbox.close();
        }) as Box<dyn FnMut(_)>);
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();

        // Background click closes only when the overlay itself is the target,
        // not a click inside the displayed media.
        let lightbox = self.clone();
        let overlay_target: EventTarget = self.overlay.clone().unchecked_into();
        let on_background = Closure::wrap(Box::new(move |event: MouseEvent| {
            if event.target().as_ref() == Some(&overlay_target) {
                let _ = lightbox.close();
            }
        }) as Box<dyn FnMut(_)>);
        self.overlay
            .add_event_listener_with_callback("click", on_background.as_ref().unchecked_ref())?;
        on_background.forget();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_markup_has_playback_attributes() {
        let markup = media_markup("/media/gallery/dance.mp4");
        assert!(markup.starts_with("<video"));
        assert!(markup.contains(r#"src="/media/gallery/dance.mp4""#));
        assert!(markup.contains("controls"));
        assert!(markup.contains("autoplay"));
        assert!(markup.contains("loop"));
    }

    #[test]
    fn non_video_markup_is_an_image() {
        let markup = media_markup("/media/gallery/cat.jpg");
        assert!(markup.starts_with("<img"));
        assert!(markup.contains(r#"src="/media/gallery/cat.jpg""#));
        assert!(!markup.contains("<video"));
    }
}

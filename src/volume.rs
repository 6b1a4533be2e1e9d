// Background-video volume toggle. Missing elements are a silent no-op; the
// page simply has no background video on that route.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlVideoElement};

use crate::types::VolumeSettings;

pub fn init_volume_control(document: &Document, settings: &VolumeSettings) -> Result<(), JsValue> {
    let Some(video) = document
        .get_element_by_id(&settings.video_id)
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
    else {
        return Ok(());
    };
    let Some(toggle) = document.get_element_by_id(&settings.toggle_id) else {
        return Ok(());
    };

    video.set_volume(settings.initial_volume);

    let muted_glyph = settings.muted_glyph.clone();
    let unmuted_glyph = settings.unmuted_glyph.clone();
    let video_cb = video.clone();
    let toggle_cb = toggle.clone();
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        let muted = !video_cb.muted();
        video_cb.set_muted(muted);
        let glyph = if muted { &muted_glyph } else { &unmuted_glyph };
        toggle_cb.set_text_content(Some(glyph));
    }) as Box<dyn FnMut(_)>);

    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

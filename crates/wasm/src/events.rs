use vh_check_core::{CheckerOptions, LayoutEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::probe::Host;

/// Subscribe to every host event that can move viewport geometry.
///
/// The closures live for the rest of the page, so they are leaked with
/// `forget`.
pub fn wire(host: &Host, options: &CheckerOptions) -> Result<(), JsValue> {
    listen(&host.document, "DOMContentLoaded", LayoutEvent::ContentLoaded)?;

    if options.track_resize {
        listen(&host.window, "resize", LayoutEvent::Resize)?;
    }

    if options.track_visual_viewport {
        match host.window.visual_viewport() {
            Some(vv) => listen(&vv, "resize", LayoutEvent::VisualViewportResize)?,
            None => web_sys::console::warn_1(&"vh-check: visualViewport unavailable".into()),
        }
    }

    Ok(())
}

fn listen(target: &EventTarget, name: &str, event: LayoutEvent) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |_event: Event| {
        crate::dispatch(event);
    }) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

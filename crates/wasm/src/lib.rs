mod events;
mod probe;

use std::cell::RefCell;
use std::rc::Rc;

use vh_check_core::checker::build_view;
use vh_check_core::{Checker, CheckerOptions, HistoryLog, LayoutEvent, Sampler, StabilityFlags};
use vh_check_protocol::CheckerView;
use wasm_bindgen::prelude::*;

use crate::probe::{DomProbe, Host, PerformanceClock};

struct Installed {
    checker: Checker<DomProbe, PerformanceClock>,
    /// Views serialized by the core subscriber, delivered to JS once the
    /// checker borrow is released.
    pending: Rc<RefCell<Vec<String>>>,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Vec<js_sys::Function>> = const { RefCell::new(Vec::new()) };
}

/// Install the checker with default options. Call once the page is mounted.
#[wasm_bindgen]
pub fn start() -> Result<(), JsError> {
    install(&CheckerOptions::default())
}

/// Install the checker with options given as JSON, e.g.
/// `{"track_visual_viewport": true}`.
#[wasm_bindgen]
pub fn start_with_options(options_json: &str) -> Result<(), JsError> {
    let options =
        CheckerOptions::from_json(options_json).map_err(|e| JsError::new(&e.to_string()))?;
    install(&options)
}

fn install(options: &CheckerOptions) -> Result<(), JsError> {
    console_error_panic_hook::set_once();

    if INSTALLED.with_borrow(Option::is_some) {
        return Ok(());
    }
    // Non-interactive context: stay inert.
    let Some(host) = Host::detect() else {
        return Ok(());
    };
    options.validate().map_err(|e| JsError::new(&e.to_string()))?;

    let probe = DomProbe::new(host.document.clone(), host.body.clone());
    let clock = PerformanceClock::new(host.performance.clone());
    let mut checker = Checker::new(Sampler::new(probe, clock, options.probe_units));

    let pending = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    checker.subscribe(move |view| match serde_json::to_string(view) {
        Ok(json) => sink.borrow_mut().push(json),
        Err(e) => web_sys::console::error_1(&format!("vh-check: {e}").into()),
    });

    INSTALLED.with_borrow_mut(|slot| *slot = Some(Installed { checker, pending }));
    dispatch(LayoutEvent::Mount);

    events::wire(&host, options).map_err(|e| JsError::new(&format!("{e:?}")))?;
    web_sys::console::log_1(&"vh-check: installed".into());
    Ok(())
}

/// Sample once for `event` and notify JS listeners if the log grew.
pub(crate) fn dispatch(event: LayoutEvent) {
    let views = INSTALLED.with_borrow_mut(|slot| {
        let Some(installed) = slot.as_mut() else {
            return Vec::new();
        };
        installed.checker.handle(event);
        installed.pending.borrow_mut().drain(..).collect::<Vec<_>>()
    });
    if views.is_empty() {
        return;
    }

    let listeners = LISTENERS.with_borrow(Clone::clone);
    for view in &views {
        let arg = JsValue::from_str(view);
        for listener in &listeners {
            if let Err(e) = listener.call1(&JsValue::NULL, &arg) {
                web_sys::console::error_1(&e);
            }
        }
    }
}

fn current_view() -> CheckerView {
    INSTALLED.with_borrow(|slot| match slot {
        Some(installed) => installed.checker.view(),
        None => build_view(&HistoryLog::new(), StabilityFlags::default()),
    })
}

/// Current view (latest readings, stability, history) as JSON.
#[wasm_bindgen]
pub fn view_json() -> Result<String, JsError> {
    serde_json::to_string(&current_view()).map_err(|e| JsError::new(&e.to_string()))
}

/// History entries in arrival order, each pretty-printed as its own JSON
/// document.
#[wasm_bindgen]
pub fn history_json() -> Result<Vec<String>, JsError> {
    current_view()
        .history
        .iter()
        .map(|s| serde_json::to_string_pretty(s).map_err(|e| JsError::new(&e.to_string())))
        .collect()
}

/// Number of distinct layout states recorded so far.
#[wasm_bindgen]
pub fn sample_count() -> usize {
    INSTALLED.with_borrow(|slot| slot.as_ref().map_or(0, |i| i.checker.history().len()))
}

/// Register `callback(viewJson)` to run after every new history entry.
#[wasm_bindgen]
#[allow(clippy::needless_pass_by_value)]
pub fn subscribe(callback: js_sys::Function) {
    LISTENERS.with_borrow_mut(|listeners| listeners.push(callback));
}

use vh_check_core::{Clock, UnitProbe};
use vh_check_protocol::UnitKind;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Performance, Window};

/// Handles to the interactive page. Absent during non-interactive rendering.
pub struct Host {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub performance: Performance,
}

impl Host {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;
        let performance = window.performance()?;
        Some(Self {
            window,
            document,
            body,
            performance,
        })
    }
}

/// Measures a unit by briefly mounting a hidden fixed-position element of
/// the requested height and reading back its `clientHeight`.
pub struct DomProbe {
    document: Document,
    body: HtmlElement,
}

impl DomProbe {
    pub fn new(document: Document, body: HtmlElement) -> Self {
        Self { document, body }
    }

    fn try_measure(&self, unit: UnitKind, amount: u32) -> Result<f64, JsValue> {
        let probe = self.document.create_element("div")?;
        probe.set_attribute(
            "style",
            &format!(
                "position: fixed; left: 0; top: 0; width: 1px; height: {amount}{unit}; visibility: hidden;"
            ),
        )?;
        self.body.append_child(&probe)?;
        let height = probe.client_height();
        probe.remove();
        Ok(f64::from(height))
    }
}

impl UnitProbe for DomProbe {
    fn measure_px(&mut self, unit: UnitKind, amount: u32) -> f64 {
        match self.try_measure(unit, amount) {
            Ok(px) => px,
            Err(e) => {
                web_sys::console::warn_2(&format!("vh-check: {unit} probe failed").into(), &e);
                // Rejected by the sampler as a non-finite measurement.
                f64::NAN
            }
        }
    }
}

/// `performance.now()`.
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(performance: Performance) -> Self {
        Self { performance }
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        self.performance.now()
    }
}

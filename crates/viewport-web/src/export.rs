use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use viewport_core::{
    DEFAULT_MOBILE_SCREEN_SIZE, IsMobileOptions, SubId, ViewportCapability,
    ViewportClassification, ViewportClassifier, ViewportConfig,
};

use crate::web::{WebViewport, init_console_logging};

/// Routes `log` output to the browser console at info level.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    init_console_logging(log::Level::Info);
}

fn options(debounce: Option<f64>, enable_orientation: Option<bool>) -> IsMobileOptions {
    IsMobileOptions {
        debounce: debounce.unwrap_or(0.0),
        enable_orientation: enable_orientation.unwrap_or(false),
    }
}

fn to_js(value: ViewportClassification) -> JsValue {
    match value {
        ViewportClassification::IsMobile(m) => JsValue::from_bool(m),
        ViewportClassification::WithOrientation {
            is_mobile,
            orientation,
        } => {
            let obj = Object::new();
            let _ = Reflect::set(&obj, &"isMobile".into(), &JsValue::from_bool(is_mobile));
            let _ = Reflect::set(
                &obj,
                &"orientation".into(),
                &JsValue::from_str(orientation.as_str()),
            );
            obj.into()
        }
    }
}

/// `new MobileQuery(768, 100, true)` from JS: a classifier bound to the
/// page's window until `dispose()` is called.
#[wasm_bindgen]
pub struct MobileQuery {
    classifier: ViewportClassifier,
}

#[wasm_bindgen]
impl MobileQuery {
    #[wasm_bindgen(constructor)]
    pub fn new(
        mobile_screen_size: Option<f64>,
        debounce: Option<f64>,
        enable_orientation: Option<bool>,
    ) -> Result<MobileQuery, JsError> {
        let host: Rc<dyn ViewportCapability> = Rc::new(WebViewport::current());
        let classifier = ViewportClassifier::new(host);
        let query = MobileQuery { classifier };
        query.configure(mobile_screen_size, debounce, enable_orientation)?;
        Ok(query)
    }

    /// Applies new settings; watchers are only rebuilt when the threshold or
    /// orientation flag changes.
    pub fn configure(
        &self,
        mobile_screen_size: Option<f64>,
        debounce: Option<f64>,
        enable_orientation: Option<bool>,
    ) -> Result<(), JsError> {
        let config = ViewportConfig::new(
            mobile_screen_size.unwrap_or(DEFAULT_MOBILE_SCREEN_SIZE),
            options(debounce, enable_orientation),
        )?;
        self.classifier.configure(config)?;
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.classifier.classification().is_mobile()
    }

    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> Option<String> {
        self.classifier
            .classification()
            .orientation()
            .map(|o| o.as_str().to_owned())
    }

    /// `boolean`, or `{ isMobile, orientation }` with orientation enabled.
    pub fn value(&self) -> JsValue {
        to_js(self.classifier.classification())
    }

    /// Calls `callback(value)` after every commit that changes the value.
    pub fn subscribe(&self, callback: Function) -> usize {
        let id: SubId = self.classifier.signal().subscribe(move |value| {
            if let Err(e) = callback.call1(&JsValue::NULL, &to_js(*value)) {
                log::error!("MobileQuery subscriber threw: {e:?}");
            }
        });
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.classifier.signal().unsubscribe(id);
    }

    pub fn dispose(&self) {
        self.classifier.teardown();
    }
}

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_time::Duration;

use viewport_core::{
    BindError, EventListenerApi, LegacyListenerApi, Listener, ListenerId, MediaQuery,
    MediaQueryList, TimerId, Timers, ViewportCapability,
};

/// Installs the console logger and panic hook. Safe to call more than once.
pub fn init_console_logging(level: log::Level) {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(level);
}

fn has_function(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|v| v.is_function())
        .unwrap_or(false)
}

fn rejected(e: JsValue) -> BindError {
    BindError::Rejected(format!("{e:?}"))
}

/// The current browsing context, if any.
pub struct WebViewport {
    window: Option<web_sys::Window>,
    timers: Rc<WebTimers>,
}

impl WebViewport {
    pub fn current() -> Self {
        let window = web_sys::window();
        if window.is_none() {
            log::warn!("no window: viewport queries are unavailable");
        }
        Self {
            timers: Rc::new(WebTimers::new(window.clone())),
            window,
        }
    }
}

impl ViewportCapability for WebViewport {
    fn supports_media_queries(&self) -> bool {
        self.window
            .as_ref()
            .is_some_and(|w| has_function(w.as_ref(), "matchMedia"))
    }

    fn match_media(&self, query: &MediaQuery) -> Option<Rc<dyn MediaQueryList>> {
        let window = self.window.as_ref()?;
        match window.match_media(&query.to_string()) {
            Ok(Some(list)) => Some(Rc::new(WebQueryList::new(list))),
            Ok(None) => None,
            Err(e) => {
                log::warn!("matchMedia({query}) threw: {e:?}");
                None
            }
        }
    }

    fn timers(&self) -> Rc<dyn Timers> {
        self.timers.clone()
    }
}

type ChangeClosure = Closure<dyn Fn(JsValue)>;

/// A `MediaQueryList` plus the JS closures registered on it, keyed by
/// listener so unregistering passes the same function object back.
pub struct WebQueryList {
    list: web_sys::MediaQueryList,
    closures: RefCell<HashMap<ListenerId, ChangeClosure>>,
}

impl WebQueryList {
    pub fn new(list: web_sys::MediaQueryList) -> Self {
        Self {
            list,
            closures: RefCell::new(HashMap::new()),
        }
    }

    fn closure_for(&self, listener: &Listener) -> Function {
        let mut closures = self.closures.borrow_mut();
        let closure = closures.entry(listener.id()).or_insert_with(|| {
            let listener = listener.clone();
            // Modern callers pass a MediaQueryListEvent, some legacy ones pass
            // the list itself; both carry `matches`.
            Closure::new(move |event: JsValue| {
                match Reflect::get(&event, &JsValue::from_str("matches")).map(|m| m.as_bool()) {
                    Ok(Some(matches)) => listener.call(matches),
                    _ => log::warn!("media change event without a boolean `matches`"),
                }
            })
        });
        closure.as_ref().unchecked_ref::<Function>().clone()
    }

    fn registered(&self, listener: &Listener) -> Result<Function, BindError> {
        self.closures
            .borrow()
            .get(&listener.id())
            .map(|c| c.as_ref().unchecked_ref::<Function>().clone())
            .ok_or_else(|| BindError::Rejected(format!("listener {} not registered", listener.id())))
    }

    fn release(&self, listener: &Listener) {
        let closure = self.closures.borrow_mut().remove(&listener.id());
        drop(closure);
    }
}

impl EventListenerApi for WebQueryList {
    fn add_event_listener(&self, event: &str, listener: &Listener) -> Result<(), BindError> {
        let f = self.closure_for(listener);
        self.list
            .add_event_listener_with_callback(event, &f)
            .map_err(|e| {
                self.release(listener);
                rejected(e)
            })
    }

    fn remove_event_listener(&self, event: &str, listener: &Listener) -> Result<(), BindError> {
        let f = self.registered(listener)?;
        self.list
            .remove_event_listener_with_callback(event, &f)
            .map_err(rejected)?;
        self.release(listener);
        Ok(())
    }
}

impl LegacyListenerApi for WebQueryList {
    fn add_listener(&self, listener: &Listener) -> Result<(), BindError> {
        let f = self.closure_for(listener);
        self.list
            .add_listener_with_opt_callback(Some(&f))
            .map_err(|e| {
                self.release(listener);
                rejected(e)
            })
    }

    fn remove_listener(&self, listener: &Listener) -> Result<(), BindError> {
        let f = self.registered(listener)?;
        self.list
            .remove_listener_with_opt_callback(Some(&f))
            .map_err(rejected)?;
        self.release(listener);
        Ok(())
    }
}

impl MediaQueryList for WebQueryList {
    fn media(&self) -> String {
        self.list.media()
    }

    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn modern(&self) -> Option<&dyn EventListenerApi> {
        if has_function(self.list.as_ref(), "addEventListener") {
            Some(self as &dyn EventListenerApi)
        } else {
            None
        }
    }

    fn legacy(&self) -> Option<&dyn LegacyListenerApi> {
        if has_function(self.list.as_ref(), "addListener") {
            Some(self as &dyn LegacyListenerApi)
        } else {
            None
        }
    }
}

type TimerClosure = Closure<dyn FnMut()>;

/// `setTimeout` / `clearTimeout` on the window.
pub struct WebTimers {
    window: Option<web_sys::Window>,
    next_id: Cell<TimerId>,
    // Browser handle and the closure it will call; removed on fire or clear.
    live: Rc<RefCell<HashMap<TimerId, (i32, TimerClosure)>>>,
}

impl WebTimers {
    pub fn new(window: Option<web_sys::Window>) -> Self {
        Self {
            window,
            next_id: Cell::new(0),
            live: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn pending(&self) -> usize {
        self.live.borrow().len()
    }
}

impl Timers for WebTimers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let Some(window) = self.window.as_ref() else {
            log::warn!("setTimeout without a window; timer {id} dropped");
            return id;
        };

        let live = Rc::downgrade(&self.live);
        let mut callback = Some(callback);
        let closure = TimerClosure::new(move || {
            // Dropping our own closure here is deferred by wasm-bindgen until
            // this invocation returns.
            if let Some(live) = live.upgrade() {
                let entry = live.borrow_mut().remove(&id);
                drop(entry);
            }
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(handle) => {
                self.live.borrow_mut().insert(id, (handle, closure));
            }
            Err(e) => log::error!("setTimeout failed: {e:?}"),
        }
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        let entry = self.live.borrow_mut().remove(&id);
        if let (Some((handle, _closure)), Some(window)) = (entry, self.window.as_ref()) {
            window.clear_timeout_with_handle(handle);
        }
    }
}

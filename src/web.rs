//! Browser host and wasm entry points.
//!
//! `WebHost` resolves `window`, `document` and `document.documentElement`
//! once, then reads `window.innerHeight` and writes the root element's inline
//! style on demand. Resize listeners are kept as `Closure`s keyed by
//! [`ListenerId`] so they stay alive until removed.
//!
//! JavaScript callers use `mountVh()` / `mountVhWith(json)` and get back a
//! `VhHandle` with `dispose()`. With the `autostart` feature the module's
//! start function installs the default publisher for the life of the page.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, Window};

use crate::config::PublisherConfig;
use crate::consts::RESIZE_EVENT;
use crate::error::HostError;
use crate::host::{ListenerId, ResizeHandler, ViewportHost};
use crate::publisher::{Publisher, ResizeSubscription};

type ListenerClosure = Closure<dyn FnMut(Event)>;

/// `web-sys` implementation of [`ViewportHost`].
pub struct WebHost {
    window: Window,
    root: HtmlElement,
    listeners: RefCell<HashMap<ListenerId, ListenerClosure>>,
    next_id: Cell<u64>,
}

impl WebHost {
    /// Resolve the global window and its document root.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingWindow`], [`HostError::MissingDocument`] or
    /// [`HostError::MissingRootElement`] for whichever piece is absent.
    pub fn from_window() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::MissingWindow)?;
        let document = window.document().ok_or(HostError::MissingDocument)?;
        let element = document.document_element().ok_or(HostError::MissingRootElement)?;
        let root = element.dyn_into::<HtmlElement>().map_err(|_| HostError::MissingRootElement)?;
        Ok(Self { window, root, listeners: RefCell::new(HashMap::new()), next_id: Cell::new(1) })
    }
}

impl ViewportHost for WebHost {
    fn inner_height(&self) -> Result<f64, HostError> {
        let raw = self.window.inner_height().map_err(|e| HostError::Measure(describe(&e)))?;
        raw.as_f64().ok_or(HostError::InvalidHeight(f64::NAN))
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.root
            .style()
            .set_property(name, value)
            .map_err(|e| HostError::Style { property: name.to_owned(), message: describe(&e) })
    }

    fn add_resize_listener(&self, handler: ResizeHandler) -> Result<ListenerId, HostError> {
        let closure = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listener(describe(&e)))?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn remove_resize_listener(&self, id: ListenerId) -> Result<(), HostError> {
        let closure = self.listeners.borrow_mut().remove(&id).ok_or(HostError::UnknownListener(id))?;
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
        {
            // Still attached to the window; dropping the closure now would leave a dangling callback.
            self.listeners.borrow_mut().insert(id, closure);
            return Err(HostError::Listener(describe(&e)));
        }
        Ok(())
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// JavaScript handle for a mounted publisher.
#[wasm_bindgen]
pub struct VhHandle {
    subscription: Option<ResizeSubscription<WebHost>>,
}

#[wasm_bindgen]
impl VhHandle {
    /// Stop republishing on resize. The last value stays on the root style.
    ///
    /// # Errors
    ///
    /// A JS `Error` if the listener could not be removed.
    pub fn dispose(&mut self) -> Result<(), JsValue> {
        match self.subscription.take() {
            Some(subscription) => subscription.dispose().map_err(to_js),
            None => Ok(()),
        }
    }

    /// Property this handle keeps up to date, or `undefined` once disposed.
    #[wasm_bindgen(getter)]
    pub fn property(&self) -> Option<String> {
        self.subscription.as_ref().map(|s| s.property().to_owned())
    }
}

/// Publish `--vh` now and on every resize until the handle is disposed.
///
/// # Errors
///
/// A JS `Error` when the page has no window, document or root element.
#[wasm_bindgen(js_name = mountVh)]
pub fn mount_vh() -> Result<VhHandle, JsValue> {
    mount(PublisherConfig::default())
}

/// Like [`mount_vh`] with a JSON config such as `{"property": "--app-vh"}`.
///
/// # Errors
///
/// A JS `Error` for an invalid config or a missing page environment.
#[wasm_bindgen(js_name = mountVhWith)]
pub fn mount_vh_with(config_json: &str) -> Result<VhHandle, JsValue> {
    let config = PublisherConfig::from_json(config_json).map_err(to_js)?;
    mount(config)
}

fn mount(config: PublisherConfig) -> Result<VhHandle, JsValue> {
    let host = Rc::new(WebHost::from_window().map_err(to_js)?);
    let subscription = Publisher::with_config(host, config).map_err(to_js)?.install().map_err(to_js)?;
    Ok(VhHandle { subscription: Some(subscription) })
}

/// Module start: console logging, panic hook, and a page-lifetime `--vh` publisher.
///
/// # Errors
///
/// A JS `Error` when the page environment is missing; the module's start
/// promise rejects with it.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already initialized");
    }

    let host = Rc::new(WebHost::from_window().map_err(to_js)?);
    crate::publisher::install(host).map_err(to_js)?.forget();
    Ok(())
}

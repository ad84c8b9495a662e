// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser timers and window event subscriptions.
//!
//! [`IntervalTicker`] drives the engine's tick loop with `setInterval`;
//! [`WindowEvents`] forwards window `resize` and `scroll` to
//! [`Grid::notify`] as [`RelayoutTrigger`]s. Both are disposable: dropping
//! the handle cancels the timer or removes the listeners, so a torn-down
//! grid leaves nothing registered with the browser.
//!
//! [`Grid::notify`]: ashlar_core::grid::Grid::notify

use alloc::boxed::Box;
use alloc::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use ashlar_core::schedule::RelayoutTrigger;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object on every call.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, interval_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);

    #[wasm_bindgen(js_name = "addEventListener")]
    fn add_event_listener(kind: &str, callback: &JsValue);

    #[wasm_bindgen(js_name = "removeEventListener")]
    fn remove_event_listener(kind: &str, callback: &JsValue);
}

/// A `setInterval` tick source.
///
/// Calls `callback` every `interval_ms` milliseconds until the ticker is
/// dropped. The callback typically samples [`now`](crate::now) and calls
/// [`Grid::tick`](ashlar_core::grid::Grid::tick).
pub struct IntervalTicker {
    // Held so the JS function outlives the interval registration.
    _closure: Closure<dyn FnMut()>,
    id: i32,
}

impl core::fmt::Debug for IntervalTicker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTicker")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl IntervalTicker {
    /// Registers `callback` with `setInterval`. Ticking starts immediately
    /// and continues until the ticker is dropped.
    #[must_use]
    pub fn start(interval_ms: i32, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref().unchecked_ref(), interval_ms);
        Self {
            _closure: closure,
            id,
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        // The pending interval is cancelled; `closure` drops with the
        // struct, releasing the JS function.
        clear_interval(self.id);
    }
}

type TriggerCallback = Rc<dyn Fn(RelayoutTrigger)>;

/// Window `resize` and `scroll` subscriptions.
///
/// Both events forward to the same callback with the corresponding
/// [`RelayoutTrigger`]. Dropping the handle removes both listeners.
pub struct WindowEvents {
    resize: Closure<dyn FnMut()>,
    scroll: Closure<dyn FnMut()>,
}

impl core::fmt::Debug for WindowEvents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowEvents").finish_non_exhaustive()
    }
}

impl WindowEvents {
    /// Attaches `resize` and `scroll` listeners to the window.
    #[must_use]
    pub fn attach(callback: impl Fn(RelayoutTrigger) + 'static) -> Self {
        let callback: TriggerCallback = Rc::new(callback);

        let cb = Rc::clone(&callback);
        let resize = Closure::wrap(Box::new(move || cb(RelayoutTrigger::Resize)) as Box<dyn FnMut()>);
        let cb = callback;
        let scroll = Closure::wrap(Box::new(move || cb(RelayoutTrigger::Scroll)) as Box<dyn FnMut()>);

        add_event_listener("resize", resize.as_ref().unchecked_ref());
        add_event_listener("scroll", scroll.as_ref().unchecked_ref());
        Self { resize, scroll }
    }
}

impl Drop for WindowEvents {
    fn drop(&mut self) {
        remove_event_listener("resize", self.resize.as_ref().unchecked_ref());
        remove_event_listener("scroll", self.scroll.as_ref().unchecked_ref());
    }
}

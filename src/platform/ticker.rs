//! Fixed-delay repeating timer
//!
//! Each tick re-arms a single `setTimeout` after the callback returns, so
//! ticks never overlap even if one runs long. `stop` clears the pending
//! timeout; the callback is never invoked again afterwards.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

struct TickerInner {
    period_ms: i32,
    timeout_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TickerInner {
    fn schedule(&self) -> Result<(), JsValue> {
        if self.stopped.get() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                self.period_ms,
            )?;
            self.timeout_id.set(Some(id));
        }
        Ok(())
    }
}

/// Handle to a running tick schedule
pub struct Ticker {
    inner: Rc<TickerInner>,
}

impl Ticker {
    /// Call `on_tick` every `period_ms` until stopped
    pub fn start<F>(period_ms: u32, mut on_tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let inner = Rc::new(TickerInner {
            period_ms: period_ms.min(i32::MAX as u32) as i32,
            timeout_id: Cell::new(None),
            stopped: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.timeout_id.set(None);
            if inner.stopped.get() {
                return;
            }
            on_tick();
            if let Err(e) = inner.schedule() {
                log::error!("Failed to schedule tick: {:?}", e);
            }
        });
        *inner.callback.borrow_mut() = Some(closure);

        inner.schedule()?;
        log::info!("Ticker started ({} ms)", period_ms);
        Ok(Self { inner })
    }

    /// Cancel the pending tick; idempotent
    pub fn stop(&self) {
        if self.inner.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.inner.timeout_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        log::info!("Ticker stopped");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

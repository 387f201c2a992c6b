/* src/routes/wasm/src/timer.rs */

use std::time::Duration;

use pivot_routes::Scheduler;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::log_js_error;

/// A pending `setTimeout`. Dropping it clears the timeout.
pub struct TimeoutHandler {
  _cb: Closure<dyn FnMut()>,
  id: i32,
}

impl Drop for TimeoutHandler {
  fn drop(&mut self) {
    if let Some(window) = web_sys::window() {
      window.clear_timeout_with_handle(self.id);
    }
  }
}

pub fn set_timeout(task: Box<dyn FnOnce()>, timeout: Duration) -> Option<TimeoutHandler> {
  let window = web_sys::window()?;
  let cb = Closure::once(task);
  let ms = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
  match window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
  {
    Ok(id) => Some(TimeoutHandler { _cb: cb, id }),
    Err(err) => {
      log_js_error(&err);
      None
    }
  }
}

/// [`Scheduler`] backed by the window's timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScheduler;

impl Scheduler for WindowScheduler {
  type Handle = Option<TimeoutHandler>;

  fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
    set_timeout(task, delay)
  }
}

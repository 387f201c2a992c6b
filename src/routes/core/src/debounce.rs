/* src/routes/core/src/debounce.rs */

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not run yet.
pub trait Scheduler {
  type Handle;

  fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Collapses bursts of [`Debouncer::call`] into a single run of the action,
/// `delay` after the last call.
pub struct Debouncer<S: Scheduler> {
  scheduler: S,
  delay: Duration,
  action: Rc<dyn Fn()>,
  pending: Option<S::Handle>,
  fired: Rc<Cell<bool>>,
}

impl<S: Scheduler> Debouncer<S> {
  pub fn new(scheduler: S, delay: Duration, action: impl Fn() + 'static) -> Self {
    Self {
      scheduler,
      delay,
      action: Rc::new(action),
      pending: None,
      fired: Rc::new(Cell::new(false)),
    }
  }

  /// Restart the delay. Any run scheduled by an earlier call is cancelled.
  pub fn call(&mut self) {
    // Drop first so the previous run is cancelled before the next is queued
    self.pending = None;
    let action = Rc::clone(&self.action);
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    self.fired = fired;
    self.pending = Some(self.scheduler.schedule(
      self.delay,
      Box::new(move || {
        flag.set(true);
        action();
      }),
    ));
  }

  pub fn cancel(&mut self) {
    self.pending = None;
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some() && !self.fired.get()
  }
}

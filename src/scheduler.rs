//! Scheduling capability for the time-based sources.
//!
//! A scheduler is injected into `interval`/`timer` at construction, which
//! keeps wall-clock time out of the stream logic itself: production code
//! hands in a `futures` executor spawner, tests hand in the virtual-time
//! [`ManualScheduler`].
//!
//! [`ManualScheduler`]: crate::test_scheduler::ManualScheduler

use crate::subscription::SubscriptionLike;
use futures::executor::LocalSpawner;
use futures::task::LocalSpawnExt;
use std::{cell::Cell, rc::Rc};

pub use std::time::{Duration, Instant};

/// The capability to run a task later, or repeatedly, on the current thread.
///
/// Both methods hand back a [`TaskHandle`]; cancelling it (or unsubscribing
/// it, the handle is a subscription) prevents any further run of the task.
pub trait LocalScheduler {
  /// Runs `task` once, `delay` from now.
  fn schedule_once<S: 'static>(
    &self,
    delay: Duration,
    state: S,
    task: fn(S),
  ) -> TaskHandle;

  /// Runs `task` every `period`, passing an increasing sequence number,
  /// until the task returns `false` or the handle is cancelled. The first
  /// run fires after `delay` when given, after one `period` otherwise.
  fn schedule_repeating<S: 'static>(
    &self,
    period: Duration,
    delay: Option<Duration>,
    state: S,
    task: fn(&mut S, usize) -> bool,
  ) -> TaskHandle;
}

/// Cancellation handle for a scheduled task.
#[derive(Clone, Default)]
pub struct TaskHandle(Rc<Cell<bool>>);

impl TaskHandle {
  #[inline]
  pub fn cancel(&self) { self.0.set(true); }

  #[inline]
  pub fn is_cancelled(&self) -> bool { self.0.get() }
}

impl SubscriptionLike for TaskHandle {
  #[inline]
  fn unsubscribe(&mut self) { self.cancel(); }

  #[inline]
  fn is_closed(&self) -> bool { self.is_cancelled() }
}

impl LocalScheduler for LocalSpawner {
  fn schedule_once<S: 'static>(
    &self,
    delay: Duration,
    state: S,
    task: fn(S),
  ) -> TaskHandle {
    let handle = TaskHandle::default();
    let h = handle.clone();
    self
      .spawn_local(async move {
        futures_time::task::sleep(delay.into()).await;
        if !h.is_cancelled() {
          task(state);
        }
      })
      .expect("spawn timer task on the local pool failed.");
    handle
  }

  fn schedule_repeating<S: 'static>(
    &self,
    period: Duration,
    delay: Option<Duration>,
    mut state: S,
    task: fn(&mut S, usize) -> bool,
  ) -> TaskHandle {
    let handle = TaskHandle::default();
    let h = handle.clone();
    self
      .spawn_local(async move {
        futures_time::task::sleep(delay.unwrap_or(period).into()).await;
        let mut seq = 0;
        loop {
          if h.is_cancelled() || !task(&mut state, seq) {
            break;
          }
          seq += 1;
          futures_time::task::sleep(period.into()).await;
        }
      })
      .expect("spawn interval task on the local pool failed.");
    handle
  }
}

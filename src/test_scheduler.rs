//! A virtual-time scheduler for deterministic tests.
//!
//! `ManualScheduler` implements [`LocalScheduler`] over a manually advanced
//! clock: nothing runs until `advance` is called, and then every task due
//! within the advanced window runs synchronously, in deadline order.

use crate::rc::{MutRc, RcDeref, RcDerefMut};
use crate::scheduler::{Duration, Instant, LocalScheduler, TaskHandle};
use std::collections::VecDeque;

#[derive(Clone)]
pub struct ManualScheduler(MutRc<Inner>);

struct Inner {
  now: Instant,
  queue: VecDeque<ScheduledTask>,
}

struct ScheduledTask {
  at: Instant,
  handle: TaskHandle,
  kind: TaskKind,
}

enum TaskKind {
  Once(Box<dyn FnOnce()>),
  Repeating {
    period: Duration,
    seq: usize,
    task: Box<dyn FnMut(usize) -> bool>,
  },
}

impl Default for ManualScheduler {
  fn default() -> Self {
    ManualScheduler(MutRc::own(Inner {
      now: Instant::now(),
      queue: VecDeque::new(),
    }))
  }
}

impl ManualScheduler {
  pub fn new() -> Self { Self::default() }

  pub fn current_time(&self) -> Instant { self.0.rc_deref().now }

  /// Number of tasks still pending in the queue.
  pub fn pending_tasks(&self) -> usize { self.0.rc_deref().queue.len() }

  /// Moves the clock forward by `duration`, running every task that falls
  /// due on the way, in deadline order. Repeating tasks re-arm themselves
  /// until cancelled or until their task function returns `false`.
  pub fn advance(&self, duration: Duration) {
    let to = self.0.rc_deref().now + duration;

    while let Some(task) = self.pop_due(to) {
      let ScheduledTask { at, handle, kind } = task;
      if handle.is_cancelled() {
        continue;
      }
      match kind {
        TaskKind::Once(task) => task(),
        TaskKind::Repeating {
          period,
          seq,
          mut task,
        } => {
          let live = task(seq);
          if live && !handle.is_cancelled() {
            self.insert(ScheduledTask {
              at: at + period,
              handle,
              kind: TaskKind::Repeating { period, seq: seq + 1, task },
            });
          }
        }
      }
    }

    self.0.rc_deref_mut().now = to;
  }

  fn pop_due(&self, to: Instant) -> Option<ScheduledTask> {
    let mut inner = self.0.rc_deref_mut();
    let due = inner.queue.front().map_or(false, |t| t.at <= to);
    due.then(|| {
      let task = inner.queue.pop_front().unwrap();
      inner.now = task.at;
      task
    })
  }

  fn insert(&self, task: ScheduledTask) {
    let queue = &mut self.0.rc_deref_mut().queue;
    let at = task.at;
    // stable FIFO among equal deadlines
    let position = queue
      .make_contiguous()
      .partition_point(|t| t.at <= at);
    queue.insert(position, task);
  }
}

impl LocalScheduler for ManualScheduler {
  fn schedule_once<S: 'static>(
    &self,
    delay: Duration,
    state: S,
    task: fn(S),
  ) -> TaskHandle {
    let handle = TaskHandle::default();
    self.insert(ScheduledTask {
      at: self.current_time() + delay,
      handle: handle.clone(),
      kind: TaskKind::Once(Box::new(move || task(state))),
    });
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
    self.insert(ScheduledTask {
      at: self.current_time() + delay.unwrap_or(period),
      handle: handle.clone(),
      kind: TaskKind::Repeating {
        period,
        seq: 0,
        task: Box::new(move |seq| task(&mut state, seq)),
      },
    });
    handle
  }
}

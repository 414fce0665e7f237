use crate::prelude::*;

/// Creates an observable which will fire at `dur` time into the future,
/// and will repeat every `dur` interval after, counting from zero.
///
/// It never completes on its own; drop the subscription to stop it.
pub fn interval<S>(dur: Duration, scheduler: S) -> IntervalObservable<S> {
  IntervalObservable { dur, delay: None, scheduler }
}

#[derive(Clone)]
pub struct IntervalObservable<S> {
  dur: Duration,
  delay: Option<Duration>,
  scheduler: S,
}

impl<S> Observable<'static> for IntervalObservable<S>
where
  S: LocalScheduler,
{
  type Item = usize;
  type Err = ();
  type Unsub = TaskHandle;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<usize, ()> + 'static,
  {
    let Self { dur, delay, scheduler } = self;
    let subscription = subscriber.subscription.clone();
    let handle =
      scheduler.schedule_repeating(dur, delay, subscriber, interval_task);
    // cascaded disposal of the chain releases the pending timer
    subscription.add(handle.clone());
    handle
  }
}

fn interval_task<O>(
  subscriber: &mut Subscriber<O, LocalSubscription>,
  seq: usize,
) -> bool
where
  O: Observer<usize, ()>,
{
  if subscriber.is_closed() {
    return false;
  }
  subscriber.next(seq);
  !subscriber.is_closed()
}

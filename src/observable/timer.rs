use crate::prelude::*;

/// Returns an observable which will emit `item` once after `dur`, then
/// complete. Unsubscribing before the deadline cancels the pending emission.
pub fn timer<Item, S>(
  item: Item,
  dur: Duration,
  scheduler: S,
) -> TimerObservable<Item, S> {
  TimerObservable { item, dur, scheduler }
}

#[derive(Clone)]
pub struct TimerObservable<Item, S> {
  item: Item,
  dur: Duration,
  scheduler: S,
}

impl<Item, S> Observable<'static> for TimerObservable<Item, S>
where
  Item: 'static,
  S: LocalScheduler,
{
  type Item = Item;
  type Err = ();
  type Unsub = TaskHandle;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, ()> + 'static,
  {
    let Self { item, dur, scheduler } = self;
    let subscription = subscriber.subscription.clone();
    let handle = scheduler.schedule_once(dur, (subscriber, item), timer_task);
    subscription.add(handle.clone());
    handle
  }
}

fn timer_task<Item, O>(
  (mut subscriber, item): (Subscriber<O, LocalSubscription>, Item),
) where
  O: Observer<Item, ()>,
{
  subscriber.next(item);
  subscriber.complete();
}

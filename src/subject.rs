use crate::prelude::*;

type PublisherEntry<'a, Item, Err> = MutRc<Box<dyn Publisher<Item, Err> + 'a>>;

/// An object that is both an Observer and an Observable, multicasting every
/// notification it receives to its current subscribers.
///
/// Unlike the cold sources a subject shares one live execution: subscribing
/// registers the observer, nothing emitted earlier is replayed. Values
/// received while nobody is subscribed are dropped. After a terminal
/// notification the subscriber set is drained and later notifications are
/// dropped; a subscription made after that point is immediately closed.
///
/// Broadcasts iterate over a snapshot of the current subscriber set, so
/// observers may subscribe or unsubscribe from within their callbacks:
/// additions miss the running broadcast, removals are skipped if not yet
/// visited.
pub struct Subject<'a, Item, Err> {
  observers: MutRc<Vec<PublisherEntry<'a, Item, Err>>>,
  subscription: LocalSubscription,
}

impl<'a, Item, Err> Subject<'a, Item, Err> {
  pub fn new() -> Self { Self::default() }

  /// Current number of registered subscribers, inert registrations
  /// included until the next broadcast prunes them.
  pub fn subscribed_size(&self) -> usize { self.observers.rc_deref().len() }

  fn snapshot(&self) -> Vec<PublisherEntry<'a, Item, Err>> {
    self.observers.rc_deref().iter().cloned().collect()
  }

  fn drain(&self) -> Vec<PublisherEntry<'a, Item, Err>> {
    std::mem::take(&mut *self.observers.rc_deref_mut())
  }
}

impl<'a, Item, Err> Default for Subject<'a, Item, Err> {
  fn default() -> Self {
    Subject {
      observers: MutRc::own(vec![]),
      subscription: LocalSubscription::default(),
    }
  }
}

impl<'a, Item, Err> Clone for Subject<'a, Item, Err> {
  fn clone(&self) -> Self {
    Subject {
      observers: self.observers.clone(),
      subscription: self.subscription.clone(),
    }
  }
}

impl<'a, Item, Err> Observer<Item, Err> for Subject<'a, Item, Err>
where
  Item: Clone,
  Err: Clone,
{
  fn next(&mut self, value: Item) {
    if self.subscription.is_closed() {
      return;
    }
    for mut observer in self.snapshot() {
      observer.next(value.clone());
    }
    self.observers.rc_deref_mut().retain(|o| !o.is_closed());
  }

  fn error(&mut self, err: Err) {
    if self.subscription.is_closed() {
      return;
    }
    for mut observer in self.drain() {
      observer.error(err.clone());
    }
    self.subscription.unsubscribe();
  }

  fn complete(&mut self) {
    if self.subscription.is_closed() {
      return;
    }
    for mut observer in self.drain() {
      observer.complete();
    }
    self.subscription.unsubscribe();
  }
}

impl<'a, Item, Err> Observable<'a> for Subject<'a, Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    let subscription = subscriber.subscription.clone();
    // a terminated subject closes new registrations right away
    self.subscription.add(subscription.clone());
    self
      .observers
      .rc_deref_mut()
      .push(MutRc::own(Box::new(subscriber)));
    subscription
  }
}

use crate::observer::Observer;
use crate::subscription::{LocalSubscription, SubscriptionLike};

/// Implements the Observer trait and SubscriptionLike trait. While the
/// Observer is the public API for consuming the values of an Observable, all
/// Observers get converted to a Subscriber, in order to provide Subscription
/// capabilities and to enforce the notification contract: no value is
/// delivered after the subscription has closed, and a terminal notification
/// closes it.
pub struct Subscriber<O, U> {
  pub(crate) observer: O,
  pub(crate) subscription: U,
}

impl<O> Subscriber<O, LocalSubscription> {
  pub fn local(observer: O) -> Self {
    Subscriber {
      observer,
      subscription: LocalSubscription::default(),
    }
  }
}

impl<Item, Err, O, U> Observer<Item, Err> for Subscriber<O, U>
where
  O: Observer<Item, Err>,
  U: SubscriptionLike,
{
  fn next(&mut self, value: Item) {
    if !self.subscription.is_closed() {
      self.observer.next(value);
    }
  }

  fn error(&mut self, err: Err) {
    if !self.subscription.is_closed() {
      self.subscription.unsubscribe();
      self.observer.error(err);
    }
  }

  fn complete(&mut self) {
    if !self.subscription.is_closed() {
      self.subscription.unsubscribe();
      self.observer.complete();
    }
  }
}

impl<O, U> SubscriptionLike for Subscriber<O, U>
where
  U: SubscriptionLike,
{
  #[inline(always)]
  fn unsubscribe(&mut self) { self.subscription.unsubscribe(); }

  #[inline(always)]
  fn is_closed(&self) -> bool { self.subscription.is_closed() }
}

use crate::prelude::*;
use std::marker::PhantomData;

/// Creates an observable from a producer function.
///
/// The producer is called once per subscription and is given the subscriber
/// as a `&mut dyn Publisher`, to which new values can be `next`ed, or an
/// `error` method can be called to raise an error, or `complete` can be
/// called to notify of a successful completion. Whatever the producer
/// returns is kept as the subscription's teardown; return `()` when there is
/// nothing to release.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::create(|subscriber| {
///   subscriber.next(1);
///   subscriber.next(2);
///   subscriber.complete();
/// })
/// .subscribe(|v| println!("{}", v));
/// ```
pub fn create<F, Item, Err, S>(producer: F) -> ObservableFromFn<F, Item, Err>
where
  F: FnOnce(&mut dyn Publisher<Item, Err>) -> S,
  S: SubscriptionLike + 'static,
{
  ObservableFromFn {
    producer,
    _p: PhantomData,
  }
}

pub struct ObservableFromFn<F, Item, Err> {
  producer: F,
  _p: PhantomData<(Item, Err)>,
}

impl<F: Clone, Item, Err> Clone for ObservableFromFn<F, Item, Err> {
  fn clone(&self) -> Self {
    ObservableFromFn {
      producer: self.producer.clone(),
      _p: PhantomData,
    }
  }
}

impl<'a, F, Item, Err, S> Observable<'a> for ObservableFromFn<F, Item, Err>
where
  F: FnOnce(&mut dyn Publisher<Item, Err>) -> S,
  S: SubscriptionLike + 'static,
{
  type Item = Item;
  type Err = Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    mut subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    let subscription = subscriber.subscription.clone();
    let teardown = (self.producer)(&mut subscriber);
    subscription.add(teardown);
    subscription
  }
}

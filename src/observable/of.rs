use crate::prelude::*;
use std::marker::PhantomData;

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an
/// error.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::of(123)
///   .subscribe(|v| {println!("{},", v)});
/// ```
pub fn of<Item, Err>(v: Item) -> OfObservable<Item, Err> {
  OfObservable(v, PhantomData)
}

pub struct OfObservable<Item, Err>(Item, PhantomData<Err>);

impl<Item: Clone, Err> Clone for OfObservable<Item, Err> {
  fn clone(&self) -> Self { OfObservable(self.0.clone(), PhantomData) }
}

impl<'a, Item, Err> Observable<'a> for OfObservable<Item, Err> {
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
    subscriber.next(self.0);
    subscriber.complete();
    subscription
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn of_emits_once_then_completes() {
    let mut value = 0;
    let mut completed = false;
    observable::of(100).subscribe_complete(|v| value = v, || completed = true);
    assert_eq!(value, 100);
    assert!(completed);
  }
}

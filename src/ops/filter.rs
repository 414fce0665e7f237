use crate::prelude::*;

/// Emit only those items from an Observable that pass a predicate test.
pub trait Filter<'a, Item> {
  fn filter<F>(self, filter: F) -> FilterOp<Self, F>
  where
    Self: Sized,
    F: FnMut(&Item) -> bool,
  {
    FilterOp { source: self, filter }
  }
}

impl<'a, Item, O> Filter<'a, Item> for O where O: Observable<'a, Item = Item>
{}

#[derive(Clone)]
pub struct FilterOp<S, F> {
  source: S,
  filter: F,
}

impl<'a, S, F> Observable<'a> for FilterOp<S, F>
where
  S: Observable<'a>,
  F: FnMut(&S::Item) -> bool + 'a,
{
  type Item = S::Item;
  type Err = S::Err;
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<S::Item, S::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    self.source.actual_subscribe(Subscriber {
      observer: FilterObserver { observer, filter: self.filter },
      subscription,
    })
  }
}

pub struct FilterObserver<O, F> {
  observer: O,
  filter: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.filter)(&value) {
      self.observer.next(value)
    }
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err); }

  #[inline]
  fn complete(&mut self) { self.observer.complete(); }
}

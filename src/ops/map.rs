use crate::prelude::*;

pub trait Map<'a, Item> {
  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  fn map<B, F>(self, f: F) -> MapOp<Self, F>
  where
    Self: Sized,
    F: FnMut(Item) -> B,
  {
    MapOp { source: self, func: f }
  }
}

impl<'a, Item, O> Map<'a, Item> for O where O: Observable<'a, Item = Item> {}

#[derive(Clone)]
pub struct MapOp<S, F> {
  source: S,
  func: F,
}

impl<'a, S, F, B> Observable<'a> for MapOp<S, F>
where
  S: Observable<'a>,
  F: FnMut(S::Item) -> B + 'a,
{
  type Item = B;
  type Err = S::Err;
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<B, S::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    self.source.actual_subscribe(Subscriber {
      observer: MapObserver { observer, map: self.func },
      subscription,
    })
  }
}

pub struct MapObserver<O, F> {
  observer: O,
  map: F,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> B,
{
  fn next(&mut self, value: Item) { self.observer.next((self.map)(value)) }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err); }

  #[inline]
  fn complete(&mut self) { self.observer.complete(); }
}

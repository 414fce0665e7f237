use crate::prelude::*;

pub trait TryMap<'a, Item, Err> {
  /// Creates a new stream which calls a fallible closure on each element.
  /// An `Ok` return is emitted as the value; an `Err` return is delivered as
  /// the error notification and disposes the upstream subscription.
  fn try_map<B, F>(self, f: F) -> TryMapOp<Self, F>
  where
    Self: Sized,
    F: FnMut(Item) -> Result<B, Err>,
  {
    TryMapOp { source: self, func: f }
  }
}

impl<'a, Item, Err, O> TryMap<'a, Item, Err> for O where
  O: Observable<'a, Item = Item, Err = Err>
{
}

#[derive(Clone)]
pub struct TryMapOp<S, F> {
  source: S,
  func: F,
}

impl<'a, S, F, B> Observable<'a> for TryMapOp<S, F>
where
  S: Observable<'a>,
  F: FnMut(S::Item) -> Result<B, S::Err> + 'a,
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
      observer: TryMapObserver {
        observer,
        map: self.func,
        subscription: subscription.clone(),
      },
      subscription,
    })
  }
}

pub struct TryMapObserver<O, F> {
  observer: O,
  map: F,
  subscription: LocalSubscription,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for TryMapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> Result<B, Err>,
{
  fn next(&mut self, value: Item) {
    match (self.map)(value) {
      Ok(v) => self.observer.next(v),
      Err(e) => {
        // failed transforms end the stream, upstream included
        self.subscription.unsubscribe();
        self.observer.error(e);
      }
    }
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err); }

  #[inline]
  fn complete(&mut self) { self.observer.complete(); }
}

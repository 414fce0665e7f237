use crate::prelude::*;

#[derive(Clone)]
pub struct ObserverNext<N>(N);

impl<N> ObserverNext<N> {
  #[inline(always)]
  pub fn new(next: N) -> Self { ObserverNext(next) }
}

impl<Item, N> Observer<Item, ()> for ObserverNext<N>
where
  N: FnMut(Item),
{
  #[inline(always)]
  fn next(&mut self, value: Item) { (self.0)(value); }
  #[inline(always)]
  fn error(&mut self, _err: ()) {}
  #[inline(always)]
  fn complete(&mut self) {}
}

pub trait SubscribeNext<'a, N> {
  /// A type implementing [`SubscriptionLike`]
  type Unsub: SubscriptionLike;

  /// Invokes an execution of an Observable and registers an Observer handler
  /// for values it emits. Available on infallible streams only; use
  /// `subscribe_err` or `subscribe_all` when the stream can error.
  fn subscribe(self, next: N) -> SubscriptionWrapper<Self::Unsub>;
}

impl<'a, S, N> SubscribeNext<'a, N> for S
where
  S: Observable<'a, Err = ()>,
  N: FnMut(S::Item) + 'a,
{
  type Unsub = S::Unsub;
  fn subscribe(self, next: N) -> SubscriptionWrapper<Self::Unsub> {
    let subscriber = Subscriber::local(ObserverNext::new(next));
    SubscriptionWrapper(self.actual_subscribe(subscriber))
  }
}

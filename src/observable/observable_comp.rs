use crate::prelude::*;

#[derive(Clone)]
pub struct ObserverComp<N, C> {
  next: N,
  complete: C,
}

impl<N, C> ObserverComp<N, C> {
  #[inline(always)]
  pub fn new(next: N, complete: C) -> Self { ObserverComp { next, complete } }
}

impl<Item, N, C> Observer<Item, ()> for ObserverComp<N, C>
where
  N: FnMut(Item),
  C: FnMut(),
{
  #[inline(always)]
  fn next(&mut self, value: Item) { (self.next)(value); }
  #[inline(always)]
  fn error(&mut self, _err: ()) {}
  #[inline(always)]
  fn complete(&mut self) { (self.complete)(); }
}

pub trait SubscribeComplete<'a, N, C> {
  /// A type implementing [`SubscriptionLike`]
  type Unsub: SubscriptionLike;

  /// Invokes an execution of an Observable and registers Observer handlers
  /// for values and for successful completion.
  fn subscribe_complete(
    self,
    next: N,
    complete: C,
  ) -> SubscriptionWrapper<Self::Unsub>;
}

impl<'a, S, N, C> SubscribeComplete<'a, N, C> for S
where
  S: Observable<'a, Err = ()>,
  N: FnMut(S::Item) + 'a,
  C: FnMut() + 'a,
{
  type Unsub = S::Unsub;
  fn subscribe_complete(
    self,
    next: N,
    complete: C,
  ) -> SubscriptionWrapper<Self::Unsub> {
    let subscriber = Subscriber::local(ObserverComp::new(next, complete));
    SubscriptionWrapper(self.actual_subscribe(subscriber))
  }
}

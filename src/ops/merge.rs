use crate::prelude::*;

/// combine two Observables into one by merging their emissions
///
/// # Example
///
/// ```
/// use rxlite::prelude::*;
/// let mut numbers = Subject::new();
/// // crate a even stream by filter
/// let even = numbers.clone().filter(|v: &i32| *v % 2 == 0);
/// // crate an odd stream by filter
/// let odd = numbers.clone().filter(|v: &i32| *v % 2 != 0);
///
/// // merge odd and even stream again
/// let merged = even.merge(odd);
///
/// // attach observers
/// merged.subscribe(|v| println!("{} ", v));
/// ```
pub trait Merge<'a> {
  fn merge<S>(self, o: S) -> MergeOp<Self, S>
  where
    Self: Sized,
  {
    MergeOp {
      source1: self,
      source2: o,
    }
  }
}

impl<'a, O> Merge<'a> for O where O: Observable<'a> {}

#[derive(Clone)]
pub struct MergeOp<S1, S2> {
  source1: S1,
  source2: S2,
}

impl<'a, S1, S2> Observable<'a> for MergeOp<S1, S2>
where
  S1: Observable<'a>,
  S2: Observable<'a, Item = S1::Item, Err = S1::Err>,
{
  type Item = S1::Item;
  type Err = S1::Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<S1::Item, S1::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    let shared = MutRc::own(MergeObserver {
      observer,
      subscription: subscription.clone(),
      completed_one: false,
    });

    // every input runs in its own child lane so one input completing does
    // not tear the other down
    let first = LocalSubscription::default();
    subscription.add(first.clone());
    first.add(self.source1.actual_subscribe(Subscriber {
      observer: shared.clone(),
      subscription: first.clone(),
    }));

    if !subscription.is_closed() {
      let second = LocalSubscription::default();
      subscription.add(second.clone());
      second.add(self.source2.actual_subscribe(Subscriber {
        observer: shared,
        subscription: second.clone(),
      }));
    }
    subscription
  }
}

pub struct MergeObserver<O> {
  observer: O,
  subscription: LocalSubscription,
  completed_one: bool,
}

impl<Item, Err, O> Observer<Item, Err> for MergeObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline(always)]
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(&mut self, err: Err) {
    self.observer.error(err);
    self.subscription.unsubscribe();
  }

  fn complete(&mut self) {
    if self.completed_one {
      self.observer.complete();
      self.subscription.unsubscribe();
    } else {
      self.completed_one = true;
    }
  }
}

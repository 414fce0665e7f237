use crate::prelude::*;

/// Emits only the first `count` values emitted by the source Observable.
///
/// `take` returns an Observable that emits only the first `count` values
/// emitted by the source Observable. If the source emits fewer than `count`
/// values then all of its values are emitted. After that, it completes,
/// regardless if the source completes, and disposes the upstream
/// subscription.
pub trait Take<'a> {
  fn take(self, count: usize) -> TakeOp<Self>
  where
    Self: Sized,
  {
    TakeOp { source: self, count }
  }
}

impl<'a, O> Take<'a> for O where O: Observable<'a> {}

#[derive(Clone)]
pub struct TakeOp<S> {
  source: S,
  count: usize,
}

impl<'a, S> Observable<'a> for TakeOp<S>
where
  S: Observable<'a>,
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
      observer: TakeObserver {
        observer,
        subscription: subscription.clone(),
        count: self.count,
        hits: 0,
      },
      subscription,
    })
  }
}

pub struct TakeObserver<O> {
  observer: O,
  subscription: LocalSubscription,
  count: usize,
  hits: usize,
}

impl<Item, Err, O> Observer<Item, Err> for TakeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.hits < self.count {
      self.hits += 1;
      self.observer.next(value);
      if self.hits == self.count {
        self.observer.complete();
        self.subscription.unsubscribe();
      }
    }
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err); }

  #[inline]
  fn complete(&mut self) { self.observer.complete(); }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn base_function() {
    let mut completed = false;
    let mut next_count = 0;

    observable::from_iter(0..100)
      .take(5)
      .subscribe_complete(|_| next_count += 1, || completed = true);

    assert_eq!(next_count, 5);
    assert!(completed);
  }

  #[test]
  fn take_stops_infinite_source() {
    let mut collected = vec![];
    {
      let mut source = Subject::new();

      source.clone().take(2).subscribe(|v| collected.push(v));

      source.next(1);
      source.next(2);
      source.next(3);
      source.next(4);
    }

    assert_eq!(collected, vec![1, 2]);
  }

  #[test]
  fn take_fewer_than_requested() {
    let mut completed = false;
    let mut collected = vec![];

    observable::from_iter(0..3)
      .take(10)
      .subscribe_complete(|v| collected.push(v), || completed = true);

    assert_eq!(collected, vec![0, 1, 2]);
    assert!(completed);
  }
}

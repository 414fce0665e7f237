use crate::prelude::*;

pub trait Last<'a, Item> {
  /// Emits only the last value emitted by the source, once it completes.
  /// Emits nothing but the completion if the source was empty.
  fn last(self) -> LastOrOp<Self, Item>
  where
    Self: Sized,
  {
    LastOrOp { source: self, default: None }
  }

  /// Emits only the last value emitted by the source, or `default` if the
  /// source completed without emitting anything.
  fn last_or(self, default: Item) -> LastOrOp<Self, Item>
  where
    Self: Sized,
  {
    LastOrOp { source: self, default: Some(default) }
  }
}

impl<'a, Item, O> Last<'a, Item> for O where O: Observable<'a, Item = Item> {}

#[derive(Clone)]
pub struct LastOrOp<S, Item> {
  source: S,
  default: Option<Item>,
}

impl<'a, S, Item> Observable<'a> for LastOrOp<S, Item>
where
  S: Observable<'a, Item = Item>,
  Item: 'a,
{
  type Item = Item;
  type Err = S::Err;
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, S::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    self.source.actual_subscribe(Subscriber {
      observer: LastOrObserver {
        observer,
        default: self.default,
        last: None,
      },
      subscription,
    })
  }
}

pub struct LastOrObserver<O, Item> {
  observer: O,
  default: Option<Item>,
  last: Option<Item>,
}

impl<Item, Err, O> Observer<Item, Err> for LastOrObserver<O, Item>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.last = Some(value); }

  // the retained value is dropped: nothing but the error surfaces
  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err); }

  fn complete(&mut self) {
    if let Some(v) = self.last.take().or_else(|| self.default.take()) {
      self.observer.next(v);
    }
    self.observer.complete();
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use bencher::{benchmark_group, Bencher};

  #[test]
  fn last_or_hundered_items() {
    let mut completed = 0;
    let mut errors = 0;
    let mut last_item = None;

    observable::from_iter(0..100).last_or(200).subscribe_all(
      |v| last_item = Some(v),
      |_: ()| errors += 1,
      || completed += 1,
    );

    assert_eq!(errors, 0);
    assert_eq!(completed, 1);
    assert_eq!(Some(99), last_item);
  }

  #[test]
  fn last_or_no_items() {
    let mut completed = 0;
    let mut last_item = None;

    observable::empty()
      .last_or(100)
      .subscribe_complete(|v| last_item = Some(v), || completed += 1);

    assert_eq!(completed, 1);
    assert_eq!(Some(100), last_item);
  }

  #[test]
  fn last_one_item() {
    let mut completed = 0;
    let mut last_item = None;

    observable::from_iter(0..2)
      .last()
      .subscribe_complete(|v| last_item = Some(v), || completed += 1);

    assert_eq!(completed, 1);
    assert_eq!(Some(1), last_item);
  }

  #[test]
  fn last_no_items() {
    let mut completed = 0;
    let mut last_item = None;

    observable::empty()
      .last()
      .subscribe_complete(|v: i32| last_item = Some(v), || completed += 1);

    assert_eq!(completed, 1);
    assert_eq!(None, last_item);
  }

  #[test]
  fn error_drops_retained_value() {
    let mut hits = 0;
    let mut errors = 0;

    observable::create(|subscriber| {
      subscriber.next(1);
      subscriber.next(2);
      subscriber.error("failed");
    })
    .last()
    .subscribe_err(|_: i32| hits += 1, |_| errors += 1);

    assert_eq!(hits, 0);
    assert_eq!(errors, 1);
  }

  #[test]
  fn bench() { do_bench(); }

  benchmark_group!(do_bench, bench_last);

  fn bench_last(b: &mut Bencher) { b.iter(last_or_hundered_items); }
}

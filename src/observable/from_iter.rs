use crate::prelude::*;
use std::{
  iter::{Repeat, Take},
  marker::PhantomData,
  ops::RangeFrom,
};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error. The
/// error type is free so the source can join chains with any error type.
///
/// # Arguments
///
/// * `iter` - An iterator to get all the values from.
///
/// # Examples
///
/// A simple example for a range:
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter(0..10)
///   .subscribe(|v| {println!("{},", v)});
/// ```
///
/// Or with a vector:
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter(vec![0,1,2,3])
///   .subscribe(|v| {println!("{},", v)});
/// ```
pub fn from_iter<Iter, Err>(iter: Iter) -> ObservableIter<Iter, Err>
where
  Iter: IntoIterator,
{
  ObservableIter(iter, PhantomData)
}

pub struct ObservableIter<Iter, Err>(Iter, PhantomData<Err>);

impl<Iter: Clone, Err> Clone for ObservableIter<Iter, Err> {
  fn clone(&self) -> Self { ObservableIter(self.0.clone(), PhantomData) }
}

impl<'a, Iter, Err> Observable<'a> for ObservableIter<Iter, Err>
where
  Iter: IntoIterator,
{
  type Item = Iter::Item;
  type Err = Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    mut subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Iter::Item, Err> + 'a,
  {
    let subscription = subscriber.subscription.clone();
    for v in self.0 {
      if subscriber.is_closed() {
        break;
      }
      subscriber.next(v);
    }
    subscriber.complete();
    subscription
  }
}

/// Creates an observable producing same value repeated N times.
///
/// Completes immediately after emitting N values. Never emits an error.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::repeat(123, 3)
///   .subscribe(|v| {println!("{},", v)});
///
/// // print log:
/// // 123
/// // 123
/// // 123
/// ```
pub fn repeat<Item, Err>(
  v: Item,
  n: usize,
) -> ObservableIter<Take<Repeat<Item>>, Err>
where
  Item: Clone,
{
  from_iter(std::iter::repeat(v).take(n))
}

/// Creates an observable emitting `count` consecutive integers starting at
/// `start`, synchronously, then completing.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::range(5, 3)
///   .subscribe(|v| {println!("{},", v)});
///
/// // print log:
/// // 5
/// // 6
/// // 7
/// ```
pub fn range<Err>(
  start: i32,
  count: usize,
) -> ObservableIter<Take<RangeFrom<i32>>, Err> {
  from_iter((start..).take(count))
}

pub mod combine_latest;
pub mod filter;
pub mod flatten;
pub mod last;
pub mod map;
pub mod merge;
pub mod on_error_resume_next;
pub mod retry;
pub mod scan;
pub mod take;
pub mod take_until;
pub mod try_map;

use crate::observable::Observable;
use flatten::FlattenOp;
use last::{Last, LastOrOp};
use map::MapOp;
use scan::{Scan, ScanOp};

/// A composition of `scan` followed by `last`
pub type ReduceOp<Source, BinaryOp, OutputItem> =
  LastOrOp<ScanOp<Source, BinaryOp, OutputItem>, OutputItem>;

/// A composition of `map` followed by `flatten`
pub type FlatMapOp<Source, F, Inner> = FlattenOp<MapOp<Source, F>, Inner>;

pub trait Reduce<'a, OutputItem> {
  /// Applies a binary operator closure to each item emitted from source
  /// observable and emits the final accumulated value once the source
  /// completes. Emits nothing but the error if the source errors first.
  ///
  /// This version starts the accumulation from a user-supplied initial
  /// value, which is also what an empty source reduces to.
  fn reduce_initial<InputItem, BinaryOp>(
    self,
    initial: OutputItem,
    binary_op: BinaryOp,
  ) -> ReduceOp<Self, BinaryOp, OutputItem>
  where
    Self: Observable<'a, Item = InputItem> + Sized,
    BinaryOp: FnMut(OutputItem, InputItem) -> OutputItem + 'a,
    OutputItem: Clone + 'a,
  {
    // realised by the scan->last composition
    self.scan_initial(initial.clone(), binary_op).last_or(initial)
  }

  /// Works like [`Reduce::reduce_initial`] with the accumulator's
  /// [`Default`] value as the starting point.
  fn reduce<InputItem, BinaryOp>(
    self,
    binary_op: BinaryOp,
  ) -> ReduceOp<Self, BinaryOp, OutputItem>
  where
    Self: Observable<'a, Item = InputItem> + Sized,
    BinaryOp: FnMut(OutputItem, InputItem) -> OutputItem + 'a,
    OutputItem: Default + Clone + 'a,
  {
    self.reduce_initial(OutputItem::default(), binary_op)
  }
}

impl<'a, O, OutputItem> Reduce<'a, OutputItem> for O where O: Observable<'a>
{}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn reduce_initial() {
    let mut emitted = 0;
    observable::from_iter(vec![1, 1, 1, 1, 1])
      .reduce_initial(100, |acc, v| acc + v)
      .subscribe(|v| emitted = v);

    assert_eq!(105, emitted);
  }

  #[test]
  fn reduce_initial_on_empty_observable() {
    let mut emitted = 0;
    observable::empty()
      .reduce_initial(100, |acc, v: i32| acc + v)
      .subscribe(|v| emitted = v);

    // expected to emit the initial value
    assert_eq!(100, emitted);
  }

  #[test]
  fn reduce() {
    let mut emitted = 0;
    observable::from_iter(vec![1, 1, 1, 1, 1])
      .reduce(|acc, v| acc + v)
      .subscribe(|v| emitted = v);

    assert_eq!(5, emitted);
  }

  #[test]
  fn reduce_on_empty_observable() {
    let mut emitted = 0;
    observable::empty()
      .reduce(|acc, v: i32| acc + v)
      .subscribe(|v| emitted = v);

    assert_eq!(0, emitted);
  }

  #[test]
  fn reduce_emits_exactly_once_at_completion() {
    let mut emissions = vec![];
    let mut scanned = vec![];

    observable::from_iter(1..=4)
      .scan(|acc: i32, v| acc + v)
      .subscribe(|v| scanned.push(v));
    observable::from_iter(1..=4)
      .reduce(|acc: i32, v| acc + v)
      .subscribe(|v| emissions.push(v));

    assert_eq!(scanned, vec![1, 3, 6, 10]);
    // reduce emits only the final accumulated value
    assert_eq!(emissions, vec![10]);
    assert_eq!(emissions.last(), scanned.last());
  }

  #[test]
  fn reduce_for_counting_total_length() {
    let mut emitted = 0;
    observable::from_iter(vec![String::from("foo"), String::from("bar")])
      .reduce(|acc, v: String| acc + v.len())
      .subscribe(|v| emitted = v);

    assert_eq!(6, emitted);
  }
}

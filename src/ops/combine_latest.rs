use crate::prelude::*;

pub trait CombineLatest<'a> {
  /// Combines the latest values of two observables: once both inputs have
  /// emitted at least once, every emission from either side produces the
  /// result of `binary_op` applied to both cached latest values.
  ///
  /// Completes when both inputs have completed; errors as soon as either
  /// input errors.
  fn combine_latest<S, BinaryOp, OutputItem, A, B>(
    self,
    other: S,
    binary_op: BinaryOp,
  ) -> CombineLatestOp<Self, S, BinaryOp>
  where
    Self: Observable<'a, Item = A> + Sized,
    S: Observable<'a, Item = B>,
    BinaryOp: FnMut(A, B) -> OutputItem,
  {
    CombineLatestOp {
      a: self,
      b: other,
      binary_op,
    }
  }
}

impl<'a, O> CombineLatest<'a> for O where O: Observable<'a> {}

#[derive(Clone)]
pub struct CombineLatestOp<A, B, BinaryOp> {
  a: A,
  b: B,
  binary_op: BinaryOp,
}

impl<'a, A, B, BinaryOp, OutputItem> Observable<'a>
  for CombineLatestOp<A, B, BinaryOp>
where
  A: Observable<'a>,
  B: Observable<'a, Err = A::Err>,
  BinaryOp: FnMut(A::Item, B::Item) -> OutputItem + 'a,
  A::Item: Clone + 'a,
  B::Item: Clone + 'a,
{
  type Item = OutputItem;
  type Err = A::Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<OutputItem, A::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    let shared = MutRc::own(CombineLatestObserver {
      observer,
      subscription: subscription.clone(),
      a: None,
      b: None,
      binary_op: self.binary_op,
      completed_one: false,
    });

    let first = LocalSubscription::default();
    subscription.add(first.clone());
    first.add(self.a.actual_subscribe(Subscriber {
      observer: AObserver(shared.clone()),
      subscription: first.clone(),
    }));

    if !subscription.is_closed() {
      let second = LocalSubscription::default();
      subscription.add(second.clone());
      second.add(self.b.actual_subscribe(Subscriber {
        observer: BObserver(shared),
        subscription: second.clone(),
      }));
    }
    subscription
  }
}

enum CombineItem<A, B> {
  ItemA(A),
  ItemB(B),
}

struct CombineLatestObserver<O, A, B, BinaryOp> {
  observer: O,
  subscription: LocalSubscription,
  a: Option<A>,
  b: Option<B>,
  binary_op: BinaryOp,
  completed_one: bool,
}

impl<O, A, B, OutputItem, BinaryOp, Err> Observer<CombineItem<A, B>, Err>
  for CombineLatestObserver<O, A, B, BinaryOp>
where
  O: Observer<OutputItem, Err>,
  BinaryOp: FnMut(A, B) -> OutputItem,
  A: Clone,
  B: Clone,
{
  fn next(&mut self, value: CombineItem<A, B>) {
    match value {
      CombineItem::ItemA(v) => {
        self.a = Some(v);
      }
      CombineItem::ItemB(v) => {
        self.b = Some(v);
      }
    }
    if let (Some(a), Some(b)) = (self.a.clone(), self.b.clone()) {
      self.observer.next((self.binary_op)(a, b));
    }
  }

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

struct AObserver<O, A, B, F>(MutRc<CombineLatestObserver<O, A, B, F>>);

impl<O, A, B, F, OutputItem, Err> Observer<A, Err> for AObserver<O, A, B, F>
where
  O: Observer<OutputItem, Err>,
  F: FnMut(A, B) -> OutputItem,
  A: Clone,
  B: Clone,
{
  #[inline]
  fn next(&mut self, value: A) { self.0.next(CombineItem::ItemA(value)); }

  #[inline]
  fn error(&mut self, err: Err) { self.0.error(err) }

  #[inline]
  fn complete(&mut self) { self.0.complete() }
}

struct BObserver<O, A, B, F>(MutRc<CombineLatestObserver<O, A, B, F>>);

impl<O, A, B, F, OutputItem, Err> Observer<B, Err> for BObserver<O, A, B, F>
where
  O: Observer<OutputItem, Err>,
  F: FnMut(A, B) -> OutputItem,
  A: Clone,
  B: Clone,
{
  #[inline]
  fn next(&mut self, value: B) { self.0.next(CombineItem::ItemB(value)); }

  #[inline]
  fn error(&mut self, err: Err) { self.0.error(err) }

  #[inline]
  fn complete(&mut self) { self.0.complete() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use std::{cell::RefCell, rc::Rc};

  #[test]
  fn emits_nothing_until_both_sides_emitted() {
    let emitted = Rc::new(RefCell::new(vec![]));
    let c_emitted = emitted.clone();

    let mut a = Subject::new();
    let mut b = Subject::new();

    a.clone()
      .combine_latest(b.clone(), |a, b| (a, b))
      .subscribe(move |v| c_emitted.borrow_mut().push(v));

    a.next(1);
    a.next(2);
    assert!(emitted.borrow().is_empty());

    b.next('x');
    assert_eq!(*emitted.borrow(), vec![(2, 'x')]);
  }

  #[test]
  fn pairs_latest_values() {
    let emitted = Rc::new(RefCell::new(vec![]));
    let c_emitted = emitted.clone();

    let mut a = Subject::new();
    let mut b = Subject::new();

    a.clone()
      .combine_latest(b.clone(), |a, b| (a, b))
      .subscribe(move |v| c_emitted.borrow_mut().push(v));

    a.next(1);
    b.next('x');
    a.next(2);
    b.next('y');

    assert_eq!(*emitted.borrow(), vec![(1, 'x'), (2, 'x'), (2, 'y')]);
  }

  #[test]
  fn complete_when_all_inputs_completed() {
    let completed = Rc::new(RefCell::new(false));
    let c_completed = completed.clone();

    let mut a = Subject::new();
    let mut b = Subject::new();

    a.clone()
      .combine_latest(b.clone(), |a: i32, b: i32| a + b)
      .subscribe_complete(|_| {}, move || *c_completed.borrow_mut() = true);

    a.complete();
    assert!(!*completed.borrow());
    b.complete();
    assert!(*completed.borrow());
  }

  #[test]
  fn error_from_either_input_terminates() {
    let errors = Rc::new(RefCell::new(0));
    let hits = Rc::new(RefCell::new(0));
    let c_errors = errors.clone();
    let c_hits = hits.clone();

    let mut a = Subject::new();
    let mut b = Subject::new();

    a.clone()
      .combine_latest(b.clone(), |a: i32, b: i32| a + b)
      .subscribe_err(
        move |_| *c_hits.borrow_mut() += 1,
        move |_: &str| *c_errors.borrow_mut() += 1,
      );

    a.next(1);
    b.error("broken");
    a.next(2);
    b.clone().error("again");

    assert_eq!(*hits.borrow(), 0);
    assert_eq!(*errors.borrow(), 1);
  }

  #[test]
  fn timed_pairing_on_virtual_time() {
    let scheduler = ManualScheduler::new();
    let emitted = Rc::new(RefCell::new(vec![]));
    let c_emitted = emitted.clone();

    observable::interval(Duration::from_millis(2), scheduler.clone())
      .combine_latest(
        observable::interval(Duration::from_millis(3), scheduler.clone()),
        |a, b| (a, b),
      )
      .take(5)
      .subscribe(move |v| c_emitted.borrow_mut().push(v));

    scheduler.advance(Duration::from_millis(10));
    assert_eq!(
      *emitted.borrow(),
      vec![(0, 0), (1, 0), (2, 0), (2, 1), (3, 1)]
    );
  }
}

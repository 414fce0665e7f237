use crate::ops::map::Map;
use crate::prelude::*;
use std::marker::PhantomData;

/// Operator to merge an Observable of Observables.
pub trait Flatten<'a, Inner> {
  /// Subscribes every observable the source emits and interleaves their
  /// values into one output stream. The output completes only once the
  /// source and every subscribed inner observable have completed; the first
  /// error from any of them terminates everything.
  fn flatten(self) -> FlattenOp<Self, Inner>
  where
    Self: Sized,
  {
    FlattenOp {
      source: self,
      marker: PhantomData,
    }
  }
}

impl<'a, Inner, O> Flatten<'a, Inner> for O where
  O: Observable<'a, Item = Inner>
{
}

pub trait FlatMap<'a, Item> {
  /// Maps each source value to an observable and flattens the results.
  fn flat_map<Inner, F>(self, f: F) -> FlatMapOp<Self, F, Inner>
  where
    Self: Observable<'a, Item = Item> + Sized,
    F: FnMut(Item) -> Inner + 'a,
  {
    self.map(f).flatten()
  }
}

impl<'a, Item, O> FlatMap<'a, Item> for O where O: Observable<'a, Item = Item>
{}

#[derive(Clone)]
pub struct FlattenOp<S, Inner> {
  source: S,
  marker: PhantomData<Inner>,
}

/// Keeps track of how many observables are being observed at any point in
/// time.
///
/// Because we are subscribed to an Observable of Observables we need to keep
/// track of every new Observable that is emitted from the source Observable.
struct FlattenState {
  total: u64,
  done: u64,
  is_completed: bool,
}

impl FlattenState {
  /// Indicates if a completion of emissions has been detected. This happens
  /// when the number of new Observables is the same as the number of
  /// completed Observables.
  fn is_completed(&self) -> bool { self.is_completed }

  /// Records the registration of a new Observable.
  fn register_new_observable(&mut self) {
    if self.is_completed {
      return;
    }
    self.total += 1;
  }

  /// Records the signaling of an error from any registered Observable.
  /// Returns whether the error should reach the observer.
  fn register_observable_error(&mut self) -> bool {
    if self.is_completed {
      false
    } else {
      self.is_completed = true;
      true
    }
  }

  /// Records the signaling of completion from any registered Observable.
  /// Returns whether the observer should be completed.
  fn register_observable_completed(&mut self) -> bool {
    if self.is_completed {
      return false;
    }

    self.done += 1;

    if self.total == self.done {
      self.is_completed = true;
      true
    } else {
      false
    }
  }
}

impl Default for FlattenState {
  fn default() -> Self {
    FlattenState {
      // when this record is created, we are subscribing to an observable of
      // observables, so it must be accounted for from the get-go
      total: 1,
      done: 0,
      is_completed: false,
    }
  }
}

/// This is an `Observer` for items of an `Observable` that is emitted from a
/// parent `Observable`.
pub struct FlattenInnerObserver<O> {
  observer: O,
  subscription: LocalSubscription,
  state: MutRc<FlattenState>,
}

impl<Item, Err, O> Observer<Item, Err> for FlattenInnerObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let live = !self.state.rc_deref().is_completed();
    if live {
      self.observer.next(value);
    }
  }

  fn error(&mut self, err: Err) {
    let report = self.state.rc_deref_mut().register_observable_error();
    if report {
      self.observer.error(err);
      self.subscription.unsubscribe();
    }
  }

  fn complete(&mut self) {
    let report = self.state.rc_deref_mut().register_observable_completed();
    if report {
      self.observer.complete();
      self.subscription.unsubscribe();
    }
  }
}

/// This is an `Observer` for `Observable` values that get emitted by a
/// parent `Observable`.
pub struct FlattenOuterObserver<'a, Inner, O> {
  marker: PhantomData<&'a Inner>,
  inner_observer: MutRc<FlattenInnerObserver<O>>,
  subscription: LocalSubscription,
  state: MutRc<FlattenState>,
}

impl<'a, Inner, O, Err> Observer<Inner, Err>
  for FlattenOuterObserver<'a, Inner, O>
where
  Inner: Observable<'a, Err = Err> + 'a,
  O: Observer<Inner::Item, Err> + 'a,
{
  fn next(&mut self, value: Inner) {
    // increase count of registered Observables to keep track
    // of observable completion
    self.state.rc_deref_mut().register_new_observable();

    let inner_lane = LocalSubscription::default();
    self.subscription.add(inner_lane.clone());
    inner_lane.add(value.actual_subscribe(Subscriber {
      observer: self.inner_observer.clone(),
      subscription: inner_lane.clone(),
    }));
  }

  fn error(&mut self, err: Err) { self.inner_observer.error(err) }

  fn complete(&mut self) { self.inner_observer.complete() }
}

impl<'a, Outer, Inner> Observable<'a> for FlattenOp<Outer, Inner>
where
  Outer: Observable<'a, Item = Inner, Err = Inner::Err>,
  Inner: Observable<'a> + 'a,
{
  type Item = Inner::Item;
  type Err = Inner::Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Inner::Item, Inner::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    let state = MutRc::own(FlattenState::default());

    let inner_observer = MutRc::own(FlattenInnerObserver {
      observer,
      subscription: subscription.clone(),
      state: state.clone(),
    });

    let outer_observer = FlattenOuterObserver {
      marker: PhantomData,
      inner_observer,
      subscription: subscription.clone(),
      state,
    };

    // the outer source lives in its own lane: its completion must not tear
    // down inner subscriptions that are still running
    let outer_lane = LocalSubscription::default();
    subscription.add(outer_lane.clone());
    outer_lane.add(self.source.actual_subscribe(Subscriber {
      observer: outer_observer,
      subscription: outer_lane.clone(),
    }));

    subscription
  }
}

use crate::prelude::*;
use std::marker::PhantomData;

/// Creates an observable that emits nothing and completes immediately.
pub fn empty<Item, Err>() -> EmptyObservable<Item, Err> {
  EmptyObservable(PhantomData)
}

pub struct EmptyObservable<Item, Err>(PhantomData<(Item, Err)>);

impl<Item, Err> Clone for EmptyObservable<Item, Err> {
  fn clone(&self) -> Self { EmptyObservable(PhantomData) }
}

impl<'a, Item, Err> Observable<'a> for EmptyObservable<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    mut subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    let subscription = subscriber.subscription.clone();
    subscriber.complete();
    subscription
  }
}

/// Creates an observable that emits the given error immediately.
pub fn throw<Item, Err>(err: Err) -> ThrowObservable<Item, Err> {
  ThrowObservable(err, PhantomData)
}

pub struct ThrowObservable<Item, Err>(Err, PhantomData<Item>);

impl<Item, Err: Clone> Clone for ThrowObservable<Item, Err> {
  fn clone(&self) -> Self { ThrowObservable(self.0.clone(), PhantomData) }
}

impl<'a, Item, Err> Observable<'a> for ThrowObservable<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    mut subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    let subscription = subscriber.subscription.clone();
    subscriber.error(self.0);
    subscription
  }
}

/// Creates an observable that never notifies its observer at all.
pub fn never<Item, Err>() -> NeverObservable<Item, Err> {
  NeverObservable(PhantomData)
}

pub struct NeverObservable<Item, Err>(PhantomData<(Item, Err)>);

impl<Item, Err> Clone for NeverObservable<Item, Err> {
  fn clone(&self) -> Self { NeverObservable(PhantomData) }
}

impl<'a, Item, Err> Observable<'a> for NeverObservable<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    subscriber.subscription
  }
}

use crate::observer::Observer;
use crate::subscription::SubscriptionLike;
use std::{
  cell::{Ref, RefCell, RefMut},
  rc::Rc,
};

pub trait RcDeref {
  type Target<'a>
  where
    Self: 'a;
  fn rc_deref(&self) -> Self::Target<'_>;
}

pub trait RcDerefMut {
  type Target<'a>
  where
    Self: 'a;
  fn rc_deref_mut(&self) -> Self::Target<'_>;
}

/// Shared mutable ownership for operator state: a thin wrapper over
/// `Rc<RefCell<T>>` that forwards the observer and subscription traits to the
/// inner value.
#[derive(Default)]
pub struct MutRc<T>(Rc<RefCell<T>>);

impl<T> MutRc<T> {
  pub fn own(t: T) -> Self { Self(Rc::new(RefCell::new(t))) }
}

impl<T> RcDeref for MutRc<T> {
  type Target<'a>
    = Ref<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref(&self) -> Self::Target<'_> { self.0.borrow() }
}

impl<T> RcDerefMut for MutRc<T> {
  type Target<'a>
    = RefMut<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref_mut(&self) -> Self::Target<'_> { self.0.borrow_mut() }
}

impl<Item, Err, T> Observer<Item, Err> for MutRc<T>
where
  T: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) { self.rc_deref_mut().next(value) }
  fn error(&mut self, err: Err) { self.rc_deref_mut().error(err); }
  fn complete(&mut self) { self.rc_deref_mut().complete(); }
}

impl<T: SubscriptionLike> SubscriptionLike for MutRc<T> {
  #[inline]
  fn unsubscribe(&mut self) { self.rc_deref_mut().unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.rc_deref().is_closed() }
}

impl<T> Clone for MutRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

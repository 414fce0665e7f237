use crate::observer::Observer;
use crate::subscriber::Subscriber;
use crate::subscription::{LocalSubscription, SubscriptionLike};

mod from_fn;
pub use from_fn::*;
mod from_iter;
pub use from_iter::*;
mod of;
pub use of::*;
mod trivial;
pub use trivial::*;
mod interval;
pub use interval::*;
mod timer;
pub use timer::*;

mod observable_all;
pub use observable_all::*;
mod observable_comp;
pub use observable_comp::*;
mod observable_err;
pub use observable_err::*;
mod observable_next;
pub use observable_next::*;

/// A representation of any set of values over any amount of time. This is the
/// most basic building block of the crate.
///
/// An observable is an immutable description of how to produce a sequence of
/// notifications. Subscribing consumes the description, so a *cold* source is
/// re-run per subscription by cloning it first; subjects share one live
/// execution instead.
///
/// The lifetime parameter bounds the observers a source accepts. Sources
/// whose observers are handed to scheduled tasks implement
/// `Observable<'static>` only.
pub trait Observable<'a> {
  type Item;
  type Err;
  type Unsub: SubscriptionLike + 'static;

  /// Invokes an execution of this observable, delivering its notifications
  /// to `subscriber`. The subscriber's subscription gates delivery: once it
  /// closes, nothing more is forwarded.
  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<Self::Item, Self::Err> + 'a;
}

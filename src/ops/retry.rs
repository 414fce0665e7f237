use crate::prelude::*;
use std::marker::PhantomData;

/// Resubscribes to the source observable when it errors.
pub trait Retry<'a> {
  /// On an error from the current subscription, drops the failed
  /// subscription and re-subscribes the source from scratch, at most
  /// `retries` times. Since sources are cold, every attempt re-runs the
  /// producer's side effects. Once the attempts are used up the last error
  /// is propagated downstream.
  ///
  /// `retry(2)` therefore allows up to three subscription attempts: the
  /// initial one plus two retries.
  fn retry(self, retries: usize) -> RetryOp<Self>
  where
    Self: Sized,
  {
    RetryOp { source: self, retries }
  }
}

impl<'a, O> Retry<'a> for O where O: Observable<'a> {}

#[derive(Clone)]
pub struct RetryOp<S> {
  source: S,
  retries: usize,
}

struct RetryState<S, O> {
  source: S,
  observer: O,
  remaining: usize,
}

pub struct RetryObserver<'a, S, O> {
  state: MutRc<RetryState<S, O>>,
  subscription: LocalSubscription,
  _marker: PhantomData<&'a ()>,
}

impl<'a, S, O> Observer<S::Item, S::Err> for RetryObserver<'a, S, O>
where
  S: Observable<'a> + Clone + 'a,
  O: Observer<S::Item, S::Err> + 'a,
{
  fn next(&mut self, value: S::Item) {
    self.state.rc_deref_mut().observer.next(value);
  }

  fn error(&mut self, err: S::Err) {
    let can_retry = {
      let mut state = self.state.rc_deref_mut();
      if state.remaining > 0 {
        state.remaining -= 1;
        true
      } else {
        false
      }
    };
    if can_retry {
      subscribe_attempt(&self.state, &self.subscription);
    } else {
      self.state.rc_deref_mut().observer.error(err);
      self.subscription.unsubscribe();
    }
  }

  fn complete(&mut self) {
    self.state.rc_deref_mut().observer.complete();
    self.subscription.unsubscribe();
  }
}

fn subscribe_attempt<'a, S, O>(
  state: &MutRc<RetryState<S, O>>,
  parent: &LocalSubscription,
) where
  S: Observable<'a> + Clone + 'a,
  O: Observer<S::Item, S::Err> + 'a,
{
  let source = state.rc_deref().source.clone();
  let attempt = LocalSubscription::default();
  parent.add(attempt.clone());
  attempt.add(source.actual_subscribe(Subscriber {
    observer: RetryObserver {
      state: state.clone(),
      subscription: parent.clone(),
      _marker: PhantomData,
    },
    subscription: attempt.clone(),
  }));
}

impl<'a, S> Observable<'a> for RetryOp<S>
where
  S: Observable<'a> + Clone + 'a,
{
  type Item = S::Item;
  type Err = S::Err;
  type Unsub = LocalSubscription;

  fn actual_subscribe<O>(
    self,
    subscriber: Subscriber<O, LocalSubscription>,
  ) -> Self::Unsub
  where
    O: Observer<S::Item, S::Err> + 'a,
  {
    let Subscriber { observer, subscription } = subscriber;
    let state = MutRc::own(RetryState {
      source: self.source,
      observer,
      remaining: self.retries,
    });
    subscribe_attempt(&state, &subscription);
    subscription
  }
}

use crate::prelude::*;
use std::marker::PhantomData;

/// Continues with a fallback observable when the source errors.
pub trait OnErrorResumeNext<'a> {
  /// On an error from the source, drops the failed subscription, swallows
  /// the error and subscribes `fallback` instead, forwarding its
  /// notifications as the tail of the stream. Never invoked when the
  /// source completes successfully.
  fn on_error_resume_next<F>(self, fallback: F) -> OnErrorResumeNextOp<Self, F>
  where
    Self: Sized,
  {
    OnErrorResumeNextOp { source: self, fallback }
  }
}

impl<'a, O> OnErrorResumeNext<'a> for O where O: Observable<'a> {}

#[derive(Clone)]
pub struct OnErrorResumeNextOp<S, F> {
  source: S,
  fallback: F,
}

struct ResumeNextState<F, O> {
  fallback: Option<F>,
  observer: Option<O>,
}

pub struct ResumeNextObserver<'a, F, O> {
  state: MutRc<ResumeNextState<F, O>>,
  subscription: LocalSubscription,
  _marker: PhantomData<&'a ()>,
}

impl<'a, Item, Err, F, O> Observer<Item, Err> for ResumeNextObserver<'a, F, O>
where
  F: Observable<'a, Item = Item, Err = Err> + 'a,
  O: Observer<Item, Err> + 'a,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.state.rc_deref_mut().observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, _err: Err) {
    let taken = {
      let mut state = self.state.rc_deref_mut();
      state.fallback.take().zip(state.observer.take())
    };
    if let Some((fallback, observer)) = taken {
      let tail = LocalSubscription::default();
      self.subscription.add(tail.clone());
      tail.add(fallback.actual_subscribe(Subscriber {
        observer,
        subscription: tail.clone(),
      }));
    }
  }

  fn complete(&mut self) {
    if let Some(mut observer) = self.state.rc_deref_mut().observer.take() {
      observer.complete();
    }
    self.subscription.unsubscribe();
  }
}

impl<'a, S, F> Observable<'a> for OnErrorResumeNextOp<S, F>
where
  S: Observable<'a>,
  F: Observable<'a, Item = S::Item, Err = S::Err> + 'a,
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
    let state = MutRc::own(ResumeNextState {
      fallback: Some(self.fallback),
      observer: Some(observer),
    });

    let primary = LocalSubscription::default();
    subscription.add(primary.clone());
    primary.add(self.source.actual_subscribe(Subscriber {
      observer: ResumeNextObserver {
        state,
        subscription: subscription.clone(),
        _marker: PhantomData,
      },
      subscription: primary.clone(),
    }));
    subscription
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn fallback_takes_over_on_error() {
    let mut collected = vec![];
    let mut errors = 0;
    let mut completed = 0;

    observable::create(|subscriber| {
      subscriber.next(1);
      subscriber.error("broken");
      subscriber.next(99);
    })
    .on_error_resume_next(observable::from_iter(vec![8, 9]))
    .subscribe_all(
      |v| collected.push(v),
      |_: &str| errors += 1,
      || completed += 1,
    );

    // primary values up to the error, then exactly the fallback's tail
    assert_eq!(collected, vec![1, 8, 9]);
    assert_eq!(errors, 0);
    assert_eq!(completed, 1);
  }

  #[test]
  fn fallback_unused_on_success() {
    let mut collected = vec![];
    let mut completed = 0;

    observable::from_iter(vec![1, 2])
      .on_error_resume_next(observable::from_iter(vec![8, 9]))
      .subscribe_complete(|v| collected.push(v), || completed += 1);

    assert_eq!(collected, vec![1, 2]);
    assert_eq!(completed, 1);
  }

  #[test]
  fn immediate_error_yields_only_fallback() {
    let mut collected = vec![];
    let mut completed = 0;

    observable::throw("nope")
      .on_error_resume_next(observable::of(42))
      .subscribe_all(|v| collected.push(v), |_: &str| {}, || completed += 1);

    assert_eq!(collected, vec![42]);
    assert_eq!(completed, 1);
  }

  #[test]
  fn fallback_error_still_surfaces() {
    let mut errors = 0;

    observable::throw::<i32, _>("first")
      .on_error_resume_next(observable::throw("second"))
      .subscribe_err(|_| {}, |e| {
        assert_eq!(e, "second");
        errors += 1;
      });

    assert_eq!(errors, 1);
  }
}

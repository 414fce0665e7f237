use crate::prelude::*;

/// Emits the values emitted by the source Observable until a `notifier`
/// Observable emits or completes.
pub trait TakeUntil<'a> {
  /// The output mirrors the source until the notifier first emits a value
  /// or completes; at that point one completion is emitted downstream and
  /// the source subscription is disposed. A source terminal likewise
  /// disposes the notifier subscription. Errors of the notifier itself are
  /// ignored.
  fn take_until<N>(self, notifier: N) -> TakeUntilOp<Self, N>
  where
    Self: Sized,
  {
    TakeUntilOp { source: self, notifier }
  }
}

impl<'a, O> TakeUntil<'a> for O where O: Observable<'a> {}

#[derive(Clone)]
pub struct TakeUntilOp<S, N> {
  source: S,
  notifier: N,
}

struct TakeUntilState<O> {
  observer: O,
  subscription: LocalSubscription,
}

fn complete_downstream<Item, Err, O>(state: &mut TakeUntilState<O>)
where
  O: Observer<Item, Err>,
{
  state.observer.complete();
  state.subscription.unsubscribe();
}

/// Observer for the source observable
pub struct TakeUntilObserver<O> {
  state: MutRc<TakeUntilState<O>>,
}

impl<Item, Err, O> Observer<Item, Err> for TakeUntilObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    self.state.rc_deref_mut().observer.next(value);
  }

  fn error(&mut self, err: Err) {
    let mut state = self.state.rc_deref_mut();
    state.observer.error(err);
    state.subscription.unsubscribe();
  }

  fn complete(&mut self) {
    let mut state = self.state.rc_deref_mut();
    state.observer.complete();
    state.subscription.unsubscribe();
  }
}

/// Observer for the notifier observable
///
/// Uses a function pointer to erase the source's Item/Err types while
/// keeping the ability to complete the underlying observer.
pub struct TakeUntilNotifierObserver<O> {
  state: MutRc<TakeUntilState<O>>,
  complete_fn: fn(&mut TakeUntilState<O>),
}

impl<NotifyItem, NotifyErr, O> Observer<NotifyItem, NotifyErr>
  for TakeUntilNotifierObserver<O>
{
  fn next(&mut self, _value: NotifyItem) {
    (self.complete_fn)(&mut self.state.rc_deref_mut());
  }

  fn error(&mut self, _err: NotifyErr) {
    // notifier errors carry no completion signal
  }

  fn complete(&mut self) {
    (self.complete_fn)(&mut self.state.rc_deref_mut());
  }
}

impl<'a, S, N> Observable<'a> for TakeUntilOp<S, N>
where
  S: Observable<'a>,
  N: Observable<'a>,
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
    let state = MutRc::own(TakeUntilState {
      observer,
      subscription: subscription.clone(),
    });

    // notifier goes first so an immediately firing notifier stops the
    // source before it produces anything
    let notifier_lane = LocalSubscription::default();
    subscription.add(notifier_lane.clone());
    notifier_lane.add(self.notifier.actual_subscribe(Subscriber {
      observer: TakeUntilNotifierObserver {
        state: state.clone(),
        complete_fn: complete_downstream::<S::Item, S::Err, O>,
      },
      subscription: notifier_lane.clone(),
    }));

    if !subscription.is_closed() {
      let source_lane = LocalSubscription::default();
      subscription.add(source_lane.clone());
      source_lane.add(self.source.actual_subscribe(Subscriber {
        observer: TakeUntilObserver { state },
        subscription: source_lane.clone(),
      }));
    }
    subscription
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use std::{cell::RefCell, rc::Rc};

  #[test]
  fn take_until_emits_until_notifier_emits() {
    let result = Rc::new(RefCell::new(Vec::new()));
    let result_clone = result.clone();

    let mut notifier: Subject<'_, (), ()> = Subject::new();
    let mut source = Subject::new();

    source
      .clone()
      .take_until(notifier.clone())
      .subscribe(move |v| result_clone.borrow_mut().push(v));

    source.next(1);
    source.next(2);
    notifier.next(());
    source.next(3);

    assert_eq!(*result.borrow(), vec![1, 2]);
  }

  #[test]
  fn take_until_complete() {
    let completed = Rc::new(RefCell::new(false));
    let completed_clone = completed.clone();

    let mut notifier: Subject<'_, (), ()> = Subject::new();
    let mut source = Subject::new();

    source
      .clone()
      .take_until(notifier.clone())
      .subscribe_complete(|_: i32| {}, move || {
        *completed_clone.borrow_mut() = true
      });

    source.next(1);
    notifier.next(());

    assert!(*completed.borrow());
  }

  #[test]
  fn take_until_source_complete_disposes_notifier() {
    let completed = Rc::new(RefCell::new(false));
    let completed_clone = completed.clone();

    let notifier: Subject<'_, (), ()> = Subject::new();
    let mut source = Subject::new();

    source
      .clone()
      .take_until(notifier.clone())
      .subscribe_complete(|_: i32| {}, move || {
        *completed_clone.borrow_mut() = true
      });

    source.next(1);
    source.complete();

    assert!(*completed.borrow());
    // the notifier's registration went inert with the chain and is pruned
    // on its next broadcast
    notifier.clone().next(());
    assert_eq!(notifier.subscribed_size(), 0);
  }

  #[test]
  fn notifier_complete_ends_the_stream() {
    let result = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(RefCell::new(false));
    let result_clone = result.clone();
    let completed_clone = completed.clone();

    let mut notifier: Subject<'_, (), ()> = Subject::new();
    let mut source = Subject::new();

    source
      .clone()
      .take_until(notifier.clone())
      .subscribe_complete(
        move |v| result_clone.borrow_mut().push(v),
        move || *completed_clone.borrow_mut() = true,
      );

    source.next(1);
    notifier.complete();
    source.next(2);

    assert_eq!(*result.borrow(), vec![1]);
    assert!(*completed.borrow());
  }

  #[test]
  fn timed_cutoff_on_virtual_time() {
    let scheduler = ManualScheduler::new();
    let result = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(RefCell::new(0));
    let result_clone = result.clone();
    let completed_clone = completed.clone();

    observable::interval(Duration::from_millis(100), scheduler.clone())
      .take_until(observable::timer(
        (),
        Duration::from_millis(350),
        scheduler.clone(),
      ))
      .subscribe_complete(
        move |v| result_clone.borrow_mut().push(v),
        move || *completed_clone.borrow_mut() += 1,
      );

    scheduler.advance(Duration::from_millis(1000));

    // ticks at 100/200/300 pass, the cutoff at 350 completes the stream
    assert_eq!(*result.borrow(), vec![0, 1, 2]);
    assert_eq!(*completed.borrow(), 1);
  }
}

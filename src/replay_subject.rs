use crate::prelude::*;

/// A [`Subject`] that additionally records every value it has seen and
/// replays the recording, synchronously and in order, to each new subscriber
/// before the subscriber joins the live set. A recorded terminal
/// notification is replayed as well; the subscriber is not registered in
/// that case.
pub struct ReplaySubject<'a, Item, Err> {
  subject: Subject<'a, Item, Err>,
  buffer: MutRc<ReplayBuffer<Item, Err>>,
}

struct ReplayBuffer<Item, Err> {
  values: Vec<Item>,
  terminal: Option<ReplayTerminal<Err>>,
}

#[derive(Clone)]
enum ReplayTerminal<Err> {
  Error(Err),
  Completed,
}

impl<'a, Item, Err> ReplaySubject<'a, Item, Err> {
  pub fn new() -> Self { Self::default() }

  pub fn subscribed_size(&self) -> usize { self.subject.subscribed_size() }
}

impl<'a, Item, Err> Default for ReplaySubject<'a, Item, Err> {
  fn default() -> Self {
    ReplaySubject {
      subject: Subject::default(),
      buffer: MutRc::own(ReplayBuffer { values: vec![], terminal: None }),
    }
  }
}

impl<'a, Item, Err> Clone for ReplaySubject<'a, Item, Err> {
  fn clone(&self) -> Self {
    ReplaySubject {
      subject: self.subject.clone(),
      buffer: self.buffer.clone(),
    }
  }
}

impl<'a, Item, Err> Observer<Item, Err> for ReplaySubject<'a, Item, Err>
where
  Item: Clone,
  Err: Clone,
{
  fn next(&mut self, value: Item) {
    if self.buffer.rc_deref().terminal.is_some() {
      return;
    }
    self.buffer.rc_deref_mut().values.push(value.clone());
    self.subject.next(value);
  }

  fn error(&mut self, err: Err) {
    if self.buffer.rc_deref().terminal.is_some() {
      return;
    }
    self.buffer.rc_deref_mut().terminal =
      Some(ReplayTerminal::Error(err.clone()));
    self.subject.error(err);
  }

  fn complete(&mut self) {
    if self.buffer.rc_deref().terminal.is_some() {
      return;
    }
    self.buffer.rc_deref_mut().terminal = Some(ReplayTerminal::Completed);
    self.subject.complete();
  }
}

impl<'a, Item, Err> Observable<'a> for ReplaySubject<'a, Item, Err>
where
  Item: Clone,
  Err: Clone,
{
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
    // replay over a snapshot, a reentrant emission must not shift the tape
    let (values, terminal) = {
      let buffer = self.buffer.rc_deref();
      (buffer.values.clone(), buffer.terminal.clone())
    };
    for value in values {
      subscriber.next(value);
    }
    match terminal {
      Some(ReplayTerminal::Error(err)) => {
        let subscription = subscriber.subscription.clone();
        subscriber.error(err);
        subscription
      }
      Some(ReplayTerminal::Completed) => {
        let subscription = subscriber.subscription.clone();
        subscriber.complete();
        subscription
      }
      None => self.subject.actual_subscribe(subscriber),
    }
  }
}

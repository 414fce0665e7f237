//! A small notification feed: a timed message stream multicast through a
//! replaying subject, with a live counter derived by `scan`.
//!
//! Run with `cargo run --example notifications`.

use futures::executor::LocalPool;
use rxlite::prelude::*;

fn main() {
  let mut local = LocalPool::new();
  let spawner = local.spawner();

  let mut messages: ReplaySubject<'static, String, ()> = ReplaySubject::new();
  let notifications: Subject<'static, String, ()> = Subject::new();

  // count the messages and render the latest one
  notifications
    .clone()
    .scan_initial((0, String::new()), |(count, _), message: String| {
      (count + 1, message)
    })
    .subscribe(|(count, message)| {
      println!("[{} unread] {}", count, message);
    });

  // recorded before anything is wired up, delivered by replay
  messages.next("message recovered by replay".to_string());

  messages
    .clone()
    .actual_subscribe(Subscriber::local(notifications.clone()));

  // a message every 200ms, cut off after one second
  observable::interval(Duration::from_millis(200), spawner.clone())
    .map(|i| format!("message {}", i))
    .take_until(observable::timer((), Duration::from_secs(1), spawner))
    .actual_subscribe(Subscriber::local(messages.clone()));

  local.run();
  println!("feed closed");
}

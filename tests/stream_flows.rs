//! End-to-end flows over composed operator chains.

use float_cmp::approx_eq;
use rxlite::prelude::*;
use std::{cell::RefCell, rc::Rc};

#[test]
fn flat_map_runs_each_inner_source() {
  let collected = Rc::new(RefCell::new(vec![]));
  let c_collected = collected.clone();
  let completed = Rc::new(RefCell::new(false));
  let c_completed = completed.clone();

  let first = observable::from_iter(vec![1, 11, 21, 1211]);
  let second = observable::from_iter(vec![2, 22]);

  observable::from_iter(vec![first, second])
    .flat_map(|inner| inner)
    .subscribe_complete(
      move |v| c_collected.borrow_mut().push(v),
      move || *c_completed.borrow_mut() = true,
    );

  // synchronous inner sources run to completion in arrival order
  assert_eq!(*collected.borrow(), vec![1, 11, 21, 1211, 2, 22]);
  assert!(*completed.borrow());
}

#[test]
fn combine_latest_pairs_across_subjects() {
  let emitted = Rc::new(RefCell::new(vec![]));
  let c_emitted = emitted.clone();

  let mut numbers = Subject::new();
  let mut letters = Subject::new();

  numbers
    .clone()
    .combine_latest(letters.clone(), |n, l| format!("{}{}", l, n))
    .subscribe(move |v| c_emitted.borrow_mut().push(v));

  numbers.next(1);
  letters.next('x');
  numbers.next(2);
  letters.next('y');

  assert_eq!(*emitted.borrow(), vec!["x1", "x2", "y2"]);
}

#[test]
fn merged_intervals_stop_at_the_timer() {
  let scheduler = ManualScheduler::new();
  let emitted = Rc::new(RefCell::new(vec![]));
  let completed = Rc::new(RefCell::new(0));
  let c_emitted = emitted.clone();
  let c_completed = completed.clone();

  let slow = observable::interval(Duration::from_millis(200), scheduler.clone())
    .map(|i| format!("A {}", i));
  let fast = observable::interval(Duration::from_millis(100), scheduler.clone())
    .map(|i| format!("B {}", i));

  slow
    .merge(fast)
    .take_until(observable::timer(
      (),
      Duration::from_millis(500),
      scheduler.clone(),
    ))
    .subscribe_complete(
      move |v| c_emitted.borrow_mut().push(v),
      move || *c_completed.borrow_mut() += 1,
    );

  scheduler.advance(Duration::from_millis(1000));

  assert_eq!(
    *emitted.borrow(),
    vec!["B 0", "A 0", "B 1", "B 2", "A 1", "B 3"]
  );
  assert_eq!(*completed.borrow(), 1);
  // no further delivery once the timer has fired
  scheduler.advance(Duration::from_millis(1000));
  assert_eq!(emitted.borrow().len(), 6);
}

#[test]
fn running_average_over_a_range() {
  let averages = Rc::new(RefCell::new(vec![]));
  let c_averages = averages.clone();

  observable::range(0, 5)
    .scan_initial((0, 0), |(sum, count), v| (sum + v, count + 1))
    .map(|(sum, count)| f64::from(sum) / f64::from(count))
    .subscribe(move |v| c_averages.borrow_mut().push(v));

  let averages = averages.borrow();
  assert_eq!(averages.len(), 5);
  assert!(approx_eq!(f64, averages[0], 0.0));
  assert!(approx_eq!(f64, averages[1], 0.5));
  assert!(approx_eq!(f64, averages[4], 2.0));
}

#[test]
fn word_reduce_feeds_a_subject() {
  let words = vec!["hello ", "my ", "name ", "is ", "jo"];
  let result = Rc::new(RefCell::new(String::new()));
  let c_result = result.clone();

  let sink: Subject<'static, String, ()> = Subject::new();
  sink
    .clone()
    .subscribe(move |v: String| c_result.borrow_mut().push_str(&v));

  observable::from_iter(words)
    .map(str::to_uppercase)
    .reduce_initial(String::new(), |acc, w: String| acc + &w)
    .actual_subscribe(Subscriber::local(sink.clone()));

  assert_eq!(*result.borrow(), "HELLO MY NAME IS JO");
}

#[test]
fn parse_retry_and_fallback() {
  let attempts = Rc::new(RefCell::new(0));
  let c_attempts = attempts.clone();
  let collected = Rc::new(RefCell::new(vec![]));
  let c_collected = collected.clone();
  let completed = Rc::new(RefCell::new(0));
  let c_completed = completed.clone();

  observable::from_iter(vec!["1", "not a number"])
    .try_map(move |raw: &str| {
      *c_attempts.borrow_mut() += 1;
      raw.parse::<i32>().map_err(|e| e.to_string())
    })
    .retry(2)
    .on_error_resume_next(observable::of(-1))
    .subscribe_all(
      move |v| c_collected.borrow_mut().push(v),
      |_: String| {},
      move || *c_completed.borrow_mut() += 1,
    );

  // the cold source re-runs per attempt: three attempts parse two items
  // each, then the fallback tail takes over
  assert_eq!(*attempts.borrow(), 6);
  assert_eq!(*collected.borrow(), vec![1, 1, 1, -1]);
  assert_eq!(*completed.borrow(), 1);
}

#[test]
fn replayed_messages_feed_notification_counter() {
  let scheduler = ManualScheduler::new();
  let counts = Rc::new(RefCell::new(vec![]));
  let c_counts = counts.clone();

  let mut messages: ReplaySubject<'static, String, ()> = ReplaySubject::new();
  let notifications: Subject<'static, String, ()> = Subject::new();

  notifications
    .clone()
    .scan_initial((0, Vec::new()), |(count, mut all), m: String| {
      all.push(m);
      (count + 1, all)
    })
    .subscribe(move |(count, _)| c_counts.borrow_mut().push(count));

  // recorded before the notification pipeline attaches
  messages.next("message recovered by replay".to_string());

  messages
    .clone()
    .actual_subscribe(Subscriber::local(notifications.clone()));

  observable::interval(Duration::from_millis(100), scheduler.clone())
    .map(|i| format!("message {}", i))
    .take_until(observable::timer(
      (),
      Duration::from_millis(350),
      scheduler.clone(),
    ))
    .actual_subscribe(Subscriber::local(messages.clone()));

  scheduler.advance(Duration::from_millis(1000));

  // one replayed message plus the three timed ones
  assert_eq!(*counts.borrow(), vec![1, 2, 3, 4]);
}

//! # rxlite: a lightweight implementation of Reactive Extensions for Rust
//!
//! A push-based Observable/Observer/Subject runtime for a single thread:
//! cold sources, composable operators, multicasting subjects and
//! scheduler-backed timers.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! observable::from_iter(0..10)
//!   .filter(|v| v % 2 == 0)
//!   .map(|v| v * 2)
//!   .subscribe(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A reusable description of a producible sequence; cold sources re-run per subscription |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` notifications |
//! | [`SubscriptionLike`] | Handle to cancel an active subscription; disposal cascades |
//! | [`Subject`] / [`ReplaySubject`] | Hot multicast endpoints, with and without replay |
//! | [`LocalScheduler`] | Injected timer capability; [`ManualScheduler`] drives virtual time in tests |
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`SubscriptionLike`]: subscription::SubscriptionLike
//! [`Subject`]: subject::Subject
//! [`ReplaySubject`]: replay_subject::ReplaySubject
//! [`LocalScheduler`]: scheduler::LocalScheduler
//! [`ManualScheduler`]: test_scheduler::ManualScheduler

pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod replay_subject;
pub mod scheduler;
pub mod subject;
pub mod subscriber;
pub mod subscription;
pub mod test_scheduler;

pub use prelude::*;

pub use crate::observable;
pub use crate::observable::*;
pub use crate::observer::Observer;
pub use crate::ops::combine_latest::CombineLatest;
pub use crate::ops::filter::Filter;
pub use crate::ops::flatten::{FlatMap, Flatten};
pub use crate::ops::last::Last;
pub use crate::ops::map::Map;
pub use crate::ops::merge::Merge;
pub use crate::ops::on_error_resume_next::OnErrorResumeNext;
pub use crate::ops::retry::Retry;
pub use crate::ops::scan::Scan;
pub use crate::ops::take::Take;
pub use crate::ops::take_until::TakeUntil;
pub use crate::ops::try_map::TryMap;
pub use crate::ops::{FlatMapOp, Reduce, ReduceOp};
pub use crate::rc::{MutRc, RcDeref, RcDerefMut};
pub use crate::replay_subject::ReplaySubject;
pub use crate::scheduler::{
  Duration, Instant, LocalScheduler, TaskHandle,
};
pub use crate::subject::Subject;
pub use crate::subscriber::Subscriber;
pub use crate::subscription::{
  ClosureSubscription, LocalSubscription, Publisher, SubscriptionGuard,
  SubscriptionLike, SubscriptionWrapper, TearDownSize,
};
pub use crate::test_scheduler::ManualScheduler;

//! Cancellable scheduled tasks.
//!
//! Handles returned by a [`Scheduler`] cancel their task when dropped, so
//! whoever owns the handle owns the task's lifetime.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler {
    type Handle: 'static;

    /// Runs `task` every `millis` until the handle is dropped.
    fn every(&self, millis: u32, task: Box<dyn FnMut()>) -> Self::Handle;

    /// Runs `task` once after `millis` unless the handle is dropped first.
    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setInterval` / `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, millis: u32, task: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, task))
    }

    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, task))
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    enum Job {
        Repeat(Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Task {
        id: u64,
        due: u64,
        period: u64,
        cancelled: Rc<Cell<bool>>,
        job: Job,
    }

    #[derive(Default)]
    struct Inner {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Virtual clock: tasks only run inside [`ManualClock::advance`].
    #[derive(Clone, Default)]
    pub struct ManualClock {
        inner: Rc<RefCell<Inner>>,
    }

    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualClock {
        pub fn now(&self) -> u64 {
            self.inner.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.inner
                .borrow()
                .tasks
                .iter()
                .filter(|t| !t.cancelled.get())
                .count()
        }

        fn schedule(&self, millis: u32, period: u64, job: Job) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + u64::from(millis);
            inner.tasks.push(Task {
                id,
                due,
                period,
                cancelled: cancelled.clone(),
                job,
            });
            ManualHandle(cancelled)
        }

        /// Moves time forward, running every task that falls due in order.
        /// No borrow is held while a task runs, so tasks may schedule or
        /// cancel other tasks.
        pub fn advance(&self, millis: u64) {
            let target = self.now() + millis;
            loop {
                let task = {
                    let mut inner = self.inner.borrow_mut();
                    inner.tasks.retain(|t| !t.cancelled.get());
                    let next = inner
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let task = inner.tasks.remove(i);
                            inner.now = task.due;
                            task
                        }
                        None => {
                            inner.now = target;
                            return;
                        }
                    }
                };

                let Task {
                    id,
                    due,
                    period,
                    cancelled,
                    job,
                } = task;
                match job {
                    Job::Once(run) => run(),
                    Job::Repeat(mut run) => {
                        run();
                        if !cancelled.get() {
                            self.inner.borrow_mut().tasks.push(Task {
                                id,
                                due: due + period,
                                period,
                                cancelled,
                                job: Job::Repeat(run),
                            });
                        }
                    }
                }
            }
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn every(&self, millis: u32, task: Box<dyn FnMut()>) -> ManualHandle {
            self.schedule(millis, u64::from(millis.max(1)), Job::Repeat(task))
        }

        fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            self.schedule(millis, 0, Job::Once(task))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u64>>>, ManualClock) {
        (Rc::new(RefCell::new(Vec::new())), ManualClock::default())
    }

    #[test]
    fn repeating_task_fires_on_each_period() {
        let (log, clock) = recorder();
        let _handle = {
            let log = log.clone();
            let c = clock.clone();
            clock.every(100, Box::new(move || log.borrow_mut().push(c.now())))
        };
        clock.advance(350);
        assert_eq!(*log.borrow(), vec![100, 200, 300]);
        assert_eq!(clock.now(), 350);
    }

    #[test]
    fn dropped_handle_cancels() {
        let (log, clock) = recorder();
        let handle = {
            let log = log.clone();
            clock.after(100, Box::new(move || log.borrow_mut().push(1)))
        };
        drop(handle);
        clock.advance(1_000);
        assert!(log.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn one_shot_runs_once() {
        let (log, clock) = recorder();
        let _handle = {
            let log = log.clone();
            clock.after(100, Box::new(move || log.borrow_mut().push(1)))
        };
        clock.advance(100);
        clock.advance(1_000);
        assert_eq!(*log.borrow(), vec![1]);
    }
}

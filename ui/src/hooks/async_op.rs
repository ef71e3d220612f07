//! Framework-free engine behind [`use_async`](super::use_async): wraps a
//! single asynchronous remote call and tracks the observable
//! (data, loading, error) triple around each invocation.
//!
//! Two rules govern concurrent invocations on one wrapper:
//!
//! - Every invocation is tagged with a sequence number at initiation time,
//!   and a settlement is applied only if it carries the newest number. The
//!   observable state therefore reflects the most recently *initiated*
//!   call, never a slow call that happens to settle last.
//! - The wrapper is retired when its owning component unmounts; settlements
//!   arriving after that return their outcome to the caller but leave the
//!   observable state untouched.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

/// The observable state of one wrapped operation.
#[derive(Clone, PartialEq)]
pub struct OpSnapshot<T> {
    /// Result of the most recent successful invocation, if any.
    pub data: Option<T>,
    /// True strictly while an invocation is in flight.
    pub loading: bool,
    /// Failure of the most recent invocation; cleared on trigger and on
    /// success. A stale `data` from a prior success may coexist with this.
    pub error: Option<String>,
}

impl<T> Default for OpSnapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

struct OpInner<T> {
    snapshot: OpSnapshot<T>,
    /// Sequence number of the most recently initiated invocation.
    latest_seq: u64,
    /// False once the owning component has unmounted.
    live: bool,
}

/// A wrapped asynchronous operation with its observable state.
///
/// Owned by exactly one component instance; created on mount, retired on
/// unmount. Cloning shares the same state (clones are handles, not copies).
pub struct AsyncOp<T, A> {
    inner: Rc<RefCell<OpInner<T>>>,
    op: Rc<dyn Fn(A) -> LocalBoxFuture<'static, Result<T, String>>>,
    on_change: Rc<dyn Fn()>,
}

impl<T, A> Clone for AsyncOp<T, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            op: self.op.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: Clone + 'static, A: 'static> AsyncOp<T, A> {
    /// Wrap `op`. `on_change` fires after every observable state change,
    /// so a UI adapter can schedule a re-render.
    pub fn new<F, Fut>(op: F, on_change: impl Fn() + 'static) -> Self
    where
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(OpInner {
                snapshot: OpSnapshot::default(),
                latest_seq: 0,
                live: true,
            })),
            op: Rc::new(move |args| op(args).boxed_local()),
            on_change: Rc::new(on_change),
        }
    }

    pub fn snapshot(&self) -> OpSnapshot<T> {
        self.inner.borrow().snapshot.clone()
    }

    /// Initiate an invocation.
    ///
    /// `loading` is raised and `error` cleared before this returns, not
    /// when the future is first polled. The returned future resolves with
    /// the wrapped operation's own outcome, so callers can chain
    /// follow-ups on success or branch on failure; the failure is stored
    /// in the snapshot as well, never swallowed.
    pub fn run(&self, args: A) -> LocalBoxFuture<'static, Result<T, String>> {
        let seq = {
            let mut inner = self.inner.borrow_mut();
            inner.latest_seq += 1;
            inner.snapshot.loading = true;
            inner.snapshot.error = None;
            inner.latest_seq
        };
        (self.on_change)();

        let fut = (self.op)(args);
        let inner = self.inner.clone();
        let on_change = self.on_change.clone();
        async move {
            let result = fut.await;
            let applied = {
                let mut guard = inner.borrow_mut();
                if guard.live && seq == guard.latest_seq {
                    guard.snapshot.loading = false;
                    match &result {
                        Ok(value) => {
                            guard.snapshot.data = Some(value.clone());
                            guard.snapshot.error = None;
                        }
                        Err(e) => {
                            guard.snapshot.error = Some(e.clone());
                        }
                    }
                    true
                } else {
                    false
                }
            };
            if applied {
                on_change();
            }
            result
        }
        .boxed_local()
    }

    /// Detach from the owner. No settlement mutates the snapshot after
    /// this; `on_change` will not fire again.
    pub fn retire(&self) {
        self.inner.borrow_mut().live = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    type Remote = oneshot::Receiver<Result<u32, String>>;

    /// An op whose settlement is controlled by the test through a oneshot
    /// channel passed as the trigger argument.
    fn remote_op() -> AsyncOp<u32, Remote> {
        AsyncOp::new(
            |rx: Remote| async move { rx.await.expect("sender dropped") },
            || {},
        )
    }

    #[test]
    fn starts_empty_and_idle() {
        let op = remote_op();
        let snap = op.snapshot();
        assert_eq!(snap.data, None);
        assert!(!snap.loading);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn trigger_raises_loading_before_settlement() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let op = remote_op();

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        // Synchronous: the invocation has not been polled yet.
        assert!(op.snapshot().loading);
        assert_eq!(op.snapshot().error, None);

        spawner
            .spawn_local(async move {
                let _ = fut.await;
            })
            .unwrap();
        pool.run_until_stalled();
        assert!(op.snapshot().loading, "still in flight");

        tx.send(Ok(7)).unwrap();
        pool.run_until_stalled();
        assert!(!op.snapshot().loading);
        assert_eq!(op.snapshot().data, Some(7));
    }

    #[test]
    fn success_overwrites_data_and_clears_error() {
        let mut pool = LocalPool::new();
        let op = remote_op();

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        tx.send(Err("boom".to_string())).unwrap();
        let outcome = pool.run_until(fut);
        assert_eq!(outcome, Err("boom".to_string()));
        assert_eq!(op.snapshot().error.as_deref(), Some("boom"));

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        // Trigger clears the previous failure immediately.
        assert_eq!(op.snapshot().error, None);
        tx.send(Ok(3)).unwrap();
        let outcome = pool.run_until(fut);
        assert_eq!(outcome, Ok(3));

        let snap = op.snapshot();
        assert_eq!(snap.data, Some(3));
        assert_eq!(snap.error, None);
        assert!(!snap.loading);
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut pool = LocalPool::new();
        let op = remote_op();

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        tx.send(Ok(42)).unwrap();
        pool.run_until(fut).unwrap();

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        tx.send(Err("offline".to_string())).unwrap();
        let outcome = pool.run_until(fut);
        assert!(outcome.is_err());

        // Stale data coexists with the fresh error.
        let snap = op.snapshot();
        assert_eq!(snap.data, Some(42));
        assert_eq!(snap.error.as_deref(), Some("offline"));
        assert!(!snap.loading);
    }

    #[test]
    fn repeat_trigger_is_idempotent() {
        let mut pool = LocalPool::new();
        let op = remote_op();

        for _ in 0..2 {
            let (tx, rx) = oneshot::channel();
            let fut = op.run(rx);
            tx.send(Ok(9)).unwrap();
            assert_eq!(pool.run_until(fut), Ok(9));
        }
        let snap = op.snapshot();
        assert_eq!(snap.data, Some(9));
        assert_eq!(snap.error, None);
        assert!(!snap.loading);
    }

    #[test]
    fn latest_initiated_invocation_wins() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let op = remote_op();

        let (slow_tx, slow_rx) = oneshot::channel();
        let (fast_tx, fast_rx) = oneshot::channel();
        let slow = op.run(slow_rx);
        let fast = op.run(fast_rx);
        spawner
            .spawn_local(async move {
                let _ = slow.await;
            })
            .unwrap();
        spawner
            .spawn_local(async move {
                let _ = fast.await;
            })
            .unwrap();

        // The second (most recently initiated) invocation settles first
        // and is applied.
        fast_tx.send(Ok(2)).unwrap();
        pool.run_until_stalled();
        assert_eq!(op.snapshot().data, Some(2));
        assert!(!op.snapshot().loading);

        // The first invocation settles late; its result is discarded.
        slow_tx.send(Ok(1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(op.snapshot().data, Some(2));
        assert!(!op.snapshot().loading);
    }

    #[test]
    fn stale_settlement_does_not_lower_loading() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let op = remote_op();

        let (first_tx, first_rx) = oneshot::channel();
        let (_second_tx, second_rx) = oneshot::channel();
        let first = op.run(first_rx);
        let _second = op.run(second_rx);
        spawner
            .spawn_local(async move {
                let _ = first.await;
            })
            .unwrap();

        // First settles while the newer invocation is still in flight;
        // loading stays owned by the newest one.
        first_tx.send(Ok(1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(op.snapshot().data, None);
        assert!(op.snapshot().loading);
    }

    #[test]
    fn retired_wrapper_ignores_settlement() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let notified = Rc::new(Cell::new(0u32));
        let notified_in_op = notified.clone();
        let op: AsyncOp<u32, Remote> = AsyncOp::new(
            |rx: Remote| async move { rx.await.expect("sender dropped") },
            move || notified_in_op.set(notified_in_op.get() + 1),
        );

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        spawner
            .spawn_local(async move {
                // The caller still receives the outcome.
                assert_eq!(fut.await, Ok(5));
            })
            .unwrap();

        op.retire();
        let before = notified.get();
        tx.send(Ok(5)).unwrap();
        pool.run_until_stalled();

        // Nothing observable changed and no re-render was requested.
        assert_eq!(op.snapshot().data, None);
        assert_eq!(notified.get(), before);
    }

    #[test]
    fn caller_sees_failure_that_is_also_stored() {
        let mut pool = LocalPool::new();
        let op = remote_op();

        let (tx, rx) = oneshot::channel();
        let fut = op.run(rx);
        tx.send(Err("denied".to_string())).unwrap();
        // Re-signaled to the caller...
        assert_eq!(pool.run_until(fut), Err("denied".to_string()));
        // ...and captured for the UI.
        assert_eq!(op.snapshot().error.as_deref(), Some("denied"));
    }

    #[test]
    fn fixed_options_merge_with_call_arguments() {
        // The hook layer feeds fixed options into the op closure alongside
        // per-call arguments; the op sees both, call-site values winning
        // on overlap. Modeled here the way `use_async_with` builds it.
        let mut pool = LocalPool::new();

        #[derive(Clone)]
        struct Fixed {
            job_id: &'static str,
            status: &'static str,
        }
        let fixed = Fixed {
            job_id: "42",
            status: "draft",
        };

        let op: AsyncOp<(String, String), Option<&'static str>> =
            AsyncOp::new(
                move |status_override: Option<&'static str>| {
                    let fixed = fixed.clone();
                    async move {
                        let status = status_override.unwrap_or(fixed.status);
                        Ok((fixed.job_id.to_string(), status.to_string()))
                    }
                },
                || {},
            );

        let merged = pool.run_until(op.run(Some("open"))).unwrap();
        assert_eq!(merged, ("42".to_string(), "open".to_string()));

        let defaulted = pool.run_until(op.run(None)).unwrap();
        assert_eq!(defaulted, ("42".to_string(), "draft".to_string()));
    }
}

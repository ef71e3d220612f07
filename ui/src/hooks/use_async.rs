use std::future::Future;

use futures::future::LocalBoxFuture;
use yew::prelude::*;

use super::async_op::{AsyncOp, OpSnapshot};

/// Handle returned by [`use_async`]: the current (data, loading, error)
/// triple plus the trigger.
pub struct UseAsyncHandle<T, A> {
    snapshot: OpSnapshot<T>,
    op: AsyncOp<T, A>,
}

impl<T: Clone, A> Clone for UseAsyncHandle<T, A> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            op: self.op.clone(),
        }
    }
}

impl<T: Clone + 'static, A: 'static> UseAsyncHandle<T, A> {
    pub fn data(&self) -> Option<&T> {
        self.snapshot.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.snapshot.loading
    }

    pub fn error(&self) -> Option<&String> {
        self.snapshot.error.as_ref()
    }

    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.snapshot.loading
            && self.snapshot.data.is_none()
            && self.snapshot.error.is_none()
    }

    /// Fire-and-forget trigger. Raises `loading` and clears `error`
    /// synchronously, then lets the invocation settle into the snapshot.
    pub fn trigger(&self, args: A) {
        let fut = self.op.run(args);
        yew::platform::spawn_local(async move {
            // Outcome is recorded in the snapshot; failures surface via
            // `error`, so the detached task has nothing left to do.
            let _ = fut.await;
        });
    }

    /// Like [`trigger`](Self::trigger), but hands the outcome back so the
    /// caller can chain follow-ups (refresh a list after a create,
    /// navigate only on success, ...). The failure is stored in the
    /// snapshot *and* returned as `Err`.
    pub fn run(&self, args: A) -> LocalBoxFuture<'static, Result<T, String>> {
        self.op.run(args)
    }

    /// Render based on the operation state with contextual loading/error
    /// messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: calls `render_fn` with (data, loading, error), so a
    ///   refetch can show a spinner or inline error next to stale data.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match &self.snapshot.data {
            None => {
                if self.snapshot.loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.snapshot.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!(
                                    "Error loading {}: {}", context, error
                                )}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(
                data,
                self.snapshot.loading,
                self.snapshot.error.as_ref(),
            ),
        }
    }
}

/// Wrap an asynchronous remote operation for use from a component.
///
/// The wrapper exposes `data`, `loading` and `error`, plus a trigger that
/// invokes the wrapped call with caller-supplied arguments. State is owned
/// by this component instance alone: it starts empty on mount, and on
/// unmount the wrapper is retired so late settlements cannot touch it.
/// Rapid re-triggers race; the most recently initiated invocation's
/// outcome is the one applied.
///
/// # Example
///
/// ```rust,ignore
/// let delete_job = use_async(|job_id: JobId| async move {
///     let api_client = get_api_client();
///     api_client.delete_job(&job_id).await.map_err(|e| e.to_string())
/// });
/// ```
#[hook]
pub fn use_async<T, A, F, Fut>(op: F) -> UseAsyncHandle<T, A>
where
    T: Clone + 'static,
    A: 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let update = use_force_update();
    let op_cell = use_mut_ref(|| None::<AsyncOp<T, A>>);
    if op_cell.borrow().is_none() {
        *op_cell.borrow_mut() =
            Some(AsyncOp::new(op, move || update.force_update()));
    }

    // Retire on unmount so in-flight settlements stop observing us.
    {
        let op_cell = op_cell.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(op) = op_cell.borrow().as_ref() {
                    op.retire();
                }
            }
        });
    }

    let op = op_cell
        .borrow()
        .as_ref()
        .expect("initialized on first render")
        .clone();
    let snapshot = op.snapshot();
    UseAsyncHandle { snapshot, op }
}

/// [`use_async`] with fixed options merged into every invocation.
///
/// The wrapped operation receives the fixed options alongside the
/// per-call arguments; where the two overlap, call-site arguments take
/// precedence. Options are re-read at trigger time, so a re-render with
/// new options affects the next trigger without recreating the wrapper.
///
/// # Example
///
/// ```rust,ignore
/// // Fixed: which job. Per-call: the new hiring state.
/// let hiring = use_async_with(job_id, |job_id, is_open: bool| async move {
///     let api_client = get_api_client();
///     api_client
///         .update_hiring_status(&requests::UpdateHiringStatus {
///             job_id,
///             is_open,
///         })
///         .await
///         .map_err(|e| e.to_string())
/// });
/// ```
#[hook]
pub fn use_async_with<T, A, O, F, Fut>(options: O, op: F) -> UseAsyncHandle<T, A>
where
    T: Clone + 'static,
    A: 'static,
    O: Clone + 'static,
    F: Fn(O, A) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let options_cell = use_mut_ref(|| options.clone());
    *options_cell.borrow_mut() = options;

    use_async(move |args: A| {
        let options = options_cell.borrow().clone();
        op(options, args)
    })
}

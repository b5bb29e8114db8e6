//! The fetch hook: one endpoint bound to observable state

use crate::state::{FetchOptions, FetchState};
use fetchkit_client::{ApiClient, RequestOptions};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

struct FetchInner<T> {
    client: ApiClient,
    endpoint: String,
    options: FetchOptions,
    /// One-shot latch for the automatic mount fetch
    mounted: AtomicBool,
    /// Set on unmount; suppresses state commits from in-flight fetches
    closed: AtomicBool,
    tx: watch::Sender<FetchState<T>>,
}

/// Binds a single GET endpoint to a piece of observable
/// [`FetchState`], replacing manual subscribe/unsubscribe boilerplate.
///
/// The handle is cheap to clone; clones share state, the mount latch,
/// and the closed flag. State transitions for one fetch invocation are
/// strictly ordered: fetch-start (`is_loading = true`, `error`
/// cleared, prior `data` untouched) → settled (success or error).
///
/// Overlapping fetches are deliberately not coordinated: whichever
/// settles last wins. Two independent hooks on the same endpoint issue
/// two independent network calls; request deduplication and caching
/// belong to a layer above this one.
pub struct UseFetch<T> {
    inner: Arc<FetchInner<T>>,
}

impl<T> Clone for UseFetch<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> UseFetch<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Create a hook for `endpoint`. No network call happens until
    /// [`mount`](Self::mount) or [`refetch`](Self::refetch).
    pub fn new(client: ApiClient, endpoint: impl Into<String>, options: FetchOptions) -> Self {
        let (tx, _rx) = watch::channel(FetchState::initial(options.immediate));
        Self {
            inner: Arc::new(FetchInner {
                client,
                endpoint: endpoint.into(),
                options,
                mounted: AtomicBool::new(false),
                closed: AtomicBool::new(false),
                tx,
            }),
        }
    }

    /// Lifecycle entry point. With `immediate` set, spawns the
    /// automatic fetch exactly once; repeated calls (and calls through
    /// clones) are no-ops until a fresh hook is constructed.
    pub fn mount(&self) {
        if !self.inner.options.immediate {
            return;
        }
        if self
            .inner
            .mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        debug!(endpoint = %self.inner.endpoint, "Mount fetch");
        let hook = self.clone();
        tokio::spawn(async move {
            hook.run_fetch().await;
        });
    }

    /// Manually run the fetch procedure. Failures land in
    /// [`FetchState::error`]; this never returns one.
    pub async fn refetch(&self) {
        self.run_fetch().await;
    }

    /// Lifecycle teardown. In-flight fetches still complete on the
    /// wire, but their state commit becomes a no-op.
    pub fn unmount(&self) {
        self.inner.closed.store(true, Ordering::Release);
    }

    /// Observe every state transition, in order
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.tx.subscribe()
    }

    async fn run_fetch(&self) {
        let inner = &self.inner;

        // Teardown suppresses the start transition too, not just the
        // commit; a refetch on an unmounted hook must not strand the
        // discarded state in loading.
        if inner.closed.load(Ordering::Acquire) {
            return;
        }

        inner.tx.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let options = RequestOptions::new().with_params(inner.options.params.clone());
        let result = inner.client.get_with::<T>(&inner.endpoint, options).await;

        // Owner torn down while we were on the wire.
        if inner.closed.load(Ordering::Acquire) {
            debug!(endpoint = %inner.endpoint, "Discarding fetch result after unmount");
            return;
        }

        let settled = match result {
            Ok(data) => FetchState {
                data: Some(data),
                is_loading: false,
                error: None,
            },
            Err(error) => {
                debug!(endpoint = %inner.endpoint, error = %error, "Fetch failed");
                FetchState {
                    data: None,
                    is_loading: false,
                    error: Some(Arc::new(error)),
                }
            }
        };
        let _ = inner.tx.send_replace(settled);
    }
}

impl<T: Clone> UseFetch<T> {
    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.inner.tx.borrow().clone()
    }
}

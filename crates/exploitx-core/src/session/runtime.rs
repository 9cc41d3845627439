//! Session driver.
//!
//! Owns the auth subscription and the reconciler, executes fetch effects on
//! tokio and publishes every new view on a watch channel. This is the only
//! writer of the view.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::reconciler::{FetchCompleted, FetchRequest, SessionEffect, SessionReconciler};
use super::record::{ProfileRecord, score_from_value};
use super::{StorageKey, ViewState};
use crate::auth::AuthSubscription;
use crate::store::KeyValueStore;

/// Handle to a running session driver.
///
/// The auth subscription lives exactly as long as the driver. `stop` releases
/// it explicitly; dropping the handle releases it on every other path.
#[derive(Debug)]
pub struct SessionHandle {
    view: watch::Receiver<ViewState>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Returns a receiver that observes every published view.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.clone()
    }

    /// Latest published view.
    pub fn current(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Waits until the view leaves `Loading`.
    ///
    /// If the driver has exited, returns whatever was published last.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.view.clone();
        match rx.wait_for(ViewState::is_settled).await {
            Ok(view) => view.clone(),
            Err(_) => self.current(),
        }
    }

    /// Unsubscribes from auth events and waits for the driver to exit.
    /// In-flight fetches are cancelled and never touch the view afterwards.
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take()
            && let Err(err) = task.await
        {
            tracing::warn!("session driver ended abnormally: {err}");
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Starts reconciling `auth` against `store`. Must be called within a tokio runtime.
pub fn start<S>(store: Arc<S>, auth: AuthSubscription) -> SessionHandle
where
    S: KeyValueStore + 'static,
{
    let (view_tx, view_rx) = watch::channel(ViewState::initial());
    let shutdown = CancellationToken::new();
    let task = tokio::spawn(drive(store, auth, view_tx, shutdown.clone()));
    SessionHandle {
        view: view_rx,
        shutdown,
        task: Some(task),
    }
}

async fn drive<S>(
    store: Arc<S>,
    mut auth: AuthSubscription,
    view_tx: watch::Sender<ViewState>,
    shutdown: CancellationToken,
) where
    S: KeyValueStore + 'static,
{
    let mut reconciler = SessionReconciler::new();
    // Inbox: fetch tasks report back here.
    let (inbox_tx, mut inbox_rx) = mpsc::unbounded_channel::<FetchCompleted>();
    let mut auth_open = true;

    loop {
        tokio::select! {
            biased;
            () = shutdown.cancelled() => break,
            event = auth.recv(), if auth_open => match event {
                Some(event) => {
                    let effects = reconciler.on_auth_event(event);
                    publish(&view_tx, reconciler.view());
                    for effect in effects {
                        execute(effect, &store, &inbox_tx);
                    }
                }
                None => {
                    tracing::debug!("auth source closed");
                    auth_open = false;
                }
            },
            Some(completed) = inbox_rx.recv() => {
                if reconciler.on_fetch_completed(completed) {
                    publish(&view_tx, reconciler.view());
                }
            }
        }

        if !auth_open && !reconciler.is_fetching() {
            break;
        }
    }

    if let Some(token) = reconciler.shutdown() {
        token.cancel();
    }
    tracing::debug!("session driver stopped");
}

fn publish(view_tx: &watch::Sender<ViewState>, view: &ViewState) {
    view_tx.send_if_modified(|current| {
        if current == view {
            false
        } else {
            *current = view.clone();
            true
        }
    });
}

fn execute<S>(
    effect: SessionEffect,
    store: &Arc<S>,
    inbox_tx: &mpsc::UnboundedSender<FetchCompleted>,
) where
    S: KeyValueStore + 'static,
{
    match effect {
        SessionEffect::Cancel(token) => token.cancel(),
        SessionEffect::Fetch(request) => {
            let store = Arc::clone(store);
            let tx = inbox_tx.clone();
            tokio::spawn(async move {
                let FetchRequest {
                    id,
                    identity,
                    key,
                    cancel,
                } = request;
                // Reads run in their own task so a panicking store still
                // completes the fetch.
                let reads = tokio::spawn(async move { fetch_records(&*store, &key).await });
                let abort = reads.abort_handle();
                let (profile, score) = tokio::select! {
                    () = cancel.cancelled() => {
                        abort.abort();
                        return;
                    }
                    joined = reads => joined.unwrap_or_else(|err| {
                        tracing::warn!(fetch = id.0, error = %err, "store read crashed; treating as absent");
                        (None, None)
                    }),
                };
                let _ = tx.send(FetchCompleted {
                    id,
                    identity,
                    profile,
                    score,
                });
            });
        }
    }
}

/// Reads both records concurrently. Failures and malformed shapes are logged
/// and reported as absent.
pub async fn fetch_records<S>(
    store: &S,
    key: &StorageKey,
) -> (Option<ProfileRecord>, Option<i64>)
where
    S: KeyValueStore,
{
    let profile_path = key.profile_path();
    let score_path = key.score_path();
    let (profile, score) = tokio::join!(store.get(&profile_path), store.get(&score_path));

    let profile = read_or_absent(&profile_path, profile).and_then(|value| {
        let record = ProfileRecord::from_value(&value);
        if record.is_none() {
            tracing::warn!(path = %profile_path, "malformed profile record; treating as absent");
        }
        record
    });
    let score = read_or_absent(&score_path, score).and_then(|value| {
        let score = score_from_value(&value);
        if score.is_none() {
            tracing::warn!(path = %score_path, "malformed score record; treating as absent");
        }
        score
    });
    (profile, score)
}

fn read_or_absent(
    path: &str,
    result: anyhow::Result<Option<serde_json::Value>>,
) -> Option<serde_json::Value> {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                path,
                error = %format!("{err:#}"),
                "store read failed; treating as absent"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use anyhow::{Result, bail};
    use serde_json::{Value, json};
    use tokio::sync::Semaphore;

    use super::*;
    use crate::auth::{self, Identity};
    use crate::session::Phase;
    use crate::store::MemoryStore;

    /// Memory store whose reads on selected paths block until released.
    struct GatedStore {
        inner: MemoryStore,
        gated: HashSet<String>,
        gate: Arc<Semaphore>,
        failing: HashSet<String>,
        panicking: HashSet<String>,
    }

    impl GatedStore {
        fn new(root: Value) -> Self {
            Self {
                inner: MemoryStore::from_json(root),
                gated: HashSet::new(),
                gate: Arc::new(Semaphore::new(0)),
                failing: HashSet::new(),
                panicking: HashSet::new(),
            }
        }

        fn gate(mut self, path: &str) -> Self {
            self.gated.insert(path.to_string());
            self
        }

        fn fail(mut self, path: &str) -> Self {
            self.failing.insert(path.to_string());
            self
        }

        fn panic_on(mut self, path: &str) -> Self {
            self.panicking.insert(path.to_string());
            self
        }
    }

    impl KeyValueStore for GatedStore {
        async fn get(&self, path: &str) -> Result<Option<Value>> {
            if self.gated.contains(path) {
                let _permit = self.gate.acquire().await?;
            }
            if self.failing.contains(path) {
                bail!("connection reset");
            }
            assert!(!self.panicking.contains(path), "store crashed reading {path}");
            self.inner.get(path).await
        }
    }

    fn identity(email: &str) -> Identity {
        Identity::new(email).unwrap()
    }

    fn seed() -> Value {
        json!({
            "users": {
                "alice_at_ctf_dot_in": "Alice",
                "bob_at_ctf_dot_in": {"name": "Bob"},
                "odd_at_ctf_dot_in": [1, 2, 3]
            },
            "scores": {
                "alice_at_ctf_dot_in": 42,
                "bob_at_ctf_dot_in": 17,
                "odd_at_ctf_dot_in": "lots"
            }
        })
    }

    async fn wait_for_phase(rx: &mut watch::Receiver<ViewState>, phase: Phase) -> ViewState {
        tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|v| v.phase == phase))
            .await
            .expect("timed out waiting for phase")
            .expect("driver alive")
            .clone()
    }

    #[tokio::test]
    async fn test_sign_in_resolves_profile_and_score() {
        let (publisher, subscription) = auth::channel();
        let handle = start(Arc::new(GatedStore::new(seed())), subscription);
        let mut rx = handle.subscribe();

        publisher.sign_in(identity("alice@ctf.in"));
        let view = wait_for_phase(&mut rx, Phase::SignedIn).await;
        assert_eq!(view.display_name, "Alice");
        assert_eq!(view.score, 42);
        assert_eq!(view.email(), Some("alice@ctf.in"));

        publisher.sign_in(identity("bob@ctf.in"));
        let view = rx
            .wait_for(|v| v.phase == Phase::SignedIn && v.email() == Some("bob@ctf.in"))
            .await
            .unwrap()
            .clone();
        assert_eq!(view.display_name, "Bob");
        assert_eq!(view.score, 17);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_sign_out_resets_view() {
        let (publisher, subscription) = auth::channel();
        let handle = start(Arc::new(GatedStore::new(seed())), subscription);
        let mut rx = handle.subscribe();

        publisher.sign_in(identity("alice@ctf.in"));
        wait_for_phase(&mut rx, Phase::SignedIn).await;

        publisher.sign_out();
        let view = wait_for_phase(&mut rx, Phase::SignedOut).await;
        assert_eq!(view, ViewState::signed_out());

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_phase_stays_loading_until_both_reads_resolve() {
        let store = Arc::new(GatedStore::new(seed()).gate("scores/alice_at_ctf_dot_in"));
        let gate = Arc::clone(&store.gate);
        let (publisher, subscription) = auth::channel();
        let handle = start(store, subscription);
        let mut rx = handle.subscribe();

        publisher.sign_in(identity("alice@ctf.in"));
        rx.wait_for(|v| v.identity.is_some()).await.unwrap();

        // Give the profile read every chance to finish first.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(handle.current().phase, Phase::Loading);
        assert_eq!(handle.current().display_name, "");

        gate.add_permits(1);
        let view = wait_for_phase(&mut rx, Phase::SignedIn).await;
        assert_eq!(view.display_name, "Alice");
        assert_eq!(view.score, 42);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_second_event_wins_over_pending_first() {
        let store = Arc::new(
            GatedStore::new(seed())
                .gate("users/alice_at_ctf_dot_in")
                .gate("scores/alice_at_ctf_dot_in"),
        );
        let gate = Arc::clone(&store.gate);
        let (publisher, subscription) = auth::channel();
        let handle = start(store, subscription);
        let mut rx = handle.subscribe();

        publisher.sign_in(identity("alice@ctf.in"));
        rx.wait_for(|v| v.email() == Some("alice@ctf.in"))
            .await
            .unwrap();

        publisher.sign_in(identity("bob@ctf.in"));
        let view = wait_for_phase(&mut rx, Phase::SignedIn).await;
        assert_eq!(view.email(), Some("bob@ctf.in"));

        // Let the superseded reads complete; they must not leak into the view.
        gate.add_permits(2);
        tokio::time::sleep(Duration::from_millis(50)).await;
        let view = handle.current();
        assert_eq!(view.email(), Some("bob@ctf.in"));
        assert_eq!(view.display_name, "Bob");
        assert_eq!(view.score, 17);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_failed_and_malformed_reads_degrade_to_absent() {
        let store = GatedStore::new(seed()).fail("users/alice_at_ctf_dot_in");
        let (publisher, subscription) = auth::channel();
        let handle = start(Arc::new(store), subscription);
        let mut rx = handle.subscribe();

        publisher.sign_in(identity("alice@ctf.in"));
        let view = wait_for_phase(&mut rx, Phase::SignedIn).await;
        assert_eq!(view.display_name, "");
        assert_eq!(view.score, 42);

        publisher.sign_in(identity("odd@ctf.in"));
        let view = rx
            .wait_for(|v| v.phase == Phase::SignedIn && v.email() == Some("odd@ctf.in"))
            .await
            .unwrap()
            .clone();
        assert_eq!(view.display_name, "");
        assert_eq!(view.score, 0);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_stop_during_fetch_leaves_view_untouched() {
        let store = Arc::new(GatedStore::new(seed()).gate("users/alice_at_ctf_dot_in"));
        let gate = Arc::clone(&store.gate);
        let (publisher, subscription) = auth::channel();
        let handle = start(store, subscription);
        let mut rx = handle.subscribe();

        publisher.sign_in(identity("alice@ctf.in"));
        rx.wait_for(|v| v.identity.is_some()).await.unwrap();

        handle.stop().await;
        gate.add_permits(1);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(rx.borrow().phase, Phase::Loading);
        assert!(!publisher.sign_out(), "subscription released on stop");
    }

    #[tokio::test]
    async fn test_driver_exits_when_auth_source_closes() {
        let (publisher, subscription) = auth::channel();
        let handle = start(Arc::new(GatedStore::new(seed())), subscription);

        publisher.sign_in(identity("bob@ctf.in"));
        drop(publisher);

        let view = handle.settled().await;
        assert_eq!(view.phase, Phase::SignedIn);
        assert_eq!(view.display_name, "Bob");
        handle.stop().await;
    }

    #[tokio::test]
    async fn test_panicking_read_degrades_to_absent() {
        let store = GatedStore::new(seed()).panic_on("scores/alice_at_ctf_dot_in");
        let (publisher, subscription) = auth::channel();
        let handle = start(Arc::new(store), subscription);

        publisher.sign_in(identity("alice@ctf.in"));
        drop(publisher);

        let view = tokio::time::timeout(Duration::from_secs(2), handle.settled())
            .await
            .expect("view left Loading");
        assert_eq!(view.phase, Phase::SignedIn);
        assert_eq!(view.display_name, "Alice");
        assert_eq!(view.score, 0);

        // The driver still exits once the auth source is gone.
        tokio::time::timeout(Duration::from_secs(2), handle.stop())
            .await
            .expect("driver exited");
    }

    #[tokio::test]
    async fn test_timed_out_reads_still_sign_in() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        use crate::store::RtdbStore;

        if std::net::TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "Slow"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let store = RtdbStore::new(&server.uri(), None, Duration::from_millis(100)).unwrap();
        let key = StorageKey::from_email("slow@ctf.in");
        assert_eq!(fetch_records(&store, &key).await, (None, None));

        let (publisher, subscription) = auth::channel();
        let handle = start(Arc::new(store), subscription);
        publisher.sign_in(identity("slow@ctf.in"));

        let view = tokio::time::timeout(Duration::from_secs(5), handle.settled())
            .await
            .expect("view left Loading");
        assert_eq!(view.phase, Phase::SignedIn);
        assert_eq!(view.display_name, "");
        assert_eq!(view.score, 0);
        handle.stop().await;
    }

    #[tokio::test]
    async fn test_fetch_records_reads_both_paths() {
        let store = GatedStore::new(seed());
        let key = StorageKey::from_email("bob@ctf.in");
        let (profile, score) = fetch_records(&store, &key).await;
        assert_eq!(
            profile,
            Some(ProfileRecord::Structured {
                name: "Bob".to_string()
            })
        );
        assert_eq!(score, Some(17));
    }
}

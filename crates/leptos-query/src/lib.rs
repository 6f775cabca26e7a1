//! Leptos Query Utilities
//!
//! Keyed fetches with a shared cache, and mutations that invalidate it.
//! A query re-runs whenever its key changes or the client is invalidated;
//! cached keys are served without a request.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

// ========================
// Keys and cache
// ========================

/// Ordered key parts, e.g. `todoDetail:5`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Append one more part
    pub fn with(mut self, part: impl ToString) -> Self {
        self.0.push(part.to_string());
        self
    }

    /// True when `prefix` matches this key part for part
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}

/// Type-erased values by key
#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Arc<dyn Any + Send + Sync>>,
    /// Keys whose backing record is gone; mounted queries must not refetch them
    removed: HashSet<QueryKey>,
}

impl QueryCache {
    /// Cached value, if present and of type `T`
    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    pub fn insert<T: Send + Sync + 'static>(&mut self, key: QueryKey, value: T) {
        self.removed.remove(&key);
        self.entries.insert(key, Arc::new(value));
    }

    /// Forget one key for good, e.g. after its record was deleted
    pub fn remove(&mut self, key: &QueryKey) -> bool {
        self.removed.insert(key.clone());
        self.entries.remove(key).is_some()
    }

    pub fn is_removed(&self, key: &QueryKey) -> bool {
        self.removed.contains(key)
    }

    /// Drop every key under `prefix`; returns how many were dropped
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ========================
// Client
// ========================

/// Shared cache handle, provided once near the app root
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    /// Bumped on every invalidation so mounted queries re-check the cache
    generation: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(QueryCache::default()),
            generation: RwSignal::new(0),
        }
    }

    pub fn cached<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.cache.with_value(|cache| cache.get::<T>(key))
    }

    /// Seed or overwrite a cache entry without fetching
    pub fn set_query_data<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        self.cache.update_value(|cache| cache.insert(key, value));
    }

    /// Drop a key without waking anyone; mounted queries keep what they show
    pub fn remove(&self, key: &QueryKey) {
        self.cache.update_value(|cache| {
            cache.remove(key);
        });
        log::debug!("[query] removed {}", key);
    }

    pub fn is_removed(&self, key: &QueryKey) -> bool {
        self.cache.with_value(|cache| cache.is_removed(key))
    }

    /// Evict everything under `prefix` and wake mounted queries
    pub fn invalidate(&self, prefix: &QueryKey) {
        let mut removed = 0;
        self.cache.update_value(|cache| removed = cache.invalidate(prefix));
        log::debug!("[query] invalidated {} ({} entries)", prefix, removed);
        self.generation.update(|g| *g += 1);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the client and provide it to all children
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

// ========================
// Queries
// ========================

/// Reactive view of one keyed fetch
pub struct Query<T, E> {
    data: RwSignal<Option<T>>,
    error: RwSignal<Option<E>>,
    fetching: RwSignal<bool>,
}

impl<T, E> Clone for Query<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Query<T, E> {}

impl<T, E> Query<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn data(&self) -> Option<T> {
        self.data.get()
    }

    pub fn error(&self) -> Option<E> {
        self.error.get()
    }

    /// A request is in flight
    pub fn is_fetching(&self) -> bool {
        self.fetching.get()
    }

    /// First load: in flight with nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.fetching.get() && self.data.with(Option::is_none)
    }
}

/// Run `fetcher` for the current params
///
/// `params` returning `None` disables the query. A new key shows its cached
/// value at once and refetches in the background. An invalidation refetches
/// the mounted key only when it was evicted. Only the latest request may
/// write results; responses to superseded params are dropped.
pub fn use_query<P, T, E, S, K, F, Fut>(params: S, key_of: K, fetcher: F) -> Query<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    S: Fn() -> Option<P> + 'static,
    K: Fn(&P) -> QueryKey + 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let client = use_query_client();
    let query = Query {
        data: RwSignal::new(None),
        error: RwSignal::new(None),
        fetching: RwSignal::new(false),
    };
    let latest = StoredValue::new(0u64);
    let mounted = StoredValue::new(None::<QueryKey>);

    Effect::new(move |_| {
        client.generation.track();
        let Some(args) = params() else {
            latest.update_value(|ticket| *ticket += 1);
            mounted.set_value(None);
            query.fetching.set(false);
            return;
        };
        let key = key_of(&args);
        let cached = client.cached::<T>(&key);

        if mounted.with_value(|mounted| mounted.as_ref() == Some(&key)) {
            // Woken by an invalidation elsewhere, or this key was deleted
            if cached.is_some() || client.is_removed(&key) {
                return;
            }
        } else {
            mounted.set_value(Some(key.clone()));
            query.error.set(None);
            query.data.set(cached);
        }

        let ticket = latest.get_value() + 1;
        latest.set_value(ticket);
        query.fetching.set(true);
        log::debug!("[query] fetching {}", key);

        let request = untrack(|| fetcher(args));
        spawn_local(async move {
            let result = request.await;
            if latest.try_get_value() != Some(ticket) {
                log::debug!("[query] dropped stale response for {}", key);
                return;
            }
            match result {
                Ok(value) => {
                    client.set_query_data(key, value.clone());
                    query.data.try_set(Some(value));
                    query.error.try_set(None);
                }
                Err(err) => {
                    query.error.try_set(Some(err));
                }
            }
            query.fetching.try_set(false);
        });
    });

    query
}

// ========================
// Mutations
// ========================

/// A write that invalidates query keys when it succeeds
pub struct Mutation<I, T, E> {
    action: Action<I, Result<T, E>>,
}

impl<I, T, E> Clone for Mutation<I, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T, E> Copy for Mutation<I, T, E> {}

impl<I, T, E> Mutation<I, T, E>
where
    I: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn dispatch(&self, input: I) {
        self.action.dispatch(input);
    }

    pub fn pending(&self) -> bool {
        self.action.pending().get()
    }

    /// Result of the last finished dispatch
    pub fn value(&self) -> Option<Result<T, E>> {
        self.action.value().get()
    }

    pub fn error(&self) -> Option<E> {
        self.action
            .value()
            .with(|value| value.as_ref().and_then(|result| result.as_ref().err().cloned()))
    }

    /// Run `callback` each time a dispatch succeeds
    pub fn on_success(&self, callback: impl Fn(&T) + 'static) {
        let value = self.action.value();
        Effect::new(move |_| {
            value.with(|value| {
                if let Some(Ok(output)) = value {
                    callback(output);
                }
            });
        });
    }
}

/// Mutation that invalidates `invalidates` after every successful dispatch
pub fn use_mutation<I, T, E, F, Fut>(invalidates: Vec<QueryKey>, mutation_fn: F) -> Mutation<I, T, E>
where
    I: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: Fn(&I) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    use_mutation_with(
        move |client: QueryClient, _: &I, _: &T| {
            for key in &invalidates {
                client.invalidate(key);
            }
        },
        mutation_fn,
    )
}

/// Mutation whose successful result decides what goes stale
///
/// `settle` sees the input and the output, so a write that turned out to be
/// a no-op can leave the cache alone.
pub fn use_mutation_with<I, T, E, S, F, Fut>(settle: S, mutation_fn: F) -> Mutation<I, T, E>
where
    I: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    S: Fn(QueryClient, &I, &T) + 'static,
    F: Fn(&I) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let client = use_query_client();
    let settle = Rc::new(settle);
    let action = Action::new_local(move |input: &I| {
        let request = mutation_fn(input);
        let input = input.clone();
        let settle = Rc::clone(&settle);
        async move {
            let result = request.await;
            if let Ok(output) = &result {
                settle(client, &input, output);
            }
            result
        }
    });
    Mutation { action }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_and_prefix() {
        let key = QueryKey::new("todoDetail").with(5);
        assert_eq!(key.to_string(), "todoDetail:5");
        assert!(key.starts_with(&QueryKey::new("todoDetail")));
        assert!(!key.starts_with(&QueryKey::new("todoList")));
        assert!(!QueryKey::new("todoDetail").starts_with(&key));
    }

    #[test]
    fn test_cache_roundtrip_is_type_checked() {
        let mut cache = QueryCache::default();
        let key = QueryKey::new("productList");
        cache.insert(key.clone(), vec![1u32, 2, 3]);

        assert_eq!(cache.get::<Vec<u32>>(&key), Some(vec![1, 2, 3]));
        assert_eq!(cache.get::<String>(&key), None);
        assert_eq!(cache.get::<Vec<u32>>(&QueryKey::new("other")), None);
    }

    #[test]
    fn test_invalidate_only_matching_prefix() {
        let mut cache = QueryCache::default();
        cache.insert(QueryKey::new("postDetail").with(1), "a".to_string());
        cache.insert(QueryKey::new("postDetail").with(2), "b".to_string());
        cache.insert(QueryKey::new("postList"), "c".to_string());

        assert_eq!(cache.invalidate(&QueryKey::new("postDetail")), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get::<String>(&QueryKey::new("postList")).as_deref(), Some("c"));
    }

    #[test]
    fn test_invalidate_exact_key() {
        let mut cache = QueryCache::default();
        cache.insert(QueryKey::new("todoDetail").with(1), 1u8);
        cache.insert(QueryKey::new("todoDetail").with(10), 10u8);

        assert_eq!(cache.invalidate(&QueryKey::new("todoDetail").with(1)), 1);
        assert_eq!(cache.get::<u8>(&QueryKey::new("todoDetail").with(10)), Some(10));
    }

    #[test]
    fn test_removed_key_stays_removed_until_reinserted() {
        let mut cache = QueryCache::default();
        let key = QueryKey::new("todoDetail").with(5);
        cache.insert(key.clone(), 5u32);

        assert!(cache.remove(&key));
        assert!(cache.is_removed(&key));
        assert_eq!(cache.get::<u32>(&key), None);

        cache.insert(key.clone(), 6u32);
        assert!(!cache.is_removed(&key));
    }

    // ========================
    // Reactive queries and mutations
    // ========================

    use std::cell::Cell;

    use any_spawner::Executor;
    use tokio::sync::Notify;
    use tokio::task::LocalSet;

    /// Run `body` on a local executor under a fresh owner with a query client
    async fn reactive<Fut: Future<Output = ()>>(body: impl FnOnce(QueryClient) -> Fut) {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();
        LocalSet::new()
            .run_until(async move {
                let client = provide_query_client();
                body(client).await;
            })
            .await;
    }

    /// Let pending effects and spawned fetches run
    async fn settle() {
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
    }

    fn item_key(id: u32) -> QueryKey {
        QueryKey::new("item").with(id)
    }

    /// Item query that counts every request it sends
    fn counted_query(params: RwSignal<Option<u32>>, calls: Rc<Cell<u32>>) -> Query<u32, String> {
        use_query(
            move || params.get(),
            |id: &u32| item_key(*id),
            move |id: u32| {
                calls.set(calls.get() + 1);
                async move { Ok::<u32, String>(id) }
            },
        )
    }

    #[tokio::test]
    async fn test_disabled_query_sends_nothing_until_enabled() {
        reactive(|_| async {
            let calls = Rc::new(Cell::new(0));
            let params = RwSignal::new(None);
            let query = counted_query(params, calls.clone());
            settle().await;

            assert_eq!(calls.get(), 0);
            assert!(!query.is_fetching());
            assert_eq!(query.data(), None);

            params.set(Some(3));
            settle().await;
            assert_eq!(calls.get(), 1);
            assert_eq!(query.data(), Some(3));
        })
        .await;
    }

    #[tokio::test]
    async fn test_superseded_response_never_overwrites_cached_key() {
        reactive(|client| async move {
            client.set_query_data(item_key(2), 2u32);
            let gate = Rc::new(Notify::new());
            let params = RwSignal::new(Some(1u32));
            let query = use_query(
                move || params.get(),
                |id: &u32| item_key(*id),
                {
                    let gate = gate.clone();
                    move |id: u32| {
                        let gate = gate.clone();
                        async move {
                            if id == 1 {
                                gate.notified().await;
                            }
                            Ok::<u32, String>(id)
                        }
                    }
                },
            );
            settle().await;
            assert!(query.is_loading());

            params.set(Some(2));
            settle().await;
            assert_eq!(query.data(), Some(2));

            gate.notify_one();
            settle().await;
            assert_eq!(query.data(), Some(2));
            assert_eq!(client.cached::<u32>(&item_key(1)), None);
            assert!(!query.is_fetching());
        })
        .await;
    }

    #[tokio::test]
    async fn test_cached_key_shows_at_once_and_refetches_on_mount() {
        reactive(|client| async move {
            client.set_query_data(item_key(4), 40u32);
            let calls = Rc::new(Cell::new(0));
            let query = counted_query(RwSignal::new(Some(4)), calls.clone());
            settle().await;

            assert_eq!(calls.get(), 1);
            assert_eq!(query.data(), Some(4));
        })
        .await;
    }

    #[tokio::test]
    async fn test_invalidation_refetches_only_matching_mounted_keys() {
        reactive(|client| async move {
            let calls = Rc::new(Cell::new(0));
            let _query = counted_query(RwSignal::new(Some(1)), calls.clone());
            settle().await;
            assert_eq!(calls.get(), 1);

            client.invalidate(&QueryKey::new("other"));
            settle().await;
            assert_eq!(calls.get(), 1);

            client.invalidate(&QueryKey::new("item"));
            settle().await;
            assert_eq!(calls.get(), 2);
        })
        .await;
    }

    #[tokio::test]
    async fn test_mutation_invalidates_only_on_success() {
        reactive(|_| async {
            let calls = Rc::new(Cell::new(0));
            let _query = counted_query(RwSignal::new(Some(1)), calls.clone());
            settle().await;

            let failing = use_mutation(vec![QueryKey::new("item")], |_: &u32| async {
                Err::<(), String>("boom".into())
            });
            failing.dispatch(1);
            settle().await;
            assert_eq!(calls.get(), 1);
            assert_eq!(failing.error().as_deref(), Some("boom"));

            let saving = use_mutation(vec![QueryKey::new("item")], |_: &u32| async { Ok::<(), String>(()) });
            saving.dispatch(1);
            settle().await;
            assert_eq!(calls.get(), 2);
        })
        .await;
    }

    /// Delete-style settle: nothing on a declined confirm, otherwise forget
    /// the record and refresh the list
    fn settle_delete(client: QueryClient, id: &u32, outcome: &Option<u32>) {
        if outcome.is_some() {
            client.remove(&item_key(*id));
            client.invalidate(&QueryKey::new("itemList"));
        }
    }

    #[tokio::test]
    async fn test_declined_delete_sends_no_request() {
        reactive(|client| async move {
            let calls = Rc::new(Cell::new(0));
            let query = counted_query(RwSignal::new(Some(5)), calls.clone());
            settle().await;
            assert_eq!(calls.get(), 1);

            let declined = use_mutation_with(settle_delete, |_: &u32| async { Ok::<Option<u32>, String>(None) });
            declined.dispatch(5);
            settle().await;

            assert_eq!(calls.get(), 1);
            assert_eq!(query.data(), Some(5));
            assert_eq!(client.cached::<u32>(&item_key(5)), Some(5));
        })
        .await;
    }

    #[tokio::test]
    async fn test_accepted_delete_does_not_refetch_deleted_record() {
        reactive(|client| async move {
            let calls = Rc::new(Cell::new(0));
            let _query = counted_query(RwSignal::new(Some(5)), calls.clone());
            settle().await;

            let accepted = use_mutation_with(settle_delete, |id: &u32| {
                let id = *id;
                async move { Ok::<Option<u32>, String>(Some(id)) }
            });
            accepted.dispatch(5);
            settle().await;

            assert_eq!(calls.get(), 1);
            assert!(client.is_removed(&item_key(5)));
            assert_eq!(accepted.value(), Some(Ok(Some(5))));
        })
        .await;
    }
}

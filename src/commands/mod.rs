//! REST Command Wrappers
//!
//! Frontend bindings to the backend. Every page goes through these generic
//! helpers; the entity type picks the paths and the navigation.

mod transport;

use crud_core::forms::EditForm;
use crud_core::repository::{delete_confirmed, submit_create, submit_update, Repository, RestRepository};
use crud_core::{ApiResult, Entity, Navigation};
use leptos_query::{QueryClient, QueryKey};

pub use transport::{BrowserConfirm, HttpTransport};

// ========================
// Query keys
// ========================

fn detail_prefix<E: Entity>() -> QueryKey {
    QueryKey::new(format!("{}Detail", E::NAME))
}

/// Key of a single entity, e.g. `todoDetail:5`
pub fn detail_key<E: Entity>(id: u32) -> QueryKey {
    detail_prefix::<E>().with(id)
}

/// Key of an entity list, e.g. `productList`
pub fn list_key<E: Entity>() -> QueryKey {
    QueryKey::new(format!("{}List", E::NAME))
}

/// Everything a write to `E` makes stale
pub fn entity_keys<E: Entity>() -> Vec<QueryKey> {
    vec![detail_prefix::<E>(), list_key::<E>()]
}

/// Cache upkeep after `delete_entity`
///
/// A declined confirmation touched nothing. An accepted one forgets the
/// deleted record so the open detail page does not refetch it, and
/// refreshes the list.
pub fn settle_delete<E: Entity>(client: QueryClient, id: &u32, outcome: &Option<Navigation>) {
    if outcome.is_none() {
        return;
    }
    client.remove(&detail_key::<E>(*id));
    client.invalidate(&list_key::<E>());
}

// ========================
// Commands
// ========================

fn repo<E: Entity>(api: HttpTransport) -> RestRepository<E, HttpTransport> {
    RestRepository::new(api)
}

pub async fn fetch_detail<E: Entity>(api: HttpTransport, id: u32) -> ApiResult<E> {
    repo::<E>(api).find_by_id(id).await
}

pub async fn fetch_list<E: Entity>(api: HttpTransport) -> ApiResult<Vec<E>> {
    repo::<E>(api).list().await
}

pub async fn create_entity<E: Entity, F: EditForm<E>>(api: HttpTransport, form: F) -> ApiResult<Navigation> {
    let result = submit_create::<E, _, F>(&repo::<E>(api), &form).await;
    if let Err(err) = &result {
        log::error!("[{}] create failed: {}", E::NAME, err);
    }
    result
}

pub async fn update_entity<E: Entity, F: EditForm<E>>(
    api: HttpTransport,
    id: u32,
    form: F,
) -> ApiResult<Navigation> {
    let result = submit_update::<E, _, F>(&repo::<E>(api), id, &form).await;
    if let Err(err) = &result {
        log::error!("[{}] update of {} failed: {}", E::NAME, id, err);
    }
    result
}

/// Confirm with the user, then delete; `None` when declined
pub async fn delete_entity<E: Entity>(api: HttpTransport, id: u32) -> ApiResult<Option<Navigation>> {
    let result = delete_confirmed::<E, _, _>(&repo::<E>(api), &BrowserConfirm, id).await;
    if let Err(err) = &result {
        log::error!("[{}] delete of {} failed: {}", E::NAME, id, err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crud_core::domain::{Post, Product, Todo};
    use leptos::prelude::Owner;

    #[test]
    fn test_keys_follow_entity_names() {
        assert_eq!(detail_key::<Todo>(5).to_string(), "todoDetail:5");
        assert_eq!(list_key::<Product>().to_string(), "productList");
    }

    #[test]
    fn test_detail_prefix_covers_details_only() {
        let keys = entity_keys::<Todo>();
        let detail_prefix = &keys[0];
        assert!(detail_key::<Todo>(5).starts_with(detail_prefix));
        assert!(!list_key::<Todo>().starts_with(detail_prefix));
        assert!(!detail_key::<Post>(5).starts_with(detail_prefix));
        assert!(keys.contains(&list_key::<Todo>()));
    }

    #[test]
    fn test_settle_delete_ignores_declined_confirm() {
        let owner = Owner::new();
        owner.set();
        let client = QueryClient::new();
        client.set_query_data(detail_key::<Todo>(5), Todo::default());
        client.set_query_data(list_key::<Todo>(), Vec::<Todo>::new());

        settle_delete::<Todo>(client, &5, &None);
        assert!(client.cached::<Todo>(&detail_key::<Todo>(5)).is_some());
        assert!(client.cached::<Vec<Todo>>(&list_key::<Todo>()).is_some());

        settle_delete::<Todo>(client, &5, &Some(Todo::after_delete()));
        assert!(client.is_removed(&detail_key::<Todo>(5)));
        assert!(client.cached::<Vec<Todo>>(&list_key::<Todo>()).is_none());
    }
}

//! Mutations with their navigation side effects
//!
//! Each helper returns the `Navigation` the page should perform on success.

use super::traits::Repository;
use crate::domain::{ApiResult, Entity, Navigation};
use crate::forms::EditForm;

/// Yes/no prompt shown before destructive requests
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt text for deleting an entity
pub fn delete_prompt<E: Entity>() -> String {
    format!("Are you sure you want to delete this {}?", E::NAME)
}

/// Ask first, then delete. `Ok(None)` means the user declined and nothing was sent.
pub async fn delete_confirmed<E, R, C>(repo: &R, confirm: &C, id: u32) -> ApiResult<Option<Navigation>>
where
    E: Entity,
    R: Repository<E> + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(&delete_prompt::<E>()) {
        log::debug!("[{}] delete of {} declined", E::NAME, id);
        return Ok(None);
    }
    repo.delete(id).await?;
    Ok(Some(E::after_delete()))
}

/// Validate the form, PUT it, and report where to go next
pub async fn submit_update<E, R, F>(repo: &R, id: u32, form: &F) -> ApiResult<Navigation>
where
    E: Entity,
    R: Repository<E> + ?Sized,
    F: EditForm<E>,
{
    let draft = form.draft()?;
    repo.update(id, &draft).await?;
    Ok(E::after_update(id))
}

/// Validate the form, POST it, and report where to go next
pub async fn submit_create<E, R, F>(repo: &R, form: &F) -> ApiResult<Navigation>
where
    E: Entity,
    R: Repository<E> + ?Sized,
    F: EditForm<E>,
{
    let draft = form.draft()?;
    repo.create(&draft).await?;
    Ok(E::after_create())
}

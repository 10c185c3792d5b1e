//! API helpers for poetry administration.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Trash and purge share the delete endpoint; `permanent=true` tells the
//!   server to drop the row instead of stamping `deleted_at`.

use risalo_api_models::{PoetryPatch, PoetrySummary, PoetryUpsert};

use crate::services::api::{ApiClient, ApiError};

/// Create a poetry work, translations included.
pub(crate) async fn create_poetry(
    client: &ApiClient,
    body: &PoetryUpsert,
) -> Result<PoetrySummary, ApiError> {
    client.post_json("/poetry", body).await
}

/// Patch a work; unset fields stay untouched. Restore goes through here
/// with an explicit `deleted_at: null`.
pub(crate) async fn patch_poetry(
    client: &ApiClient,
    id: u64,
    patch: &PoetryPatch,
) -> Result<PoetrySummary, ApiError> {
    client.put_json(&format!("/poetry/{id}"), patch).await
}

/// Soft-delete a work into the trash.
pub(crate) async fn trash_poetry(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/poetry/{id}")).await
}

/// Permanently delete a trashed work.
pub(crate) async fn purge_poetry(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/poetry/{id}?permanent=true")).await
}

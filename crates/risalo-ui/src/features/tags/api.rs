//! API helpers for poet-tag administration.

use risalo_api_models::{PoetTag, TagPatch, TagUpsert};

use crate::services::api::{ApiClient, ApiError};

/// Create a tag.
pub(crate) async fn create_tag(client: &ApiClient, body: &TagUpsert) -> Result<PoetTag, ApiError> {
    client.post_json("/tags", body).await
}

/// Flip the hidden flag; unset fields stay untouched.
pub(crate) async fn patch_tag(
    client: &ApiClient,
    id: u64,
    patch: &TagPatch,
) -> Result<PoetTag, ApiError> {
    client.put_json(&format!("/tags/{id}"), patch).await
}

/// Delete a tag.
pub(crate) async fn delete_tag(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/tags/{id}")).await
}

//! API helpers for category administration.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared `ApiClient` for auth and error handling.

use risalo_api_models::{CategoryPatch, CategorySummary, CategoryUpsert};

use crate::services::api::{ApiClient, ApiError};

/// Create a category.
pub(crate) async fn create_category(
    client: &ApiClient,
    body: &CategoryUpsert,
) -> Result<CategorySummary, ApiError> {
    client.post_json("/categories", body).await
}

/// Replace a category.
pub(crate) async fn update_category(
    client: &ApiClient,
    id: u64,
    body: &CategoryUpsert,
) -> Result<CategorySummary, ApiError> {
    client.put_json(&format!("/categories/{id}"), body).await
}

/// Flip one of the category flags; unset fields stay untouched.
pub(crate) async fn patch_category(
    client: &ApiClient,
    id: u64,
    patch: &CategoryPatch,
) -> Result<CategorySummary, ApiError> {
    client.put_json(&format!("/categories/{id}"), patch).await
}

/// Delete a category.
pub(crate) async fn delete_category(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/categories/{id}")).await
}

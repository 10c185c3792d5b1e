//! Settings endpoints.

use risalo_api_models::SiteSettings;

use crate::services::api::{ApiClient, ApiError};

/// Fetch the singleton settings document.
pub async fn get_settings(client: &ApiClient) -> Result<SiteSettings, ApiError> {
    client.get_json("/settings").await
}

/// Store the full settings document.
pub async fn put_settings(
    client: &ApiClient,
    settings: &SiteSettings,
) -> Result<SiteSettings, ApiError> {
    client.put_json("/settings", settings).await
}

//! API helpers for the romaniser dictionaries.

use risalo_api_models::{HesudharEntry, HesudharUpsert, RomanWordEntry, RomanWordUpsert};

use crate::services::api::{ApiClient, ApiError};

/// Add a word to the transliteration lexicon.
pub(crate) async fn create_word(
    client: &ApiClient,
    body: &RomanWordUpsert,
) -> Result<RomanWordEntry, ApiError> {
    client.post_json("/romanizer/words", body).await
}

/// Remove a word from the lexicon.
pub(crate) async fn delete_word(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/romanizer/words/{id}")).await
}

/// Add a hesudhar spelling correction.
pub(crate) async fn create_rule(
    client: &ApiClient,
    body: &HesudharUpsert,
) -> Result<HesudharEntry, ApiError> {
    client.post_json("/romanizer/hesudhar", body).await
}

/// Remove a spelling correction.
pub(crate) async fn delete_rule(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/romanizer/hesudhar/{id}")).await
}

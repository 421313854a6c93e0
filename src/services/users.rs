//! Admin surface for user accounts over `/api/users`.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::user::{NewUser, UserAccount};

/// Lists all user accounts.
pub async fn list(client: &ApiClient) -> Result<Vec<UserAccount>> {
    client.get_json(&client.api_url("/users")).await
}

/// Fetches a single user account by id.
pub async fn get(client: &ApiClient, id: i64) -> Result<UserAccount> {
    client
        .get_json(&client.api_url(&format!("/users/{}", id)))
        .await
}

/// Creates a user account.
pub async fn create(client: &ApiClient, user: &NewUser) -> Result<UserAccount> {
    tracing::info!("📝 Creating user {}", user.username);
    client.post_json(&client.api_url("/users"), user).await
}

/// Deletes a user account by id.
pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    tracing::info!("🗑️ Deleting user {}", id);
    client.delete(&client.api_url(&format!("/users/{}", id))).await
}

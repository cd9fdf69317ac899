//! Members Directory API

use reorder_core::{decode_data, ApiClient};

use crate::models::MembersPage;

/// `GET members?page=&limit=&search=`
pub async fn list_members(client: &ApiClient, query: &[(&str, String)]) -> Result<MembersPage, String> {
    let value = client.get_json("members", query).await.map_err(|e| e.to_string())?;
    decode_data(value).map_err(|e| e.to_string())
}

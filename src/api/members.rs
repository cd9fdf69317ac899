//! Exclusive Members API

use reorder_core::{ApiClient, CollectionEndpoint, HttpBackend, ListShape, ReorderController};

use crate::models::ExclusiveMember;

pub type ExclusiveMembersController = ReorderController<ExclusiveMember, HttpBackend<ExclusiveMember>>;

/// `GET exclusive-members` answers `{ data: { members: [...] } }`,
/// reorder posts `{ memberIds: [...] }`.
pub fn exclusive_members_endpoint() -> CollectionEndpoint {
    CollectionEndpoint::new(
        "exclusive-members",
        "memberIds",
        ListShape::DataField("members".to_string()),
    )
}

pub async fn delete_exclusive_member(client: &ApiClient, id: &str) -> Result<(), String> {
    client
        .delete(&format!("exclusive-members/{}", id))
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let endpoint = exclusive_members_endpoint();
        assert_eq!(endpoint.list_path, "exclusive-members");
        assert_eq!(endpoint.reorder_path, "exclusive-members/reorder");
        let body = endpoint.reorder_body(&["m2", "m1"]).unwrap();
        assert_eq!(body, serde_json::json!({ "memberIds": ["m2", "m1"] }));
    }
}

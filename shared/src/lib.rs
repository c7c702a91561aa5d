use serde::{Deserialize, Serialize};

// API client types and error taxonomy
pub mod api;
pub use api::{ApiClientConfig, ApiError, ErrorBody};

/// The signed-in user as returned by `GET /api/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    /// Opaque account identifier (a Steam id in practice)
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub avatar_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_user_uses_camel_case() {
        let json = r#"{
            "id": "76561198055442516",
            "name": "Sciguymjm",
            "avatarLink": "https://avatars.example/abc_full.jpg",
            "admin": false
        }"#;
        let user: LoggedInUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "76561198055442516");
        assert_eq!(user.avatar_link, "https://avatars.example/abc_full.jpg");

        let out = serde_json::to_value(&user).unwrap();
        assert_eq!(out["avatarLink"], "https://avatars.example/abc_full.jpg");
    }

    #[test]
    fn logged_in_user_name_is_optional() {
        let user: LoggedInUser =
            serde_json::from_str(r#"{"id": "1", "avatarLink": "a.png"}"#).unwrap();
        assert_eq!(user.name, "");
    }

    #[test]
    fn logged_in_user_requires_avatar() {
        assert!(serde_json::from_str::<LoggedInUser>(r#"{"id": "1"}"#).is_err());
    }
}

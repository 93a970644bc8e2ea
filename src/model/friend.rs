use serde::{Deserialize, Serialize};

/// Friend record from "friends.get" with the default extended fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub online: Option<i64>,
    #[serde(default)]
    pub photo_100: Option<String>,
}

impl Friend {
    pub fn is_online(&self) -> bool {
        self.online == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extended_record() {
        let friend: Friend = serde_json::from_value(json!({
            "id": 7,
            "first_name": "Grace",
            "last_name": "Hopper",
            "online": 0
        }))
        .unwrap();

        assert_eq!(friend.first_name.as_deref(), Some("Grace"));
        assert!(!friend.is_online());
    }

    #[test]
    fn test_bare_id_record() {
        // Without extended fields the endpoint returns plain objects
        // carrying only the id.
        let friend: Friend = serde_json::from_value(json!({"id": 7})).unwrap();
        assert!(friend.first_name.is_none());
    }
}

use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A persisted todo item. The id is assigned by the database on insert and
/// never accepted from a client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

/// The request shape for create and update. Update is a full replacement,
/// so both fields are always written.
#[derive(Serialize, Deserialize, Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct TodoInput {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_defaults_completed_to_false() {
        let input: TodoInput = serde_json::from_value(json!({"text": "buy milk"})).unwrap();
        assert_eq!(input.text, "buy milk");
        assert!(!input.completed);
    }

    #[test]
    fn input_never_accepts_an_id() {
        let input: TodoInput =
            serde_json::from_value(json!({"id": 42, "text": "buy milk", "completed": true}))
                .unwrap();
        assert_eq!(input.text, "buy milk");
        assert!(input.completed);
    }

    #[test]
    fn todo_serializes_all_fields() {
        let todo = Todo {
            id: 1,
            text: "buy milk".to_string(),
            completed: false,
        };
        assert_eq!(
            serde_json::to_value(&todo).unwrap(),
            json!({"id": 1, "text": "buy milk", "completed": false})
        );
    }
}

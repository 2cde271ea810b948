use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Employee {
    // Empty until the store assigns a key; omitted from JSON while empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

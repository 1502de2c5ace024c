use serde::{Deserialize, Serialize};

/// A bookable room from the room directory.
///
/// Room identifiers are assigned by the backend; the frontend never
/// invents them. Only active rooms are offered for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: u32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

// Talker domain types shared by the store, the handlers and the CLI
use serde::{Deserialize, Serialize};

/// A speaker record as persisted in the talker document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talker {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(rename = "watchedAt")]
    pub watched_at: String,
    pub rate: i64,
}

/// Validated create/update payload; everything but the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkerInput {
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

impl Talker {
    pub fn from_input(id: i64, input: TalkerInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            talk: input.talk,
        }
    }

    /// Replace name, age and talk in place, keeping the id
    pub fn apply(&mut self, input: TalkerInput) {
        self.name = input.name;
        self.age = input.age;
        self.talk = input.talk;
    }
}

/// POST /login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

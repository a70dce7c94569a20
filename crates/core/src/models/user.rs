use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

impl User {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Home page greeting for a signed-in user or an anonymous visitor
pub fn greeting(user: Option<&User>) -> String {
    match user.map(User::first_name) {
        Some(first_name) if !first_name.is_empty() => format!("Olá, {}!", first_name),
        _ => "Olá! Vamos agendar um corte hoje?".to_string(),
    }
}

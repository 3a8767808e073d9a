use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct Context {
    pub id: String,
    pub name: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContextsResponse {
    pub items: Vec<Context>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContextOwner {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Serialize)]
pub struct CreateContextParams {
    pub name: String,
    pub owner: ContextOwner,
}

#[derive(Debug, Serialize)]
pub struct UpsertVariableParams {
    pub value: String,
}

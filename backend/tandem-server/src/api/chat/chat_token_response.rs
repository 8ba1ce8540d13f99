use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChatTokenResponse {
    pub token: String,
}

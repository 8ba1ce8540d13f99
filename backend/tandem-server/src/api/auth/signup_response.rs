use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserDto,
}

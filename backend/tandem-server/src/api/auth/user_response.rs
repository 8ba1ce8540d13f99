use crate::UserDto;

use serde::Serialize;

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserDto,
}

impl UserResponse {
    pub fn ok(user: UserDto) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

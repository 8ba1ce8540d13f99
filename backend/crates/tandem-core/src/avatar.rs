//! Default avatar selection from the public avatar pool.

use rand::Rng;

/// Number of images in the public avatar pool
pub const AVATAR_POOL_SIZE: u32 = 100;

const AVATAR_BASE_URL: &str = "https://avatar.iran.liara.run/public";

/// URL of the avatar at `index` (1-based)
pub fn avatar_url(index: u32) -> String {
    format!("{AVATAR_BASE_URL}/{index}.png")
}

/// Pick one avatar uniformly from the pool
pub fn random_avatar_url() -> String {
    let index = rand::rng().random_range(1..=AVATAR_POOL_SIZE);
    avatar_url(index)
}

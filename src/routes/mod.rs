pub mod health;
pub mod users;

pub use health::{health_check, read_root};
pub use users::{get_user, get_user_by_username, update_user_points};

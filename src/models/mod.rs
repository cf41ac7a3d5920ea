pub mod level;
pub mod user;

pub use level::Level;
pub use user::{UpdatePointsRequest, User};

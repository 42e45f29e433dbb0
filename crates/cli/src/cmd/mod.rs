mod base;
mod info;
mod project;
mod user;

pub use base::cmd_base;
pub use info::cmd_info;
pub use project::{ProjectArgs, cmd_project};
pub use user::cmd_user;

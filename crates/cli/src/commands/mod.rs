mod bump;
mod check;
mod config;
mod init;

pub use bump::BumpArgs;
pub use bump::bump_services;
pub use bump::handle_bump;
pub use bump::handle_bump_with_prompter;
pub use check::CheckArgs;
pub use check::handle_check;
pub use check::handle_check_with_prompter;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;

pub mod user;

pub use user::{load_config_file, load_user_config, UserConfig};

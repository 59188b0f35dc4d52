pub mod dotenv_env;
pub mod map_env;
pub mod process_env;

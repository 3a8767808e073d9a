pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "circlesync";
#[cfg(windows)]
pub const EXEC_NAME: &str = "circlesync.exe";

pub const CIRCLE_API_BASE_URL: &str = "https://circleci.com/api/v2";
pub const CONFIG_STORE_PATH: &str = ".circlesync/config.json";
pub const DEFAULT_SYNC_TAG: &str = "CIRCLECI";

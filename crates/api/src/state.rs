use std::sync::Arc;

use vidcat_db::DbPool;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`. Cloning is cheap: the
/// pool is reference-counted internally and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}

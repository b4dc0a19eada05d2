use crate::core::{Config, Result, ServerError};
use crate::db::JsonStore;

/// 服务器状态 - 持有所有处理器共享的引用
///
/// 克隆成本很低 (配置 + 数据目录路径)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | JsonStore | JSON 文件存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: JsonStore,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 创建数据目录 (如不存在)。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store = JsonStore::new(&config.data_dir);
        store
            .ensure_dir()
            .await
            .map_err(|e| ServerError::DataDir(e.to_string()))?;

        tracing::info!(data_dir = %config.data_dir.display(), "Data directory ready");

        Ok(Self {
            config: config.clone(),
            store,
        })
    }
}

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有共享服务的引用
///
/// `Surreal<Db>` 内部已是 Arc，Clone 成本极低；每个请求处理器
/// 拿到的都是同一个嵌入式数据库句柄。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 使用现成的数据库句柄构造状态
    ///
    /// 测试场景使用内存引擎时走这里；调用方负责先执行 schema 定义。
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/dinehub.db, RocksDB 引擎)
    /// 3. schema 与索引定义、计数器种子
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {}", e)))?;

        let db_path = config.database_dir().join("dinehub.db");
        let db_service = DbService::new(&db_path).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }
}

use banquet_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let mut config = setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("🍽  Banquet Server starting...");

    // 2. `--production` 等同 ENVIRONMENT=production
    if std::env::args().any(|a| a == "--production") {
        config = config.into_production();
    }

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

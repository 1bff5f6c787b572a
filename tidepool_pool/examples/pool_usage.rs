//! 连接池使用示例
//!
//! 运行: RUST_LOG=debug cargo run -p tidepool_pool --example pool_usage

use tidepool_config::Config;
use tidepool_pool::ConnectionPool;

fn main() -> tidepool_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let config = Config::new("127.0.0.1", 5432).with_max_connections(2);
    println!("{}", config.summary());

    let pool = ConnectionPool::new(config)?;

    let first = pool.acquire()?;
    let second = pool.acquire()?;
    println!("借出: {} / {}", first, second);

    // 容量已满
    if let Err(e) = pool.acquire() {
        println!("预期的错误: {}", e);
    }

    pool.release(first)?;
    let reused = pool.acquire()?;
    println!("复用: {}", reused);

    println!("健康: {}", pool.health_check()?);
    println!("{:?}", pool.stats()?);
    println!("{}", pool.metrics().report());

    Ok(())
}

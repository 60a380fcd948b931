//! 配置加载集成测试
//!
//! 使用临时配置目录验证分层加载与端口环境变量覆盖。
//! 本文件中的测试会修改进程级环境变量，因此合并为单个测试顺序执行。

use receipt_shared::config::AppConfig;
use std::fs;
use std::path::PathBuf;

fn temp_config_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("receipt-config-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_layered_config_loading() {
    let dir = temp_config_dir();
    fs::write(
        dir.join("default.toml"),
        r#"
        [server]
        host = "127.0.0.1"
        port = 8000

        [observability]
        log_level = "debug"
        "#,
    )
    .unwrap();
    fs::write(
        dir.join("receipt-processor.toml"),
        r#"
        [server]
        port = 8100
        "#,
    )
    .unwrap();

    // SAFETY: 本测试二进制中只有这一个测试读写这些环境变量
    unsafe {
        std::env::set_var("CONFIG_DIR", &dir);
        std::env::remove_var("RECEIPT_SERVER_HOST");
        std::env::remove_var("RECEIPT_SERVER_PORT");
        std::env::remove_var("RECEIPT_PROCESSOR_PORT");
    }

    // 服务特定文件覆盖默认文件
    let config = AppConfig::load("receipt-processor").unwrap();
    assert_eq!(config.service_name, "receipt-processor");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8100);
    assert_eq!(config.observability.log_level, "debug");

    // 服务端口快捷变量覆盖文件配置
    unsafe {
        std::env::set_var("RECEIPT_PROCESSOR_PORT", "8200");
    }
    let config = AppConfig::load("receipt-processor").unwrap();
    assert_eq!(config.server.port, 8200);

    // RECEIPT_SERVER_* 优先于服务端口快捷变量
    unsafe {
        std::env::set_var("RECEIPT_SERVER_PORT", "8300");
        std::env::set_var("RECEIPT_SERVER_HOST", "10.0.0.1");
    }
    let config = AppConfig::load("receipt-processor").unwrap();
    assert_eq!(config.server.port, 8300);
    assert_eq!(config.server_addr(), "10.0.0.1:8300");

    unsafe {
        std::env::remove_var("RECEIPT_SERVER_PORT");
        std::env::remove_var("RECEIPT_SERVER_HOST");
        std::env::remove_var("RECEIPT_PROCESSOR_PORT");
        std::env::remove_var("CONFIG_DIR");
    }
    let _ = fs::remove_dir_all(&dir);
}

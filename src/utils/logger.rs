use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 沒有 RUST_LOG 時使用的預設過濾規則
pub fn default_filter(verbose: bool, monitor: bool) -> String {
    if verbose {
        "small_demos=debug,info".to_string()
    } else if monitor {
        // --monitor 的統計是 info 等級，要單獨放行
        "small_demos=warn,small_demos::utils::monitor=info".to_string()
    } else {
        "small_demos=warn".to_string()
    }
}

/// 日誌一律寫到 stderr，stdout 只留給 demo 本身的輸出
pub fn init_cli_logger(verbose: bool, monitor: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, monitor)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

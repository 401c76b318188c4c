//! # ata42 CLI エントリポイント
//!
//! ログは標準エラーに出す。標準出力はプローブ結果の3行だけ。

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ata42_cli::{run_probe, ClientConfig, SignClient};

/// 署名サービスに固定ペイロードを送信し、結果を表示する。
#[derive(Parser)]
#[command(name = "ata42-cli", version)]
struct Args {
    /// 署名サービスのベースURL（省略時は SIGN_ENDPOINT、なければ http://localhost:8080）
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ClientConfig::from_env().with_endpoint(args.endpoint);
    let client = SignClient::new(&config)?;
    tracing::info!(url = %client.sign_url(), "署名プローブを開始");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_probe(&client, &mut out).await?;

    Ok(())
}

//! # ata42 CLI
//!
//! 署名サービスの `POST /sign` に固定ペイロードを送り、
//! ペイロード・ステータス・ボディを標準出力に書き出す手動確認用クライアント。

pub mod client;
pub mod config;
pub mod error;
pub mod probe;

#[cfg(test)]
mod test_helpers;

pub use client::{SignClient, SignResponse};
pub use config::ClientConfig;
pub use error::ClientError;
pub use probe::run_probe;

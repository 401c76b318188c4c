//! # クライアント設定
//!
//! 環境変数とコマンドライン引数からの設定読み込み。

/// 署名サービスのデフォルトのベースURL。
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// 署名エンドポイントのパス。
pub const SIGN_PATH: &str = "/sign";

/// クライアント設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 署名サービスのベースURL（例: "http://localhost:8080"）
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    /// 環境変数 `SIGN_ENDPOINT` から構築する。未設定ならデフォルト。
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("SIGN_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }

    /// コマンドライン引数で指定されたエンドポイントがあれば上書きする。
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    /// `POST /sign` の完全なURLを返す。
    /// 末尾のスラッシュは取り除いてから連結する。
    pub fn sign_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SIGN_PATH)
    }
}

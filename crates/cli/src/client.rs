//! # 署名サービス HTTPクライアント
//!
//! `POST /sign` を1回送信し、ステータスとボディをそのまま返す。
//! リトライ・タイムアウト・ステータスによる分岐は行わない。

use ata42_types::{SignedData, TimestampedData};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// 署名サービスからのレスポンス。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignResponse {
    /// HTTPステータスコード
    pub status: u16,
    /// レスポンスボディ（テキスト）
    pub body: String,
}

impl SignResponse {
    /// ボディを `SignedData` として解釈できれば返す。
    /// ログ出力用で、失敗してもエラーにはしない。
    pub fn signed_data(&self) -> Option<SignedData> {
        serde_json::from_str(&self.body).ok()
    }
}

/// 署名サービスクライアント。
pub struct SignClient {
    /// HTTPクライアント
    http_client: reqwest::Client,
    /// `POST /sign` の完全なURL
    sign_url: String,
}

impl SignClient {
    /// 設定からクライアントを構築する。URLが不正なら `ClientError::Config`。
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let sign_url = config.sign_url();
        let parsed = reqwest::Url::parse(&sign_url)
            .map_err(|e| ClientError::Config(format!("URLのパースに失敗 ({sign_url}): {e}")))?;
        // "localhost:8080" はスキーム "localhost" としてパースされてしまう
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "http/https以外のスキームは使用できません ({sign_url})"
            )));
        }

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("HTTPクライアント構築失敗: {e}")))?;

        Ok(Self {
            http_client,
            sign_url,
        })
    }

    /// 送信先URLを返す。
    pub fn sign_url(&self) -> &str {
        &self.sign_url
    }

    /// ペイロードをJSONで `POST /sign` に送信する。
    pub async fn post_sign(&self, payload: &TimestampedData) -> Result<SignResponse, ClientError> {
        tracing::debug!(url = %self.sign_url, "署名リクエストを送信");

        let response = self
            .http_client
            .post(&self.sign_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP送信失敗: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("レスポンス読み取り失敗: {e}")))?;

        tracing::debug!(status, body_len = body.len(), "レスポンスを受信");

        Ok(SignResponse { status, body })
    }
}

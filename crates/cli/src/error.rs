//! # クライアント エラー型

/// クライアントエラー型。
///
/// HTTPステータスはエラーとして扱わない。4xx/5xxも通常の結果として返る。
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 設定が不正（URLのパース失敗、HTTPクライアント構築失敗）
    #[error("設定が不正です: {0}")]
    Config(String),
    /// リクエスト送信またはレスポンス読み取りに失敗
    #[error("署名サービスとの通信に失敗: {0}")]
    Transport(String),
    /// ペイロードのシリアライズに失敗
    #[error("ペイロードのシリアライズに失敗: {0}")]
    Serialize(String),
    /// 標準出力への書き込みに失敗
    #[error("出力に失敗: {0}")]
    Output(#[from] std::io::Error),
}

//! # ata42 共有型定義
//!
//! 署名サービス `POST /sign` とやり取りするデータ構造。
//!
//! ## エンコーディング規則
//! - Base64: バイナリデータ（データ本体、署名）。送信側は標準アルファベット、
//!   署名サービスはURLセーフアルファベットを使うため、デコードは両方を受け付ける。

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Base64 バイト列
// ---------------------------------------------------------------------------

/// プローブで送信する固定バイト列。
pub const PROBE_BYTES: [u8; 3] = [1, 2, 3];

/// Base64エンコードされたバイト列。
/// JSON上はただの文字列として表現される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringBytes(String);

impl StringBytes {
    /// バイト列を標準アルファベット（パディングあり）でエンコードする。
    pub fn encode(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// エンコード済みの文字列を返す。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// バイト列にデコードする。
    ///
    /// 標準アルファベットで失敗した場合はURLセーフアルファベットを試す。
    /// どちらでもデコードできなければ `None`。
    pub fn to_vec(&self) -> Option<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .or_else(|_| URL_SAFE.decode(&self.0))
            .ok()
    }
}

impl From<Vec<u8>> for StringBytes {
    fn from(value: Vec<u8>) -> Self {
        Self::encode(&value)
    }
}

impl From<&[u8]> for StringBytes {
    fn from(value: &[u8]) -> Self {
        Self::encode(value)
    }
}

// ---------------------------------------------------------------------------
// API リクエスト/レスポンス
// ---------------------------------------------------------------------------

/// POST /sign リクエスト。
///
/// `data` と `signature` は現状どちらも同じバイト列を運ぶ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedData {
    /// Base64エンコードされたデータ本体
    pub data: StringBytes,
    /// Base64エンコードされた署名
    pub signature: StringBytes,
}

impl TimestampedData {
    /// `PROBE_BYTES` を両フィールドに詰めた固定ペイロードを構築する。
    pub fn probe() -> Self {
        Self {
            data: StringBytes::encode(&PROBE_BYTES),
            signature: StringBytes::encode(&PROBE_BYTES),
        }
    }
}

/// POST /sign 成功時のレスポンス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedData {
    /// Base64エンコードされた署名
    pub signature: StringBytes,
}

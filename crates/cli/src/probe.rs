//! # 署名プローブ
//!
//! 固定ペイロードを署名サービスに送り、結果を人間が確認できる形で出力する。
//!
//! ## 出力（1行ずつ、この順）
//! 1. 送信したペイロード（JSON）
//! 2. HTTPステータスコード
//! 3. レスポンスボディ
//!
//! 通信に失敗した場合は1行目のみ出力してエラーを返す。

use std::io::Write;

use ata42_types::TimestampedData;

use crate::client::{SignClient, SignResponse};
use crate::error::ClientError;

/// 固定ペイロードを1回送信し、結果を `out` に書き出す。
///
/// 呼び出し間で状態は持たない。毎回同じペイロードを送る。
pub async fn run_probe<W: Write>(
    client: &SignClient,
    out: &mut W,
) -> Result<SignResponse, ClientError> {
    let payload = TimestampedData::probe();

    let payload_json = serde_json::to_string(&payload)
        .map_err(|e| ClientError::Serialize(e.to_string()))?;
    writeln!(out, "{payload_json}")?;
    out.flush()?;

    let response = client.post_sign(&payload).await?;

    if let Some(signed) = response.signed_data() {
        tracing::debug!(signature = %signed.signature.as_str(), "SignedDataとして解釈");
    }

    writeln!(out, "{}", response.status)?;
    writeln!(out, "{}", response.body)?;
    out.flush()?;

    Ok(response)
}

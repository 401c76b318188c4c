//! # テスト用共通ヘルパー
//!
//! 署名サービスのモックサーバー。

use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap, StatusCode};

use crate::client::SignClient;
use crate::config::ClientConfig;

/// モックが受信したリクエスト（Content-Type, ボディ）
pub type Received = Arc<Mutex<Vec<(Option<String>, String)>>>;

/// テスト用モック署名サービスを起動し、/sign で指定ステータス・ボディを返す。
/// 受信したリクエストは返り値の `Received` に記録される。
pub async fn start_mock_signer(status: StatusCode, reply: &'static str) -> (u16, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();

    let app = axum::Router::new().route(
        "/sign",
        axum::routing::post(move |headers: HeaderMap, body: String| {
            let sink = sink.clone();
            async move {
                let content_type = headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                sink.lock().unwrap().push((content_type, body));
                (status, reply)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    (port, received)
}

/// 127.0.0.1:{port} を送信先とするクライアントを構築する。
pub fn client_for(port: u16) -> SignClient {
    let config = ClientConfig::default().with_endpoint(Some(format!("http://127.0.0.1:{port}")));
    SignClient::new(&config).unwrap()
}

use crate::adapters::http::HttpTransport;
use crate::core::Transport;
use crate::utils::error::{KusError, Result};

/// 取得 Ku 列表的固定路徑
pub const KUS_PATH: &str = "/api/kus";

/// 對 `/api/kus` 發出單次 GET 並原樣回傳解碼後的 JSON。
///
/// 非成功狀態回傳 [`KusError::Transport`]，訊息包含狀態碼；此時不讀取 body。
/// 不檢查內容形狀、不重試、不設逾時，錯誤一律向上傳遞。
pub async fn get_kus<T: Transport + ?Sized>(transport: &T) -> Result<serde_json::Value> {
    tracing::debug!("Requesting kus from {}", KUS_PATH);
    let response = transport.get(KUS_PATH).await?;

    tracing::debug!("Kus response status: {}", response.status());

    if !response.ok() {
        return Err(KusError::Transport {
            status: response.status(),
        });
    }

    let body = response.json().await?;
    tracing::debug!(items = ?body.as_array().map(Vec::len), "Decoded kus body");
    Ok(body)
}

/// 綁定 transport 的 Fetcher。預設使用 [`HttpTransport`]
pub struct KuFetcher<T: Transport = HttpTransport> {
    transport: T,
}

impl<T: Transport> KuFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get_kus(&self) -> Result<serde_json::Value> {
        get_kus(&self.transport).await
    }
}

impl Default for KuFetcher<HttpTransport> {
    fn default() -> Self {
        Self::new(HttpTransport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_kus_fetches_api_kus() {
        let transport = FakeTransport::ok(json!(["a", "b"]));

        let result = get_kus(&transport).await.unwrap();

        assert_eq!(transport.requests(), vec!["/api/kus".to_string()]);
        assert_eq!(result, json!(["a", "b"]));
    }

    #[tokio::test]
    async fn test_get_kus_fails_with_status_in_message() {
        let transport = FakeTransport::failing(500);

        let err = get_kus(&transport).await.unwrap_err();

        assert!(matches!(err, KusError::Transport { status: 500 }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_get_kus_status_message_for_other_codes() {
        for status in [301u16, 404, 418, 503] {
            let err = get_kus(&FakeTransport::failing(status)).await.unwrap_err();
            assert!(
                err.to_string().contains(&status.to_string()),
                "message should contain {}: {}",
                status,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_get_kus_passes_empty_list_through() {
        let transport = FakeTransport::ok(json!([]));
        let result = get_kus(&transport).await.unwrap();
        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_get_kus_passes_body_through_unchecked() {
        for body in [
            json!([1, 2]),
            json!(["a", 2, null]),
            json!({"kus": ["a"]}),
            json!("plain"),
        ] {
            let result = get_kus(&FakeTransport::ok(body.clone())).await.unwrap();
            assert_eq!(result, body);
        }
    }

    #[tokio::test]
    async fn test_fetcher_always_requests_same_path() {
        let fetcher = KuFetcher::new(FakeTransport::ok(json!(["x"])));

        for _ in 0..3 {
            tokio_test::assert_ok!(fetcher.get_kus().await);
        }

        assert_eq!(fetcher.transport().requests(), vec![KUS_PATH.to_string(); 3]);
    }
}

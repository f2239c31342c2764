use crate::domain::ports::{Transport, TransportResponse};
use crate::utils::error::{KusError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// 以 reqwest 實作的預設 transport。
///
/// 路徑依瀏覽器的方式對 base URL 解析，`/api/kus` 會取代 base URL 原有的路徑。
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| KusError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| KusError::InvalidConfigValueError {
                field: "path".to_string(),
                value: path.to_string(),
                reason: format!("Cannot resolve against {}: {}", self.base_url, e),
            })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

struct HttpResponse {
    inner: reqwest::Response,
}

#[async_trait]
impl TransportResponse for HttpResponse {
    fn ok(&self) -> bool {
        self.inner.status().is_success()
    }

    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn json(self: Box<Self>) -> Result<serde_json::Value> {
        // 先取 bytes 再解碼，讓格式錯誤歸為 Decode 而非 Http
        let HttpResponse { inner } = *self;
        let bytes = inner.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Box<dyn TransportResponse>> {
        let url = self.resolve(path)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        Ok(Box::new(HttpResponse { inner: response }))
    }
}

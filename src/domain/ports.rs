use crate::utils::error::Result;
use async_trait::async_trait;

/// GET 回應：成功旗標、狀態碼，以及非同步的 JSON 取值
#[async_trait]
pub trait TransportResponse: Send {
    fn ok(&self) -> bool;
    fn status(&self) -> u16;
    async fn json(self: Box<Self>) -> Result<serde_json::Value>;
}

/// 可注入的 HTTP 能力，只負責對路徑發出 GET
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Box<dyn TransportResponse>>;
}

/// 可被清空並追加項目的列表容器（例如 `<ul>`）
pub trait ListContainer {
    fn clear_children(&mut self);
    fn append_item(&mut self, text: &str);
}

/// 宿主頁面。以 id 查找元素
pub trait Document {
    fn list_by_id(&mut self, id: &str) -> Option<&mut dyn ListContainer>;
}

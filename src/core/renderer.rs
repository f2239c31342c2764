use crate::adapters::http::HttpTransport;
use crate::core::fetcher::KuFetcher;
use crate::core::{Document, KuList, LoadOutcome, Transport};
use crate::utils::error::Result;

/// 列表容器的固定 id
pub const KUS_CONTAINER_ID: &str = "kus";

/// 抓取 Ku 並寫入頁面中的列表。
///
/// 這是唯一的錯誤恢復邊界：抓取、解碼或內容不是陣列時只會記錄錯誤，頁面保持不變。
pub struct Renderer<T: Transport = HttpTransport> {
    fetcher: KuFetcher<T>,
}

impl<T: Transport> Renderer<T> {
    pub fn new(transport: T) -> Self {
        Self {
            fetcher: KuFetcher::new(transport),
        }
    }

    pub fn fetcher(&self) -> &KuFetcher<T> {
        &self.fetcher
    }

    pub async fn load_kus<D: Document + ?Sized>(&self, document: &mut D) -> LoadOutcome {
        match self.fetch_list().await {
            Ok(kus) => render_kus(document, &kus),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    suggestion = e.recovery_suggestion(),
                    "Failed to load KUs"
                );
                LoadOutcome::Failed
            }
        }
    }

    async fn fetch_list(&self) -> Result<KuList> {
        let body = self.fetcher.get_kus().await?;
        KuList::from_json(body)
    }
}

impl Default for Renderer<HttpTransport> {
    fn default() -> Self {
        Self::new(HttpTransport::default())
    }
}

/// 以 `kus` 覆寫容器內容。找不到容器時不做任何事
pub fn render_kus<D: Document + ?Sized>(document: &mut D, kus: &KuList) -> LoadOutcome {
    let Some(list) = document.list_by_id(KUS_CONTAINER_ID) else {
        tracing::debug!("No #{} container in document, skipping render", KUS_CONTAINER_ID);
        return LoadOutcome::ContainerMissing;
    };

    list.clear_children();
    for ku in kus.items() {
        list.append_item(ku);
    }

    let count = kus.items().len();
    tracing::info!("Rendered {} kus", count);
    LoadOutcome::Rendered { count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::dom::{Element, MemoryDocument};
    use crate::core::test_support::FakeTransport;
    use serde_json::json;

    fn items(doc: &MemoryDocument) -> Vec<String> {
        doc.element_by_id(KUS_CONTAINER_ID)
            .unwrap()
            .child_texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_load_kus_renders_in_order() {
        let renderer = Renderer::new(FakeTransport::ok(json!(["b", "a", "c"])));
        let mut doc = MemoryDocument::with_list(KUS_CONTAINER_ID);

        let outcome = renderer.load_kus(&mut doc).await;

        assert_eq!(outcome, LoadOutcome::Rendered { count: 3 });
        assert_eq!(items(&doc), vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_load_kus_empty_list_clears_container() {
        let renderer = Renderer::new(FakeTransport::ok(json!([])));
        let mut doc = MemoryDocument::from_body(
            Element::new("body").with_child(
                Element::new("ul")
                    .with_id(KUS_CONTAINER_ID)
                    .with_child(Element::new("li").with_text("stale")),
            ),
        );

        let outcome = renderer.load_kus(&mut doc).await;

        assert_eq!(outcome, LoadOutcome::Rendered { count: 0 });
        assert!(items(&doc).is_empty());
    }

    #[tokio::test]
    async fn test_load_kus_without_container_is_noop() {
        let renderer = Renderer::new(FakeTransport::ok(json!(["a"])));
        let mut doc = MemoryDocument::from_body(
            Element::new("body").with_child(Element::new("ul").with_id("other")),
        );
        let before = doc.clone();

        let outcome = renderer.load_kus(&mut doc).await;

        assert_eq!(outcome, LoadOutcome::ContainerMissing);
        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_load_kus_twice_does_not_duplicate() {
        let renderer = Renderer::new(FakeTransport::ok(json!(["a", "b"])));
        let mut doc = MemoryDocument::with_list(KUS_CONTAINER_ID);

        renderer.load_kus(&mut doc).await;
        renderer.load_kus(&mut doc).await;

        assert_eq!(items(&doc), vec!["a", "b"]);
        assert_eq!(renderer.fetcher().transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_load_kus_failure_is_swallowed_and_document_untouched() {
        let renderer = Renderer::new(FakeTransport::failing(500));
        let mut doc = MemoryDocument::with_list(KUS_CONTAINER_ID);
        doc.list_by_id(KUS_CONTAINER_ID).unwrap().append_item("kept");
        let before = doc.clone();

        let outcome = renderer.load_kus(&mut doc).await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_load_kus_renders_non_string_items_as_text() {
        let renderer = Renderer::new(FakeTransport::ok(json!(["a", 2, false])));
        let mut doc = MemoryDocument::with_list(KUS_CONTAINER_ID);

        let outcome = renderer.load_kus(&mut doc).await;

        assert_eq!(outcome, LoadOutcome::Rendered { count: 3 });
        assert_eq!(items(&doc), vec!["a", "2", "false"]);
    }

    #[tokio::test]
    async fn test_load_kus_non_array_body_is_swallowed() {
        let renderer = Renderer::new(FakeTransport::ok(json!({"kus": ["a"]})));
        let mut doc = MemoryDocument::with_list(KUS_CONTAINER_ID);
        doc.list_by_id(KUS_CONTAINER_ID).unwrap().append_item("kept");
        let before = doc.clone();

        let outcome = renderer.load_kus(&mut doc).await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(doc, before);
    }
}

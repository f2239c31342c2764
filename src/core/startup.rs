use crate::core::renderer::Renderer;
use crate::core::{Document, LoadOutcome, Transport};
use std::sync::atomic::{AtomicBool, Ordering};

static PROCESS_READY: ReadyTrigger = ReadyTrigger::new();

/// 只會觸發一次的「頁面就緒」事件
#[derive(Debug)]
pub struct ReadyTrigger {
    fired: AtomicBool,
}

impl ReadyTrigger {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// 整個行程共用的觸發器，由程式進入點使用
    pub fn process() -> &'static ReadyTrigger {
        &PROCESS_READY
    }

    /// 第一次呼叫回傳 `true`，之後都是 `false`
    pub fn fire(&self) -> bool {
        self.fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

impl Default for ReadyTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// 頁面就緒時執行一次 `load_kus`。觸發器已用過則回傳 `None`
pub async fn on_document_ready<T, D>(
    trigger: &ReadyTrigger,
    renderer: &Renderer<T>,
    document: &mut D,
) -> Option<LoadOutcome>
where
    T: Transport,
    D: Document + ?Sized,
{
    if !trigger.fire() {
        tracing::debug!("Document ready already handled, ignoring");
        return None;
    }

    tracing::debug!("Document ready, loading kus");
    Some(renderer.load_kus(document).await)
}

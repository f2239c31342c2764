use clap::Parser;
use kus_widget::adapters::http::HttpTransport;
use kus_widget::utils::logger;
use kus_widget::{
    on_document_ready, CliConfig, MemoryDocument, ReadyTrigger, Renderer, KUS_CONTAINER_ID,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定錯誤在日誌初始化前就可能發生，直接輸出到 stderr
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting kus-widget");
    tracing::debug!("Settings: {:?}", settings);

    let transport = HttpTransport::new(&settings.base_url)?;
    let renderer = Renderer::new(transport);
    let mut document = MemoryDocument::with_list(KUS_CONTAINER_ID);

    // 頁面結構已建立，觸發一次就緒事件
    if let Some(outcome) =
        on_document_ready(ReadyTrigger::process(), &renderer, &mut document).await
    {
        tracing::debug!("Load outcome: {:?}", outcome);
    }

    println!("{}", settings.format.render(&document));
    Ok(())
}

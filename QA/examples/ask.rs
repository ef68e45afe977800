use pdf_qa::{ClientConfig, DocumentPicker, FsDocumentPicker, QueryService, UploadService};
use reqwest::Client;
use std::path::PathBuf;

// Usage: cargo run --example ask -- <file.pdf> "<question>"
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pdf = args.next().map(PathBuf::from);
    let question = args.next().unwrap_or_else(|| "What is this document about?".to_string());

    let config = ClientConfig::from_env()?;
    let client = Client::new();

    println!("🔍 Testing PDF QA Client");

    let file = FsDocumentPicker::new()
        .pick(pdf.as_deref())?
        .ok_or_else(|| anyhow::anyhow!("pass the path of a PDF document"))?;

    println!("\n📤 Upload {}:", file.name);
    let uploader = UploadService::new(client.clone(), config.upload_url);
    let file_id = uploader.upload(&file).await?;
    println!("fileId: {}", file_id);

    println!("\n❓ {}", question);
    let querier = QueryService::new(client, config.ask_url);
    let answer = querier.ask(&file_id, &question).await?;
    println!("Answer: {}", answer);

    println!("\n✅ Client test completed!");
    Ok(())
}

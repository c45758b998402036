use base64::{engine::general_purpose::STANDARD, Engine};
use ninegrid::{AnalyzeRequest, Config, GenerateRequest, GridClient, UploadRequest};
use std::{env, fs};

/// Runs the whole pipeline against the real APIs: describe a local photo,
/// host it, then render the 3x3 grid.
///
/// Usage: cargo run --example pipeline -- photo.jpg [mode] [aspect]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    ninegrid::logger::init()?;

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "photo.jpg".to_string());
    let mode = args.next();
    let aspect = args.next();

    let image_bytes = fs::read(&path)?;
    let media_type = if path.ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    };
    let data_uri = format!("data:{};base64,{}", media_type, STANDARD.encode(&image_bytes));

    let client = GridClient::from_config(&Config::from_env());

    let analysis = client
        .analyze(AnalyzeRequest {
            image: data_uri.clone(),
            mode,
            aspect: aspect.clone(),
        })
        .await?;
    println!("Character description:\n{}\n", analysis.character_description);

    let hosted = client.upload(UploadRequest { image: data_uri }).await?;
    println!("Hosted source image: {}\n", hosted.url);

    let generated = client
        .generate(GenerateRequest {
            image: hosted.url,
            prompt: analysis.prompt,
            aspect,
        })
        .await?;
    println!("Generated grid: {}", generated.image_url);

    Ok(())
}

use blog_core::markdown::generate_markdown;
use blog_core::velog::post_url;
use blog_core::{RelayClient, UploadContent, UploadPayload};
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = "http://127.0.0.1:3000";

    println!("🔍 Testing Velog relay client");

    // Health check
    println!("\n📋 Health Check:");
    let health_response = Client::new()
        .get(format!("{}/health", base_url))
        .send()
        .await?;

    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    // Text submission (requires the backend from BACKEND_API_URL to be up)
    println!("\n📝 Text Submission:");
    let cookie = std::env::var("VELOG_COOKIE")
        .unwrap_or_else(|_| "access_token=replace-me".to_string());

    let payload = UploadPayload {
        content: UploadContent::Text(
            "Today I debugged a deadlock in an async Rust service. \
             The culprit was holding a std mutex across an await point."
                .to_string(),
        ),
        velog_cookie: cookie,
    };

    let relay = RelayClient::new(base_url);
    let result = relay.submit(payload).await?;

    println!("Title: {:?}", result.title);
    println!("Tags: {:?}", result.tags);
    if let Some(url) = result.velog_response.as_ref().and_then(post_url) {
        println!("Published at: {}", url);
    }

    println!("\n--- Markdown ---\n{}", generate_markdown(&result));

    println!("\n✅ Client test completed!");
    Ok(())
}

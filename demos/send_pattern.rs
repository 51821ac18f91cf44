use std::io;

use ippanel::{IppanelClient, SendPattern};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("IPPANEL_API_KEY")?;
    let sender = required_env("IPPANEL_SENDER")?;
    let pattern_code = required_env("IPPANEL_PATTERN_CODE")?;
    let phone = required_env("IPPANEL_PHONE")?;
    // JSON object of template variables, e.g. {"name":"Ali","code":"1234"}
    let params = std::env::var("IPPANEL_PATTERN_PARAMS").unwrap_or_else(|_| "{}".to_owned());
    let params: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&params)?;

    let client = IppanelClient::new(api_key)?;
    let request = SendPattern::new(pattern_code, sender, phone, params);

    let response = client.send_pattern(request).await?;
    println!(
        "status: {}, message_code: {}, message: {}",
        response.meta.status, response.meta.message_code, response.meta.message
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

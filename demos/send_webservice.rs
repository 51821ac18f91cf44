use std::io;

use ippanel::{IppanelClient, SendWebservice};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("IPPANEL_API_KEY")?;
    let sender = required_env("IPPANEL_SENDER")?;
    let recipients = required_env("IPPANEL_RECIPIENTS")?;
    let message = std::env::var("IPPANEL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the ippanel example.".to_owned());

    let client = IppanelClient::with_base_url(
        api_key,
        std::env::var("IPPANEL_BASE_URL").ok().as_deref(),
    )?;
    let request = SendWebservice::new(message, sender, recipients.split(',').map(str::trim));

    let response = client.send_webservice(request).await?;
    println!(
        "status: {}, message_code: {}, message: {}, data: {}",
        response.meta.status, response.meta.message_code, response.meta.message, response.data
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

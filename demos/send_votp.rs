use std::io;

use ippanel::{IppanelClient, SendVotp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("IPPANEL_API_KEY")?;
    let phone = required_env("IPPANEL_PHONE")?;
    let code: i32 = std::env::var("IPPANEL_OTP_CODE")
        .unwrap_or_else(|_| "12345".to_owned())
        .parse()?;

    let client = IppanelClient::new(api_key)?;
    match client.send_votp(SendVotp::new(code, phone)).await {
        Ok(response) => println!(
            "status: {}, message_code: {}",
            response.meta.status, response.meta.message_code
        ),
        Err(err) if err.is_timeout() => eprintln!("IPPanel did not answer in time"),
        Err(err) => return Err(err.into()),
    }

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

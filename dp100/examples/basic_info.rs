//! Query the output state of a DP100 on a hidraw node

use dp100::{Client, Command};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // Change to your device node
    let path = std::env::var("DP100_HIDRAW").unwrap_or_else(|_| "/dev/hidraw0".to_string());

    println!("Opening {}...", path);

    let mut client = Client::open(&path)?;
    println!("✓ Connected");

    let frame = client.execute(Command::BasicInfo, &[])?;
    println!("✓ {}", frame);
    println!("  payload: {:02X?}", &frame.payload[..]);

    Ok(())
}

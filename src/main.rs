use anyhow::Result;
use skycast_core::{App, AppError};
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let city = read_city(&mut std::io::stdin().lock(), &mut std::io::stdout())?;

    match app.lookup(&city).await {
        Ok(weather) => println!("{}", weather.to_json()?),
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), retryable = e.is_retryable(), "Lookup failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Prompt for a city and read one trimmed line. End of input reads as "".
fn read_city(input: &mut impl BufRead, output: &mut impl Write) -> Result<String, AppError> {
    write!(output, "Enter city name: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

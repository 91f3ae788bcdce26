use clap::Parser;
use skytech_tutor::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    skytech_tutor::run(cli).await
}

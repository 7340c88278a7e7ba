use clap::Parser;
use contacts_app::{platform::logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::initialize(config.log_destination, config.log_level, &config.log_file);
    contacts_app::run(config).await
}

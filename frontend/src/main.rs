use anyhow::Result;
use aspire_cards_backend::{AppConfig, MockCardApi, SafeStorage};
use aspire_cards_frontend::{view, CardContext};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Aspire Cards");

    let config = AppConfig::load()?;
    let storage = SafeStorage::open_directory(&config.data_directory);
    let api = MockCardApi::new(storage).configured(&config);

    let mut context = CardContext::new(api).with_feed_limit(config.feed_limit);
    context.load().await;

    print!("{}", view::render(&context));
    Ok(())
}

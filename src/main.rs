use badge::api::Error;
use clap::Parser;
use downloads_badge_app::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let publication = downloads_badge_app::generate_badge(args).await?;
    println!("{} ({})", publication.document.message, publication.outcome);

    Ok(())
}

mod args;

pub use args::Args;

use badge::api::Result;
use badge::{BadgeGenerator, BadgeStyle, Publication};
use cfwidget_client::CfWidgetClientBuilder;
use log::info;
use std::time::Duration;

pub async fn generate_badge(args: Args) -> Result<Publication> {
    info!("Generating badge for {} projects from {}", args.projects.len(), args.api_url);
    let client = CfWidgetClientBuilder::default()
        .with_api_url(args.api_url)
        .with_timeout(Duration::from_secs(args.timeout))
        .try_with_user_agent(args.user_agent)?
        .build()?;

    let style = BadgeStyle::new(args.label, args.color, args.named_logo);
    let generator = BadgeGenerator::new(client, style);
    generator.publish(&args.projects, &args.output).await
}

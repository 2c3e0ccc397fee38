mod formatters;

use issuefeed_config::{init_tracing, WidgetConfig};
use issuefeed_digest::{DrupalClient, DrupalClientConfig, PipelineError};

#[tokio::main]
async fn main() {
    init_tracing("info");
    let _ = dotenvy::dotenv();

    tracing::info!(service = "issuefeed-widget", "starting");

    let widget_config = WidgetConfig::from_env();
    let machine_name = widget_config.machine_name();
    let max_items = widget_config.effective_max_items();

    let client_config = DrupalClientConfig::from_env();
    tracing::info!(
        base_url = %client_config.base_url,
        machine_name = %machine_name,
        max_items,
        "running issue digest pipeline"
    );

    let client = DrupalClient::new(client_config).expect("failed to create drupal.org client");

    match issuefeed_digest::run(&client, &machine_name, max_items).await {
        Ok(view) => {
            print!("{}", formatters::format_view(&view));
        }
        Err(PipelineError::Resolution(e)) => {
            tracing::error!(error = %e, "project lookup failed");
            eprintln!("Project lookup on drupal.org failed, please try again later.");
            std::process::exit(1);
        }
        Err(PipelineError::Digest(e)) => {
            tracing::error!(error = %e, "issue digest fetch failed");
            eprintln!("Fetching issues from drupal.org failed, please try again later.");
            std::process::exit(1);
        }
    }
}

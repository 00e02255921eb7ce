use clap::Parser;
use contact_form::utils::{logger, validation};
use contact_form::{
    ContactForm, FileConfig, FormConfig, HttpTransport, MemoryPage, SubmitOutcome,
    TURNSTILE_FIELD_NAME,
};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "contact-form")]
#[command(about = "Submit a contact form to a configurable endpoint")]
struct Cli {
    /// Endpoint URL to POST the submission to. Not needed with --config.
    #[arg(long)]
    endpoint: Option<String>,

    /// TOML file carrying the endpoint plus message/selector overrides.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    message: String,

    /// Challenge-response token value, if the endpoint expects one.
    #[arg(long, default_value = "")]
    turnstile_token: String,

    /// Field name of a second anti-abuse token.
    #[arg(long)]
    token_input_name: Option<String>,

    /// Value for the second anti-abuse token.
    #[arg(long, default_value = "")]
    token_input_value: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Log in JSON format")]
    log_json: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<(FormConfig, Option<String>)> {
    if let Some(path) = &cli.config {
        let file_config = FileConfig::from_file(path)?;
        // A flag beats the file for the token field name.
        let token_input_name = cli
            .token_input_name
            .clone()
            .or_else(|| file_config.token_input_name.clone());
        return Ok((file_config.into_form_config()?, token_input_name));
    }

    let endpoint = cli
        .endpoint
        .clone()
        .ok_or_else(|| anyhow::anyhow!("either --endpoint or --config is required"))?;
    validation::validate_url("endpoint", &endpoint)?;
    Ok((FormConfig::new(endpoint)?, cli.token_input_name.clone()))
}

/// Stage the flag values as a page the controller can work against.
fn build_page(cli: &Cli, config: &FormConfig, token_input_name: Option<&str>) -> MemoryPage {
    let selectors = &config.selectors;
    let mut page = MemoryPage::new()
        .with_input(&selectors.name_input, &cli.name)
        .with_input(&selectors.email_input, &cli.email)
        .with_input(&selectors.message_input, &cli.message)
        .with_hidden_element(&selectors.message_alert)
        .with_element(&selectors.send_button)
        .with_hidden_element(&selectors.loading_element)
        .with_element(&selectors.cancel_button)
        .with_named_input("#turnstile-response", TURNSTILE_FIELD_NAME, &cli.turnstile_token);

    if let Some(name) = token_input_name {
        page = page.with_named_input("#token-input", name, &cli.token_input_value);
    }

    page
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting contact-form CLI");
    if cli.verbose {
        tracing::debug!("CLI arguments: {:?}", cli);
    }

    let (config, token_input_name) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let page = Arc::new(build_page(&cli, &config, token_input_name.as_deref()));
    let alert_selector = config.selectors.message_alert.clone();

    let mut form = ContactForm::new(config, page.clone(), HttpTransport::new())
        .with_on_success(|envelope| {
            if let Some(message) = &envelope.message {
                tracing::info!("Server says: {}", message);
            }
        });
    if let Some(name) = token_input_name {
        form = form.with_token_input_name(name);
    }

    let outcome = form.handle_submit().await;

    match outcome {
        SubmitOutcome::Sent => {
            println!("✅ Message sent");
        }
        SubmitOutcome::Rejected | SubmitOutcome::InvalidInput => {
            let alert = page.text_of(&alert_selector).unwrap_or_default();
            eprintln!("❌ {}", alert);
            std::process::exit(1);
        }
        SubmitOutcome::MissingMarkup => {
            eprintln!("❌ Required input fields are not configured");
            std::process::exit(1);
        }
        SubmitOutcome::TransportFailed => {
            let alert = page.text_of(&alert_selector).unwrap_or_default();
            eprintln!("❌ {}", alert);
            std::process::exit(2);
        }
        SubmitOutcome::AlreadyPending => {
            // Single-shot invocation; nothing can be pending here.
            unreachable!("no concurrent submission in the CLI")
        }
    }

    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use gradeinsight::{
    cli, report_response_schema, AnalyzeGradesUseCase, GeminiClient, MockModelClient, ModelClient,
};

/// Generic failure line shown to the user; the underlying error goes to the log.
const GENERIC_FAILURE_MESSAGE: &str =
    "보고서를 생성하는 중 오류가 발생했습니다. 입력을 확인하거나 잠시 후 다시 시도해주세요.";

#[derive(Parser)]
#[command(name = "gradeinsight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze free-form grade text and print the generated report
    Analyze {
        /// Input file path, or '-' to read from stdin
        #[arg(default_value = "-")]
        input: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Model identifier requested from the provider
        #[arg(long)]
        model: Option<String>,

        /// Provider endpoint override (e.g. a local Gemini-compatible proxy)
        #[arg(long)]
        base_url: Option<String>,

        /// Use the offline mock model instead of the hosted provider
        #[arg(long)]
        mock_model: bool,
    },

    /// Print a sample grade sheet, pipeable into `analyze -`
    Sample,

    /// Print the JSON schema the model output must conform to
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Commands::Analyze {
            input,
            format,
            model,
            base_url,
            mock_model,
        } => {
            let input_text = cli::read_input(&input)?;
            if input_text.trim().is_empty() {
                anyhow::bail!("input is empty; paste the grade text or pipe it via stdin");
            }

            let model_client: Arc<dyn ModelClient> = if mock_model {
                info!("Using mock model client");
                Arc::new(MockModelClient::new())
            } else {
                let mut client = GeminiClient::new();
                if let Some(model) = model {
                    client = client.with_model(model);
                }
                if let Some(base_url) = base_url {
                    client = client.with_base_url(base_url);
                }
                info!("Requesting report from {}", client.model());
                Arc::new(client)
            };

            let use_case = AnalyzeGradesUseCase::new(model_client);

            // One invocation is one request; the spinner is the only
            // in-flight state there is.
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.blue} {msg}")
                    .expect("Invalid spinner template"),
            );
            spinner.set_message("분석 중...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = use_case.execute(&input_text).await;
            spinner.finish_and_clear();

            match result {
                Ok(report) => match format {
                    OutputFormat::Text => println!("{}", cli::render_report(&report)),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                },
                Err(e) if e.is_configuration() => {
                    // Actionable as-is: the message names the variable to set.
                    eprintln!("{e}");
                    std::process::exit(2);
                }
                Err(e) => {
                    error!("Report generation failed: {e}");
                    eprintln!("{GENERIC_FAILURE_MESSAGE}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sample => println!("{}", cli::sample_input()),

        Commands::Schema => println!("{}", serde_json::to_string_pretty(&report_response_schema())?),
    }

    Ok(())
}

use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use scriptgen::core::config::{self, CliOverrides, ResolvedConfig};
use scriptgen::core::state::App;
use scriptgen::generation::{GenerationService, HttpGenerationService};
use scriptgen::oneshot::{OneShotOutcome, generate_once};
use scriptgen::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "scriptgen", about = "Turn a one-line idea into a screenplay sketch")]
struct Args {
    /// Base URL of the generation backend
    #[arg(short, long)]
    url: Option<String>,

    /// Generate once for this prompt and print the result (no UI)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Print the sample prompts and exit
    #[arg(long)]
    list_samples: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    // Terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, source) = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.url.clone(),
            log_level: args.log_level.clone(),
        },
    );
    init_logging(&resolved);
    config::log_startup(&source, &file_config, &resolved);

    log::info!("scriptgen starting up against {}", resolved.base_url);

    let service: Arc<dyn GenerationService> =
        Arc::new(HttpGenerationService::new(resolved.base_url.clone()));
    let app = App::from_config(service.clone(), &resolved);

    if args.list_samples {
        for (i, sample) in app.samples.iter().enumerate() {
            println!("{}. {}", i + 1, sample);
        }
        return ExitCode::SUCCESS;
    }

    if let Some(prompt) = args.prompt {
        let (outcome, text) = generate_once(service, &prompt).await;
        match outcome {
            OneShotOutcome::Skipped => eprintln!("Prompt is blank; nothing to generate."),
            OneShotOutcome::Failed => eprintln!("{text}"),
            OneShotOutcome::Generated => println!("{text}"),
        }
        return ExitCode::from(outcome.exit_code());
    }

    match tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Yatra application binary - composition root.
//!
//! Wires the collaborators together and runs either the interactive guide
//! session (language gate, site exploration, Q&A loop with speech) or the
//! site-listing HTTP API.

mod cli;
mod explore;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yatra_api::AppState;
use yatra_chat::ConversationLoop;
use yatra_core::config::YatraConfig;
use yatra_core::error::Result;
use yatra_geo::{Geocoder, MapRenderer};
use yatra_llm::OllamaClient;
use yatra_sites::SiteDirectory;
use yatra_speech::PlaybackController;
use yatra_translate::{GoogleTranslator, Translator};

use cli::{CliArgs, Command};
use explore::Guide;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let config = YatraConfig::load_or_default(&args.resolve_config_path());

    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    let outcome = match args.command.unwrap_or(Command::Chat) {
        Command::Serve => serve(&args, &config).await,
        Command::Chat => interactive(&config).await,
    };

    if let Err(e) = outcome {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Run the site-listing HTTP API.
async fn serve(args: &CliArgs, config: &YatraConfig) -> Result<()> {
    let translator = Arc::new(GoogleTranslator::new(&config.translator)?);
    let state = AppState::new(translator, SiteDirectory::new());
    let port = args.resolve_port(config.api.port);
    yatra_api::start_server(port, state).await
}

/// Run the interactive guide session on stdin/stdout.
async fn interactive(config: &YatraConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "\nWelcome to the Multilingual Heritage Guide!")?;

    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new(&config.translator)?);

    let Some(language) = prompt_line(&mut input, &mut output, "Enter your preferred language:")?
    else {
        return Ok(());
    };
    if !translator.is_supported(&language) {
        writeln!(output, "Language not supported.")?;
        return Ok(());
    }

    let artifact_dir = resolve_artifact_dir(&config.general.artifact_dir);
    let model = Arc::new(OllamaClient::new(&config.llm)?);
    let playback = Arc::new(
        PlaybackController::from_config(&config.speech, artifact_dir.join("audio"))
            .map_err(yatra_core::error::YatraError::from)?,
    );
    let guide = Guide {
        translator: Arc::clone(&translator),
        model: model.clone(),
        directory: Arc::new(SiteDirectory::new()),
        geocoder: Geocoder::new(&config.geocoder)?,
        renderer: MapRenderer::new(artifact_dir.join("maps")),
    };

    loop {
        let chosen = guide.explore(&language, &mut input, &mut output).await?;

        if let Some(site) = chosen {
            let mut conversation = ConversationLoop::new(
                Arc::clone(&translator),
                model.clone(),
                Arc::clone(&playback),
                language.clone(),
                site,
                &mut input,
                &mut output,
            );
            if let Err(e) = conversation.run().await {
                tracing::warn!("Conversation ended abnormally: {e}");
            }
        }

        let again_prompt = translator
            .translate("Do you want to search for another site? (yes/no)", &language)
            .await;
        let answer = prompt_line(&mut input, &mut output, &again_prompt)?
            .unwrap_or_default()
            .to_lowercase();

        // "yes" in the display language counts too.
        let localized_yes = translator.translate("yes", &language).await.to_lowercase();
        if answer != "yes" && answer != "y" && answer != localized_yes {
            let farewell = translator
                .translate("Thank you for using the Heritage Guide!", &language)
                .await;
            writeln!(output, "{farewell}")?;
            break;
        }
    }

    Ok(())
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "\n{prompt} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Expand ~ to the home directory in a configured path.
fn resolve_artifact_dir(dir: &str) -> PathBuf {
    if dir.starts_with("~/") || dir.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&dir[2..])
    } else {
        PathBuf::from(dir)
    }
}

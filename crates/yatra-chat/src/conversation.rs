//! Turn-based conversation loop.
//!
//! Reads one utterance per turn, classifies and routes it, asks the
//! language model, shows and speaks the translated answer, then waits for
//! an acknowledgment line before stopping playback and starting the next
//! turn. Playback from turn N is fully stopped before turn N+1's input is
//! solicited.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::{info, warn};

use yatra_core::error::YatraError;
use yatra_llm::LanguageModel;
use yatra_speech::PlaybackController;
use yatra_translate::Translator;

use crate::error::ChatError;
use crate::intent;
use crate::router::{self, RouteDecision};
use crate::templates;

/// Inputs that end the conversation, compared case-insensitively.
pub const EXIT_COMMANDS: &[&str] = &["exit", "quit", "bye"];

/// Language the classifier and router operate on. User input is translated
/// into it for classification only; the pivot text is never shown.
pub const PIVOT_LANGUAGE: &str = "english";

/// UI strings translated once per session into the display language.
struct UiStrings {
    welcome: String,
    instruction: String,
    user_prompt: String,
    farewell: String,
    stop_prompt: String,
    ai_prefix: String,
    trouble: String,
}

impl UiStrings {
    async fn localize(translator: &dyn Translator, language: &str, site: &str) -> Self {
        // The welcome template is translated with its placeholder intact
        // and the site name substituted afterwards, so the name itself is
        // never run through translation.
        let welcome_template = translator
            .translate(
                "You can now ask questions about {site}! Type 'exit' to end.",
                language,
            )
            .await;
        let welcome = welcome_template.replace("{site}", site);

        Self {
            welcome,
            instruction: translator
                .translate(
                    "You can press Enter anytime while the AI is speaking to stop it and continue chatting.",
                    language,
                )
                .await,
            user_prompt: translator.translate("You: ", language).await,
            farewell: translator
                .translate("Thank you for exploring with us!", language)
                .await,
            stop_prompt: translator
                .translate("Press Enter to stop the speech and continue chatting...", language)
                .await,
            ai_prefix: translator.translate("AI: ", language).await,
            trouble: translator
                .translate(
                    "The guide is unavailable right now. Please try that question again.",
                    language,
                )
                .await,
        }
    }
}

/// One interactive Q&A session about a single site.
pub struct ConversationLoop<R, W> {
    translator: Arc<dyn Translator>,
    model: Arc<dyn LanguageModel>,
    playback: Arc<PlaybackController>,
    language: String,
    site: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConversationLoop<R, W> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        translator: Arc<dyn Translator>,
        model: Arc<dyn LanguageModel>,
        playback: Arc<PlaybackController>,
        language: impl Into<String>,
        site: impl Into<String>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            translator,
            model,
            playback,
            language: language.into(),
            site: site.into(),
            input,
            output,
        }
    }

    /// Run the loop until an exit command (or end of input).
    pub async fn run(&mut self) -> Result<(), ChatError> {
        let ui = UiStrings::localize(self.translator.as_ref(), &self.language, &self.site).await;

        writeln!(self.output, "{}", ui.welcome)?;
        writeln!(self.output, "{}", ui.instruction)?;

        loop {
            let line = match self.prompt_line(&ui.user_prompt)? {
                Some(line) => line,
                // End of input behaves like an exit command.
                None => {
                    self.shutdown(&ui).await?;
                    break;
                }
            };

            let input = line.trim().to_string();
            if input.is_empty() {
                continue;
            }
            if is_exit_command(&input) {
                self.shutdown(&ui).await?;
                break;
            }

            // Classification and routing operate on the pivot text only.
            let pivot = self.translator.translate(&input, PIVOT_LANGUAGE).await;
            let intent = intent::classify(&pivot);
            let decision = router::route(intent, &pivot);
            info!(%intent, ?decision, "Turn routed");

            let response = match self.respond(intent, decision, &pivot).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Response generation failed: {e}");
                    writeln!(self.output, "{}", ui.trouble)?;
                    continue;
                }
            };

            let translated = self.translator.translate(&response, &self.language).await;
            writeln!(self.output, "{}{}", ui.ai_prefix, translated)?;
            writeln!(self.output)?;

            if let Err(e) = self.playback.speak(&translated, &self.language).await {
                warn!("Speech unavailable: {e}");
            }

            // Any acknowledgment input interrupts the speech; the loop
            // then waits for playback to wind down before the next read.
            let _ = self.prompt_line(&ui.stop_prompt)?;
            self.playback.stop();
            self.playback.wait_until_idle().await;
        }

        Ok(())
    }

    async fn respond(
        &self,
        intent: intent::Intent,
        decision: RouteDecision,
        pivot: &str,
    ) -> Result<String, YatraError> {
        match decision {
            RouteDecision::Static => {
                // Computed lazily: the template is only built once the
                // router has picked the static path.
                let question = templates::question_for(intent, &self.site)
                    .unwrap_or_else(|| pivot.to_string());
                self.model.chat(&question, Some(&self.site)).await
            }
            RouteDecision::Llm => self.model.chat(pivot, Some(&self.site)).await,
        }
    }

    async fn shutdown(&mut self, ui: &UiStrings) -> Result<(), ChatError> {
        // Stop fires even if nothing is playing; it is a no-op then.
        self.playback.stop();
        self.playback.wait_until_idle().await;
        writeln!(self.output, "{}", ui.farewell)?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

fn is_exit_command(input: &str) -> bool {
    let folded = input.to_lowercase();
    EXIT_COMMANDS.contains(&folded.as_str())
}

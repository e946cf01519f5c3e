//! TUI-less "say" command

use std::error::Error;

use crate::core::app::App;
use crate::core::chat_client::ChatBackend;
use crate::ui::theme::Theme;

/// Run a single exchange (welcome message plus `prompt`) and return the reply.
pub async fn say<B>(prompt: &str, backend: &B) -> Result<String, Box<dyn Error>>
where
    B: ChatBackend + ?Sized,
{
    let mut app = App::new(Theme::default());
    app.ui.set_input_text(prompt);

    if !app.submit_with(backend).await {
        return Err("Usage: confidant say <prompt>".into());
    }
    if let Some(error) = app.error() {
        return Err(error.into());
    }
    Ok(app.conversation().last().content().to_string())
}

pub async fn run_say<B>(prompt: Vec<String>, backend: &B) -> Result<(), Box<dyn Error>>
where
    B: ChatBackend + ?Sized,
{
    match say(&prompt.join(" "), backend).await {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    }
}

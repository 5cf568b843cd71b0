// SmartBot V1 Entry Point
// Terminal shell around the chat brain

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use smartbot_core::brain::{Responder, Session};
use smartbot_core::gallery::ImageGallery;
use smartbot_core::transcript::{Speaker, Transcript};

const BANNER: &str = "Hello! I'm your smart AI chatbot 🤖\n\
    Tell me your name to begin 😄\n\
    Try /images <category> for pictures, /save <path> to keep the chat.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let responder = Responder::new()?;
    let mut session = Session::new();
    let mut transcript = Transcript::new();
    let mut gallery = ImageGallery::new();

    println!("Bot: {}\n", BANNER);
    transcript.push(Speaker::Bot, BANNER);

    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            if handle_command(command, &mut transcript, &mut gallery) {
                break;
            }
            continue;
        }

        transcript.push(Speaker::User, input);
        let reply = responder.reply(&mut session, input);
        println!("Bot: {}\n", reply);
        transcript.push(Speaker::Bot, reply);
    }

    info!("Session ended");
    Ok(())
}

/// Handle a slash command. Returns true when the shell should exit.
///
/// Command failures become user-facing notices, never program errors.
fn handle_command(command: &str, transcript: &mut Transcript, gallery: &mut ImageGallery) -> bool {
    let mut parts = command.splitn(2, ' ');
    let verb = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim);

    match verb {
        "quit" | "exit" => return true,
        "clear" => {
            transcript.clear();
            println!("Bot: Chat cleared 🧹\n");
        }
        "save" => match arg {
            Some(path) => match transcript.save(Path::new(path)) {
                Ok(()) => println!("Bot: Chat saved successfully ✅\n"),
                Err(e) => println!("Bot: Could not save chat: {}\n", e),
            },
            None => println!("Bot: Usage: /save <path>\n"),
        },
        "images" => match arg {
            Some(category) => match gallery.open_next(category) {
                Ok(_) => {
                    let notice = format!("Opened a {} image in your browser 🌐", category);
                    println!("Bot: {}\n", notice);
                    transcript.push(Speaker::Bot, notice);
                }
                Err(_) => println!("Bot: I don't have images for that category yet 😅\n"),
            },
            None => println!("Bot: Categories: {}\n", gallery.categories().join(", ")),
        },
        other => println!("Bot: Unknown command '/{}'\n", other),
    }
    false
}

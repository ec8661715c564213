//! Remy: conversational symptom consultation engine.
//!
//! The pipeline: user input → session (auth gate, sending state) →
//! dispatcher (primary analysis, plain-chat fallback) → normalizer
//! (payload → annotated message) → transcript → renderer.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod models;
pub mod normalize;
pub mod render;
pub mod sanitize;
pub mod session;
pub mod suggestions;
pub mod transcript;

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use crate::api::RemyApiClient;
use crate::session::{ConsultationSession, EnvAuthGate, SendOutcome};

/// Initialize tracing and run the interactive console consultation.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Remy starting v{}", config::APP_VERSION);

    let mut session = ConsultationSession::new(RemyApiClient::from_env(), EnvAuthGate);

    println!("{}", render::render_transcript(session.transcript()));
    println!("(describe your symptoms, /new for a fresh consultation, /suggest for ideas, /quit to exit)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        }

        match line.trim() {
            "/quit" => break,
            "/new" => {
                session.new_consultation();
                println!("{}", render::render_transcript(session.transcript()));
                continue;
            }
            "/suggest" => {
                for suggestion in suggestions::default_prompt_suggestions() {
                    println!("  [{}] {}", suggestion.category, suggestion.text);
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        println!("{}", render::TYPING_INDICATOR);
        match session.send(&line) {
            SendOutcome::SignInRequired => {
                println!("Please sign in first (set {}).", config::SESSION_TOKEN_ENV);
            }
            SendOutcome::Ignored => {}
            SendOutcome::Analyzed | SendOutcome::FallbackReply => {
                if let Some(reply) = session.transcript().messages().last() {
                    println!("{}", render::render_message(reply));
                }
            }
            SendOutcome::Failed(notice) => println!("{notice}"),
        }
    }
}

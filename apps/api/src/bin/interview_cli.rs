//! Terminal Session View: runs one mock interview against a running API.

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use interview_api::interview::client::HttpInterviewClient;
use interview_api::interview::session::{InterviewSession, SessionError};

#[derive(Parser)]
#[command(name = "interview-cli")]
#[command(about = "Practice a technical interview from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Role to interview for (frontend, backend, devops)
    role: String,

    /// Question difficulty (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Base URL of the interview API
    #[arg(long, env = "INTERVIEW_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Identifier forwarded with the review
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut backend = HttpInterviewClient::new(cli.api_url);
    if let Some(user) = cli.user {
        backend = backend.with_user(user);
    }

    let mut session = InterviewSession::new(cli.role, cli.difficulty);
    let greeting = session.start()?;
    println!("Interviewer: {}\n", greeting.content);
    println!("(type /end to finish and get your review, /quit to leave)\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => return Ok(()),
            "/end" => match session.end(&backend).await {
                Ok(review) => {
                    println!("\n=== Interview Review ===\n{review}");
                    return Ok(());
                }
                Err(e @ SessionError::TooShort { .. }) => {
                    println!("Please have at least a brief conversation before ending the interview. ({e})");
                }
                Err(e) => return Err(e.into()),
            },
            input => match session.send(&backend, input).await {
                Ok(turn) => {
                    let reply = turn.content.clone();
                    let progress = session.progress();
                    println!(
                        "\nInterviewer: {reply}\n[questions: {}, responses: {}]\n",
                        progress.questions_asked, progress.responses
                    );
                }
                Err(SessionError::EmptyInput) => continue,
                Err(e) => return Err(e.into()),
            },
        }
    }

    Ok(())
}

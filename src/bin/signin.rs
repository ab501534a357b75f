//! Terminal front end for the sign-in form.
//!
//! Drives the same [`SignInForm`] controller the sign-in page mirrors,
//! against a running server.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for everything
//! cargo run --bin signin
//!
//! # Pre-fill the email, prompt for the rest
//! cargo run --bin signin -- --email demo@blogify.test
//!
//! # Scripted: no prompts, non-zero exit on any failure
//! cargo run --bin signin -- --email demo@blogify.test --password password123 --no-prompt
//! ```
//!
//! # Environment Variables
//!
//! - `SIGNIN_SERVER` (optional): server base URL, default `http://127.0.0.1:3000`

use blogify_signin::client::{
    FieldUpdate, HttpTransport, Navigator, SignInForm, SubmissionOutcome,
};
use blogify_signin::domain::entities::CredentialField;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input, Password};

/// Sign in to a Blogify server from the terminal.
#[derive(Parser)]
#[command(name = "signin")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(
        short,
        long,
        env = "SIGNIN_SERVER",
        default_value = "http://127.0.0.1:3000"
    )]
    server: String,

    /// Email address (prompted if missing)
    #[arg(short, long)]
    email: Option<String>,

    /// Password (prompted if missing)
    #[arg(short, long)]
    password: Option<String>,

    /// Tick "remember me"
    #[arg(short, long)]
    remember: bool,

    /// Never prompt; exit with an error instead
    #[arg(long)]
    no_prompt: bool,
}

/// Prints where a browser would go next.
struct TerminalNavigator {
    server: String,
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, path: &str) {
        println!(
            "{} {}{}",
            "→ Continue at".bright_white(),
            self.server.trim_end_matches('/').cyan(),
            path.cyan()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let transport = HttpTransport::new(&cli.server)
        .with_context(|| format!("Invalid server URL '{}'", cli.server))?;
    let mut navigator = TerminalNavigator {
        server: cli.server.clone(),
    };

    println!("{}", "🔐 Sign in".bright_blue().bold());
    println!("  Server: {}", transport.endpoint().as_str().cyan());
    println!();

    let mut form = SignInForm::new();
    form.update_field(FieldUpdate::Remember(cli.remember));

    match cli.email {
        Some(email) => form.update_field(FieldUpdate::Email(email)),
        None if cli.no_prompt => anyhow::bail!("--email is required with --no-prompt"),
        None => prompt_email(&mut form)?,
    }

    match cli.password {
        Some(password) => form.update_field(FieldUpdate::Password(password)),
        None if cli.no_prompt => anyhow::bail!("--password is required with --no-prompt"),
        None => prompt_password(&mut form)?,
    }

    if !cli.no_prompt && !cli.remember {
        let remember = Confirm::new()
            .with_prompt("Remember me?")
            .default(false)
            .interact()?;
        form.update_field(FieldUpdate::Remember(remember));
    }

    loop {
        let outcome = form.submit(&transport, &mut navigator).await;

        match outcome {
            SubmissionOutcome::Success { user, .. } => {
                println!();
                match user {
                    Some(user) => println!(
                        "{} {} ({})",
                        "✅ Signed in as".green().bold(),
                        user.name.bright_white().bold(),
                        user.email.cyan()
                    ),
                    None => println!("{}", "✅ Signed in".green().bold()),
                }
                return Ok(());
            }
            SubmissionOutcome::ValidationRejected => {
                print_field_errors(&form);
                if cli.no_prompt {
                    anyhow::bail!("Invalid credentials input");
                }
                if form.field_error(CredentialField::Email).is_some() {
                    prompt_email(&mut form)?;
                }
                if form.field_error(CredentialField::Password).is_some() {
                    prompt_password(&mut form)?;
                }
            }
            SubmissionOutcome::CredentialRejected { message }
            | SubmissionOutcome::TransportFailure { message } => {
                println!("{} {}", "❌".red(), message.red().bold());
                if cli.no_prompt {
                    anyhow::bail!(message);
                }

                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    println!("{}", "Cancelled".yellow());
                    return Ok(());
                }

                prompt_email(&mut form)?;
                prompt_password(&mut form)?;
            }
            SubmissionOutcome::Ignored => return Ok(()),
        }
    }
}

fn prompt_email(form: &mut SignInForm) -> Result<()> {
    let email: String = Input::new()
        .with_prompt("Email")
        .with_initial_text(form.email())
        .allow_empty(true)
        .interact_text()?;
    form.update_field(FieldUpdate::Email(email));
    Ok(())
}

fn prompt_password(form: &mut SignInForm) -> Result<()> {
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    form.update_field(FieldUpdate::Password(password));
    Ok(())
}

fn print_field_errors(form: &SignInForm) {
    for (field, message) in form.field_errors().iter() {
        println!("  {} {}", format!("{field}:").yellow(), message.yellow());
    }
}

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use secrecy::SecretString;
use tracing::warn;

use pos_lib::pages::{Confirm, Preconfirmed};

const POS_PASSWORD: &str = "POS_PASSWORD";

/// Asks on stderr and reads the answer from stdin. Anything but yes declines.
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = format!("{prompt} [y/N] ");
        match tokio::task::spawn_blocking(move || read_answer(&prompt)).await {
            Ok(Ok(answer)) => is_yes(&answer),
            Ok(Err(e)) => {
                warn!(error = %e, "could not read confirmation");
                false
            }
            Err(e) => {
                warn!(error = %e, "confirmation prompt aborted");
                false
            }
        }
    }
}

pub fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(Preconfirmed(true))
    } else {
        Box::new(StdinConfirm)
    }
}

fn read_answer(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    stderr.write_all(prompt.as_bytes())?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Password from the flag, then `POS_PASSWORD`, then one line of stdin.
pub fn password(flag: Option<String>) -> io::Result<SecretString> {
    if let Some(password) = flag {
        return Ok(SecretString::new(password));
    }
    if let Ok(password) = std::env::var(POS_PASSWORD) {
        return Ok(SecretString::new(password));
    }
    let line = read_answer("Password: ")?;
    Ok(SecretString::new(line.trim_end_matches(['\r', '\n']).to_string()))
}

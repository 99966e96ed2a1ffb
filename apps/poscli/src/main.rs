//! `poscli`: the iPOS management client.
//!
//! ```bash
//! poscli login --email rina@toko.id
//! poscli menu
//! poscli products list
//! poscli stock add --product 4 --quantity 24
//! poscli categories delete 3 --yes
//! ```
//!
//! The session is kept in `POS_SESSION_FILE` (default: the user config dir)
//! and the backend is read from `POS_API_URL`.

use std::sync::Arc;

use clap::Parser;
use tracing::warn;

use pos_http::{ApiConfig, HttpPosApi};
use pos_lib::session::{FileSessionStorage, SessionContext, SessionStorage};
use pos_lib::{AuthGuard, PosError};

mod cli;
mod commands;
mod logging;
mod prompt;
mod render;

use crate::cli::Cli;
use crate::commands::Context;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        if e.downcast_ref::<PosError>()
            .is_some_and(PosError::is_redirect_to_login)
        {
            eprintln!("hint: sign in with `poscli login --email <email>`");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let storage: Arc<dyn SessionStorage> = Arc::new(FileSessionStorage::from_env()?);
    let session = match SessionContext::restore(Arc::clone(&storage)).await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "stored session is unreadable, starting signed out");
            SessionContext::new(storage)
        }
    };

    let api = HttpPosApi::new(ApiConfig::from_env(), session.clone())?;
    let context = Context {
        guard: AuthGuard::new(Arc::new(api), session),
        confirm: prompt::confirmer(cli.yes),
    };

    commands::dispatch(&context, cli.command).await
}

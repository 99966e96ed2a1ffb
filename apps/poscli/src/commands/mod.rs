pub mod auth;
pub mod categories;
pub mod products;
pub mod stock;
pub mod suppliers;
pub mod users;

use pos_http::HttpPosApi;
use pos_lib::pages::{Confirm, Deletion};
use pos_lib::{AuthGuard, Id};

use crate::cli::Command;

pub struct Context {
    pub guard: AuthGuard<HttpPosApi>,
    pub confirm: Box<dyn Confirm>,
}

pub async fn dispatch(ctx: &Context, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => auth::login(ctx, &email, password).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx).await,
        Command::Menu => auth::menu(ctx).await,
        Command::Transactions => auth::transactions(ctx).await,
        Command::Users { action } => users::run(ctx, action).await,
        Command::Suppliers { action } => suppliers::run(ctx, action).await,
        Command::Categories { action } => categories::run(ctx, action).await,
        Command::Products { action } => products::run(ctx, action).await,
        Command::Stock { action } => stock::run(ctx, action).await,
    }
}

fn report_deletion(outcome: Deletion, noun: &str, id: Id) {
    match outcome {
        Deletion::Deleted => println!("Deleted {noun} #{id}"),
        Deletion::Cancelled => println!("Cancelled, {noun} #{id} was kept"),
    }
}

use pos_lib::navigation;
use pos_lib::policy::Capability;
use pos_lib::PosError;

use super::Context;
use crate::prompt;

pub async fn login(ctx: &Context, email: &str, password: Option<String>) -> anyhow::Result<()> {
    let password = prompt::password(password)?;
    let user = ctx.guard.login(email, password).await?;
    println!("Signed in as {} ({})", user.name, user.role.label());
    Ok(())
}

pub async fn logout(ctx: &Context) -> anyhow::Result<()> {
    ctx.guard.logout().await?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let user = ctx.guard.check().await.map_err(PosError::from)?;
    println!("{} <{}>", user.name, user.email);
    println!("role: {}", user.role.label());
    Ok(())
}

pub async fn menu(ctx: &Context) -> anyhow::Result<()> {
    let user = ctx.guard.check().await.map_err(PosError::from)?;
    for entry in navigation::menu(user.role) {
        println!("{:<14}{}", entry.label, entry.path);
    }
    Ok(())
}

pub async fn transactions(ctx: &Context) -> anyhow::Result<()> {
    ctx.guard.enter(Capability::Transactions).await?;
    println!("Transactions are not available yet.");
    Ok(())
}

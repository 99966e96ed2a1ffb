use anyhow::anyhow;
use secrecy::SecretString;

use pos_lib::pages::{ResourcePage, UserForm, UsersPage};

use super::{report_deletion, Context};
use crate::cli::UserAction;
use crate::{prompt, render};

pub async fn run(ctx: &Context, action: UserAction) -> anyhow::Result<()> {
    let mut page = UsersPage::open(&ctx.guard).await?;

    match action {
        UserAction::List => {}
        UserAction::Create {
            name,
            email,
            role,
            owner,
            password,
        } => {
            let form = UserForm {
                name,
                email,
                password: Some(prompt::password(password)?),
                role,
                created_by: owner,
            };
            page.create(&form).await?;
            println!("User {} created", form.email.trim());
        }
        UserAction::Update {
            id,
            name,
            email,
            role,
            owner,
            password,
        } => {
            let current = page
                .items()
                .iter()
                .find(|u| u.id == id)
                .ok_or_else(|| anyhow!("user #{id} not found"))?;
            let mut form = UserForm::from_user(current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(role) = role {
                form.set_role(role);
            }
            if owner.is_some() {
                form.created_by = owner;
            }
            form.password = password.map(SecretString::new);
            page.update(id, &form).await?;
            println!("User #{id} updated");
        }
        UserAction::Delete { id } => {
            let outcome = page.delete(id, ctx.confirm.as_ref()).await?;
            report_deletion(outcome, "user", id);
        }
    }

    print!("{}", render::users(page.items()));
    Ok(())
}

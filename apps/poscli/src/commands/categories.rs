use pos_lib::pages::{CategoriesPage, CategoryForm, ResourcePage};

use super::{report_deletion, Context};
use crate::cli::CategoryAction;
use crate::render;

pub async fn run(ctx: &Context, action: CategoryAction) -> anyhow::Result<()> {
    let mut page = CategoriesPage::open(&ctx.guard).await?;

    match action {
        CategoryAction::List => {}
        CategoryAction::Create { name } => {
            page.create(&CategoryForm::new(name)).await?;
            println!("Category created");
        }
        CategoryAction::Update { id, name } => {
            page.update(id, &CategoryForm::new(name)).await?;
            println!("Category #{id} updated");
        }
        CategoryAction::Delete { id } => {
            let outcome = page.delete(id, ctx.confirm.as_ref()).await?;
            report_deletion(outcome, "category", id);
        }
    }

    print!("{}", render::categories(page.items()));
    Ok(())
}

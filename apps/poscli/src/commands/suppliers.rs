use anyhow::anyhow;

use pos_lib::pages::{ResourcePage, SupplierForm, SuppliersPage};

use super::{report_deletion, Context};
use crate::cli::SupplierAction;
use crate::render;

pub async fn run(ctx: &Context, action: SupplierAction) -> anyhow::Result<()> {
    let mut page = SuppliersPage::open(&ctx.guard).await?;

    match action {
        SupplierAction::List => {}
        SupplierAction::Create {
            name,
            contact,
            address,
        } => {
            let form = SupplierForm {
                name,
                contact,
                address,
            };
            page.create(&form).await?;
            println!("Supplier created");
        }
        SupplierAction::Update {
            id,
            name,
            contact,
            address,
        } => {
            let current = page
                .items()
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| anyhow!("supplier #{id} not found"))?;
            let form = SupplierForm {
                name: name.unwrap_or_else(|| current.name.clone()),
                contact: contact.unwrap_or_else(|| current.contact.clone()),
                address: address.unwrap_or_else(|| current.address.clone()),
            };
            page.update(id, &form).await?;
            println!("Supplier #{id} updated");
        }
        SupplierAction::Delete { id } => {
            let outcome = page.delete(id, ctx.confirm.as_ref()).await?;
            report_deletion(outcome, "supplier", id);
        }
    }

    print!("{}", render::suppliers(page.items()));
    Ok(())
}

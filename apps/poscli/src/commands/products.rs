use anyhow::anyhow;

use pos_lib::pages::{ProductForm, ProductsPage, ResourcePage};

use super::{report_deletion, Context};
use crate::cli::ProductAction;
use crate::render;

pub async fn run(ctx: &Context, action: ProductAction) -> anyhow::Result<()> {
    let mut page = ProductsPage::open(&ctx.guard).await?;

    match action {
        ProductAction::List => {}
        ProductAction::Create {
            name,
            category,
            buy_price,
            sell_price,
            barcode,
        } => {
            let form = ProductForm {
                name,
                category_id: Some(category),
                buy_price: Some(buy_price),
                sell_price: Some(sell_price),
                barcode,
            };
            page.create(&form).await?;
            println!("Product created");
        }
        ProductAction::Update {
            id,
            name,
            category,
            buy_price,
            sell_price,
            barcode,
        } => {
            let current = page
                .product(id)
                .ok_or_else(|| anyhow!("product #{id} not found"))?;
            let mut form = ProductForm::from_product(current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(barcode) = barcode {
                form.barcode = barcode;
            }
            form.category_id = category.or(form.category_id);
            form.buy_price = buy_price.or(form.buy_price);
            form.sell_price = sell_price.or(form.sell_price);

            page.update(id, &form).await?;
            println!("Product #{id} updated");
        }
        ProductAction::Delete { id } => {
            let outcome = page.delete(id, ctx.confirm.as_ref()).await?;
            report_deletion(outcome, "product", id);
        }
    }

    print!("{}", render::products(page.items()));
    Ok(())
}

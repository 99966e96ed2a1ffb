use pos_lib::pages::{ResourcePage, StockForm, StockPage};

use super::Context;
use crate::cli::StockAction;
use crate::render;

pub async fn run(ctx: &Context, action: StockAction) -> anyhow::Result<()> {
    let mut page = StockPage::open(&ctx.guard).await?;

    match action {
        StockAction::List => {}
        StockAction::Add { product, quantity } => {
            page.add(&StockForm::new(product, quantity)).await?;
            println!("Added {quantity} to product #{product}");
        }
        StockAction::Remove { product, quantity } => {
            page.remove(&StockForm::new(product, quantity)).await?;
            println!("Removed {quantity} from product #{product}");
        }
    }

    print!("{}", render::stock_levels(page.items()));
    println!();
    print!("{}", render::stock_history(page.transactions()));
    Ok(())
}

use cucumber::when;
use secrecy::SecretString;

use pos_lib::pages::{
    CategoriesPage, ProductsPage, ResourcePage, StockPage, SuppliersPage, UsersPage,
};
use pos_lib::session::SessionStorage;
use pos_lib::PosError;

use crate::support::world::TestWorld;

#[when(expr = "I log in as {string} with password {string}")]
pub async fn log_in(world: &mut TestWorld, email: String, password: String) {
    world.begin();
    let result = world.guard.login(&email, SecretString::new(password)).await;
    world.record(result);
}

#[when("I log out")]
pub async fn log_out(world: &mut TestWorld) {
    world.begin();
    let result = world.guard.logout().await;
    world.record(result);
}

#[when("the stored session is removed")]
pub async fn stored_session_removed(world: &mut TestWorld) {
    world.storage.clear().unwrap();
}

/// Opens a page by its menu name and keeps the error, if any.
pub async fn open_page(world: &mut TestWorld, page: &str) -> Result<(), PosError> {
    let guard = world.guard.clone();
    let (load_count, listed): (usize, Vec<String>) = match page {
        "users" => {
            let page = UsersPage::open(&guard).await?;
            let emails = page.items().iter().map(|u| u.email.clone()).collect();
            (page.load_count(), emails)
        }
        "categories" => {
            let page = CategoriesPage::open(&guard).await?;
            let names = page.items().iter().map(|c| c.name.clone()).collect();
            (page.load_count(), names)
        }
        "products" => {
            let page = ProductsPage::open(&guard).await?;
            let names = page.items().iter().map(|p| p.name.clone()).collect();
            (page.load_count(), names)
        }
        "suppliers" => {
            let page = SuppliersPage::open(&guard).await?;
            let names = page.items().iter().map(|s| s.name.clone()).collect();
            (page.load_count(), names)
        }
        "stock" => {
            let page = StockPage::open(&guard).await?;
            let levels = page
                .items()
                .iter()
                .map(|p| format!("{}={}", p.name, p.stock.unwrap_or(0)))
                .collect();
            (page.load_count(), levels)
        }
        other => panic!("unknown page {other}"),
    };
    world.load_count = load_count;
    world.listed = listed;
    Ok(())
}

#[when(expr = "I open the {string} page")]
pub async fn open_named_page(world: &mut TestWorld, page: String) {
    world.begin();
    let result = open_page(world, &page).await;
    world.record(result);
}

use cucumber::when;
use rust_decimal::Decimal;
use secrecy::SecretString;

use pos_lib::pages::{
    CategoriesPage, CategoryForm, Preconfirmed, ProductForm, ProductsPage, ResourcePage,
    StockForm, StockPage, SupplierForm, SuppliersPage, UserForm, UsersPage,
};
use pos_lib::Role;

use crate::support::world::TestWorld;

fn snapshot<P: ResourcePage>(world: &mut TestWorld, page: &P, label: impl Fn(&P::Item) -> String) {
    world.load_count = page.load_count();
    world.listed = page.items().iter().map(label).collect();
}

fn answer(word: &str) -> Preconfirmed {
    match word {
        "confirm" => Preconfirmed(true),
        "decline" => Preconfirmed(false),
        other => panic!("expected confirm or decline, got {other}"),
    }
}

// ==================== CATEGORIES ====================

#[when(expr = "I add the category {string}")]
pub async fn add_category(world: &mut TestWorld, name: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(CategoriesPage::open(&guard).await) else {
        return;
    };
    let result = page.create(&CategoryForm::new(name)).await;
    world.record(result);
    snapshot(world, &page, |c| c.name.clone());
}

#[when(expr = "I rename the category {string} to {string}")]
pub async fn rename_category(world: &mut TestWorld, from: String, to: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(CategoriesPage::open(&guard).await) else {
        return;
    };
    let id = page
        .items()
        .iter()
        .find(|c| c.name == from)
        .map(|c| c.id)
        .expect("category should be listed");
    let result = page.update(id, &CategoryForm::new(to)).await;
    world.record(result);
    snapshot(world, &page, |c| c.name.clone());
}

#[when(expr = "I delete the category {string} and {word}")]
pub async fn delete_category(world: &mut TestWorld, name: String, confirm: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(CategoriesPage::open(&guard).await) else {
        return;
    };
    let id = page
        .items()
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .expect("category should be listed");
    let result = page.delete(id, &answer(&confirm)).await;
    world.record(result);
    snapshot(world, &page, |c| c.name.clone());
}

// ==================== SUPPLIERS ====================

#[when(expr = "I add the supplier {string} with contact {string} and address {string}")]
pub async fn add_supplier(world: &mut TestWorld, name: String, contact: String, address: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(SuppliersPage::open(&guard).await) else {
        return;
    };
    let form = SupplierForm {
        name,
        contact,
        address,
    };
    let result = page.create(&form).await;
    world.record(result);
    snapshot(world, &page, |s| s.name.clone());
}

#[when(expr = "I delete the supplier {string} and {word}")]
pub async fn delete_supplier(world: &mut TestWorld, name: String, confirm: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(SuppliersPage::open(&guard).await) else {
        return;
    };
    let id = page
        .items()
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.id)
        .expect("supplier should be listed");
    let result = page.delete(id, &answer(&confirm)).await;
    world.record(result);
    snapshot(world, &page, |s| s.name.clone());
}

// ==================== PRODUCTS ====================

#[when(expr = "I add the product {string} in category {string} selling at {int}")]
pub async fn add_product(world: &mut TestWorld, name: String, category: String, price: i64) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(ProductsPage::open(&guard).await) else {
        return;
    };
    let category_id = page
        .categories()
        .iter()
        .find(|c| c.name == category)
        .map(|c| c.id);
    let form = ProductForm {
        barcode: format!("899{}", name.len()),
        name,
        category_id,
        buy_price: Some(Decimal::from(price) * Decimal::new(8, 1)),
        sell_price: Some(Decimal::from(price)),
    };
    let result = page.create(&form).await;
    world.record(result);
    snapshot(world, &page, |p| p.name.clone());
}

#[when(expr = "I add the product {string} in the unknown category {int}")]
pub async fn add_product_unknown_category(world: &mut TestWorld, name: String, category_id: i64) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(ProductsPage::open(&guard).await) else {
        return;
    };
    let form = ProductForm {
        name,
        category_id: Some(category_id),
        buy_price: Some(Decimal::from(1000)),
        sell_price: Some(Decimal::from(1500)),
        barcode: "8990000".to_string(),
    };
    let result = page.create(&form).await;
    world.record(result);
    snapshot(world, &page, |p| p.name.clone());
}

#[when(expr = "I add the product {string} without a price")]
pub async fn add_product_without_price(world: &mut TestWorld, name: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(ProductsPage::open(&guard).await) else {
        return;
    };
    let form = ProductForm {
        name,
        category_id: page.categories().first().map(|c| c.id),
        barcode: "8990001".to_string(),
        ..ProductForm::default()
    };
    let result = page.create(&form).await;
    world.record(result);
    snapshot(world, &page, |p| p.name.clone());
}

// ==================== STOCK ====================

async fn move_stock(world: &mut TestWorld, product: &str, quantity: u32, add: bool) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(StockPage::open(&guard).await) else {
        return;
    };
    let product_id = page
        .items()
        .iter()
        .find(|p| p.name == product)
        .map(|p| p.id)
        .expect("product should be listed");
    let form = StockForm::new(product_id, quantity);
    let result = if add {
        page.add(&form).await
    } else {
        page.remove(&form).await
    };
    world.record(result);
    snapshot(world, &page, |p| format!("{}={}", p.name, p.stock.unwrap_or(0)));
}

#[when(expr = "I add {int} units of {string} to stock")]
pub async fn add_stock(world: &mut TestWorld, quantity: u32, product: String) {
    move_stock(world, &product, quantity, true).await;
}

#[when(expr = "I remove {int} units of {string} from stock")]
pub async fn remove_stock(world: &mut TestWorld, quantity: u32, product: String) {
    move_stock(world, &product, quantity, false).await;
}

// ==================== USERS ====================

#[when(expr = "I create a user {string} with role {string}")]
pub async fn create_user(world: &mut TestWorld, email: String, role: String) {
    world.begin();
    let guard = world.guard.clone();
    let Some(mut page) = world.record(UsersPage::open(&guard).await) else {
        return;
    };
    let form = UserForm {
        name: email.split('@').next().unwrap_or_default().to_string(),
        email,
        password: Some(SecretString::new("rahasia".to_string())),
        role: role.parse::<Role>().unwrap(),
        created_by: None,
    };
    let result = page.create(&form).await;
    world.record(result);
    snapshot(world, &page, |u| u.email.clone());
}

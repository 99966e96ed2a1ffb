use cucumber::given;
use secrecy::SecretString;

use pos_lib::Role;

use crate::support::world::TestWorld;

const DEFAULT_PASSWORD: &str = "rahasia";

#[given(expr = "an account {string} with password {string} and role {string}")]
pub async fn account_exists(world: &mut TestWorld, email: String, password: String, role: String) {
    world
        .backend
        .add_account(&email, &password, role.parse::<Role>().unwrap(), None);
}

#[given(expr = "{string} owns a {string} account {string}")]
pub async fn owned_account_exists(world: &mut TestWorld, owner: String, role: String, email: String) {
    let owner = world
        .backend
        .user_by_email(&owner)
        .expect("owner account should exist");
    world.backend.add_account(
        &email,
        DEFAULT_PASSWORD,
        role.parse::<Role>().unwrap(),
        Some(owner.id),
    );
}

#[given(expr = "an unowned {string} account {string}")]
pub async fn unowned_account_exists(world: &mut TestWorld, role: String, email: String) {
    world
        .backend
        .add_account(&email, DEFAULT_PASSWORD, role.parse::<Role>().unwrap(), None);
}

#[given(expr = "I am logged in as {string} with password {string}")]
pub async fn logged_in_as(world: &mut TestWorld, email: String, password: String) {
    world
        .guard
        .login(&email, SecretString::new(password))
        .await
        .expect("login should succeed");
}

#[given(expr = "I am signed in with role {string}")]
pub async fn signed_in_with_role(world: &mut TestWorld, role: String) {
    let role = role.parse::<Role>().unwrap();
    let email = format!("{role}@toko.id");
    world
        .backend
        .add_account(&email, DEFAULT_PASSWORD, role, None);
    world
        .guard
        .login(&email, SecretString::new(DEFAULT_PASSWORD.to_string()))
        .await
        .expect("login should succeed");
}

#[given(expr = "a category {string} exists")]
pub async fn category_exists(world: &mut TestWorld, name: String) {
    world.backend.add_category(&name);
}

#[given(expr = "a product {string} in category {string} with {int} units in stock")]
pub async fn product_exists(world: &mut TestWorld, name: String, category: String, stock: i64) {
    let category = world
        .backend
        .category_by_name(&category)
        .expect("category should exist");
    world.backend.add_product(&name, &category, stock);
}

#[given(expr = "a supplier {string} exists")]
pub async fn supplier_exists(world: &mut TestWorld, name: String) {
    world.backend.add_supplier(&name);
}

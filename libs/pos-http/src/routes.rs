use pos_lib::Id;

pub const LOGIN_PATH: &str = "/users/login";
pub const USERS_PATH: &str = "/users";
pub const CATEGORIES_PATH: &str = "/categories";
pub const PRODUCTS_PATH: &str = "/products";
pub const SUPPLIERS_PATH: &str = "/suppliers";
pub const STOCK_PATH: &str = "/stock";
pub const STOCK_ADD_PATH: &str = "/stock/add";
pub const STOCK_REMOVE_PATH: &str = "/stock/remove";

pub const CREATED_BY_PARAM: &str = "created_by";

pub fn by_id(collection: &str, id: Id) -> String {
    format!("{collection}/{id}")
}

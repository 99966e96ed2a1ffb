pub mod errors;
pub mod requests;
pub mod traits;

pub use errors::ApiError;
pub use requests::{
    CategoryInput, LoginRequest, LoginResponse, NewUser, ProductInput, StockMovement,
    SupplierInput, UserUpdate,
};
pub use traits::PosApi;

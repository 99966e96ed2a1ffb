use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use pos_lib::{Id, Role};

#[derive(Parser)]
#[command(name = "poscli")]
#[command(version, about = "iPOS management client")]
pub struct Cli {
    /// Skip delete confirmations
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(short, long)]
        email: String,

        /// Read from POS_PASSWORD or stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the pages available to your role
    Menu,
    /// Manage user accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage suppliers
    Suppliers {
        #[command(subcommand)]
        action: SupplierAction,
    },
    /// Manage product categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Record stock movements
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },
    /// Point of sale transactions
    Transactions,
}

#[derive(Subcommand)]
pub enum UserAction {
    List,
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// admin, staff_admin, staff or kasir
        #[arg(long, default_value = "kasir")]
        role: Role,

        /// Owning staff_admin id (admin only)
        #[arg(long)]
        owner: Option<Id>,

        /// Read from POS_PASSWORD or stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Change an account; omitted fields keep their current value
    Update {
        id: Id,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<Role>,

        #[arg(long)]
        owner: Option<Id>,

        /// New password; the current one is kept when omitted
        #[arg(long)]
        password: Option<String>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum SupplierAction {
    List,
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        contact: String,

        #[arg(long)]
        address: String,
    },
    /// Change a supplier; omitted fields keep their current value
    Update {
        id: Id,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    List,
    Create {
        name: String,
    },
    /// Rename a category
    Update {
        id: Id,
        name: String,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum ProductAction {
    List,
    Create {
        #[arg(long)]
        name: String,

        /// Category id
        #[arg(long)]
        category: Id,

        #[arg(long)]
        buy_price: Decimal,

        #[arg(long)]
        sell_price: Decimal,

        #[arg(long)]
        barcode: String,
    },
    /// Change a product; omitted fields keep their current value
    Update {
        id: Id,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<Id>,

        #[arg(long)]
        buy_price: Option<Decimal>,

        #[arg(long)]
        sell_price: Option<Decimal>,

        #[arg(long)]
        barcode: Option<String>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum StockAction {
    /// Current levels and movement history
    List,
    /// Receive units into stock
    Add {
        #[arg(long)]
        product: Id,

        #[arg(long)]
        quantity: u32,
    },
    /// Take units out of stock
    Remove {
        #[arg(long)]
        product: Id,

        #[arg(long)]
        quantity: u32,
    },
}

//! Navigation Shell
//!
//! The sidebar menu tree, which sections are expanded, and the mapping from
//! hash paths to screens.

use tracing::debug;

use crate::view::InvoiceKind;

// ========================
// Menu
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub id: &'static str,
    pub label: &'static str,
    /// Target of the section header itself, if it is a link
    pub path: Option<&'static str>,
    pub items: &'static [MenuItem],
}

const fn item(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem { label, path }
}

pub const MENU: &[MenuSection] = &[
    MenuSection {
        id: "dashboard",
        label: "Dashboard",
        path: Some("/"),
        items: &[item("Cheque Authorization", "/cheque-authorization")],
    },
    MenuSection {
        id: "setup",
        label: "Setup",
        path: None,
        items: &[
            item("Warehouse Information", "/setup/warehouse"),
            item("Brand Information", "/setup/brand"),
            item("Product Category", "/setup/product-category"),
            item("Bank Information", "/setup/bank"),
            item("Branch Information", "/setup/branch"),
            item("Unit Information", "/setup/unit"),
            item("Product Ordering", "/setup/product-ordering"),
            item("Product Information", "/setup/product"),
            item("Supplier Information", "/setup/supplier"),
            item("Designation Information", "/setup/designation"),
            item("Employee Information", "/setup/employee"),
            item("Size Information", "/setup/size"),
            item("Commission", "/setup/commission"),
        ],
    },
    MenuSection {
        id: "purchase",
        label: "Purchase",
        path: None,
        items: &[
            item("Purchase Information", "/purchase/information"),
            item("Purchase Return", "/purchase/return"),
        ],
    },
    MenuSection {
        id: "sales",
        label: "Sales",
        path: None,
        items: &[
            item("Sales", "/sales"),
            item("Sales Return", "/sales/return"),
            item("Order", "/sales/order"),
            item("Delivery", "/sales/delivery"),
        ],
    },
    MenuSection {
        id: "adjustment",
        label: "Adjustment",
        path: None,
        items: &[item("Adjustment Information", "/adjustment")],
    },
    MenuSection {
        id: "accounting",
        label: "Accounting",
        path: None,
        items: &[
            item("Account Group", "/accounting/group"),
            item("Account Head", "/accounting/head"),
            item("Payment Received", "/accounting/payment"),
            item("General Ledger", "/accounting/ledger"),
        ],
    },
    MenuSection {
        id: "security",
        label: "Security",
        path: None,
        items: &[
            item("User Permission", "/security/permissions"),
            item("Create User", "/security/create-user"),
            item("Remove Invoice", "/security/remove-invoice"),
        ],
    },
    MenuSection {
        id: "production",
        label: "Production",
        path: None,
        items: &[
            item("Product Recipe", "/production/recipe"),
            item("Production", "/production/manage"),
            item("Manual Consumption", "/production/consumption"),
        ],
    },
    MenuSection {
        id: "customer",
        label: "Customer Information",
        path: None,
        items: &[
            item("Message", "/customer/message"),
            item("Customer Information", "/customer/information"),
        ],
    },
    MenuSection {
        id: "warehouse",
        label: "Warehouse Send & Receive",
        path: None,
        items: &[
            item("Warehouse Send", "/warehouse/send"),
            item("Warehouse Receive", "/warehouse/receive"),
            item("Product Replacement", "/warehouse/replacement"),
        ],
    },
    MenuSection {
        id: "reporting",
        label: "Reporting",
        path: None,
        items: &[
            item("Purchase Reports", "/reports/purchase"),
            item("Purchase Return Reports", "/reports/purchase-return"),
            item("Sales Reports", "/reports/sales"),
            item("Sales Return Reports", "/reports/sales-return"),
            item("Inventory Reports", "/reports/inventory"),
            item("Stock Report (Raw)", "/reports/stock-raw"),
            item("Accounts Reports", "/reports/accounts"),
            item("Adjustment Reports", "/reports/adjustment"),
            item("Customer Reports", "/reports/customer"),
            item("Employee Report", "/reports/employee"),
            item("Supplier Report", "/reports/supplier"),
            item("Send Warehouse", "/reports/send-warehouse"),
            item("Receive Warehouse", "/reports/receive-warehouse"),
            item("Product Information", "/reports/product"),
            item("Authority Report", "/reports/authority"),
        ],
    },
    MenuSection {
        id: "replacement",
        label: "Product Replacement",
        path: None,
        items: &[
            item("Product Receive", "/replacement/receive"),
            item("Send To Factory", "/replacement/send-factory"),
        ],
    },
];

/// Label of the menu entry pointing at `path`
pub fn menu_label(path: &str) -> Option<&'static str> {
    MENU.iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.path == path)
        .map(|item| item.label)
}

/// Expanded sections and the mobile sidebar flag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuState {
    open: Vec<String>,
    pub sidebar_open: bool,
}

impl MenuState {
    /// Expand a collapsed section or collapse an expanded one
    pub fn toggle(&mut self, id: &str) {
        match self.open.iter().position(|open| open == id) {
            Some(index) => {
                self.open.remove(index);
            }
            None => self.open.push(id.to_string()),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

// ========================
// Routes
// ========================

/// Master-data screens built from a generic record form and list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordScreen {
    Warehouse,
    Brand,
    ProductCategory,
    Bank,
    Branch,
    Unit,
    Product,
    Supplier,
    Designation,
    Employee,
    Size,
    Commission,
    Customer,
    AccountGroup,
    AccountHead,
    User,
    ChequeAuthorization,
    Message,
    PaymentReceived,
    GeneralLedger,
    ProductRecipe,
    Production,
    ManualConsumption,
}

impl RecordScreen {
    pub const ALL: [RecordScreen; 23] = [
        RecordScreen::Warehouse,
        RecordScreen::Brand,
        RecordScreen::ProductCategory,
        RecordScreen::Bank,
        RecordScreen::Branch,
        RecordScreen::Unit,
        RecordScreen::Product,
        RecordScreen::Supplier,
        RecordScreen::Designation,
        RecordScreen::Employee,
        RecordScreen::Size,
        RecordScreen::Commission,
        RecordScreen::Customer,
        RecordScreen::AccountGroup,
        RecordScreen::AccountHead,
        RecordScreen::User,
        RecordScreen::ChequeAuthorization,
        RecordScreen::Message,
        RecordScreen::PaymentReceived,
        RecordScreen::GeneralLedger,
        RecordScreen::ProductRecipe,
        RecordScreen::Production,
        RecordScreen::ManualConsumption,
    ];

    pub fn path(self) -> &'static str {
        match self {
            RecordScreen::Warehouse => "/setup/warehouse",
            RecordScreen::Brand => "/setup/brand",
            RecordScreen::ProductCategory => "/setup/product-category",
            RecordScreen::Bank => "/setup/bank",
            RecordScreen::Branch => "/setup/branch",
            RecordScreen::Unit => "/setup/unit",
            RecordScreen::Product => "/setup/product",
            RecordScreen::Supplier => "/setup/supplier",
            RecordScreen::Designation => "/setup/designation",
            RecordScreen::Employee => "/setup/employee",
            RecordScreen::Size => "/setup/size",
            RecordScreen::Commission => "/setup/commission",
            RecordScreen::Customer => "/customer/information",
            RecordScreen::AccountGroup => "/accounting/group",
            RecordScreen::AccountHead => "/accounting/head",
            RecordScreen::User => "/security/create-user",
            RecordScreen::ChequeAuthorization => "/cheque-authorization",
            RecordScreen::Message => "/customer/message",
            RecordScreen::PaymentReceived => "/accounting/payment",
            RecordScreen::GeneralLedger => "/accounting/ledger",
            RecordScreen::ProductRecipe => "/production/recipe",
            RecordScreen::Production => "/production/manage",
            RecordScreen::ManualConsumption => "/production/consumption",
        }
    }

    pub fn title(self) -> &'static str {
        menu_label(self.path()).unwrap_or("Information")
    }

    /// Listed only: no entry form and no row actions
    pub fn is_read_only(self) -> bool {
        self == RecordScreen::ChequeAuthorization
    }
}

const ORDERS_PATH: &str = "/sales/order";

fn invoice_path(kind: InvoiceKind) -> &'static str {
    match kind {
        InvoiceKind::Purchase => "/purchase/information",
        InvoiceKind::PurchaseReturn => "/purchase/return",
        InvoiceKind::Sales => "/sales",
        InvoiceKind::SalesReturn => "/sales/return",
        InvoiceKind::Adjustment => "/adjustment",
        InvoiceKind::WarehouseSend => "/warehouse/send",
        InvoiceKind::WarehouseReceive => "/warehouse/receive",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Record(RecordScreen),
    Invoice(InvoiceKind),
    /// Pending online orders
    Orders,
    /// In the menu but without a screen yet
    Unavailable(String),
    NotFound(String),
}

/// `#/setup/bank/` and `setup/bank` both become `/setup/bank`
fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_start_matches('#').trim_matches('/');
    format!("/{trimmed}")
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = normalize(path);
        match path.as_str() {
            "/" => return Route::Dashboard,
            "/login" => return Route::Login,
            "/register" => return Route::Register,
            ORDERS_PATH => return Route::Orders,
            _ => {}
        }
        if let Some(screen) = RecordScreen::ALL.into_iter().find(|s| s.path() == path) {
            return Route::Record(screen);
        }
        if let Some(kind) = InvoiceKind::ALL.into_iter().find(|k| invoice_path(*k) == path) {
            return Route::Invoice(kind);
        }
        if menu_label(&path).is_some() {
            Route::Unavailable(path)
        } else {
            Route::NotFound(path)
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::Record(screen) => screen.path().to_string(),
            Route::Invoice(kind) => invoice_path(*kind).to_string(),
            Route::Orders => ORDERS_PATH.to_string(),
            Route::Unavailable(path) | Route::NotFound(path) => path.clone(),
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Send visitors without a session to the login page
    pub fn guard(self, authenticated: bool) -> Self {
        if authenticated || self.is_public() {
            self
        } else {
            debug!(path = %self.path(), "redirecting to login");
            Route::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expands_and_collapses() {
        let mut menu = MenuState::default();
        menu.toggle("setup");
        menu.toggle("sales");
        assert!(menu.is_open("setup") && menu.is_open("sales"));

        menu.toggle("setup");
        assert!(!menu.is_open("setup"));
        assert!(menu.is_open("sales"));
    }

    #[test]
    fn test_sidebar_flag() {
        let mut menu = MenuState::default();
        menu.toggle_sidebar();
        assert!(menu.sidebar_open);
        menu.close_sidebar();
        assert!(!menu.sidebar_open);
    }

    #[test]
    fn test_route_mapping() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("#/setup/bank"), Route::Record(RecordScreen::Bank));
        assert_eq!(Route::from_path("sales/return/"), Route::Invoice(InvoiceKind::SalesReturn));
        assert_eq!(
            Route::from_path("/reports/sales"),
            Route::Unavailable("/reports/sales".to_string())
        );
        assert_eq!(Route::from_path("/nope"), Route::NotFound("/nope".to_string()));
    }

    #[test]
    fn test_every_screen_path_round_trips() {
        for screen in RecordScreen::ALL {
            assert_eq!(Route::from_path(screen.path()), Route::Record(screen));
            assert!(menu_label(screen.path()).is_some(), "{screen:?} missing from menu");
        }
        for kind in InvoiceKind::ALL {
            assert_eq!(Route::from_path(&Route::Invoice(kind).path()), Route::Invoice(kind));
        }
        assert_eq!(Route::from_path(&Route::Orders.path()), Route::Orders);
    }

    #[test]
    fn test_operational_screens_have_routes() {
        assert_eq!(Route::from_path("/sales/order"), Route::Orders);
        assert_eq!(Route::from_path("/customer/message"), Route::Record(RecordScreen::Message));
        assert_eq!(
            Route::from_path("/production/consumption"),
            Route::Record(RecordScreen::ManualConsumption)
        );
        assert_eq!(RecordScreen::GeneralLedger.title(), "General Ledger");
        assert!(RecordScreen::ChequeAuthorization.is_read_only());
        assert!(!RecordScreen::PaymentReceived.is_read_only());
        // delivery has no screen yet
        assert_eq!(
            Route::from_path("/sales/delivery"),
            Route::Unavailable("/sales/delivery".to_string())
        );
    }

    #[test]
    fn test_guard_redirects_without_session() {
        let bank = Route::Record(RecordScreen::Bank);
        assert_eq!(bank.clone().guard(false), Route::Login);
        assert_eq!(bank.clone().guard(true), bank);
        assert_eq!(Route::Register.guard(false), Route::Register);
    }

    #[test]
    fn test_screen_titles_come_from_menu() {
        assert_eq!(RecordScreen::User.title(), "Create User");
        assert_eq!(RecordScreen::Customer.title(), "Customer Information");
    }
}

//! Invoice Controller
//!
//! Line-item entry shared by the purchase, sales, adjustment and warehouse
//! transfer screens. Totals are always derived from the lines and the
//! settlement amounts, never stored on the draft.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{format_date, format_number, DomainError, FieldSpec, Product, Record};
use crate::repository::Repository;

// ========================
// Kinds
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceKind {
    Purchase,
    PurchaseReturn,
    Sales,
    SalesReturn,
    Adjustment,
    WarehouseSend,
    WarehouseReceive,
}

impl InvoiceKind {
    pub const ALL: [InvoiceKind; 7] = [
        InvoiceKind::Purchase,
        InvoiceKind::PurchaseReturn,
        InvoiceKind::Sales,
        InvoiceKind::SalesReturn,
        InvoiceKind::Adjustment,
        InvoiceKind::WarehouseSend,
        InvoiceKind::WarehouseReceive,
    ];

    pub fn title(self) -> &'static str {
        match self {
            InvoiceKind::Purchase => "Purchase Information",
            InvoiceKind::PurchaseReturn => "Purchase Return",
            InvoiceKind::Sales => "Sales Information",
            InvoiceKind::SalesReturn => "Sales Return",
            InvoiceKind::Adjustment => "Adjustment Information",
            InvoiceKind::WarehouseSend => "Warehouse Send Product",
            InvoiceKind::WarehouseReceive => "Warehouse Receive Product",
        }
    }

    /// Label of the counterparty selector
    pub fn party_label(self) -> &'static str {
        match self {
            InvoiceKind::Purchase | InvoiceKind::PurchaseReturn => "Supplier",
            InvoiceKind::Sales | InvoiceKind::SalesReturn => "Customer",
            InvoiceKind::Adjustment | InvoiceKind::WarehouseSend | InvoiceKind::WarehouseReceive => "Warehouse",
        }
    }

    /// Prefix of generated invoice numbers
    pub fn prefix(self) -> &'static str {
        match self {
            InvoiceKind::Purchase => "PUR",
            InvoiceKind::PurchaseReturn => "PRT",
            InvoiceKind::Sales => "SAL",
            InvoiceKind::SalesReturn => "SRT",
            InvoiceKind::Adjustment => "ADJ",
            InvoiceKind::WarehouseSend => "WHS",
            InvoiceKind::WarehouseReceive => "WHR",
        }
    }

    /// Buying-side screens price lines at cost, selling-side at retail
    pub fn default_price(self, product: &Product) -> f64 {
        match self {
            InvoiceKind::Sales | InvoiceKind::SalesReturn => product.retail_price,
            _ => product.cost_price,
        }
    }

    /// Screens whose party is not itself a warehouse also pick one, and
    /// cannot post without it
    pub fn needs_warehouse(self) -> bool {
        self.party_label() != "Warehouse"
    }

    /// Whether the screen shows the payment block
    pub fn has_settlement(self) -> bool {
        !matches!(
            self,
            InvoiceKind::Adjustment | InvoiceKind::WarehouseSend | InvoiceKind::WarehouseReceive
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayType {
    #[default]
    Cash,
    Card,
    BankTransfer,
}

impl PayType {
    pub const ALL: [PayType; 3] = [PayType::Cash, PayType::Card, PayType::BankTransfer];

    pub fn label(self) -> &'static str {
        match self {
            PayType::Cash => "Cash",
            PayType::Card => "Card",
            PayType::BankTransfer => "Bank Transfer",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceError {
    #[error("Select a product")]
    EmptyProduct,
    #[error("Quantity must be greater than zero")]
    BadQuantity,
    #[error("Price must be greater than zero")]
    BadPrice,
    #[error("Add at least one product")]
    NoLines,
    #[error("{0} is required")]
    MissingParty(&'static str),
    #[error("Warehouse is required")]
    MissingWarehouse,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

// ========================
// Lines
// ========================

/// Raw product-row inputs before "Add to list"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineDraft {
    pub product: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: u32,
    pub product: String,
    pub quantity: f64,
    pub price: f64,
}

impl LineItem {
    pub fn total(&self) -> f64 {
        self.quantity * self.price
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n > 0.0)
}

/// Amounts entered under the line table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settlement {
    pub previous_due: f64,
    pub shipping: f64,
    pub less: f64,
    pub paid: f64,
}

// ========================
// Draft
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub kind: InvoiceKind,
    pub party: String,
    pub warehouse: String,
    pub date: NaiveDate,
    /// Left empty to have one generated on finalize
    pub invoice_no: String,
    pub pay_type: PayType,
    pub line: LineDraft,
    pub settlement: Settlement,
    lines: Vec<LineItem>,
    next_line_id: u32,
}

impl InvoiceDraft {
    pub fn new(kind: InvoiceKind, date: NaiveDate) -> Self {
        Self {
            kind,
            party: String::new(),
            warehouse: String::new(),
            date,
            invoice_no: String::new(),
            pay_type: PayType::default(),
            line: LineDraft::default(),
            settlement: Settlement::default(),
            lines: Vec::new(),
            next_line_id: 1,
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Pick a product for the line draft and fill in its default price
    pub fn select_product(&mut self, product: &Product) {
        self.line.product = product.product_name.clone();
        self.line.price = format_number(self.kind.default_price(product));
    }

    /// Move the line draft into the table
    pub fn add_line(&mut self) -> Result<u32, InvoiceError> {
        let product = self.line.product.trim();
        if product.is_empty() {
            return Err(InvoiceError::EmptyProduct);
        }
        let quantity = parse_positive(&self.line.quantity).ok_or(InvoiceError::BadQuantity)?;
        let price = parse_positive(&self.line.price).ok_or(InvoiceError::BadPrice)?;

        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(LineItem {
            id,
            product: product.to_string(),
            quantity,
            price,
        });
        self.line = LineDraft::default();
        debug!(kind = ?self.kind, line = id, "line added");
        Ok(id)
    }

    pub fn remove_line(&mut self, id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Take a line out of the table and back into the line draft
    pub fn edit_line(&mut self, id: u32) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            return false;
        };
        let line = self.lines.remove(index);
        self.line = LineDraft {
            product: line.product,
            quantity: format_number(line.quantity),
            price: format_number(line.price),
        };
        true
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(LineItem::total).sum()
    }

    pub fn payable(&self) -> f64 {
        self.subtotal() + self.settlement.previous_due + self.settlement.shipping - self.settlement.less
    }

    pub fn due(&self) -> f64 {
        self.payable() - self.settlement.paid
    }

    /// Post the draft into `journal` and start a fresh one
    pub fn finalize(&mut self, journal: &mut impl Repository<Invoice>) -> Result<Invoice, InvoiceError> {
        if self.party.trim().is_empty() {
            return Err(InvoiceError::MissingParty(self.kind.party_label()));
        }
        if self.kind.needs_warehouse() && self.warehouse.trim().is_empty() {
            return Err(InvoiceError::MissingWarehouse);
        }
        if self.lines.is_empty() {
            return Err(InvoiceError::NoLines);
        }

        let id = journal.next_id();
        let invoice_no = match self.invoice_no.trim() {
            "" => format!("{}-{:04}", self.kind.prefix(), id),
            given => given.to_string(),
        };
        let invoice = Invoice {
            id,
            kind: self.kind,
            invoice_no,
            party: self.party.trim().to_string(),
            warehouse: self.warehouse.trim().to_string(),
            date: self.date,
            pay_type: self.pay_type,
            subtotal: self.subtotal(),
            payable: self.payable(),
            paid: self.settlement.paid,
            due: self.due(),
            lines: std::mem::take(&mut self.lines),
        };
        let posted = journal.create(invoice)?;
        info!(kind = ?self.kind, invoice = %posted.invoice_no, total = posted.payable, "invoice posted");

        *self = Self::new(self.kind, self.date);
        Ok(posted)
    }
}

// ========================
// Posted Invoice
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: u32,
    pub kind: InvoiceKind,
    pub invoice_no: String,
    pub party: String,
    /// Empty for warehouse-to-warehouse screens, where the party is the warehouse
    pub warehouse: String,
    pub date: NaiveDate,
    pub pay_type: PayType,
    pub lines: Vec<LineItem>,
    pub subtotal: f64,
    pub payable: f64,
    pub paid: f64,
    pub due: f64,
}

const INVOICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("invoice_no", "Invoice No").searchable(),
    FieldSpec::text("date", "Date"),
    FieldSpec::text("party", "Party").searchable(),
    FieldSpec::text("warehouse", "Warehouse").searchable(),
    FieldSpec::text("pay_type", "Pay Type"),
    FieldSpec::number("items", "Items"),
    FieldSpec::number("payable", "Payable"),
    FieldSpec::number("paid", "Paid"),
    FieldSpec::number("due", "Due"),
];

impl Record for Invoice {
    const ENTITY: &'static str = "Invoice";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        INVOICE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "invoice_no" => self.invoice_no.clone(),
            "date" => format_date(Some(self.date)),
            "party" => self.party.clone(),
            "warehouse" => self.warehouse.clone(),
            "pay_type" => self.pay_type.label().to_string(),
            "items" => self.lines.len().to_string(),
            "payable" => format_number(self.payable),
            "paid" => format_number(self.paid),
            "due" => format_number(self.due),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;
    use crate::repository::Collection;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn line(draft: &mut InvoiceDraft, product: &str, quantity: &str, price: &str) -> Result<u32, InvoiceError> {
        draft.line = LineDraft {
            product: product.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        };
        draft.add_line()
    }

    #[test]
    fn test_add_line_validation() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Purchase, date());
        assert_eq!(line(&mut draft, "", "1", "10"), Err(InvoiceError::EmptyProduct));
        assert_eq!(line(&mut draft, "Plug", "0", "10"), Err(InvoiceError::BadQuantity));
        assert_eq!(line(&mut draft, "Plug", "2", "-5"), Err(InvoiceError::BadPrice));
        assert_eq!(line(&mut draft, "Plug", "two", "5"), Err(InvoiceError::BadQuantity));
        assert!(draft.lines().is_empty());
        // rejected input stays in the line draft
        assert_eq!(draft.line.product, "Plug");
    }

    #[test]
    fn test_settlement_arithmetic() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales, date());
        line(&mut draft, "MTS- 804 -2p3m", "2", "365").unwrap();
        line(&mut draft, "MTS- 805 -2p3m", "1", "425").unwrap();
        draft.settlement = Settlement {
            previous_due: 100.0,
            shipping: 50.0,
            less: 55.0,
            paid: 1000.0,
        };

        assert_eq!(draft.subtotal(), 1155.0);
        assert_eq!(draft.payable(), 1250.0);
        assert_eq!(draft.due(), 250.0);
    }

    #[test]
    fn test_edit_line_moves_it_back() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Purchase, date());
        let first = line(&mut draft, "Copper", "3", "12.5").unwrap();
        line(&mut draft, "Carton", "10", "4").unwrap();

        assert!(draft.edit_line(first));
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.line.quantity, "3");
        assert_eq!(draft.line.price, "12.5");

        // re-adding gets a fresh id
        assert_eq!(draft.add_line(), Ok(3));
        assert!(!draft.edit_line(99));
        assert!(draft.remove_line(2));
        assert_eq!(draft.subtotal(), 37.5);
    }

    #[test]
    fn test_default_price_follows_kind() {
        let product = &seed::products()[0];
        let mut purchase = InvoiceDraft::new(InvoiceKind::Purchase, date());
        purchase.select_product(product);
        assert_eq!(purchase.line.price, "233");

        let mut sales = InvoiceDraft::new(InvoiceKind::Sales, date());
        sales.select_product(product);
        assert_eq!(sales.line.price, "365");
    }

    #[test]
    fn test_finalize_requires_party_and_lines() {
        let mut journal = Collection::<Invoice>::new();
        let mut draft = InvoiceDraft::new(InvoiceKind::WarehouseSend, date());

        assert_eq!(draft.finalize(&mut journal), Err(InvoiceError::MissingParty("Warehouse")));
        draft.party = "Showroom".to_string();
        assert_eq!(draft.finalize(&mut journal), Err(InvoiceError::NoLines));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_finalize_posts_and_resets() {
        let mut journal = Collection::<Invoice>::new();
        let mut draft = InvoiceDraft::new(InvoiceKind::Purchase, date());
        draft.party = "H.R Matal".to_string();
        draft.warehouse = "Main Warehouse".to_string();
        draft.pay_type = PayType::BankTransfer;
        line(&mut draft, "Copper", "4", "250").unwrap();
        draft.settlement.paid = 600.0;

        let posted = draft.finalize(&mut journal).unwrap();
        assert_eq!(posted.invoice_no, "PUR-0001");
        assert_eq!(posted.due, 400.0);
        assert_eq!(posted.field("pay_type"), "Bank Transfer");
        assert_eq!(posted.field("warehouse"), "Main Warehouse");
        assert_eq!(journal.len(), 1);

        assert!(draft.lines().is_empty());
        assert_eq!(draft.party, "");
        assert_eq!(draft.warehouse, "");
        assert_eq!(draft.date, date());
    }

    #[test]
    fn test_finalize_requires_warehouse_for_trading_screens() {
        let mut journal = Collection::<Invoice>::new();
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales, date());
        draft.party = "Gazi Electric".to_string();
        line(&mut draft, "MTS- 804 -2p3m", "1", "365").unwrap();

        assert_eq!(draft.finalize(&mut journal), Err(InvoiceError::MissingWarehouse));
        assert_eq!(InvoiceError::MissingWarehouse.to_string(), "Warehouse is required");
        assert!(journal.is_empty());
        assert_eq!(draft.lines().len(), 1);

        draft.warehouse = " Showroom ".to_string();
        let posted = draft.finalize(&mut journal).unwrap();
        assert_eq!(posted.warehouse, "Showroom");
        assert!(posted.matches("showroom"));
    }

    #[test]
    fn test_warehouse_screens_need_no_second_warehouse() {
        let kinds: Vec<InvoiceKind> = InvoiceKind::ALL.into_iter().filter(|k| k.needs_warehouse()).collect();
        assert_eq!(
            kinds,
            vec![InvoiceKind::Purchase, InvoiceKind::PurchaseReturn, InvoiceKind::Sales, InvoiceKind::SalesReturn]
        );

        let mut journal = Collection::<Invoice>::new();
        let mut draft = InvoiceDraft::new(InvoiceKind::Adjustment, date());
        draft.party = "Showroom".to_string();
        line(&mut draft, "Copper", "1", "10").unwrap();
        assert_eq!(draft.finalize(&mut journal).map(|i| i.warehouse), Ok(String::new()));
    }

    #[test]
    fn test_pay_type_labels() {
        assert_eq!(PayType::from_label("Card"), Some(PayType::Card));
        assert_eq!(PayType::from_label("Cheque"), None);
    }
}

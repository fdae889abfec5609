//! Sample Data
//!
//! Every screen starts from one of these collections. Ids are sequential
//! from 1 so the `len + 1` allocator continues the sequence.

use chrono::NaiveDate;

use super::accounting::{AccountGroup, AccountHead};
use super::customer::{Customer, Message};
use super::ledger::{Cheque, LedgerEntry, PaymentReceipt};
use super::production::{Consumption, ProductionRun, RecipeMaterial};
use super::sales::{Order, OrderItem};
use super::security::User;
use super::setup::{
    Bank, Branch, Brand, Commission, Designation, Employee, Product, ProductCategory, Size, Supplier, Unit,
    Warehouse, CATEGORY_NAMES, UNIT_NAMES,
};

fn numbered<T>(items: impl IntoIterator<Item = T>) -> impl Iterator<Item = (u32, T)> {
    (1u32..).zip(items)
}

pub fn banks() -> Vec<Bank> {
    numbered([
        "Uttara Bank Ltd",
        "United Commercial Bank Ltd",
        "Islami Bank Ltd",
        "Dutch Bangla Bank",
        "Brac Bank",
        "Janata Bank Ltd",
    ])
    .map(|(id, name)| Bank::new(id, name, if id == 1 { "O" } else { "" }))
    .collect()
}

pub fn branches() -> Vec<Branch> {
    numbered([
        ("M/S Sharif Traders", "Uttara Bank Ltd", "Nawabpur, Dhaka", "CC-63000031147"),
        ("M/S Sharif Traders", "United Commercial Bank Ltd", "Nawabpur, Dhaka", "282101000005392"),
        ("A To Z", "Dutch Bangla Bank", "Nawabpur, Dhaka", "104110021818"),
        ("M/S Sharif Traders(47114)", "Islami Bank Ltd", "Nawabpur, Dhaka", "20501180100547114"),
        ("M/S Sharif Traders(58071002)", "Brac Bank", "Nawabpur, Dhaka", "1502200258071002"),
        ("M/S Sharif Traders(2806)", "Uttara Bank Ltd", "Nawabpur,Dhaka", "12200212806"),
        ("M/S Sharif Traders(8929)", "Janata Bank Ltd", "Nawabpur,Dhaka", "53910110189299"),
        ("Sharif Electrical Industrial Co.", "Uttara Bank Ltd", "Nawabpur Dhaka", "12200214610"),
        ("Riad International", "Uttara Bank Ltd", "Nawabpur,Dhaka", "12200214222"),
        ("Yeasmeen Khaton", "Uttara Bank Ltd", "Nawabpur, Dhaka", "12100214083"),
    ])
    .map(|(id, (branch, bank, address, account))| Branch::new(id, branch, bank, address, account))
    .collect()
}

pub fn brands() -> Vec<Brand> {
    numbered(["Many", "High Power(MTS)", "High Power(Battery)", "Sunca", "No Brand", "Power Tech", "Sample"])
        .map(|(id, name)| Brand::new(id, name))
        .collect()
}

pub fn categories() -> Vec<ProductCategory> {
    numbered(CATEGORY_NAMES)
        .map(|(id, name)| ProductCategory { id, name: name.to_string() })
        .collect()
}

pub fn units() -> Vec<Unit> {
    numbered(UNIT_NAMES)
        .map(|(id, name)| Unit { id, name: name.to_string() })
        .collect()
}

pub fn sizes() -> Vec<Size> {
    numbered(["2p", "3p", "Others"])
        .map(|(id, name)| Size {
            id,
            size_name: name.to_string(),
            remarks: String::new(),
        })
        .collect()
}

pub fn warehouses() -> Vec<Warehouse> {
    numbered([
        ("Shilpibai Market", "Nawabpur", "01313447764"),
        ("Showroom", "Rohoi Amin Electric Market", "01721957733"),
        ("Rep less", "Nawabpur", "0"),
        ("Barodi", "Narayanganj", "0"),
        ("Adjusted Warehouse", "Valtual", "01313447758"),
    ])
    .map(|(id, (name, address, mobile))| Warehouse::new(id, name, address, mobile))
    .collect()
}

pub fn designations() -> Vec<Designation> {
    numbered([
        ("Driver", "Operations", (2025, 1, 10)),
        ("Delivery Man", "Logistics", (2025, 1, 15)),
        ("Chemist", "R&D", (2024, 11, 20)),
        ("Production Worker", "Manufacturing", (2024, 12, 5)),
        ("Technician", "Maintenance", (2024, 10, 30)),
        ("Marketing & Billing Officer", "Marketing", (2025, 2, 1)),
        ("Delivery Supervisor", "Logistics", (2025, 2, 10)),
        ("Delivery In Charge", "Logistics", (2025, 1, 25)),
        ("Factory Manager", "Manufacturing", (2024, 9, 15)),
        ("Director", "Management", (2024, 8, 1)),
    ])
    .map(|(id, (name, department, (y, m, d)))| {
        Designation::new(id, name, department, NaiveDate::from_ymd_opt(y, m, d))
    })
    .collect()
}

pub fn employees() -> Vec<Employee> {
    numbered([
        ("Deshi Systems Limited", "Managing Director", "DSL", "01710527492"),
        ("Saiful islam", "Showroom Maintenance", "B-Baria", "01756676799"),
        ("Minto Mia", "Delivery Man", "B-Baria", "01966882874"),
        ("Showroom Nawabpur", "Showroom In charge", "Nawabpur, Dhaka", "01677211978"),
        ("Md Alamgir Kabir", "Genaral Manager", "Jatrabari,Dhaka", "01313447756"),
        ("Ekhtear Uddin Milton", "Showroom In charge", "Gulpibag,Dhaka", "01710957249"),
        ("M/S SHARIF TRADERS", "Showroom Maintenance", "16/2, Nawabpur, Dhaka", "01721957733"),
        ("Rabby", "Billing & collection Officer", "Matuail,Dhaka", "01313447759"),
        ("Parvez", "Stock Officer", "Narayangang", "01313447764"),
        ("Mahabub Alam Badhon", "Marketing & Billing Officer", "Demra,Dhaka", "01313447765"),
    ])
    .map(|(id, (name, designation, address, contact))| Employee::new(id, name, designation, address, contact))
    .collect()
}

pub fn suppliers() -> Vec<Supplier> {
    numbered([
        ("H.R Matal", "Kiron", "Copper", "01711425529"),
        ("Hazi PVC", "", "", "01711972580"),
        ("Faruk", "", "Powder", "01818351437"),
        ("Forkan", "", "Carton", "01917038181"),
        ("Vashani", "", "Carton", "01707392550"),
        ("Abdul Batan", "", "Striker", "01960683143"),
        ("Harvest", "", "", "01677888888"),
        ("Ami Corporation", "Anub Babu", "Agra bad, Chattogram", "01766533445"),
        ("Alamgir Kabir", "", "", "01313447756"),
        ("Ali Agam", "", "", "01344556678"),
    ])
    .map(|(id, (name, contact, address, mobile))| Supplier::new(id, name, contact, address, mobile))
    .collect()
}

pub fn products() -> Vec<Product> {
    numbered([
        ("804", "MTS- 804 -2p3m", 233.0, 365.0, 305.0, 310.0),
        ("804", "MTS- 804 -3p3m", 233.0, 365.0, 305.0, 315.0),
        ("805", "MTS- 805 -2p3m", 251.0, 425.0, 325.0, 335.0),
        ("805", "MTS- 805 -3p3m", 251.0, 425.0, 325.0, 335.0),
        ("2030", "MTS- 2030 -2p4m", 365.0, 610.0, 700.0, 705.0),
        ("2030", "MTS- 2030 -3p4m", 375.0, 610.0, 700.0, 705.0),
        ("2040", "MTS- 2040 -2p4m", 435.0, 860.0, 750.0, 755.0),
        ("2040", "MTS- 2040 -3p4m", 435.0, 860.0, 750.0, 755.0),
        ("2050", "MTS- 2050 -2p4m", 465.0, 925.0, 800.0, 805.0),
        ("2050", "MTS- 2050 -3p4m", 465.0, 925.0, 800.0, 805.0),
    ])
    .map(|(id, (code, name, cost, retail, dealer, whole))| {
        Product::new(id, code, name, cost, retail, dealer, whole, "High Power(MTS)")
    })
    .collect()
}

pub fn commissions() -> Vec<Commission> {
    numbered([
        ("M/S Sharif Traders", 5000.0, 2.5),
        ("A To Z", 7500.0, 3.0),
        ("Riad International", 12000.0, 2.0),
        ("Sharif Electrical Industrial Co.", 8500.0, 2.5),
    ])
    .map(|(id, (name, total, pct))| Commission::new(id, name, "Nawabpur, Dhaka", total, pct))
    .collect()
}

pub fn customers() -> Vec<Customer> {
    numbered([
        ("Acme Corporation", "Corporate", "Dhaka", "Dhaka", "Gulshan", "01712345678", "Gulshan Avenue, Dhaka"),
        ("Globex Industries", "Corporate", "Dhaka", "Dhaka", "Banani", "01812345678", "Banani Road, Dhaka"),
        ("Monolith Partners", "Corporate", "Dhaka", "Dhaka", "Uttara", "01912345678", "Sector 4, Uttara, Dhaka"),
        ("Quick Retail", "Retail", "Dhaka", "Gazipur", "Gazipur Sadar", "01612345678", "Gazipur Sadar, Gazipur"),
        (
            "Sunshine Distributors",
            "Distributor",
            "Dhaka",
            "Narayanganj",
            "Narayanganj Sadar",
            "01512345678",
            "Narayanganj Sadar",
        ),
        ("Eastern Traders", "Wholesale", "Chattogram", "Chattogram", "Kotwali", "01812345679", "Kotwali, Chattogram"),
        ("ABC Electronics", "Retail", "Dhaka", "Dhaka", "Mirpur", "01712345680", "Mirpur-10, Dhaka"),
        ("Rahman Traders", "Wholesale", "Rajshahi", "Rajshahi", "Boalia", "01912345681", "Boalia, Rajshahi"),
        ("Star Enterprise", "Corporate", "Khulna", "Khulna", "Sonadanga", "01812345682", "Sonadanga, Khulna"),
        ("Northern Supplies", "Distributor", "Rangpur", "Rangpur", "Rangpur Sadar", "01712345683", "Rangpur Sadar"),
    ])
    .map(|(id, (name, kind, division, district, thana, mobile, address))| {
        Customer::new(id, name, kind, division, district, thana, mobile, address)
    })
    .collect()
}

pub fn account_groups() -> Vec<AccountGroup> {
    numbered([
        ("Income", "Income"),
        ("Expense", "Expense"),
        ("Asset", "Fixed Asset"),
        ("Asset", "Current Asset"),
        ("Asset", "Bank Accounts"),
        ("Liability", "Current Liabilities"),
        ("Liability", "Bank OD A/C"),
    ])
    .map(|(id, (kind, group))| AccountGroup::new(id, kind, group))
    .collect()
}

pub fn account_heads() -> Vec<AccountHead> {
    numbered([
        "Petty Cash",
        "Rent Expense",
        "Mobile Bill",
        "Tea & Snakes Exp",
        "Factory Expense",
        "Stationary Expense",
        "Transport Expense",
    ])
    .map(|(id, head)| AccountHead::new(id, "Expense", head))
    .collect()
}

pub fn users() -> Vec<User> {
    numbered([
        ("Deshi Systems Limited", "dsl@gmail.com", "01710527492", "Admin"),
        ("Nazmul", "nazmulislam217@gmail.com", "01677211978", "Admin"),
        ("Milton", "milton@gmail.com", "01710957249", "Admin"),
        ("Md Rabbi Mia", "mdrabbi106@gmail.com", "01313447759", "Admin"),
        ("Badhon", "mahabubalam0096@gmail.com", "01313447765", "Admin"),
        ("Md Parvez", "mrtohid35@gmail.com", "01313447764", "Admin"),
        ("sharif2traders@gmail.com", "sharif2traders@gmail.com", "01711056958", "Admin"),
        ("alamgirgle@gmail.com", "alamgirgle@gmail.com", "01313447756", "Admin"),
        ("abidhossain@gmail.com", "abidhossain647@gmail.com", "01627816225", "Admin"),
        ("Gift Electric-kawran Bazar", "", "01721957733", "Operator"),
    ])
    .map(|(id, (name, email, mobile, role))| User {
        role: role.to_string(),
        ..User::new(id, name, email, mobile)
    })
    .collect()
}

/// Messages already sent
pub fn messages() -> Vec<Message> {
    numbered([
        ("Regular", "Thank you for your recent purchase!", 15, "Sent"),
        ("Premium", "Exclusive offer for our premium customers!", 14, "Sent"),
        ("Corporate", "New products available for bulk orders", 13, "Failed"),
    ])
    .filter_map(|(id, (audience, text, day, status))| {
        NaiveDate::from_ymd_opt(2025, 3, day).map(|date| Message::new(id, audience, text, date, status))
    })
    .collect()
}

/// Pending web-shop orders; each holds the single line the shop sends
pub fn orders() -> Vec<Order> {
    numbered([
        ("2025000001", "Md Mehedi Hasan", "02 Matborer Pukurpar, East Kazipara", "01629359804", "25/01/2025 [22:56:59]"),
        ("2025010219", "Si Nirob", "Vill. PATAL,PO:MONGOLBARI,P.S:D...", "01601496989", "26/01/2025 [13:00:02]"),
        ("2025010220", "Si Nirob", "Vill. PATAL,PO:MONGOLBARI,P.S:D...", "01601496989", "26/01/2025 [13:07:43]"),
        ("2025010221", "Naiem Newaz", "16/ka, Tollabag, Sobhanbag, Dhanm...", "01978311202", "08/02/2025 [23:53:48]"),
        ("2025010222", "Naiem Newaz", "16/ka, Tollabag, Sobhanbag, Dhanm...", "01978311202", "08/02/2025 [23:55:37]"),
        ("2025010223", "Taibur Rahman", "sripur,bijoynagar,brahmanbaria...", "01747047490", "20/02/2025 [20:37:30]"),
    ])
    .map(|(id, (order_no, customer_name, address, mobile, order_date))| Order {
        id,
        order_no: order_no.to_string(),
        customer_name: customer_name.to_string(),
        address: address.to_string(),
        mobile: mobile.to_string(),
        order_date: order_date.to_string(),
        payment: "Cash On Delivery".to_string(),
        items: vec![OrderItem::new("MTS- 308 =3m", 1, 110)],
    })
    .collect()
}

pub fn production_runs() -> Vec<ProductionRun> {
    vec![ProductionRun::new(1, "MTS- 804 -2p/3m", 0.0, "dfd")]
}

// Screens that start empty

pub fn cheques() -> Vec<Cheque> {
    Vec::new()
}

pub fn payments() -> Vec<PaymentReceipt> {
    Vec::new()
}

pub fn ledger_entries() -> Vec<LedgerEntry> {
    Vec::new()
}

pub fn recipe_materials() -> Vec<RecipeMaterial> {
    Vec::new()
}

pub fn consumptions() -> Vec<Consumption> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn assert_sequential<R: Record>(records: &[R]) {
        let ids: Vec<u32> = records.iter().map(Record::id).collect();
        let expected: Vec<u32> = (1..=records.len() as u32).collect();
        assert_eq!(ids, expected, "{} ids", R::ENTITY);
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        assert_sequential(&banks());
        assert_sequential(&branches());
        assert_sequential(&brands());
        assert_sequential(&warehouses());
        assert_sequential(&designations());
        assert_sequential(&employees());
        assert_sequential(&suppliers());
        assert_sequential(&products());
        assert_sequential(&customers());
        assert_sequential(&users());
        assert_sequential(&messages());
        assert_sequential(&orders());
        assert_sequential(&production_runs());
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(banks().len(), 6);
        assert_eq!(branches().len(), 10);
        assert_eq!(categories().len(), 4);
        assert_eq!(units().len(), 2);
        assert_eq!(sizes().len(), 3);
        assert_eq!(commissions().len(), 4);
        assert_eq!(account_groups().len(), 7);
        assert_eq!(account_heads().len(), 7);
        assert_eq!(messages().len(), 3);
        assert_eq!(orders().len(), 6);
        assert!(cheques().is_empty());
    }

    #[test]
    fn test_first_bank_is_uttara() {
        let first = &banks()[0];
        assert_eq!(first.name, "Uttara Bank Ltd");
        assert_eq!(first.note, "O");
    }
}

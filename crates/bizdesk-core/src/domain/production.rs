//! Production Records
//!
//! Materials a product is made from, finished output, and raw material
//! taken out of stock by hand.

use super::entity::{Editable, Record};
use super::field::{format_number, Draft, FieldKind, FieldSpec};

pub const MATERIAL_TYPES: &[&str] = &["Raw Material", "Component", "Packaging"];

pub const MATERIALS: &[&str] = &["Aluminum", "Steel", "Plastic", "Glass", "Cardboard"];

pub const PRODUCTION_OUTPUTS: &[&str] = &["MTS- 804 -2p/3m", "MTS- 805 -4p/5m", "MTS- 806 -3p/4m"];

pub const CONSUMPTION_TYPES: &[&str] =
    &["Raw Material", "Finished Product", "Packaging Material", "Machinery Parts", "Consumables"];

// ========================
// Recipe
// ========================

/// One material line of a product recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMaterial {
    pub id: u32,
    pub material_type: String,
    pub material: String,
    pub quantity: f64,
    pub cost_price: f64,
}

impl RecipeMaterial {
    pub fn line_cost(&self) -> f64 {
        self.quantity * self.cost_price
    }
}

const RECIPE_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("material_type", "Prod Type", MATERIAL_TYPES).required().searchable(),
    FieldSpec::choice("material", "Product", MATERIALS).required().searchable(),
    FieldSpec::number("quantity", "Quantity").required().positive(),
    FieldSpec::number("cost_price", "Cost Price"),
    FieldSpec::number("line_cost", "Total").computed(),
];

impl Record for RecipeMaterial {
    const ENTITY: &'static str = "Material";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        RECIPE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "material_type" => self.material_type.clone(),
            "material" => self.material.clone(),
            "quantity" => format_number(self.quantity),
            "cost_price" => format_number(self.cost_price),
            "line_cost" => format_number(self.line_cost()),
            _ => String::new(),
        }
    }
}

impl Editable for RecipeMaterial {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            material_type: draft.text("material_type"),
            material: draft.text("material"),
            quantity: draft.number("quantity"),
            cost_price: draft.number("cost_price"),
        }
    }
}

// ========================
// Production
// ========================

/// Finished goods produced in one run
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRun {
    pub id: u32,
    pub product: String,
    pub quantity: f64,
    pub remarks: String,
}

impl ProductionRun {
    pub fn new(id: u32, product: &str, quantity: f64, remarks: &str) -> Self {
        Self {
            id,
            product: product.to_string(),
            quantity,
            remarks: remarks.to_string(),
        }
    }
}

const PRODUCTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("product", "Product", PRODUCTION_OUTPUTS).required().searchable(),
    FieldSpec::number("quantity", "Total Qty"),
    FieldSpec::new("remarks", "Remarks", FieldKind::LongText).searchable(),
];

impl Record for ProductionRun {
    const ENTITY: &'static str = "Production";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        PRODUCTION_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "product" => self.product.clone(),
            "quantity" => format_number(self.quantity),
            "remarks" => self.remarks.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for ProductionRun {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            product: draft.text("product"),
            quantity: draft.number("quantity"),
            remarks: draft.text("remarks"),
        }
    }
}

// ========================
// Manual Consumption
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Consumption {
    pub id: u32,
    pub product_type: String,
    pub product: String,
    pub raw_quantity: f64,
}

const CONSUMPTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("product_type", "Product Type", CONSUMPTION_TYPES).required().searchable(),
    FieldSpec::text("product", "Product Name").required().searchable(),
    FieldSpec::number("raw_quantity", "Raw Qty").required().positive(),
];

impl Record for Consumption {
    const ENTITY: &'static str = "Consumption";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        CONSUMPTION_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "product_type" => self.product_type.clone(),
            "product" => self.product.clone(),
            "raw_quantity" => format_number(self.raw_quantity),
            _ => String::new(),
        }
    }
}

impl Editable for Consumption {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            product_type: draft.text("product_type"),
            product: draft.text("product"),
            raw_quantity: draft.number("raw_quantity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_line_cost() {
        let mut draft = Draft::empty(RecipeMaterial::fields());
        draft.set("material_type", "Raw Material");
        draft.set("material", "Aluminum");
        draft.set("quantity", "2.5");
        draft.set("cost_price", "80");
        assert!(draft.validate(RecipeMaterial::fields()).is_empty());

        let material = RecipeMaterial::from_draft(1, &draft);
        assert_eq!(material.field("line_cost"), "200");
        assert_eq!(RecipeMaterial::columns().len(), 5);
    }

    #[test]
    fn test_consumption_rejects_zero_quantity() {
        let mut draft = Draft::empty(Consumption::fields());
        draft.set("product_type", "Consumables");
        draft.set("product", "Gloves");
        draft.set("raw_quantity", "0");

        let errors = draft.validate(Consumption::fields());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "raw_quantity");
    }

    #[test]
    fn test_production_allows_zero_quantity() {
        let mut draft = Draft::empty(ProductionRun::fields());
        draft.set("product", "MTS- 805 -4p/5m");
        assert!(draft.validate(ProductionRun::fields()).is_empty());
        assert_eq!(ProductionRun::from_draft(2, &draft).quantity, 0.0);
    }
}

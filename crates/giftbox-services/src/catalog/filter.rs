//! Airtable `filterByFormula` construction.

use giftbox_core::ComboKey;

/// Selection of catalog rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub product_sku: String,
    pub combo_key: Option<ComboKey>,
    pub ready_only: bool,
}

impl CatalogFilter {
    /// Every ready row of a product. Used to build catalog snapshots.
    pub fn all_ready(product_sku: impl Into<String>) -> Self {
        Self {
            product_sku: product_sku.into(),
            combo_key: None,
            ready_only: true,
        }
    }

    /// The ready row(s) of one combination.
    pub fn for_combo(product_sku: impl Into<String>, combo_key: ComboKey) -> Self {
        Self {
            product_sku: product_sku.into(),
            combo_key: Some(combo_key),
            ready_only: true,
        }
    }

    /// Render as an Airtable formula, e.g.
    /// `AND({Product_SKU}='TC-VEG-009', {Combo_Key}='pure-black_gold_black', {Status}='Ready')`.
    pub fn to_formula(&self) -> String {
        let mut clauses = vec![format!(
            "{{Product_SKU}}='{}'",
            escape_formula_value(&self.product_sku)
        )];
        if let Some(key) = &self.combo_key {
            clauses.push(format!(
                "{{Combo_Key}}='{}'",
                escape_formula_value(key.as_str())
            ));
        }
        if self.ready_only {
            clauses.push("{Status}='Ready'".to_string());
        }
        format!("AND({})", clauses.join(", "))
    }
}

/// Escape a value for use inside a single-quoted formula string.
pub fn escape_formula_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

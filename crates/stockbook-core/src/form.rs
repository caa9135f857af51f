//! Data-entry form controller
//!
//! Every handler takes the current form plus a read-only snapshot and
//! returns the next form. Dependent state only flows forward:
//! mode → category → product → stock badge.

use std::collections::BTreeSet;

use crate::constants::{
    AMOUNT_LABEL, CATEGORY_EMPTY, CATEGORY_LOADING, CATEGORY_PROMPT, EXPENSE_CATEGORY, PRODUCT_LABEL, QTY_LABEL,
    REASON_LABEL, SUBMIT_BUSY_LABEL, SUBMIT_IDLE_LABEL,
};
use crate::error::SubmitBlocked;
use crate::snapshot::Snapshot;
use crate::stock::StockBadge;
use crate::transaction::{SaleType, TransactionDraft};

/// Contents of the category select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryOptions {
    /// No snapshot has arrived yet
    #[default]
    Loading,
    /// The sheet has no categories; a disabled placeholder is shown
    Empty,
    /// Sorted, unique names
    Available(Vec<String>),
}

impl CategoryOptions {
    pub fn names(&self) -> &[String] {
        match self {
            CategoryOptions::Available(names) => names,
            _ => &[],
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CategoryOptions::Available(_))
    }

    /// Text of the first, value-less option
    pub fn placeholder(&self) -> &'static str {
        match self {
            CategoryOptions::Loading => CATEGORY_LOADING,
            CategoryOptions::Empty => CATEGORY_EMPTY,
            CategoryOptions::Available(_) => CATEGORY_PROMPT,
        }
    }
}

/// Category options for a snapshot: sorted ascending, each name once
pub fn render_category_options(snapshot: &Snapshot) -> CategoryOptions {
    let names: BTreeSet<&str> = snapshot
        .categories
        .keys()
        .map(String::as_str)
        .filter(|name| !name.trim().is_empty())
        .collect();

    if names.is_empty() {
        CategoryOptions::Empty
    } else {
        CategoryOptions::Available(names.into_iter().map(str::to_string).collect())
    }
}

/// Which fields are visible and mandatory in a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// Category and product selects
    pub show_catalog: bool,
    /// Free-text expense reason
    pub show_reason: bool,
    pub catalog_required: bool,
    pub reason_required: bool,
    pub product_label: &'static str,
    pub qty_label: String,
}

impl FieldLayout {
    pub fn for_mode(mode: SaleType, currency: &str) -> Self {
        match mode {
            SaleType::Sale => Self {
                show_catalog: true,
                show_reason: false,
                catalog_required: true,
                reason_required: false,
                product_label: PRODUCT_LABEL,
                qty_label: QTY_LABEL.to_string(),
            },
            SaleType::Expense => Self {
                show_catalog: false,
                show_reason: true,
                catalog_required: false,
                reason_required: true,
                product_label: REASON_LABEL,
                qty_label: format!("{AMOUNT_LABEL} ({currency})"),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    ModeChanged(SaleType),
    CategoryChanged(String),
    ProductChanged(String),
    ReasonEdited(String),
    QtyEdited(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub mode: SaleType,
    pub category: String,
    pub product: String,
    pub reason: String,
    /// Quantity, or amount in expense mode. Kept as typed.
    pub qty: String,
    pub category_options: CategoryOptions,
    pub product_options: Vec<String>,
    pub product_enabled: bool,
    /// `None` hides the badge
    pub badge: Option<StockBadge>,
    /// A write is in flight; the submit button is disabled
    pub submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: FormEvent, snapshot: &Snapshot) -> Self {
        match event {
            FormEvent::ModeChanged(mode) => self.on_mode_changed(mode, snapshot),
            FormEvent::CategoryChanged(category) => self.on_category_changed(category, snapshot),
            FormEvent::ProductChanged(product) => self.on_product_changed(product, snapshot),
            FormEvent::ReasonEdited(reason) => Self { reason, ..self },
            FormEvent::QtyEdited(qty) => Self { qty, ..self },
        }
    }

    /// Switch between sale and expense entry. Re-selecting the current mode changes nothing.
    pub fn on_mode_changed(mut self, mode: SaleType, snapshot: &Snapshot) -> Self {
        if mode == self.mode {
            return self;
        }
        self.mode = mode;
        self.run_mode_cascade(snapshot);
        self
    }

    pub fn on_category_changed(mut self, category: String, snapshot: &Snapshot) -> Self {
        self.product_options = snapshot.products_for(&category).to_vec();
        self.product_enabled = !category.is_empty();
        self.category = category;
        self.product.clear();
        self.badge = None;
        self
    }

    pub fn on_product_changed(mut self, product: String, snapshot: &Snapshot) -> Self {
        self.badge = StockBadge::for_product(snapshot, &product);
        self.product = product;
        self
    }

    /// Re-derive options and badge after the snapshot was replaced.
    /// Selections that still exist survive; anything downstream of a vanished one is cleared.
    pub fn resync(mut self, snapshot: &Snapshot) -> Self {
        // Expense mode hides the catalog; it is rebuilt when switching back
        if self.mode.is_expense() {
            return self;
        }

        self.category_options = render_category_options(snapshot);
        if !self.category_options.names().contains(&self.category) {
            self.clear_catalog_selection();
            return self;
        }

        self.product_options = snapshot.products_for(&self.category).to_vec();
        if !self.product_options.contains(&self.product) {
            self.product.clear();
        }
        self.badge = StockBadge::for_product(snapshot, &self.product);
        self
    }

    pub fn layout(&self, currency: &str) -> FieldLayout {
        FieldLayout::for_mode(self.mode, currency)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_IDLE_LABEL
        }
    }

    /// Build the draft and mark the form busy. Refused while a write is in flight.
    pub fn begin_submit(&mut self, staff: Option<&str>) -> Result<TransactionDraft, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let draft = self.draft(staff)?;
        self.submitting = true;
        Ok(draft)
    }

    /// Settle an in-flight submit. Success clears the form; failure keeps every field for a retry.
    pub fn finish_submit(mut self, succeeded: bool, snapshot: &Snapshot) -> Self {
        if succeeded {
            return self.cleared(snapshot);
        }
        self.submitting = false;
        self
    }

    /// Blank form in the default mode, with the mode cascade re-applied
    pub fn cleared(&self, snapshot: &Snapshot) -> Self {
        let mut form = Self {
            category_options: self.category_options.clone(),
            ..Self::new()
        };
        form.run_mode_cascade(snapshot);
        form
    }

    fn draft(&self, staff: Option<&str>) -> Result<TransactionDraft, SubmitBlocked> {
        let (category, product) = match self.mode {
            SaleType::Sale => {
                require(&self.category, "Category")?;
                require(&self.product, "Product")?;
                (self.category.clone(), self.product.clone())
            }
            SaleType::Expense => {
                require(&self.reason, "Reason")?;
                (EXPENSE_CATEGORY.to_string(), self.reason.clone())
            }
        };
        require(&self.qty, if self.mode.is_expense() { "Amount" } else { "Quantity" })?;

        Ok(TransactionDraft {
            sale_type: self.mode,
            category,
            product,
            qty: self.qty.clone(),
            staff: staff.map(str::to_string),
        })
    }

    fn run_mode_cascade(&mut self, snapshot: &Snapshot) {
        self.badge = None;
        if !self.mode.is_expense() && snapshot.is_loaded() {
            self.category_options = render_category_options(snapshot);
            self.clear_catalog_selection();
        }
    }

    fn clear_catalog_selection(&mut self) {
        self.category.clear();
        self.product.clear();
        self.product_options.clear();
        self.product_enabled = false;
        self.badge = None;
    }
}

/// Same rule as an HTML `required` attribute: empty is missing
fn require(value: &str, field: &'static str) -> Result<(), SubmitBlocked> {
    if value.is_empty() {
        Err(SubmitBlocked::MissingField(field))
    } else {
        Ok(())
    }
}

use crate::tax::{split_line_tax, LineItem};
use log::debug;
use serde::{Deserialize, Serialize};

/// Transient input for totals computation. Built by a document screen
/// (invoice, bill, quotation, credit note, ...) and consumed once by
/// [`document_totals`]; it is not a long-lived entity in this core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub items: Vec<LineItem>,

    /// State associated with the transaction. Empty means intra-state by
    /// policy, not by absence-of-data semantics.
    #[serde(default)]
    pub place_of_supply: String,

    /// The seller's registered state, a single constant per deployment.
    pub company_state: String,

    /// Taxed at 0%.
    #[serde(default, deserialize_with = "crate::records::lenient_f64")]
    pub shipping_charge: f64,
}

/// Document-level GST breakdown. Either `igst` is populated and
/// `cgst`/`sgst` are zero, or the other way around; `cgst == sgst` always
/// when intra-state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub cgst: f64,
    pub sgst: f64,
    pub igst: f64,
}

impl TaxBreakdown {
    pub fn total(&self) -> f64 {
        self.cgst + self.sgst + self.igst
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: f64,
    pub tax: TaxBreakdown,
    pub total_tax: f64,
    pub shipping: f64,
    /// Always `subtotal + total_tax + shipping`, never computed independently.
    pub grand_total: f64,
}

/// Compares the place of supply against the company's registered state,
/// case-insensitively and ignoring surrounding whitespace. An empty place
/// of supply is intra-state by policy.
pub fn is_inter_state(place_of_supply: &str, company_state: &str) -> bool {
    let place = place_of_supply.trim();
    if place.is_empty() {
        return false;
    }
    !place.eq_ignore_ascii_case(company_state.trim())
}

/// Folds every line item through the tax split and sums the document.
///
/// The inter-state decision is made once per document, not per line. Pure
/// and cache-free: callers must re-invoke whenever any line item, the
/// shipping charge, or the place of supply changes. An empty item list
/// yields all-zero totals and `grand_total == shipping`.
pub fn document_totals(doc: &Document) -> DocumentTotals {
    let inter_state = is_inter_state(&doc.place_of_supply, &doc.company_state);

    let mut subtotal = 0.0;
    let mut tax = TaxBreakdown::default();

    for item in &doc.items {
        let line = split_line_tax(item, inter_state);
        subtotal += line.taxable_amount;
        tax.cgst += line.cgst;
        tax.sgst += line.sgst;
        tax.igst += line.igst;
    }

    let total_tax = tax.total();
    let grand_total = subtotal + total_tax + doc.shipping_charge;

    debug!(
        "Document totals: {} items, inter_state={}, subtotal={:.2}, tax={:.2}, grand={:.2}",
        doc.items.len(),
        inter_state,
        subtotal,
        total_tax,
        grand_total
    );

    DocumentTotals {
        subtotal,
        tax,
        total_tax,
        shipping: doc.shipping_charge,
        grand_total,
    }
}

//! # GST Invoice Core
//!
//! The financial computation core of a GST-compliant invoicing application
//! for an Indian small business. Everything here is a pure, synchronous
//! function over in-memory values; persistence, forms, and print/PDF
//! rendering are external collaborators that feed inputs in and consume
//! computed values out.
//!
//! ## Core Concepts
//!
//! - **Tax split**: per-line GST divides into equal CGST/SGST halves for
//!   intra-state supply, or full IGST for inter-state supply
//! - **Document totals**: subtotal, tax breakdown, shipping, and grand
//!   total folded from line items, with the inter-state decision made once
//!   per document
//! - **Indian-locale formatting**: Lakh/Crore digit grouping and
//!   amount-in-words for statutory documents
//! - **Profit distribution**: per-partner monthly shares resolved from
//!   explicit hand-entered overrides with a ratio-based fallback
//! - **Period filtering**: `Mon'YY` labels classified against calendar
//!   years, Indian financial years (Apr–Mar), and quarters, with "today"
//!   injected explicitly
//!
//! ## Example
//!
//! ```rust
//! use gst_invoice_core::{document_totals, Document, LineItem};
//!
//! let doc = Document {
//!     items: vec![
//!         LineItem::new(10.0, 100.0, 18.0),
//!         LineItem::new(5.0, 50.0, 0.0),
//!     ],
//!     place_of_supply: "Haryana".to_string(),
//!     company_state: "Haryana".to_string(),
//!     shipping_charge: 50.0,
//! };
//!
//! let totals = document_totals(&doc);
//! assert_eq!(totals.grand_total, 1480.0);
//! assert_eq!(totals.tax.cgst, totals.tax.sgst);
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod partner;
pub mod period;
pub mod records;
pub mod report;
pub mod tax;

pub use document::{document_totals, is_inter_state, Document, DocumentTotals, TaxBreakdown};
pub use error::{GstCoreError, Result};
pub use format::{amount_in_words, display_amount, format_currency, group_indian};
pub use partner::{resolve_share, share_key};
pub use period::{parse_period, ParsedPeriod, ReportRange, MONTH_ABBREVS};
pub use records::{
    monthly_summaries_from_json, partners_from_json, MonthlySummary, Partner, PartnerType,
};
pub use report::{
    build_report, distribution_grid, filter_summaries, DistributionRow, PartnerTotal,
    ProfitReport, ReportTotals,
};
pub use tax::{split_line_tax, LineItem, LineTax};

use chrono::Utc;

/// Convenience wrapper that anchors the report window on the wall clock.
/// Everything below this takes `today` explicitly, so tests never need to
/// mock time.
pub fn build_report_today(
    summaries: &[MonthlySummary],
    range: &ReportRange,
    partners: &[Partner],
) -> ProfitReport {
    report::build_report(summaries, range, partners, Utc::now().date_naive())
}

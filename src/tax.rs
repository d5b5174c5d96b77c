use serde::{Deserialize, Serialize};

/// A single document line as entered on an invoice/bill/quotation form.
///
/// Numeric fields are lenient on deserialization: `null`, a numeric string,
/// or an absent field all coerce to `0.0`. Derived amounts are never stored
/// here; they are recomputed from `quantity`/`rate`/`gst_rate` on every read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "crate::records::lenient_f64")]
    pub quantity: f64,

    /// Currency per unit.
    #[serde(default, deserialize_with = "crate::records::lenient_f64")]
    pub rate: f64,

    /// GST percentage (0–28 in practice, not clamped).
    #[serde(default, deserialize_with = "crate::records::lenient_f64")]
    pub gst_rate: f64,
}

impl LineItem {
    pub fn new(quantity: f64, rate: f64, gst_rate: f64) -> Self {
        Self {
            quantity,
            rate,
            gst_rate,
        }
    }

    pub fn taxable_amount(&self) -> f64 {
        self.quantity * self.rate
    }

    pub fn gst_amount(&self) -> f64 {
        self.taxable_amount() * self.gst_rate / 100.0
    }
}

/// Per-line tax computation result. Exactly one of `igst` / (`cgst`,`sgst`)
/// is nonzero, matching the supply-location split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineTax {
    pub taxable_amount: f64,
    pub gst_amount: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub igst: f64,
}

/// Computes the taxable amount and GST split for one line item.
///
/// Inter-state supply attracts IGST in full; intra-state supply splits the
/// GST amount into equal CGST and SGST halves. No currency rounding happens
/// here; amounts accumulate in full precision and rounding is left to the
/// formatting layer. Negative quantities or rates propagate as negative
/// amounts; validation belongs to the form layer, not this function.
pub fn split_line_tax(item: &LineItem, inter_state: bool) -> LineTax {
    let taxable_amount = item.taxable_amount();
    let gst_amount = item.gst_amount();

    let (cgst, sgst, igst) = if inter_state {
        (0.0, 0.0, gst_amount)
    } else {
        (gst_amount / 2.0, gst_amount / 2.0, 0.0)
    };

    LineTax {
        taxable_amount,
        gst_amount,
        cgst,
        sgst,
        igst,
    }
}

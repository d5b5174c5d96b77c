use crate::partner::resolve_share;
use crate::period::ReportRange;
use crate::records::{MonthlySummary, Partner};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Grand totals over a filtered set of monthly summaries. Plain summation;
/// `net_profit` here is the sum of stored monthly values, not re-derived
/// from gross profit and fixed cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub quantity: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    pub total_fix_cost: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerTotal {
    pub name: String,
    /// Sum of per-month resolved shares over the filtered window. Not
    /// `net_profit total × ratio`: explicit monthly overrides can make the
    /// two diverge, and that divergence is legitimate.
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitReport {
    pub summaries: Vec<MonthlySummary>,
    pub totals: ReportTotals,
    pub partner_totals: Vec<PartnerTotal>,
}

/// One period row of the distribution grid: each partner's resolved share
/// of that month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionRow {
    pub period: String,
    pub net_profit: f64,
    pub shares: Vec<PartnerTotal>,
}

/// Narrows the loaded summaries to the selected window.
pub fn filter_summaries<'a>(
    summaries: &'a [MonthlySummary],
    range: &ReportRange,
    today: NaiveDate,
) -> Vec<&'a MonthlySummary> {
    summaries
        .iter()
        .filter(|s| range.contains(&s.period, today))
        .collect()
}

fn sum_totals(filtered: &[&MonthlySummary]) -> ReportTotals {
    let mut totals = ReportTotals::default();
    for summary in filtered {
        totals.quantity += summary.quantity;
        totals.revenue += summary.revenue;
        totals.gross_profit += summary.gross_profit;
        totals.total_fix_cost += summary.total_fix_cost;
        totals.net_profit += summary.net_profit;
    }
    totals
}

/// Builds the headline investor report for one window: the filtered
/// summaries, their grand totals, and every partner's accumulated share.
pub fn build_report(
    summaries: &[MonthlySummary],
    range: &ReportRange,
    partners: &[Partner],
    today: NaiveDate,
) -> ProfitReport {
    let filtered = filter_summaries(summaries, range, today);

    info!(
        "Building profit report over {:?}: {} of {} periods selected",
        range,
        filtered.len(),
        summaries.len()
    );

    let totals = sum_totals(&filtered);

    let partner_totals = partners
        .iter()
        .map(|partner| {
            let share = filtered
                .iter()
                .map(|summary| resolve_share(partner, summary))
                .sum();
            debug!("Partner {} accumulated share {:.2}", partner.name, share);
            PartnerTotal {
                name: partner.name.clone(),
                share,
            }
        })
        .collect();

    ProfitReport {
        summaries: filtered.into_iter().cloned().collect(),
        totals,
        partner_totals,
    }
}

/// Month-by-month distribution view. Independently selectable from the
/// headline report's window; both are pure functions over their inputs, so
/// nothing is shared between the two filters.
pub fn distribution_grid(
    summaries: &[MonthlySummary],
    range: &ReportRange,
    partners: &[Partner],
    today: NaiveDate,
) -> Vec<DistributionRow> {
    filter_summaries(summaries, range, today)
        .into_iter()
        .map(|summary| DistributionRow {
            period: summary.period.clone(),
            net_profit: summary.net_profit,
            shares: partners
                .iter()
                .map(|partner| PartnerTotal {
                    name: partner.name.clone(),
                    share: resolve_share(partner, summary),
                })
                .collect(),
        })
        .collect()
}

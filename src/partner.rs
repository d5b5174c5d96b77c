use crate::records::{MonthlySummary, Partner};

/// Normalized lookup aliases for names whose first token differs from the
/// key used in historical ledgers (honorifics typed without a space, old
/// spellings).
const SHARE_KEY_ALIASES: [(&str, &str); 2] = [("sunilji", "sunil"), ("jeetu", "jitender")];

/// Derives the `partner_shares` lookup key from a partner's display name:
/// the lower-cased first whitespace token, routed through a small alias
/// table. `"Sunil Ji"` and `"sunilji"` both key as `"sunil"`.
pub fn share_key(name: &str) -> String {
    let first = name
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    for (alias, canonical) in SHARE_KEY_ALIASES {
        if first == alias {
            return canonical.to_string();
        }
    }
    first
}

/// Resolves one partner's monetary share of a month's net profit.
///
/// A nonzero explicit amount stored under the partner's share key wins
/// verbatim; historical months carry hand-entered, possibly-adjusted values
/// that may diverge from a pure ratio split. A zero or absent entry falls
/// back to `net_profit × ratio`.
///
/// A stored explicit zero is indistinguishable from an absent entry and
/// takes the ratio fallback; a partner legitimately owed ₹0 in a month
/// cannot be represented. Malformed partner data (missing ratio and no
/// explicit amount) resolves to 0.0 rather than erroring, so additive
/// report screens stay renderable under partial data.
pub fn resolve_share(partner: &Partner, summary: &MonthlySummary) -> f64 {
    let key = share_key(&partner.name);

    if let Some(&explicit) = summary.partner_shares.get(&key) {
        if explicit != 0.0 {
            return explicit;
        }
    }

    summary.net_profit * partner.ratio
}

//! Analytics series behind the dashboard and analytics pages.
//!
//! The monthly series is the source of truth: the headline KPIs are
//! computed from it rather than stored alongside it, so the numbers on the
//! page always agree with the table below them.

use rust_decimal::Decimal;

use overland_core::{Currency, Money};

/// One month of sales history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: &'static str,
    /// Revenue for the month, in whole euro.
    pub revenue: i64,
    pub orders: u32,
    pub new_customers: u32,
}

/// Revenue share of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryShare {
    pub name: &'static str,
    pub percent: u32,
}

/// A best-selling part over the last month.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSeller {
    pub name: &'static str,
    pub units: u32,
    pub revenue: Money,
}

/// Where visitors came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficSource {
    pub source: &'static str,
    pub visitors: u32,
    pub percent: u32,
}

/// The computed headline figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub revenue: Money,
    pub orders: u32,
    pub new_customers: u32,
    /// Average order value across the whole series.
    pub average_order: Money,
}

const MONTHLY: [MonthlySales; 12] = [
    MonthlySales { month: "Jan", revenue: 32_000, orders: 156, new_customers: 89 },
    MonthlySales { month: "Feb", revenue: 38_000, orders: 189, new_customers: 102 },
    MonthlySales { month: "Mar", revenue: 42_000, orders: 198, new_customers: 118 },
    MonthlySales { month: "Apr", revenue: 45_000, orders: 210, new_customers: 134 },
    MonthlySales { month: "May", revenue: 49_000, orders: 234, new_customers: 145 },
    MonthlySales { month: "Jun", revenue: 52_000, orders: 245, new_customers: 156 },
    MonthlySales { month: "Jul", revenue: 55_000, orders: 267, new_customers: 167 },
    MonthlySales { month: "Aug", revenue: 58_000, orders: 289, new_customers: 178 },
    MonthlySales { month: "Sep", revenue: 61_000, orders: 301, new_customers: 189 },
    MonthlySales { month: "Oct", revenue: 64_000, orders: 324, new_customers: 201 },
    MonthlySales { month: "Nov", revenue: 67_000, orders: 342, new_customers: 215 },
    MonthlySales { month: "Dec", revenue: 71_000, orders: 365, new_customers: 234 },
];

const CATEGORY_SHARE: [CategoryShare; 5] = [
    CategoryShare { name: "Engine", percent: 35 },
    CategoryShare { name: "Suspension", percent: 25 },
    CategoryShare { name: "Brakes", percent: 20 },
    CategoryShare { name: "Body & Exterior", percent: 12 },
    CategoryShare { name: "Lighting", percent: 8 },
];

const TRAFFIC: [TrafficSource; 5] = [
    TrafficSource { source: "Google Search", visitors: 12_500, percent: 45 },
    TrafficSource { source: "Direct", visitors: 6_900, percent: 25 },
    TrafficSource { source: "Social Media", visitors: 4_200, percent: 15 },
    TrafficSource { source: "Email", visitors: 2_800, percent: 10 },
    TrafficSource { source: "Referrals", visitors: 1_400, percent: 5 },
];

/// The last twelve months of sales, oldest first.
#[must_use]
pub const fn monthly_sales() -> &'static [MonthlySales] {
    &MONTHLY
}

/// Revenue share by category, largest first.
#[must_use]
pub const fn category_share() -> &'static [CategoryShare] {
    &CATEGORY_SHARE
}

/// Traffic sources, largest first.
#[must_use]
pub const fn traffic_sources() -> &'static [TrafficSource] {
    &TRAFFIC
}

/// Best sellers over the last month.
#[must_use]
pub fn top_sellers() -> Vec<TopSeller> {
    let eur = |cents| Money::from_cents(cents, Currency::EUR);
    vec![
        TopSeller { name: "Front Brake Pads Set", units: 234, revenue: eur(20_906_00) },
        TopSeller { name: "Air Suspension Compressor", units: 189, revenue: eur(15_111_00) },
        TopSeller { name: "Air Filter Element", units: 156, revenue: eur(5_456_00) },
        TopSeller { name: "V8 Engine Oil Filter", units: 145, revenue: eur(1_881_00) },
        TopSeller { name: "Door Handle Exterior", units: 98, revenue: eur(14_210_00) },
    ]
}

/// Compute the headline figures from the monthly series.
#[must_use]
pub fn headline() -> Headline {
    let revenue: i64 = MONTHLY.iter().map(|m| m.revenue).sum();
    let orders: u32 = MONTHLY.iter().map(|m| m.orders).sum();
    let new_customers: u32 = MONTHLY.iter().map(|m| m.new_customers).sum();

    let average = if orders == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(revenue) / Decimal::from(orders)).round_dp(2)
    };

    Headline {
        revenue: Money::new(Decimal::from(revenue), Currency::EUR),
        orders,
        new_customers,
        average_order: Money::new(average, Currency::EUR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_agrees_with_series() {
        let headline = headline();
        assert_eq!(headline.revenue.amount(), Decimal::from(634_000));
        assert_eq!(headline.orders, 3120);
        assert_eq!(headline.new_customers, 1928);
    }

    #[test]
    fn test_average_order_is_revenue_over_orders() {
        let headline = headline();
        let expected = (Decimal::from(634_000) / Decimal::from(3120)).round_dp(2);
        assert_eq!(headline.average_order.amount(), expected);
    }

    #[test]
    fn test_category_share_sums_to_100() {
        let total: u32 = category_share().iter().map(|c| c.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_traffic_percent_sums_to_100() {
        let total: u32 = traffic_sources().iter().map(|t| t.percent).sum();
        assert_eq!(total, 100);
    }
}

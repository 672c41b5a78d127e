/// Headline numbers shown across the top of every dashboard page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardMetricsDto {
    pub today_sales: f64,
    pub today_orders: usize,
    pub monthly_sales: f64,
}

/// One entry of the top-selling ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSellingItemDto {
    pub name: String,
    pub count: i64,
}

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use tracing::{debug, instrument};

use crate::{
    aggregate,
    store::{PgRevenueSource, RevenueSource},
    RevenueError,
};

pub struct RevenueService<S> {
    source: S,
}

impl<S: RevenueSource> RevenueService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads order lines, articles and menus from the source and computes
    /// revenue per restaurant in memory. Source errors are returned as is.
    #[instrument(skip_all)]
    pub fn restaurant_revenue(&mut self) -> Result<HashMap<i32, BigDecimal>, RevenueError> {
        let order_lines = self.source.order_lines()?;
        let articles = self.source.articles()?;
        let menus = self.source.menus()?;
        debug!(
            order_lines = order_lines.len(),
            articles = articles.len(),
            menus = menus.len(),
            "loaded relations"
        );

        let revenue = aggregate::restaurant_revenue(&order_lines, &articles, &menus);
        debug!(restaurants = revenue.len(), "computed restaurant revenue");
        Ok(revenue)
    }
}

impl RevenueService<PgRevenueSource<'_>> {
    /// Same result as [`RevenueService::restaurant_revenue`], with both joins run by Postgres.
    #[instrument(skip_all)]
    pub fn restaurant_revenue_pushdown(
        &mut self,
    ) -> Result<HashMap<i32, BigDecimal>, RevenueError> {
        let rows = self.source.priced_lines()?;
        debug!(priced_lines = rows.len(), "loaded joined order lines");

        let revenue = aggregate::revenue_from_priced_lines(rows);
        debug!(restaurants = revenue.len(), "computed restaurant revenue");
        Ok(revenue)
    }
}

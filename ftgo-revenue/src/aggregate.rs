//! In-memory revenue pipeline.
//!
//! Order lines are joined with articles to price them, summed per menu, then
//! joined with menus and summed per restaurant. Both joins are inner joins: a
//! line whose article or menu cannot be found is dropped without error.

use std::collections::HashMap;

use bigdecimal::{BigDecimal, Zero};
use tracing::trace;

use crate::models::{Article, Menu, OrderLine, RestaurantRevenue};

fn index_by<'a, T: 'a, V>(
    rows: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> i32,
    value: impl Fn(&'a T) -> V,
) -> HashMap<i32, Vec<V>> {
    let mut index: HashMap<i32, Vec<V>> = HashMap::new();
    for row in rows {
        index.entry(key(row)).or_default().push(value(row));
    }
    index
}

/// Prices every order line whose article exists, yielding `(menu_id, quantity * unit_price)`.
pub fn line_totals<'a>(
    order_lines: impl IntoIterator<Item = &'a OrderLine>,
    articles: impl IntoIterator<Item = &'a Article>,
) -> Vec<(i32, BigDecimal)> {
    let prices = index_by(articles, |a| a.id, |a| &a.unit_price);

    let mut totals = Vec::new();
    for line in order_lines {
        let Some(unit_prices) = prices.get(&line.article_id) else {
            trace!(
                menu_id = line.menu_id,
                article_id = line.article_id,
                "dropping order line with unknown article"
            );
            continue;
        };
        for unit_price in unit_prices {
            totals.push((line.menu_id, BigDecimal::from(line.quantity) * *unit_price));
        }
    }
    totals
}

pub fn menu_totals<'a>(
    order_lines: impl IntoIterator<Item = &'a OrderLine>,
    articles: impl IntoIterator<Item = &'a Article>,
) -> HashMap<i32, BigDecimal> {
    let mut totals: HashMap<i32, BigDecimal> = HashMap::new();
    for (menu_id, line_total) in line_totals(order_lines, articles) {
        *totals.entry(menu_id).or_insert_with(BigDecimal::zero) += line_total;
    }
    totals
}

/// Revenue per restaurant: `sum(quantity * unit_price)` over every order line
/// that resolves to both an article and a menu.
///
/// Restaurants without any resolvable order line are absent from the result.
/// The result is a mapping; iteration order carries no meaning.
pub fn restaurant_revenue<'a>(
    order_lines: impl IntoIterator<Item = &'a OrderLine>,
    articles: impl IntoIterator<Item = &'a Article>,
    menus: impl IntoIterator<Item = &'a Menu>,
) -> HashMap<i32, BigDecimal> {
    let restaurants = index_by(menus, |m| m.id, |m| m.restaurant_id);

    let mut revenue: HashMap<i32, BigDecimal> = HashMap::new();
    for (menu_id, menu_total) in menu_totals(order_lines, articles) {
        let Some(restaurant_ids) = restaurants.get(&menu_id) else {
            trace!(menu_id, "dropping menu total with unknown menu");
            continue;
        };
        for restaurant_id in restaurant_ids {
            *revenue
                .entry(*restaurant_id)
                .or_insert_with(BigDecimal::zero) += menu_total.clone();
        }
    }
    revenue
}

/// Sums `(restaurant_id, quantity, unit_price)` rows that were already joined by the store.
pub fn revenue_from_priced_lines(
    rows: impl IntoIterator<Item = (i32, i32, BigDecimal)>,
) -> HashMap<i32, BigDecimal> {
    let mut revenue: HashMap<i32, BigDecimal> = HashMap::new();
    for (restaurant_id, quantity, unit_price) in rows {
        *revenue.entry(restaurant_id).or_insert_with(BigDecimal::zero) +=
            BigDecimal::from(quantity) * unit_price;
    }
    revenue
}

pub fn revenue_rows(revenue: HashMap<i32, BigDecimal>) -> Vec<RestaurantRevenue> {
    revenue.into_iter().map(RestaurantRevenue::from).collect()
}

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::schema::{articles, menu_articles, menus};

#[derive(Queryable, Selectable, Identifiable, Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = menu_articles, primary_key(menu_id, article_id))]
pub struct OrderLine {
    pub menu_id: i32,
    pub article_id: i32,
    pub quantity: i32,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = articles)]
pub struct Article {
    pub id: i32,
    pub unit_price: BigDecimal,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = menus)]
pub struct Menu {
    pub id: i32,
    pub restaurant_id: i32,
}

/// One row of the aggregation output. Never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantRevenue {
    pub restaurant_id: i32,
    pub total_revenue: BigDecimal,
}

impl From<(i32, BigDecimal)> for RestaurantRevenue {
    fn from((restaurant_id, total_revenue): (i32, BigDecimal)) -> Self {
        Self {
            restaurant_id,
            total_revenue,
        }
    }
}

use bigdecimal::BigDecimal;
use diesel::{prelude::*, PgConnection};

use crate::models::{Article, Menu, OrderLine};
use crate::schema::{articles, menu_articles, menus};
use crate::RevenueError;

/// Where the three input relations come from.
pub trait RevenueSource {
    fn order_lines(&mut self) -> Result<Vec<OrderLine>, RevenueError>;
    fn articles(&mut self) -> Result<Vec<Article>, RevenueError>;
    fn menus(&mut self) -> Result<Vec<Menu>, RevenueError>;
}

pub struct PgRevenueSource<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PgRevenueSource<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Joins order lines with articles and menus inside Postgres and returns
    /// `(restaurant_id, quantity, unit_price)` for every line that resolves.
    pub fn priced_lines(&mut self) -> Result<Vec<(i32, i32, BigDecimal)>, RevenueError> {
        let rows = menu_articles::table
            .inner_join(articles::table)
            .inner_join(menus::table)
            .select((
                menus::restaurant_id,
                menu_articles::quantity,
                articles::unit_price,
            ))
            .load::<(i32, i32, BigDecimal)>(self.conn)?;
        Ok(rows)
    }
}

impl RevenueSource for PgRevenueSource<'_> {
    fn order_lines(&mut self) -> Result<Vec<OrderLine>, RevenueError> {
        Ok(menu_articles::table
            .select(OrderLine::as_select())
            .load(self.conn)?)
    }

    fn articles(&mut self) -> Result<Vec<Article>, RevenueError> {
        Ok(articles::table.select(Article::as_select()).load(self.conn)?)
    }

    fn menus(&mut self) -> Result<Vec<Menu>, RevenueError> {
        Ok(menus::table.select(Menu::as_select()).load(self.conn)?)
    }
}

/// Relations already held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub order_lines: Vec<OrderLine>,
    pub articles: Vec<Article>,
    pub menus: Vec<Menu>,
}

impl RevenueSource for Snapshot {
    fn order_lines(&mut self) -> Result<Vec<OrderLine>, RevenueError> {
        Ok(self.order_lines.clone())
    }

    fn articles(&mut self) -> Result<Vec<Article>, RevenueError> {
        Ok(self.articles.clone())
    }

    fn menus(&mut self) -> Result<Vec<Menu>, RevenueError> {
        Ok(self.menus.clone())
    }
}

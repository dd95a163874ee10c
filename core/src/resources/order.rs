//! Server and server market ordering (`/order/server`, `/order/server_market`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::types::{MarketOrder, ServerOrder};

impl<T: Transport> RobotClient<T> {
    pub fn order_server_product_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server/product"))
    }

    pub fn order_server_product_get(&self, product_id: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server/product").segment(product_id))
    }

    pub fn order_server_transaction_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server/transaction"))
    }

    /// Poll one order transaction.
    pub fn order_server_transaction_get(&self, transaction_id: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server/transaction").segment(transaction_id))
    }

    /// Place a server order. Not idempotent: a retry after an ambiguous
    /// failure can order twice.
    pub fn order_server(&self, order: &ServerOrder) -> Result<Value, RobotError> {
        self.post(self.resource("/order/server/transaction"), &order.to_form())
    }

    pub fn order_server_market_product_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server_market/product"))
    }

    pub fn order_server_market_product_get(&self, product_id: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server_market/product").segment(product_id))
    }

    pub fn order_server_market_transaction_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server_market/transaction"))
    }

    pub fn order_server_market_transaction_get(&self, transaction_id: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/order/server_market/transaction").segment(transaction_id))
    }

    /// Order a server from the server market.
    pub fn order_market_server(&self, order: &MarketOrder) -> Result<Value, RobotError> {
        self.post(self.resource("/order/server_market/transaction"), &order.to_form())
    }
}

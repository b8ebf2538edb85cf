//! Customers (resellers and their sub-customers).

use super::params::{Params, Patch};
use crate::{Client, Error, Transport, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerFilter {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub name_pattern: Option<String>,
    /// Trusted mode: list the sub-customers of this wholesaler.
    pub i_wholesaler: Option<i64>,
}

/// Identifies a customer. At least one of `i_customer` and `name` must be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerLookup {
    pub i_customer: Option<i64>,
    pub name: Option<String>,
    pub i_wholesaler: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub web_password: String,
    pub i_tariff: i64,
    pub i_time_zone: i64,
    pub base_currency: Option<String>,
    pub balance: Option<f64>,
    pub credit_limit: Option<f64>,
    pub max_sessions: Option<i64>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub i_wholesaler: Option<i64>,
}

impl NewCustomer {
    pub fn new<S: Into<String>>(name: S, web_password: S, i_tariff: i64, i_time_zone: i64) -> Self {
        NewCustomer {
            name: name.into(),
            web_password: web_password.into(),
            i_tariff,
            i_time_zone,
            base_currency: None,
            balance: None,
            credit_limit: None,
            max_sessions: None,
            description: None,
            email: None,
            i_wholesaler: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub web_password: Option<String>,
    pub i_tariff: Option<i64>,
    pub i_time_zone: Option<i64>,
    pub credit_limit: Option<f64>,
    pub max_sessions: Option<i64>,
    pub description: Patch<String>,
    pub email: Patch<String>,
}

impl<T: Transport> Client<T> {
    pub fn list_customers(&self, filter: &CustomerFilter) -> Result<Value, Error> {
        let params = Params::new()
            .opt("offset", filter.offset)
            .opt("limit", filter.limit)
            .opt("name_pattern", filter.name_pattern.as_ref())
            .opt("i_wholesaler", filter.i_wholesaler);
        self.call("listCustomers", params)
    }

    pub fn get_customer_info(&self, lookup: &CustomerLookup) -> Result<Value, Error> {
        let params = Params::new()
            .opt("i_customer", lookup.i_customer)
            .opt("name", lookup.name.as_ref())
            .opt("i_wholesaler", lookup.i_wholesaler);
        params.require_any(&["i_customer", "name"])?;
        self.call("getCustomerInfo", params)
    }

    pub fn create_customer(&self, customer: &NewCustomer) -> Result<Value, Error> {
        let params = Params::new()
            .set("name", &customer.name)
            .set("web_password", &customer.web_password)
            .set("i_tariff", customer.i_tariff)
            .set("i_time_zone", customer.i_time_zone)
            .opt("base_currency", customer.base_currency.as_ref())
            .opt("balance", customer.balance)
            .opt("credit_limit", customer.credit_limit)
            .opt("max_sessions", customer.max_sessions)
            .opt("description", customer.description.as_ref())
            .opt("email", customer.email.as_ref())
            .opt("i_wholesaler", customer.i_wholesaler);
        params.require_finite()?;
        self.call("createCustomer", params)
    }

    pub fn update_customer(&self, i_customer: i64, changes: &CustomerChanges) -> Result<Value, Error> {
        let params = Params::new()
            .set("i_customer", i_customer)
            .opt("name", changes.name.as_ref())
            .opt("web_password", changes.web_password.as_ref())
            .opt("i_tariff", changes.i_tariff)
            .opt("i_time_zone", changes.i_time_zone)
            .opt("credit_limit", changes.credit_limit)
            .opt("max_sessions", changes.max_sessions)
            .patch("description", changes.description.clone())
            .patch("email", changes.email.clone());
        params.require_changes(&["i_customer"])?;
        params.require_finite()?;
        self.call("updateCustomer", params)
    }

    pub fn delete_customer(&self, i_customer: i64) -> Result<Value, Error> {
        self.call("deleteCustomer", Params::new().set("i_customer", i_customer))
    }
}

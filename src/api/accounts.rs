//! Accounts, balance adjustments and CDRs.

use super::params::{require_positive, Params, Patch};
use crate::{Client, Error, Transport, Value};

/// Filter and paging for [`Client::list_accounts`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountFilter {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// SQL `LIKE` pattern matched against the username.
    pub username_pattern: Option<String>,
    /// Trusted mode: list the accounts of this customer.
    pub i_customer: Option<i64>,
}

/// Identifies an account for [`Client::get_account_info`]. At least one of `i_account` and
/// `username` must be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountLookup {
    pub i_account: Option<i64>,
    pub username: Option<String>,
    /// Trusted mode: look the account up on behalf of this wholesaler.
    pub i_wholesaler: Option<i64>,
}

impl AccountLookup {
    pub fn by_id(i_account: i64) -> Self {
        AccountLookup {
            i_account: Some(i_account),
            ..Default::default()
        }
    }

    pub fn by_username<S: Into<String>>(username: S) -> Self {
        AccountLookup {
            username: Some(username.into()),
            ..Default::default()
        }
    }
}

/// A new account for [`Client::create_account`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub web_password: String,
    pub authname: String,
    pub voip_password: String,
    pub i_billing_plan: i64,
    pub i_time_zone: i64,
    pub max_sessions: Option<i64>,
    pub balance: Option<f64>,
    pub credit_limit: Option<f64>,
    pub payment_currency: Option<String>,
    pub i_routing_group: Option<i64>,
    pub blocked: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    /// Trusted mode: create the account under this customer.
    pub i_customer: Option<i64>,
}

impl NewAccount {
    /// Creates an account description with all optional fields unset.
    pub fn new<S: Into<String>>(
        username: S,
        web_password: S,
        authname: S,
        voip_password: S,
        i_billing_plan: i64,
        i_time_zone: i64,
    ) -> Self {
        NewAccount {
            username: username.into(),
            web_password: web_password.into(),
            authname: authname.into(),
            voip_password: voip_password.into(),
            i_billing_plan,
            i_time_zone,
            max_sessions: None,
            balance: None,
            credit_limit: None,
            payment_currency: None,
            i_routing_group: None,
            blocked: None,
            first_name: None,
            last_name: None,
            company_name: None,
            email: None,
            i_customer: None,
        }
    }
}

/// Changes applied by [`Client::update_account`]. At least one field must be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub web_password: Option<String>,
    pub authname: Option<String>,
    pub voip_password: Option<String>,
    pub i_billing_plan: Option<i64>,
    pub i_time_zone: Option<i64>,
    pub max_sessions: Option<i64>,
    pub credit_limit: Option<f64>,
    pub blocked: Option<bool>,
    pub i_routing_group: Patch<i64>,
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub company_name: Patch<String>,
    pub email: Patch<String>,
}

/// A balance adjustment.
#[derive(Clone, Debug, PartialEq)]
pub struct Payment {
    /// Must be positive; the direction comes from the method.
    pub amount: f64,
    pub currency: String,
    pub payment_notes: Option<String>,
}

impl Payment {
    pub fn new<S: Into<String>>(amount: f64, currency: S) -> Self {
        Payment {
            amount,
            currency: currency.into(),
            payment_notes: None,
        }
    }
}

/// Query for [`Client::get_account_cdrs`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CdrQuery {
    pub i_account: i64,
    /// Start of the period, in the server's date format.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// `"non_zero"`, `"complete"`, `"incomplete"`, ...
    pub cdr_type: Option<String>,
}

impl<T: Transport> Client<T> {
    pub fn list_accounts(&self, filter: &AccountFilter) -> Result<Value, Error> {
        let params = Params::new()
            .opt("offset", filter.offset)
            .opt("limit", filter.limit)
            .opt("username_pattern", filter.username_pattern.as_ref())
            .opt("i_customer", filter.i_customer);
        self.call("listAccounts", params)
    }

    pub fn get_account_info(&self, lookup: &AccountLookup) -> Result<Value, Error> {
        let params = Params::new()
            .opt("i_account", lookup.i_account)
            .opt("username", lookup.username.as_ref())
            .opt("i_wholesaler", lookup.i_wholesaler);
        params.require_any(&["i_account", "username"])?;
        self.call("getAccountInfo", params)
    }

    pub fn create_account(&self, account: &NewAccount) -> Result<Value, Error> {
        let params = Params::new()
            .set("username", &account.username)
            .set("web_password", &account.web_password)
            .set("authname", &account.authname)
            .set("voip_password", &account.voip_password)
            .set("i_billing_plan", account.i_billing_plan)
            .set("i_time_zone", account.i_time_zone)
            .opt("max_sessions", account.max_sessions)
            .opt("balance", account.balance)
            .opt("credit_limit", account.credit_limit)
            .opt("payment_currency", account.payment_currency.as_ref())
            .opt("i_routing_group", account.i_routing_group)
            .opt("blocked", account.blocked)
            .opt("first_name", account.first_name.as_ref())
            .opt("last_name", account.last_name.as_ref())
            .opt("company_name", account.company_name.as_ref())
            .opt("email", account.email.as_ref())
            .opt("i_customer", account.i_customer);
        params.require_finite()?;
        self.call("createAccount", params)
    }

    pub fn update_account(&self, i_account: i64, changes: &AccountChanges) -> Result<Value, Error> {
        let params = Params::new()
            .set("i_account", i_account)
            .opt("username", changes.username.as_ref())
            .opt("web_password", changes.web_password.as_ref())
            .opt("authname", changes.authname.as_ref())
            .opt("voip_password", changes.voip_password.as_ref())
            .opt("i_billing_plan", changes.i_billing_plan)
            .opt("i_time_zone", changes.i_time_zone)
            .opt("max_sessions", changes.max_sessions)
            .opt("credit_limit", changes.credit_limit)
            .opt("blocked", changes.blocked)
            .patch("i_routing_group", changes.i_routing_group.clone())
            .patch("first_name", changes.first_name.clone())
            .patch("last_name", changes.last_name.clone())
            .patch("company_name", changes.company_name.clone())
            .patch("email", changes.email.clone());
        params.require_changes(&["i_account"])?;
        params.require_finite()?;
        self.call("updateAccount", params)
    }

    pub fn delete_account(&self, i_account: i64) -> Result<Value, Error> {
        self.call("deleteAccount", Params::new().set("i_account", i_account))
    }

    pub fn block_account(&self, i_account: i64) -> Result<Value, Error> {
        self.call("blockAccount", Params::new().set("i_account", i_account))
    }

    pub fn unblock_account(&self, i_account: i64) -> Result<Value, Error> {
        self.call("unblockAccount", Params::new().set("i_account", i_account))
    }

    /// Records a payment, increasing the balance.
    pub fn account_add_funds(&self, i_account: i64, payment: &Payment) -> Result<Value, Error> {
        self.adjust_balance("accountAddFunds", i_account, payment)
    }

    /// Credits the account without recording a payment.
    pub fn account_credit(&self, i_account: i64, payment: &Payment) -> Result<Value, Error> {
        self.adjust_balance("accountCredit", i_account, payment)
    }

    /// Charges the account.
    pub fn account_debit(&self, i_account: i64, payment: &Payment) -> Result<Value, Error> {
        self.adjust_balance("accountDebit", i_account, payment)
    }

    fn adjust_balance(&self, method: &str, i_account: i64, payment: &Payment) -> Result<Value, Error> {
        require_positive(payment.amount)?;
        let params = Params::new()
            .set("i_account", i_account)
            .set("amount", payment.amount)
            .set("currency", &payment.currency)
            .opt("payment_notes", payment.payment_notes.as_ref());
        self.call(method, params)
    }

    pub fn get_account_cdrs(&self, query: &CdrQuery) -> Result<Value, Error> {
        let params = Params::new()
            .set("i_account", query.i_account)
            .opt("start_date", query.start_date.as_ref())
            .opt("end_date", query.end_date.as_ref())
            .opt("offset", query.offset)
            .opt("limit", query.limit)
            .opt("type", query.cdr_type.as_ref());
        self.call("getAccountCDRs", params)
    }
}

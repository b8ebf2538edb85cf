//! Typed wrappers for the remote operations.
//!
//! Every wrapper builds one parameter struct from its arguments, leaving out absent optional
//! fields, checks its preconditions locally and forwards to [`Client::call`]. A precondition
//! failure is reported as [`Error::Validation`] before anything is sent.
//!
//! Operations that accept `i_wholesaler` or `i_customer` can act on behalf of another owner when
//! the API user is trusted.

mod accounts;
mod auth_rules;
mod customers;
mod dids;
mod params;

pub use self::accounts::{AccountChanges, AccountFilter, AccountLookup, CdrQuery, NewAccount, Payment};
pub use self::auth_rules::{AuthRuleChanges, NewAuthRule};
pub use self::customers::{CustomerChanges, CustomerFilter, CustomerLookup, NewCustomer};
pub use self::dids::{DidChanges, DidFilter, NewDid};
pub use self::params::{Params, Patch};

use crate::{Client, Error, Transport, Value};

impl<T: Transport> Client<T> {
    /// Fetches a dictionary such as `timezones`, `currencies` or `languages`.
    pub fn get_dictionary(&self, name: &str) -> Result<Value, Error> {
        if name.trim().is_empty() {
            return Err(Error::validation("dictionary name must not be empty"));
        }
        self.call("getDictionary", Params::new().set("name", name))
    }
}

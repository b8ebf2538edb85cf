//! DIDs and their delegation to sub-customers.

use super::params::{Params, Patch};
use crate::{Client, Error, Transport, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DidFilter {
    pub did: Option<String>,
    pub i_account: Option<i64>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Trusted mode: list the DIDs of this customer.
    pub i_customer: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewDid {
    pub did: String,
    /// Number the call is forwarded to, if different from `did`.
    pub incoming_did: Option<String>,
    /// Account the DID rings.
    pub i_account: Option<i64>,
    pub i_ivr_application: Option<i64>,
    pub description: Option<String>,
    pub i_customer: Option<i64>,
}

/// Changes for [`Client::update_did`]. Use `Patch::Clear` on `i_account` to detach the DID.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DidChanges {
    pub did: Option<String>,
    pub incoming_did: Patch<String>,
    pub i_account: Patch<i64>,
    pub i_ivr_application: Patch<i64>,
    pub description: Patch<String>,
}

impl<T: Transport> Client<T> {
    pub fn get_dids_list(&self, filter: &DidFilter) -> Result<Value, Error> {
        let params = Params::new()
            .opt("did", filter.did.as_ref())
            .opt("i_account", filter.i_account)
            .opt("offset", filter.offset)
            .opt("limit", filter.limit)
            .opt("i_customer", filter.i_customer);
        self.call("getDIDsList", params)
    }

    pub fn add_did(&self, did: &NewDid) -> Result<Value, Error> {
        let params = Params::new()
            .set("did", &did.did)
            .opt("incoming_did", did.incoming_did.as_ref())
            .opt("i_account", did.i_account)
            .opt("i_ivr_application", did.i_ivr_application)
            .opt("description", did.description.as_ref())
            .opt("i_customer", did.i_customer);
        self.call("addDID", params)
    }

    pub fn update_did(&self, i_did: i64, changes: &DidChanges) -> Result<Value, Error> {
        let params = Params::new()
            .set("i_did", i_did)
            .opt("did", changes.did.as_ref())
            .patch("incoming_did", changes.incoming_did.clone())
            .patch("i_account", changes.i_account.clone())
            .patch("i_ivr_application", changes.i_ivr_application.clone())
            .patch("description", changes.description.clone());
        params.require_changes(&["i_did"])?;
        self.call("updateDID", params)
    }

    pub fn delete_did(&self, i_did: i64) -> Result<Value, Error> {
        self.call("deleteDID", Params::new().set("i_did", i_did))
    }

    pub fn list_did_delegations(&self, i_did: i64) -> Result<Value, Error> {
        self.call("listDIDDelegations", Params::new().set("i_did", i_did))
    }

    /// Delegates a DID to the sub-customer `i_customer`.
    pub fn add_did_delegation(&self, i_did: i64, i_customer: i64) -> Result<Value, Error> {
        let params = Params::new().set("i_did", i_did).set("i_customer", i_customer);
        self.call("addDIDDelegation", params)
    }

    pub fn delete_did_delegation(&self, i_did_delegation: i64) -> Result<Value, Error> {
        self.call("delDIDDelegation", Params::new().set("i_did_delegation", i_did_delegation))
    }
}

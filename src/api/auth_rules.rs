//! Authentication rules: which incoming traffic is billed to an account.

use super::params::{Params, Patch};
use crate::{Client, Error, Transport, Value};

/// Fields that make a rule match traffic. A rule needs at least one of them.
const MATCH_FIELDS: &[&str] = &["remote_ip", "incoming_cli", "incoming_cld", "to_domain", "from_domain"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewAuthRule {
    pub i_account: i64,
    pub remote_ip: Option<String>,
    pub incoming_cli: Option<String>,
    pub incoming_cld: Option<String>,
    pub to_domain: Option<String>,
    pub from_domain: Option<String>,
    pub cli_translation_rule: Option<String>,
    pub cld_translation_rule: Option<String>,
    pub i_tariff: Option<i64>,
    pub i_routing_group: Option<i64>,
    pub max_sessions: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthRuleChanges {
    pub remote_ip: Patch<String>,
    pub incoming_cli: Patch<String>,
    pub incoming_cld: Patch<String>,
    pub to_domain: Patch<String>,
    pub from_domain: Patch<String>,
    pub cli_translation_rule: Patch<String>,
    pub cld_translation_rule: Patch<String>,
    pub i_tariff: Patch<i64>,
    pub i_routing_group: Patch<i64>,
    pub max_sessions: Patch<i64>,
}

impl<T: Transport> Client<T> {
    pub fn list_auth_rules(&self, i_account: i64) -> Result<Value, Error> {
        self.call("listAuthRules", Params::new().set("i_account", i_account))
    }

    pub fn add_auth_rule(&self, rule: &NewAuthRule) -> Result<Value, Error> {
        let params = Params::new()
            .set("i_account", rule.i_account)
            .opt("remote_ip", rule.remote_ip.as_ref())
            .opt("incoming_cli", rule.incoming_cli.as_ref())
            .opt("incoming_cld", rule.incoming_cld.as_ref())
            .opt("to_domain", rule.to_domain.as_ref())
            .opt("from_domain", rule.from_domain.as_ref())
            .opt("cli_translation_rule", rule.cli_translation_rule.as_ref())
            .opt("cld_translation_rule", rule.cld_translation_rule.as_ref())
            .opt("i_tariff", rule.i_tariff)
            .opt("i_routing_group", rule.i_routing_group)
            .opt("max_sessions", rule.max_sessions);
        params.require_any(MATCH_FIELDS)?;
        self.call("addAuthRule", params)
    }

    pub fn update_auth_rule(&self, i_authentication: i64, changes: &AuthRuleChanges) -> Result<Value, Error> {
        let params = Params::new()
            .set("i_authentication", i_authentication)
            .patch("remote_ip", changes.remote_ip.clone())
            .patch("incoming_cli", changes.incoming_cli.clone())
            .patch("incoming_cld", changes.incoming_cld.clone())
            .patch("to_domain", changes.to_domain.clone())
            .patch("from_domain", changes.from_domain.clone())
            .patch("cli_translation_rule", changes.cli_translation_rule.clone())
            .patch("cld_translation_rule", changes.cld_translation_rule.clone())
            .patch("i_tariff", changes.i_tariff.clone())
            .patch("i_routing_group", changes.i_routing_group.clone())
            .patch("max_sessions", changes.max_sessions.clone());
        params.require_changes(&["i_authentication"])?;
        self.call("updateAuthRule", params)
    }

    pub fn delete_auth_rule(&self, i_authentication: i64) -> Result<Value, Error> {
        self.call("delAuthRule", Params::new().set("i_authentication", i_authentication))
    }
}

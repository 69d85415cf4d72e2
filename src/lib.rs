//! Client for the rule-engine operations of the iRODS HTTP API.
//!
//! The iRODS HTTP API fronts an iRODS server with a REST-ish gateway. This
//! crate wraps its `/rules` endpoint: listing rule engine plugin instances,
//! executing rule code, and removing delay rules from the catalog.
//!
//! Authentication tokens come from elsewhere — acquire one however your
//! deployment does it, then hand it to the client:
//!
//! ```no_run
//! use irods_rules::rules::RuleEngineClient;
//!
//! # async fn example() -> Result<(), irods_rules::rules::RuleError> {
//! let mut client = RuleEngineClient::new("http://localhost:9001/irods-http-api/0.3.0")?;
//! client.set_token("...");
//!
//! let result = client.list_rule_engines().await?;
//! println!("HTTP {}: {:?}", result.status_code, result.data);
//! # Ok(())
//! # }
//! ```

pub mod rules;

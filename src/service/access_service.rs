use crate::model::access::AccessDecision;
use crate::service::access_log::AccessLog;
use std::collections::HashMap;
use std::sync::Arc;

pub const TOKEN_KEY: &str = "token";
pub const THING_KEY: &str = "thing";

/// Decides access from the parsed query parameters.
///
/// Only the presence of `token` matters; its value, even an empty one, is never
/// inspected.
pub fn decide(query: &HashMap<String, String>) -> AccessDecision {
    match query.get(TOKEN_KEY) {
        Some(token) => AccessDecision::Granted { token: token.clone() },
        None => AccessDecision::Denied,
    }
}

#[derive(Clone)]
pub struct AccessService {
    log: Arc<dyn AccessLog>,
}

impl AccessService {
    pub fn new(log: Arc<dyn AccessLog>) -> Self {
        AccessService { log }
    }

    /// Logs the request target, decides, and logs the token when one was sent.
    pub fn check(&self, target: &str, query: &HashMap<String, String>) -> AccessDecision {
        self.log.request(target);

        let decision = decide(query);
        if let AccessDecision::Granted { ref token } = decision {
            self.log.token(token, query.get(THING_KEY).map(String::as_str));
        }
        decision
    }
}

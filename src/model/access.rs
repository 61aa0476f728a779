/// Body sent when a `token` query parameter is present.
pub const GRANTED_BODY: &str = r#"{"access":1, "error":"blah"}"#;

/// Body sent when no `token` query parameter is present.
pub const DENIED_BODY: &str = r#"{"access":0, "error":"missing token"}"#;

/// Outcome of inspecting a request's query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The `token` key was present; its value is kept for logging only.
    Granted { token: String },
    Denied,
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted { .. })
    }

    /// The fixed JSON body for this decision.
    ///
    /// Controllers match on these exact bytes, so they are literals rather than
    /// serialized structs.
    pub fn body(&self) -> &'static str {
        match self {
            AccessDecision::Granted { .. } => GRANTED_BODY,
            AccessDecision::Denied => DENIED_BODY,
        }
    }
}

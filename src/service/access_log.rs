use tracing::info;

/// Logging capability handed to the access service at construction time.
pub trait AccessLog: Send + Sync {
    /// Records the request target (path and query) as received.
    fn request(&self, target: &str);

    /// Records a presented token, plus the machine id when the caller sent one.
    fn token(&self, token: &str, thing: Option<&str>);
}

/// Writes access events to the `tracing` subscriber installed by `main`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn request(&self, target: &str) {
        info!(target: "access_stub::access", "{}", target);
    }

    fn token(&self, token: &str, thing: Option<&str>) {
        match thing {
            Some(thing) => info!(target: "access_stub::access", thing, "{}", token),
            None => info!(target: "access_stub::access", "{}", token),
        }
    }
}

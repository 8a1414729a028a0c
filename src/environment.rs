//! Execution-context detection.

use crate::models::ExecutionContext;

/// Read-only access to the page's host name.
pub trait HostProbe {
    fn hostname(&self) -> String;
}

/// `window.location.hostname`. An unreadable location yields an empty
/// host name, which classifies as remote.
pub struct BrowserLocation;

impl HostProbe for BrowserLocation {
    fn hostname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
}

/// A host name known up front (headless embedding, tests).
pub struct FixedHost(pub String);

impl HostProbe for FixedHost {
    fn hostname(&self) -> String {
        self.0.clone()
    }
}

/// Classify the page. Reads the host exactly once.
pub fn detect_context(probe: &dyn HostProbe) -> ExecutionContext {
    ExecutionContext::from_hostname(&probe.hostname())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_host_classification() {
        assert_eq!(
            detect_context(&FixedHost("localhost".into())),
            ExecutionContext::Local
        );
        assert_eq!(
            detect_context(&FixedHost("rag.vercel.app".into())),
            ExecutionContext::Remote
        );
    }
}

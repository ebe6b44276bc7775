//! Service-worker stub.
//!
//! The catalog has no offline mode; registration is tracked and logged, but
//! nothing is cached or intercepted.

#[derive(Debug, Default)]
pub struct ServiceWorker {
    registered: bool,
}

impl ServiceWorker {
    pub fn register(&mut self) {
        tracing::debug!("service worker register requested (no-op)");
        self.registered = true;
    }

    pub fn unregister(&mut self) {
        tracing::debug!("service worker unregister requested (no-op)");
        self.registered = false;
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_unregister() {
        let mut worker = ServiceWorker::default();
        assert!(!worker.is_registered());
        worker.register();
        assert!(worker.is_registered());
        worker.unregister();
        assert!(!worker.is_registered());
    }
}

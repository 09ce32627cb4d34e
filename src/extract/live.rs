use tracing::debug;

type Signal<'s, S> = Box<dyn Fn(&S) -> bool + Send + Sync + 's>;

/// Independent "is broadcasting" signals, combined by logical OR.
///
/// Evaluation stops at the first signal that fires.
pub struct LiveDetector<'s, S: ?Sized> {
    signals: Vec<(&'static str, Signal<'s, S>)>,
}

impl<'s, S: ?Sized> Default for LiveDetector<'s, S> {
    fn default() -> Self {
        Self {
            signals: Vec::new(),
        }
    }
}

impl<'s, S: ?Sized> LiveDetector<'s, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 's,
    {
        self.signals.push((name, Box::new(check)));
        self
    }

    pub fn is_live(&self, source: &S) -> bool {
        match self.signals.iter().find(|(_, check)| check(source)) {
            Some((name, _)) => {
                debug!(signal = name, "Live signal fired");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_any_signal_is_enough() {
        let detector = LiveDetector::<()>::new()
            .signal("a", |_| false)
            .signal("b", |_| false)
            .signal("c", |_| true)
            .signal("d", |_| false);
        assert!(detector.is_live(&()));
    }

    #[test]
    fn test_no_signals_means_offline() {
        assert!(!LiveDetector::<()>::new().is_live(&()));

        let detector = LiveDetector::<()>::new().signal("a", |_| false).signal("b", |_| false);
        assert!(!detector.is_live(&()));
    }

    #[test]
    fn test_short_circuits() {
        let later = AtomicUsize::new(0);
        let detector = LiveDetector::<bool>::new()
            .signal("first", |fire: &bool| *fire)
            .signal("second", |_| {
                later.fetch_add(1, Ordering::SeqCst);
                false
            });

        assert!(detector.is_live(&true));
        assert_eq!(later.load(Ordering::SeqCst), 0);
        assert!(!detector.is_live(&false));
        assert_eq!(later.load(Ordering::SeqCst), 1);
    }
}

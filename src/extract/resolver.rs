use tracing::{debug, trace};

type Extractor<'s, S> = Box<dyn Fn(&S) -> Option<String> + Send + Sync + 's>;

/// Ordered chain of extraction strategies for one output field.
///
/// Strategies run in insertion order and the first one producing a
/// non-blank value wins. A strategy that finds nothing returns `None`;
/// it never fails the chain.
pub struct FieldResolver<'s, S: ?Sized> {
    field: &'static str,
    strategies: Vec<(&'static str, Extractor<'s, S>)>,
}

impl<'s, S: ?Sized> FieldResolver<'s, S> {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            strategies: Vec::new(),
        }
    }

    /// Append a named strategy to the end of the chain
    pub fn strategy<F>(mut self, name: &'static str, extract: F) -> Self
    where
        F: Fn(&S) -> Option<String> + Send + Sync + 's,
    {
        self.strategies.push((name, Box::new(extract)));
        self
    }

    /// First non-blank value, trimmed
    pub fn resolve(&self, source: &S) -> Option<String> {
        self.strategies.iter().find_map(|(name, extract)| {
            let value = extract(source)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            match value {
                Some(v) => {
                    debug!(field = self.field, strategy = name, "Field resolved");
                    Some(v)
                }
                None => {
                    trace!(field = self.field, strategy = name, "Strategy produced nothing");
                    None
                }
            }
        })
    }

    pub fn resolve_or(&self, source: &S, default: impl Into<String>) -> String {
        self.resolve(source).unwrap_or_else(|| {
            debug!(field = self.field, "All strategies exhausted, using default");
            default.into()
        })
    }
}

use crate::error::VariantError;
use crate::registry::Registry;
use crate::tag::{extract_argument, extract_tag};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// One handler per tag. Literal tags get nullary handlers, parametric tags
/// get unary handlers receiving the argument embedded in the value.
pub enum Handler<R> {
    Nullary(Box<dyn Fn() -> R + Send + Sync>),
    Unary(Box<dyn Fn(&str) -> R + Send + Sync>),
}

/// Collects handlers for every tag of a registry and verifies exhaustiveness
/// and arity before a table can exist. A table over a partial handler set is
/// unrepresentable, which moves the "can we interpret every stored value"
/// question to startup.
pub struct TableBuilder<'a, R> {
    registry: &'a Registry,
    handlers: IndexMap<String, Handler<R>>,
}

impl<'a, R> TableBuilder<'a, R> {
    pub fn new(registry: &'a Registry) -> TableBuilder<'a, R> {
        TableBuilder {
            registry,
            handlers: IndexMap::with_capacity(registry.len()),
        }
    }

    /// Registers a handler for a tag whose value carries no argument.
    pub fn on<S, F>(mut self, tag: S, handler: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.handlers
            .insert(tag.into(), Handler::Nullary(Box::new(handler)));
        self
    }

    /// Registers a handler for a tag whose value embeds an argument.
    pub fn on_arg<S, F>(mut self, tag: S, handler: F) -> Self
    where
        S: Into<String>,
        F: Fn(&str) -> R + Send + Sync + 'static,
    {
        self.handlers
            .insert(tag.into(), Handler::Unary(Box::new(handler)));
        self
    }

    /// Fails with `IncompleteDispatch` naming every uncovered tag, with
    /// `InvalidTag` for a handler outside the registry, and with an arity
    /// error where the handler shape contradicts the spec.
    pub fn build(self) -> Result<DispatchTable<R>, VariantError> {
        for (tag, handler) in &self.handlers {
            let takes_argument = self
                .registry
                .takes_argument(tag)
                .ok_or_else(|| VariantError::InvalidTag(tag.clone()))?;
            match handler {
                Handler::Unary(_) if !takes_argument => {
                    return Err(VariantError::ArgumentUnexpected(tag.clone()));
                }
                Handler::Nullary(_) if takes_argument => {
                    return Err(VariantError::ArgumentRequired(tag.clone()));
                }
                _ => {}
            }
        }

        let missing: Vec<String> = self
            .registry
            .tags()
            .filter(|tag| !self.handlers.contains_key(*tag))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(VariantError::IncompleteDispatch(missing));
        }

        Ok(DispatchTable {
            handlers: self.handlers,
        })
    }
}

/// Exhaustive tag → handler mapping. Immutable once built, safe to share.
pub struct DispatchTable<R> {
    handlers: IndexMap<String, Handler<R>>,
}

impl<R> DispatchTable<R> {
    /// Recovers the tag from `value` and invokes its handler.
    ///
    /// `DispatchMiss` can only fire for values that did not originate from
    /// the registry this table was built against, but the extraction runs
    /// over arbitrary input and has to be checked.
    pub fn dispatch(&self, value: &str) -> Result<R, VariantError> {
        let tag = extract_tag(value);
        debug!("dispatching {value} as {tag}");
        let handler = self.handlers.get(tag).ok_or_else(|| {
            warn!("no handler for tag {tag}");
            VariantError::DispatchMiss(tag.to_string())
        })?;
        match handler {
            Handler::Nullary(handler) => Ok(handler()),
            Handler::Unary(handler) => {
                let argument = extract_argument(value)
                    .ok_or_else(|| VariantError::ArgumentRequired(tag.to_string()))?;
                Ok(handler(argument))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

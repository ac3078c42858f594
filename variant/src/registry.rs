use crate::error::VariantError;
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};

/// How a tag produces its value: a fixed literal, or a pure function
/// rendering the value from a single argument.
///
/// Parametric specs must render the tag as a prefix followed by the argument
/// in parentheses (`VARCHAR(500)`), so the tag stays recoverable from the
/// value alone.
pub enum Spec {
    Literal(String),
    Unary(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl Spec {
    pub fn literal<S: Into<String>>(value: S) -> Spec {
        Spec::Literal(value.into())
    }

    pub fn unary<F: Fn(&str) -> String + Send + Sync + 'static>(render: F) -> Spec {
        Spec::Unary(Box::new(render))
    }

    fn takes_argument(&self) -> bool {
        matches!(self, Spec::Unary(_))
    }
}

impl Debug for Spec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Spec::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Spec::Unary(_) => f.debug_tuple("Unary").field(&"<fn>").finish(),
        }
    }
}

/// A closed set of tags. The set is fixed at construction, the registry is
/// immutable and safe to share afterward. Tags keep their definition order.
#[derive(Debug)]
pub struct Registry {
    specs: IndexMap<String, Spec>,
}

impl Registry {
    pub fn define<S, I>(specs: I) -> Registry
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Spec)>,
    {
        Registry {
            specs: specs
                .into_iter()
                .map(|(tag, spec)| (tag.into(), spec))
                .collect(),
        }
    }

    /// Materializes the value for `tag`. The argument must match the spec's
    /// arity: none for literals, exactly one for parametric specs.
    pub fn evaluate(&self, tag: &str, argument: Option<&str>) -> Result<String, VariantError> {
        let spec = self
            .specs
            .get(tag)
            .ok_or_else(|| VariantError::InvalidTag(tag.to_string()))?;
        match (spec, argument) {
            (Spec::Literal(value), None) => Ok(value.clone()),
            (Spec::Literal(_), Some(_)) => {
                Err(VariantError::ArgumentUnexpected(tag.to_string()))
            }
            (Spec::Unary(render), Some(argument)) => Ok(render(argument)),
            (Spec::Unary(_), None) => Err(VariantError::ArgumentRequired(tag.to_string())),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.specs.contains_key(tag)
    }

    pub(crate) fn takes_argument(&self, tag: &str) -> Option<bool> {
        self.specs.get(tag).map(Spec::takes_argument)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Registry, Spec};
    use crate::error::VariantError;

    fn registry() -> Registry {
        Registry::define([
            ("SERIAL", Spec::literal("SERIAL")),
            ("VARCHAR", Spec::unary(|n| format!("VARCHAR({n})"))),
        ])
    }

    #[test]
    fn literal_evaluates_to_itself() {
        assert_eq!(registry().evaluate("SERIAL", None).unwrap(), "SERIAL");
    }

    #[test]
    fn unary_renders_the_argument() {
        assert_eq!(
            registry().evaluate("VARCHAR", Some("10")).unwrap(),
            "VARCHAR(10)"
        );
        assert_eq!(
            registry().evaluate("VARCHAR", Some("500")).unwrap(),
            "VARCHAR(500)"
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            registry().evaluate("UUID", None),
            Err(VariantError::InvalidTag("UUID".to_string()))
        );
    }

    #[test]
    fn arity_must_match_the_spec() {
        assert_eq!(
            registry().evaluate("SERIAL", Some("10")),
            Err(VariantError::ArgumentUnexpected("SERIAL".to_string()))
        );
        assert_eq!(
            registry().evaluate("VARCHAR", None),
            Err(VariantError::ArgumentRequired("VARCHAR".to_string()))
        );
    }

    #[test]
    fn tags_keep_definition_order() {
        let registry = registry();
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(tags, vec!["SERIAL", "VARCHAR"]);
    }
}

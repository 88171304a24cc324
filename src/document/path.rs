//! Traversal path lineage.

/// Name of the root component of a view.
pub const ROOT_COMPONENT: &str = "root";

/// Path prefix used for parameter areas that sit above the root component.
pub const VIEW_LABEL: &str = "view";

/// The two lineages tracked while walking a view.
///
/// `component` is the slash-joined chain of component names
/// (`root/Container/Button`). `field` is the dot-joined chain of structural
/// keys visited since the last component boundary. Values are never
/// mutated in place: each step of the walk derives a new context, so
/// sibling subtrees cannot observe each other's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathContext {
    component: String,
    field: String,
}

impl PathContext {
    /// An empty context, as at the top of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from explicit parts.
    pub fn from_parts(component: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            field: field.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Enter a component named `name`. The field lineage is reset.
    pub fn enter_component(&self, name: &str) -> Self {
        let component = if name == ROOT_COMPONENT {
            ROOT_COMPONENT.to_string()
        } else {
            format!("{}/{}", self.component, name)
        };
        Self {
            component,
            field: String::new(),
        }
    }

    /// Descend through a structural key.
    pub fn with_field(&self, key: &str) -> Self {
        Self {
            component: self.component.clone(),
            field: join_dotted(&self.field, key),
        }
    }

    /// The dotted path of `key` as seen from this context.
    ///
    /// The component path (or `view` above the root) comes first, followed
    /// by the field lineage and the key: `root/Label.custom`.
    pub fn qualify(&self, key: &str) -> String {
        let base = if self.component.is_empty() {
            VIEW_LABEL
        } else {
            &self.component
        };
        join_dotted(&join_dotted(base, &self.field), key)
    }
}

/// Join two dotted path fragments, dropping empty sides.
pub fn join_dotted(parent: &str, key: &str) -> String {
    match (parent.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (false, true) => parent.to_string(),
        (false, false) => format!("{}.{}", parent, key),
    }
}

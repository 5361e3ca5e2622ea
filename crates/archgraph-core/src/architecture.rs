//! Architecture description model.
//!
//! These types mirror the payload returned by the architecture generation
//! service. A payload is a flat list of [`Component`]s, each naming the other
//! components it uses, plus some application-level metadata.
//!
//! # Example
//!
//! ```
//! # use archgraph_core::architecture::Architecture;
//! let json = r#"{
//!     "architecture": [
//!         {"type": "module", "name": "api", "purpose": "HTTP routes",
//!          "uses": ["db"], "pypi_packages": ["fastapi==0.110.0"], "is_endpoint": true},
//!         {"type": "module", "name": "db", "purpose": "Storage",
//!          "uses": [], "pypi_packages": [], "is_endpoint": false}
//!     ],
//!     "external_infrastructure": ["postgres"],
//!     "app_name": "todo"
//! }"#;
//!
//! let architecture = Architecture::from_json(json).unwrap();
//! assert_eq!(architecture.components().len(), 2);
//! assert_eq!(architecture.app_name(), "todo");
//! ```

use serde::{Deserialize, Serialize};

/// A complete architecture description for one application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Architecture {
    /// Components in the order the service listed them.
    #[serde(default)]
    architecture: Vec<Component>,

    /// Infrastructure the application depends on but does not implement.
    #[serde(default)]
    external_infrastructure: Vec<String>,

    #[serde(default)]
    app_name: String,
}

impl Architecture {
    /// Creates an architecture from its parts.
    pub fn new(
        app_name: impl Into<String>,
        components: Vec<Component>,
        external_infrastructure: Vec<String>,
    ) -> Self {
        Self {
            architecture: components,
            external_infrastructure,
            app_name: app_name.into(),
        }
    }

    /// Decodes an architecture from the service's JSON payload.
    ///
    /// Missing optional fields default to empty values. Each component must
    /// carry a `name`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the payload is not
    /// valid JSON or does not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the components in input order.
    pub fn components(&self) -> &[Component] {
        &self.architecture
    }

    /// Returns the names of external infrastructure pieces.
    pub fn external_infrastructure(&self) -> &[String] {
        &self.external_infrastructure
    }

    /// Returns the application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

/// A named unit of an architecture.
///
/// Only `name` and `uses` shape the graph. The remaining fields are carried
/// through unchanged as rendering metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Component {
    #[serde(rename = "type", default)]
    kind: String,

    name: String,

    #[serde(default)]
    purpose: String,

    /// Names of the components this one depends on, in declared order.
    #[serde(default)]
    uses: Vec<String>,

    /// Package identifiers, optionally pinned (`name==version`).
    #[serde(default)]
    pypi_packages: Vec<String>,

    #[serde(default)]
    is_endpoint: bool,
}

impl Component {
    /// Creates a component with the given name and no metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the component type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the human readable purpose.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Sets the names of the components this one uses.
    pub fn with_uses<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uses = uses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the package identifiers.
    pub fn with_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pypi_packages = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the component as an externally reachable endpoint.
    pub fn with_endpoint(mut self, is_endpoint: bool) -> Self {
        self.is_endpoint = is_endpoint;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn uses(&self) -> &[String] {
        &self.uses
    }

    pub fn pypi_packages(&self) -> &[String] {
        &self.pypi_packages
    }

    pub fn is_endpoint(&self) -> bool {
        self.is_endpoint
    }

    /// Returns package names with any `==version` pin removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archgraph_core::architecture::Component;
    /// let component = Component::new("api").with_packages(["fastapi==0.110.0", "httpx"]);
    /// let names: Vec<_> = component.package_names().collect();
    /// assert_eq!(names, ["fastapi", "httpx"]);
    /// ```
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.pypi_packages
            .iter()
            .map(|package| package.split("==").next().unwrap_or(package))
    }

    /// Returns a short caption listing at most `limit` package names.
    ///
    /// Remaining packages are folded into a `+N more` suffix. Returns `None`
    /// when the component has no packages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archgraph_core::architecture::Component;
    /// let component = Component::new("api").with_packages(["a==1", "b", "c", "d"]);
    /// assert_eq!(component.package_summary(2).as_deref(), Some("a, b +2 more"));
    /// ```
    pub fn package_summary(&self, limit: usize) -> Option<String> {
        if self.pypi_packages.is_empty() {
            return None;
        }

        let shown: Vec<&str> = self.package_names().take(limit).collect();
        let hidden = self.pypi_packages.len() - shown.len();

        let mut summary = shown.join(", ");
        if hidden > 0 {
            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(&format!("+{hidden} more"));
        }
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_payload() {
        let json = r#"{
            "architecture": [
                {
                    "type": "api",
                    "name": "gateway",
                    "purpose": "Entry point",
                    "uses": ["auth", "redis"],
                    "pypi_packages": ["fastapi==0.110.0"],
                    "is_endpoint": true
                },
                {
                    "type": "service",
                    "name": "auth",
                    "purpose": "Authentication",
                    "uses": [],
                    "pypi_packages": [],
                    "is_endpoint": false
                }
            ],
            "external_infrastructure": ["redis"],
            "app_name": "shop"
        }"#;

        let architecture = Architecture::from_json(json).unwrap();

        assert_eq!(architecture.app_name(), "shop");
        assert_eq!(architecture.external_infrastructure(), ["redis"]);
        assert_eq!(architecture.components().len(), 2);

        let gateway = &architecture.components()[0];
        assert_eq!(gateway.name(), "gateway");
        assert_eq!(gateway.kind(), "api");
        assert_eq!(gateway.purpose(), "Entry point");
        assert_eq!(gateway.uses(), ["auth", "redis"]);
        assert!(gateway.is_endpoint());
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let json = r#"{"architecture": [{"name": "solo"}]}"#;

        let architecture = Architecture::from_json(json).unwrap();

        assert_eq!(architecture.app_name(), "");
        assert!(architecture.external_infrastructure().is_empty());

        let solo = &architecture.components()[0];
        assert_eq!(solo.kind(), "");
        assert!(solo.uses().is_empty());
        assert!(solo.pypi_packages().is_empty());
        assert!(!solo.is_endpoint());
    }

    #[test]
    fn test_from_json_requires_name() {
        let json = r#"{"architecture": [{"type": "module"}]}"#;
        assert!(Architecture::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Architecture::from_json("{ not json").is_err());
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let component = Component::new("db").with_kind("database");
        let value = serde_json::to_value(&component).unwrap();

        assert_eq!(value["type"], "database");
        assert_eq!(value["name"], "db");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_package_names_strip_pins() {
        let component = Component::new("api").with_packages(["fastapi==0.110.0", "uvicorn"]);
        let names: Vec<&str> = component.package_names().collect();
        assert_eq!(names, ["fastapi", "uvicorn"]);
    }

    #[test]
    fn test_package_summary() {
        let none = Component::new("a");
        assert_eq!(none.package_summary(2), None);

        let few = Component::new("b").with_packages(["x==1.0", "y"]);
        assert_eq!(few.package_summary(2).as_deref(), Some("x, y"));

        let many = Component::new("c").with_packages(["x", "y", "z"]);
        assert_eq!(many.package_summary(2).as_deref(), Some("x, y +1 more"));

        let hidden_only = Component::new("d").with_packages(["x"]);
        assert_eq!(hidden_only.package_summary(0).as_deref(), Some("+1 more"));
    }
}

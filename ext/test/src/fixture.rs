//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the inertia renderer.
//!
//! ```yaml
//! name: stale_get
//! description: GET with an outdated asset version is sent back to reload
//! renderer:
//!   version: "old"
//! cases:
//!   - name: conflict
//!     request:
//!       method: GET
//!       headers: { X-Inertia-Version: new }
//!     render: { component: Component, url: /page }
//!     expect:
//!       status: 409
//!       headers: { X-Inertia-Location: /page }
//!       header_count: 1
//!       no_body: true
//!       serializer_calls: 0
//! ```

use inertia::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{CountingSerializer, TestRequest};

const DEFAULT_TEMPLATE: &str = "<div id=\"app\" data-page='@PageObject@'></div>";

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub renderer: RendererConfig,
    pub cases: Vec<TestCase>,
}

/// Renderer capabilities for a fixture
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Current asset version; absent means none.
    pub version: Option<String>,
    pub template: String,
    pub escape_attribute: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            version: None,
            template: DEFAULT_TEMPLATE.to_string(),
            escape_attribute: false,
        }
    }
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(flatten)]
    pub call: CallConfig,
    pub expect: Expectation,
}

/// Incoming request
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub method: String,
    pub headers: BTreeMap<String, String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: BTreeMap::new(),
        }
    }
}

/// Which renderer operation the case exercises.
/// Uses untagged deserialization - each variant has a distinct key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CallConfig {
    Render { render: RenderConfig },
    Redirect { redirect: String },
    Location { location: String },
}

/// Render options
#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    pub component: String,
    pub url: String,
    #[serde(default)]
    pub props: Option<Props>,
    #[serde(default)]
    pub encrypt_history: bool,
    #[serde(default)]
    pub clear_history: bool,
}

/// Expected response
#[derive(Debug, Deserialize)]
pub struct Expectation {
    pub status: u16,
    /// Headers that must be present with exactly these values (names case-insensitive).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Headers that must be absent.
    #[serde(default)]
    pub absent_headers: Vec<String>,
    #[serde(default)]
    pub header_count: Option<usize>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub body_contains: Vec<String>,
    #[serde(default)]
    pub no_body: bool,
    #[serde(default)]
    pub serializer_calls: Option<usize>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Convert config to inertia types
// ═══════════════════════════════════════════════════════════════════════════════

impl RendererConfig {
    /// Build a renderer plus a handle on its serializer's call count.
    pub fn build(&self) -> (Renderer, CountingSerializer<JsonPageObjectSerializer>) {
        let serializer = CountingSerializer::new(JsonPageObjectSerializer);
        let escaping = if self.escape_attribute {
            AttributeEscaping::Html
        } else {
            AttributeEscaping::Verbatim
        };
        let renderer = Renderer::new(
            serializer.clone(),
            SimpleTemplateRenderer::new(self.template.clone()).with_escaping(escaping),
            StaticVersion::from(self.version.clone()),
        );
        (renderer, serializer)
    }
}

impl RequestConfig {
    /// Build a [`TestRequest`] from this config
    pub fn build(&self) -> TestRequest {
        self.headers
            .iter()
            .fold(TestRequest::new(self.method.clone()), |request, (k, v)| {
                request.with_header(k, v.clone())
            })
    }
}

impl RenderConfig {
    /// Build [`RenderOptions`] from this config
    pub fn build(&self) -> RenderOptions {
        RenderOptions {
            component: self.component.clone(),
            props: self.props.clone(),
            url: self.url.clone(),
            encrypt_history: self.encrypt_history,
            clear_history: self.clear_history,
        }
    }
}

impl Expectation {
    /// Every mismatch between `response` and this expectation.
    pub fn check(&self, response: &HttpResponse, serializer_calls: usize) -> Vec<String> {
        let mut failures = Vec::new();

        if response.status() != self.status {
            failures.push(format!(
                "status: expected {}, got {}",
                self.status,
                response.status()
            ));
        }

        for (name, expected) in &self.headers {
            let actual = response.header(name);
            if actual != Some(expected.as_str()) {
                failures.push(format!("header {name}: expected {expected:?}, got {actual:?}"));
            }
        }

        for name in &self.absent_headers {
            if let Some(actual) = response.header(name) {
                failures.push(format!("header {name}: expected absent, got {actual:?}"));
            }
        }

        if let Some(count) = self.header_count {
            if response.headers().len() != count {
                failures.push(format!(
                    "header count: expected {count}, got {:?}",
                    response.headers()
                ));
            }
        }

        if let Some(expected) = &self.body {
            if response.body() != Some(expected.as_str()) {
                failures.push(format!(
                    "body: expected {expected:?}, got {:?}",
                    response.body()
                ));
            }
        }

        for needle in &self.body_contains {
            if !response.body().is_some_and(|body| body.contains(needle.as_str())) {
                failures.push(format!(
                    "body: expected to contain {needle:?}, got {:?}",
                    response.body()
                ));
            }
        }

        if self.no_body && response.body().is_some() {
            failures.push(format!("body: expected none, got {:?}", response.body()));
        }

        if let Some(expected) = self.serializer_calls {
            if serializer_calls != expected {
                failures.push(format!(
                    "serializer calls: expected {expected}, got {serializer_calls}"
                ));
            }
        }

        failures
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub failures: Vec<String>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results.
    ///
    /// Each case gets a fresh renderer so serializer counts are per case.
    pub fn run(&self) -> Vec<CaseResult> {
        self.cases
            .iter()
            .map(|case| {
                let (renderer, serializer) = self.renderer.build();
                let request = case.request.build();

                let failures = match &case.call {
                    CallConfig::Render { render } => {
                        match renderer.render(&request, &render.build()) {
                            Ok(response) => case.expect.check(&response, serializer.calls()),
                            Err(err) => vec![format!("render failed: {err}")],
                        }
                    }
                    CallConfig::Redirect { redirect } => case
                        .expect
                        .check(&renderer.redirect(&request, redirect), serializer.calls()),
                    CallConfig::Location { location } => case
                        .expect
                        .check(&renderer.location(location), serializer.calls()),
                };

                CaseResult {
                    case_name: case.name.clone(),
                    passed: failures.is_empty(),
                    failures,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed:\n  {}",
                self.name,
                result.case_name,
                result.failures.join("\n  ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: inline
description: parses and runs
renderer:
  version: "1"
cases:
  - name: json
    request:
      headers: { X-Inertia: "true" }
    render: { component: Home, url: /, props: { a: 1 } }
    expect:
      status: 200
      body: '{"component":"Home","props":{"a":1},"url":"/","version":"1","encryptHistory":false,"clearHistory":false}'
  - name: redirect
    request: { method: DELETE }
    redirect: /home
    expect:
      status: 303
      headers: { location: /home }
  - name: wrong expectation
    location: https://example.com
    expect:
      status: 200
"#;

    #[test]
    fn test_inline_fixture() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        assert_eq!(fixture.cases.len(), 3);
        assert!(matches!(fixture.cases[1].call, CallConfig::Redirect { .. }));

        let results = fixture.run();
        assert!(results[0].passed, "{:?}", results[0].failures);
        assert!(results[1].passed, "{:?}", results[1].failures);
        assert!(!results[2].passed);
        assert_eq!(results[2].failures, vec!["status: expected 200, got 409"]);
    }

    #[test]
    fn test_multi_document() {
        let yaml = format!("{FIXTURE}\n---\n{}", FIXTURE.replace("inline", "second"));
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[1].name, "second");
    }
}

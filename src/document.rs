//! Swagger-2.0-shaped document model.
//!
//! Only the slices the post-processor touches are typed. Everything else the
//! author wrote (info, definitions, parameters, vendor extensions) rides in
//! flattened passthrough maps so the output keeps it intact.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A parsed API description: path templates mapped to their operations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Document {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, PathItem>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Up to one operation per HTTP method on a path.
///
/// Methods the post-processor never enriches (head, options) stay in `extra`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PathItem {
    /// Iterate the operations present on this path item with their methods.
    pub fn operations_mut(&mut self) -> impl Iterator<Item = (Method, &mut Operation)> {
        [
            (Method::Get, self.get.as_mut()),
            (Method::Put, self.put.as_mut()),
            (Method::Post, self.post.as_mut()),
            (Method::Patch, self.patch.as_mut()),
            (Method::Delete, self.delete.as_mut()),
        ]
        .into_iter()
        .filter_map(|(method, operation)| operation.map(|operation| (method, operation)))
    }
}

/// HTTP methods the enrichment rules distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Return the lowercase key used for this method in path items.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation: its documented responses keyed by status-code string.
///
/// `responses` is required by the Swagger schema; a document missing it fails
/// at parse time with the offending location in the error.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Operation {
    pub responses: BTreeMap<String, Response>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The documented outcome for one status code on one operation.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, HeaderDefinition>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A documented response header. Pure value data, never mutated once created.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct HeaderDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HeaderDefinition {
    /// Build a string-typed header with a fixed description.
    pub fn string(description: &str) -> Self {
        HeaderDefinition {
            description: Some(description.to_string()),
            kind: Some("string".to_string()),
            extra: BTreeMap::new(),
        }
    }
}

use crate::Value;
use crate::coercion::CoercionError;
use crate::execution::ExecutionError;
use crate::loc::DocumentPosition;
use crate::validation::ValidationError;

/// One step of the path from the response root to a field or list item.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "{idx}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}
impl std::convert::From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

/// A client-visible error entry of a [`Response`].
///
/// https://spec.graphql.org/October2021/#sec-Errors
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResponseError {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<DocumentPosition>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
}
impl ResponseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            locations: vec![],
            message: message.into(),
            path: None,
        }
    }

    pub fn with_locations(mut self, locations: Vec<DocumentPosition>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }
}
impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        if let Some(path) = &self.path {
            let rendered: Vec<String> = path.iter().map(PathSegment::to_string).collect();
            write!(f, " (at {})", rendered.join("."))?;
        }
        Ok(())
    }
}
impl std::convert::From<CoercionError> for ResponseError {
    fn from(err: CoercionError) -> Self {
        Self::new(err.to_string())
    }
}
impl std::convert::From<ExecutionError> for ResponseError {
    fn from(err: ExecutionError) -> Self {
        Self::new(err.to_string()).with_locations(err.locations().to_vec())
    }
}
impl std::convert::From<ValidationError> for ResponseError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.to_string()).with_locations(err.locations().to_vec())
    }
}

/// The result of executing one operation: the data tree (when execution
/// started) and every error raised along the way, in the order raised.
///
/// https://spec.graphql.org/October2021/#sec-Response-Format
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}
impl Response {
    /// A response for a request that failed before execution began.
    pub fn from_errors(errors: impl IntoIterator<Item = impl Into<ResponseError>>) -> Self {
        Self {
            data: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

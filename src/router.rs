//! Route resolution: the documentation page and a catch-all fallback.

use std::fmt;

pub const ROOT: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// The documentation page.
    #[default]
    Index,
    /// Any path that matches no page.
    NotFound { path: String },
}

impl Route {
    /// Map a path to a route. Unknown paths are not errors.
    pub fn resolve(path: &str) -> Self {
        match path.trim() {
            "" | ROOT => Route::Index,
            other => {
                tracing::warn!(path = other, "Attempted to access non-existent route");
                Route::NotFound {
                    path: other.to_string(),
                }
            }
        }
    }

    pub fn home() -> Self {
        Route::Index
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Index => ROOT,
            Route::NotFound { path } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

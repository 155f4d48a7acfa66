//! Column declarations and display hooks
//!
//! A `ColumnSpec` names one column of the table, declares whether it
//! participates in sorting and global filtering, and carries an opaque
//! render hook owned by the presentation layer. The engine invokes hooks
//! with a cell value and passes the resulting `DisplayToken` through without
//! inspecting it.

use crate::CellValue;
use std::fmt;
use std::sync::Arc;

/// Render hook: pure mapping from a cell value to a display token
pub type RenderFn = Arc<dyn Fn(&CellValue) -> DisplayToken + Send + Sync>;

/// Output of a render hook
///
/// `style` is an uninterpreted hint the presentation layer assigns and
/// consumes; the engine treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayToken {
    /// Text to draw
    pub text: String,
    /// Optional styling hint (e.g. a CSS class or theme key)
    pub style: Option<String>,
}

impl DisplayToken {
    /// Create a plain token with no styling hint
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a token carrying a styling hint
    #[must_use]
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
        }
    }
}

/// Declaration of one table column
#[derive(Clone)]
pub struct ColumnSpec {
    /// Key used to look cells up on each record
    pub key: String,
    /// Header caption shown by frontends
    pub label: String,
    /// Whether toggling sort on this column has any effect
    pub sortable: bool,
    /// Whether the global filter matches against this column
    pub filterable: bool,
    render: Option<RenderFn>,
}

impl ColumnSpec {
    /// Create a sortable, filterable column whose label equals its key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            sortable: true,
            filterable: true,
            render: None,
        }
    }

    /// Set the header caption
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Exclude the column from sorting
    #[must_use]
    pub const fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Exclude the column from the global filter
    #[must_use]
    pub const fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Attach a render hook
    #[must_use]
    pub fn with_render(mut self, render: impl Fn(&CellValue) -> DisplayToken + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Render a cell through this column's hook
    ///
    /// Columns without a hook render the cell's plain text; missing cells
    /// render as empty text either way.
    #[must_use]
    pub fn render(&self, value: &CellValue) -> DisplayToken {
        match &self.render {
            Some(hook) => hook(value),
            None => DisplayToken::plain(value.to_string()),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("render", &self.render.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

/// Ordered set of column declarations
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<ColumnSpec>,
}

impl ColumnSet {
    /// Create a column set from declarations, keeping their order
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// Create a set of plain columns from bare keys
    #[must_use]
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: keys.into_iter().map(ColumnSpec::new).collect(),
        }
    }

    /// Columns in declaration order
    #[must_use]
    pub fn specs(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Look a column up by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Whether a key names a sortable column
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.get(key).is_some_and(|c| c.sortable)
    }

    /// Columns the global filter matches against
    pub fn filterable(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.filterable)
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the set declares no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

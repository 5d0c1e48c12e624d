//! Multi-column record filters.
//!
//! A filter is defined before any reader exists, as an [`UnboundFilter`]:
//! logical column paths plus a predicate. Once the readers of a scan are known
//! it is bound exactly once, resolving each path to a reader, and the
//! resulting [`BoundFilter`] answers [`RecordFilter::is_match`] for whatever
//! row the scan has positioned those readers at.
//!
//! Resolution is first match wins: when several readers share a physical path
//! (a repeated field), the predicate only ever sees the first of them in the
//! order the readers were supplied.

use std::{fmt, sync::Arc};

use crate::{
    error::{FilterError, Result},
    observability::{log_debug, log_warn},
    option::FilterOptions,
    path::parse_column_path,
    precondition::check_not_null,
    reader::ColumnReader,
};

/// Decides whether the current row matches.
pub trait RecordFilter {
    /// Returns true when the row the readers are positioned at matches.
    fn is_match(&self) -> bool;
}

/// Caller predicate over the bound readers of a filter.
///
/// `readers` arrive in the order the paths were requested. Implementations
/// read current values and must not move reader cursors.
pub trait MultiColumnPredicate<R: ?Sized> {
    /// Evaluates the current row.
    fn apply(&self, readers: &[&R]) -> bool;
}

impl<R, F> MultiColumnPredicate<R> for F
where
    R: ?Sized,
    F: Fn(&[&R]) -> bool,
{
    fn apply(&self, readers: &[&R]) -> bool {
        self(readers)
    }
}

/// Creates a filter applying `predicate` to the columns at `paths`.
///
/// Paths are dot separated, e.g. `"engine.capacity"`. If a path names a
/// repeated field only its first instance is matched against.
pub fn columns<I, S, P>(paths: I, predicate: P) -> UnboundFilter<P>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    UnboundFilter {
        paths: paths.into_iter().map(Into::into).collect(),
        predicate: Arc::new(predicate),
        options: FilterOptions::default(),
    }
}

/// Filter definition that has not yet been resolved against any readers.
pub struct UnboundFilter<P> {
    paths: Vec<String>,
    predicate: Arc<P>,
    options: FilterOptions,
}

impl<P> UnboundFilter<P> {
    /// Starts a builder; [`UnboundFilterBuilder::build`] requires a predicate.
    #[must_use]
    pub fn builder() -> UnboundFilterBuilder<P> {
        UnboundFilterBuilder::new()
    }

    /// Replaces the options used when binding.
    pub fn with_options(self, options: FilterOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, ..self })
    }

    /// Logical paths in request order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Options used when binding.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Resolves every requested path against `readers`.
    ///
    /// Each path is split into segments and compared with each reader's
    /// physical path in iteration order; the first equal one is taken. If any
    /// path has no reader the bind fails with
    /// [`FilterError::UnresolvedColumn`] naming it.
    pub fn bind<'r, R, I>(&self, readers: I) -> Result<BoundFilter<'r, R, P>>
    where
        R: ColumnReader + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
        P: MultiColumnPredicate<R>,
    {
        let available: Vec<&'r R> = readers.into_iter().collect();
        let mut bound = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let wanted = parse_column_path(path, self.options.path_delimiter);
            match available.iter().copied().find(|reader| reader.path() == &wanted) {
                Some(reader) => bound.push(reader),
                None => {
                    log_warn!(
                        component = "bind",
                        event = "column_unresolved",
                        path = %path,
                        available = available.len(),
                    );
                    return Err(FilterError::UnresolvedColumn { path: path.clone() });
                }
            }
        }
        log_debug!(
            component = "bind",
            event = "filter_bound",
            columns = bound.len(),
            available = available.len(),
        );
        Ok(BoundFilter {
            readers: bound,
            predicate: Arc::clone(&self.predicate),
        })
    }
}

impl<P> Clone for UnboundFilter<P> {
    fn clone(&self) -> Self {
        Self {
            paths: self.paths.clone(),
            predicate: Arc::clone(&self.predicate),
            options: self.options,
        }
    }
}

impl<P> fmt::Debug for UnboundFilter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnboundFilter")
            .field("paths", &self.paths)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for [`UnboundFilter`].
pub struct UnboundFilterBuilder<P> {
    paths: Vec<String>,
    predicate: Option<P>,
    options: FilterOptions,
}

impl<P> UnboundFilterBuilder<P> {
    fn new() -> Self {
        Self {
            paths: Vec::new(),
            predicate: None,
            options: FilterOptions::default(),
        }
    }

    /// Appends a logical path.
    #[must_use]
    pub fn column(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Appends several logical paths.
    #[must_use]
    pub fn columns<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the predicate.
    #[must_use]
    pub fn predicate(mut self, predicate: P) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the binding options.
    #[must_use]
    pub fn options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Finishes the filter, failing with [`FilterError::NullArgument`] when no
    /// predicate was given.
    pub fn build(self) -> Result<UnboundFilter<P>> {
        let predicate = check_not_null(self.predicate, "predicate")?;
        self.options.validate()?;
        Ok(UnboundFilter {
            paths: self.paths,
            predicate: Arc::new(predicate),
            options: self.options,
        })
    }
}

/// A filter resolved against the readers of one scan.
pub struct BoundFilter<'r, R: ?Sized, P> {
    readers: Vec<&'r R>,
    predicate: Arc<P>,
}

impl<'r, R, P> BoundFilter<'r, R, P>
where
    R: ?Sized,
    P: MultiColumnPredicate<R>,
{
    /// Bound readers, one per requested path, in request order.
    pub fn readers(&self) -> &[&'r R] {
        &self.readers
    }

    /// Applies the predicate to the bound readers at their current row.
    pub fn is_match(&self) -> bool {
        self.predicate.apply(&self.readers)
    }
}

impl<R, P> RecordFilter for BoundFilter<'_, R, P>
where
    R: ?Sized,
    P: MultiColumnPredicate<R>,
{
    fn is_match(&self) -> bool {
        BoundFilter::is_match(self)
    }
}

impl<R: ?Sized, P> fmt::Debug for BoundFilter<'_, R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundFilter")
            .field("columns", &self.readers.len())
            .finish_non_exhaustive()
    }
}

//! Identifier allocation for new entities.

/// Returns an id strictly greater than every id in `ids`, or `1` when the
/// collection is empty.
///
/// Pure; callers that must guarantee no reuse after deletion combine this
/// with a high-water mark (see `SessionStore`) or rely on the database's
/// monotonic rowid allocation.
pub fn next_id<I>(ids: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    ids.into_iter().max().map_or(1, |max| max + 1)
}

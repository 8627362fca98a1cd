//! Classification of database errors for the HTTP boundary.

/// Returns `true` when the error means the database cannot serve requests
/// right now (pool exhausted or closed, broken connection, statement
/// cancelled by `statement_timeout`, server shutting down).
///
/// Callers answer these with 503 so clients retry; everything else is an
/// internal error.
pub fn is_unavailable(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| is_unavailable_sqlstate(&code)),
        _ => false,
    }
}

/// SQLSTATE classes that indicate a transient server-side condition.
///
/// - `08xxx` connection exception
/// - `53300` too many connections
/// - `57014` query canceled (statement timeout)
/// - `57Pxx` admin/crash shutdown, cannot connect now
pub fn is_unavailable_sqlstate(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("57P") || code == "57014" || code == "53300"
}

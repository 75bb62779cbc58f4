use sqlparser::{
    ast::Statement,
    dialect::{Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect},
    parser::Parser
};

use crate::checks::CheckError;

/// SQL dialect for parsing
///
/// PostgreSQL is the default: `$n` placeholders are the positional
/// parameter syntax the semantic checks target.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub enum SqlDialect {
    Generic,
    MySQL,
    #[default]
    PostgreSQL,
    SQLite
}

impl SqlDialect {
    /// Convert to sqlparser dialect for parsing
    pub fn into_parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Generic => Box::new(GenericDialect {}),
            Self::MySQL => Box::new(MySqlDialect {}),
            Self::PostgreSQL => Box::new(PostgreSqlDialect {}),
            Self::SQLite => Box::new(SQLiteDialect {})
        }
    }

    /// Parse a dialect name as written in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "generic" => Some(Self::Generic),
            "mysql" => Some(Self::MySQL),
            "postgresql" | "postgres" => Some(Self::PostgreSQL),
            "sqlite" => Some(Self::SQLite),
            _ => None
        }
    }
}

/// Parse the first statement of an embedded SQL fragment.
///
/// A parser rejection becomes a `Syntax` check error carrying the
/// parser's message verbatim. A fragment containing no statement at all
/// is also a syntax error: embedded-string extraction cannot tell SQL
/// from arbitrary text, so empty candidates are reported rather than
/// silently skipped.
pub fn parse_first(sql: &str, dialect: SqlDialect) -> Result<Statement, CheckError> {
    let parser_dialect = dialect.into_parser_dialect();
    let statements = Parser::parse_sql(parser_dialect.as_ref(), sql)
        .map_err(|e| CheckError::syntax(e.to_string()))?;
    statements
        .into_iter()
        .next()
        .ok_or_else(|| CheckError::syntax("Expected a SQL statement, found none"))
}

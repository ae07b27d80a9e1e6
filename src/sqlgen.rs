//! SQL statement generation.
//!
//! Pure functions that turn a table schema plus one raw fixture line into
//! the statements the rewritten file carries. No I/O happens here.

use crate::error::{FixqlError, FixqlResult};
use crate::schema::TableSchema;

/// Marker separating a data row's prefix from its value list.
const VALUES_MARKER: &str = "VALUES";

/// Generate a `CREATE TABLE` statement for one schema.
///
/// Columns appear in declaration order, comma-separated, with no trailing
/// comma and no terminating semicolon:
///
/// ```
/// use fixql::schema::SchemaCatalog;
/// use fixql::sqlgen::build_create_table;
///
/// let catalog = SchemaCatalog::standard();
/// let sql = build_create_table(catalog.get("STUDENT").unwrap());
/// assert_eq!(sql, "CREATE TABLE STUDENT (sid int, sname varchar(50))");
/// ```
pub fn build_create_table(schema: &TableSchema) -> String {
    let cols: Vec<String> = schema
        .columns
        .iter()
        .map(|c| format!("{} {}", c.name, c.ty))
        .collect();
    format!("CREATE TABLE {} ({})", schema.name, cols.join(", "))
}

/// Coerce the leading id of a value list from a quoted numeral to a bare
/// integer token: `('1', 'a', 'b')` becomes `(1, 'a', 'b')`.
///
/// Splits on the first comma only, drops the first character of the head
/// (the opening parenthesis), and strips every `'` from what remains. The
/// stripping is unconditional rather than limited to the delimiting pair,
/// so an id that embeds a quote character loses it silently; see the test
/// pinning that behavior before changing it.
///
/// # Panics
///
/// Panics if `values` contains no comma; the row contract guarantees
/// exactly one split point.
pub fn coerce_leading_id(values: &str) -> String {
    let Some((head, tail)) = values.split_once(',') else {
        panic!("value list has no comma to split on: {values:?}");
    };
    let id: String = head.chars().skip(1).filter(|&c| c != '\'').collect();

    let mut out = String::with_capacity(values.len());
    out.push('(');
    out.push_str(&id);
    out.push(',');
    out.push_str(tail);
    out
}

/// Generate an `INSERT` statement for one data row.
///
/// The row must contain the literal `VALUES`; everything after its first
/// occurrence, minus the final character of the line (the trailing
/// terminator), is the value list. The column list always comes from the
/// schema in declaration order; the row's own arity is not checked.
///
/// # Errors
///
/// Returns [`FixqlError::MalformedQuery`] when the row has no `VALUES`
/// marker.
///
/// # Panics
///
/// Panics (via [`coerce_leading_id`]) if the value list has no comma.
pub fn build_insert(line: &str, schema: &TableSchema) -> FixqlResult<String> {
    let Some(idx) = line.find(VALUES_MARKER) else {
        return Err(FixqlError::malformed(line));
    };

    // Value list: everything after the marker, minus the trailing ';'.
    let mut rest = line[idx + VALUES_MARKER.len()..].chars();
    rest.next_back();
    let values = coerce_leading_id(rest.as_str());

    let cols: Vec<&str> = schema.column_names().collect();
    let mut sql = String::from("INSERT INTO ");
    sql.push_str(&schema.name);
    sql.push_str(" (");
    sql.push_str(&cols.join(", "));
    sql.push_str(") VALUES ");
    sql.push_str(&values);
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaCatalog;

    #[test]
    fn test_create_table_student() {
        let catalog = SchemaCatalog::standard();
        let sql = build_create_table(catalog.get("STUDENT").unwrap());
        assert_eq!(sql, "CREATE TABLE STUDENT (sid int, sname varchar(50))");
    }

    #[test]
    fn test_create_table_section() {
        let catalog = SchemaCatalog::standard();
        let sql = build_create_table(catalog.get("SECTION").unwrap());
        assert_eq!(
            sql,
            "CREATE TABLE SECTION (secid int, courseid int, staffid int)"
        );
    }

    #[test]
    fn test_create_table_comma_count() {
        let catalog = SchemaCatalog::standard();
        for table in catalog.tables() {
            let sql = build_create_table(table);
            assert!(sql.starts_with(&format!("CREATE TABLE {} (", table.name)));
            assert_eq!(
                sql.matches(',').count(),
                table.columns.len() - 1,
                "unexpected comma count for {}",
                table.name
            );
        }
    }

    #[test]
    fn test_coerce_leading_id() {
        assert_eq!(coerce_leading_id("('1', 'a', 'b')"), "(1, 'a', 'b')");
    }

    #[test]
    fn test_coerce_strips_every_quote_in_id() {
        // Unconditional stripping: an embedded quote in the id field
        // disappears along with the delimiting pair.
        assert_eq!(coerce_leading_id("('12''3', 'x')"), "(123, 'x')");
    }

    #[test]
    fn test_coerce_preserves_tail_spacing() {
        assert_eq!(coerce_leading_id("('7','a','b')"), "(7,'a','b')");
    }

    #[test]
    #[should_panic(expected = "no comma")]
    fn test_coerce_requires_a_split_point() {
        coerce_leading_id("('1')");
    }

    #[test]
    fn test_insert_statement_student() {
        let catalog = SchemaCatalog::standard();
        let student = catalog.get("STUDENT").unwrap();
        let sql = build_insert("INSERT INTO STUDENT VALUES('1', 'a', 'b');", student).unwrap();
        // Three values against two columns: arity is not checked, the row
        // passes through unchanged.
        assert_eq!(sql, "INSERT INTO STUDENT (sid, sname) VALUES (1, 'a', 'b')");
    }

    #[test]
    fn test_insert_statement_three_columns() {
        let catalog = SchemaCatalog::standard();
        let enroll = catalog.get("ENROLL").unwrap();
        let sql = build_insert("INSERT INTO ENROLL VALUES('7', '1', '2');", enroll).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO ENROLL (eid, studentid, sectionid) VALUES (7, '1', '2')"
        );
    }

    #[test]
    fn test_insert_requires_values_marker() {
        let catalog = SchemaCatalog::standard();
        let student = catalog.get("STUDENT").unwrap();
        let err = build_insert("('1', 'a', 'b');", student).unwrap_err();
        assert!(err.to_string().contains("does not contain VALUES"));
    }

    #[test]
    fn test_insert_uses_first_values_occurrence() {
        let catalog = SchemaCatalog::standard();
        let course = catalog.get("COURSE").unwrap();
        let sql = build_insert("INSERT INTO COURSE VALUES('3', 'VALUES');", course).unwrap();
        assert_eq!(sql, "INSERT INTO COURSE (cid, cname) VALUES (3, 'VALUES')");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let catalog = SchemaCatalog::standard();
        let staff = catalog.get("STAFF").unwrap();
        assert!(build_insert("insert into STAFF values('1', 'z');", staff).is_err());
    }
}

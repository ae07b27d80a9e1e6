//! Fixture table schemas.
//!
//! The rewriter targets a fixed catalog of five tables. Column order is
//! declaration order everywhere: it drives the generated `CREATE TABLE`
//! body, the column list of every `INSERT`, and the order in which the
//! batch visits tables.

use std::fmt;

/// Column type as it appears in the generated DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Varchar(u16),
}

impl ColumnType {
    /// Render as the SQL type token used in `CREATE TABLE` output.
    ///
    /// Lowercase on purpose: the fixture schemas declare `int` and
    /// `varchar(50)`, and the rewritten files must carry those exact
    /// tokens.
    pub fn sql_type(&self) -> String {
        match self {
            Self::Int => "int".to_string(),
            Self::Varchar(len) => format!("varchar({})", len),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql_type())
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An ordered table schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, col: Column) -> Self {
        self.columns.push(col);
        self
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

/// The full set of rewrite targets, in declaration order.
///
/// Backed by a `Vec` rather than a map: the batch walks tables in
/// declaration order and aborts on the first failure, so iteration order
/// is part of the observable behavior.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    tables: Vec<TableSchema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: STUDENT, STAFF, COURSE, SECTION, ENROLL.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.add_table(
            TableSchema::new("STUDENT")
                .column(Column::new("sid", ColumnType::Int))
                .column(Column::new("sname", ColumnType::Varchar(50))),
        );
        catalog.add_table(
            TableSchema::new("STAFF")
                .column(Column::new("stid", ColumnType::Int))
                .column(Column::new("stname", ColumnType::Varchar(50))),
        );
        catalog.add_table(
            TableSchema::new("COURSE")
                .column(Column::new("cid", ColumnType::Int))
                .column(Column::new("cname", ColumnType::Varchar(50))),
        );
        catalog.add_table(
            TableSchema::new("SECTION")
                .column(Column::new("secid", ColumnType::Int))
                .column(Column::new("courseid", ColumnType::Int))
                .column(Column::new("staffid", ColumnType::Int)),
        );
        catalog.add_table(
            TableSchema::new("ENROLL")
                .column(Column::new("eid", ColumnType::Int))
                .column(Column::new("studentid", ColumnType::Int))
                .column(Column::new("sectionid", ColumnType::Int)),
        );
        catalog
    }

    pub fn add_table(&mut self, table: TableSchema) {
        self.tables.push(table);
    }

    /// Look up a table schema by exact name.
    pub fn get(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// All table schemas in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = &TableSchema> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

//! The closed DDL statement tree.
//!
//! One variant per supported grammar production plus an `Other` catch-all,
//! so classification downstream is an exhaustive match. Nodes carry exactly
//! the clause structure the classifiers inspect; anything the front end
//! cannot attribute to a clause simply stays absent, which degrades to the
//! statement's baseline classification rather than an error.

use std::fmt;

/// A namespace-qualified name as written in the statement, identifiers
/// already normalized (quotes stripped, case folded per PostgreSQL rules).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub name: String,
}

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One top-level DDL statement, reduced to the shape the classifiers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlStatement {
    CreateSchema(CreateSchemaStmt),
    CreateTable(CreateTableStmt),
    AlterTable(AlterTableStmt),
    /// ALTER TABLE ALL IN TABLESPACE ...
    AlterTableAllInTablespace,
    CreateSequence(CreateSequenceStmt),
    AlterSequence(AlterSequenceStmt),
    CreateIndex(CreateIndexStmt),
    /// ALTER INDEX set/reset/attach forms (rename and depends-on are
    /// separate variants)
    AlterIndex,
    CreateExtension(CreateExtensionStmt),
    AlterExtension(AlterExtensionStmt),
    AlterExtensionContents(AlterExtensionContentsStmt),
    CreateCollation(CreateCollationStmt),
    CreateOperator(CreateOperatorStmt),
    CreateAggregate,
    CreateType(CreateTypeStmt),
    AlterType,
    CreatePolicy(PolicyStmt),
    AlterPolicy(PolicyStmt),
    CreateView(CreateViewStmt),
    AlterView(AlterViewStmt),
    AlterMaterializedView,
    CreateFunction(CreateFunctionStmt),
    CreateDomain,
    CreateTrigger,
    CreateRule,
    CreateStatistics,
    CreateSubscription,
    AlterSubscription,
    CreateAccessMethod,
    CreateCast,
    CreateForeignTable,
    CreateOperatorClass,
    CreateOperatorFamily,
    Rename(RenameStmt),
    AlterObjectSchema(AlterObjectSchemaStmt),
    AlterOwner(AlterOwnerStmt),
    AlterObjectDepends(AlterObjectDependsStmt),
    Grant(GrantStmt),
    /// Any statement shape with no dedicated variant.
    Other,
}

impl DdlStatement {
    /// Short statement-kind label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DdlStatement::CreateSchema(_) => "create schema",
            DdlStatement::CreateTable(_) => "create table",
            DdlStatement::AlterTable(_) => "alter table",
            DdlStatement::AlterTableAllInTablespace => "alter table all in tablespace",
            DdlStatement::CreateSequence(_) => "create sequence",
            DdlStatement::AlterSequence(_) => "alter sequence",
            DdlStatement::CreateIndex(_) => "create index",
            DdlStatement::AlterIndex => "alter index",
            DdlStatement::CreateExtension(_) => "create extension",
            DdlStatement::AlterExtension(_) => "alter extension",
            DdlStatement::AlterExtensionContents(_) => "alter extension contents",
            DdlStatement::CreateCollation(_) => "create collation",
            DdlStatement::CreateOperator(_) => "create operator",
            DdlStatement::CreateAggregate => "create aggregate",
            DdlStatement::CreateType(_) => "create type",
            DdlStatement::AlterType => "alter type",
            DdlStatement::CreatePolicy(_) => "create policy",
            DdlStatement::AlterPolicy(_) => "alter policy",
            DdlStatement::CreateView(_) => "create view",
            DdlStatement::AlterView(_) => "alter view",
            DdlStatement::AlterMaterializedView => "alter materialized view",
            DdlStatement::CreateFunction(_) => "create function",
            DdlStatement::CreateDomain => "create domain",
            DdlStatement::CreateTrigger => "create trigger",
            DdlStatement::CreateRule => "create rule",
            DdlStatement::CreateStatistics => "create statistics",
            DdlStatement::CreateSubscription => "create subscription",
            DdlStatement::AlterSubscription => "alter subscription",
            DdlStatement::CreateAccessMethod => "create access method",
            DdlStatement::CreateCast => "create cast",
            DdlStatement::CreateForeignTable => "create foreign table",
            DdlStatement::CreateOperatorClass => "create operator class",
            DdlStatement::CreateOperatorFamily => "create operator family",
            DdlStatement::Rename(_) => "rename",
            DdlStatement::AlterObjectSchema(_) => "alter object schema",
            DdlStatement::AlterOwner(_) => "alter owner",
            DdlStatement::AlterObjectDepends(_) => "alter object depends",
            DdlStatement::Grant(_) => "grant",
            DdlStatement::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchemaStmt {
    /// CREATE SCHEMA ... with embedded element statements
    pub has_elements: bool,
}

/// ON COMMIT clause of a temporary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnCommitClause {
    Drop,
    DeleteRows,
    PreserveRows,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateTableStmt {
    pub name: Option<QualifiedName>,
    pub if_not_exists: bool,
    pub temp: bool,
    /// CREATE TABLE name OF type (not PARTITION OF)
    pub of_type: bool,
    pub on_commit: Option<OnCommitClause>,
    /// WITH (...) / WITHOUT OIDS storage options
    pub storage_options: bool,
    pub partition_by: bool,
    pub tablespace: bool,
    pub inherits: bool,
    /// USING access_method
    pub using_method: bool,
    /// LIKE source_table element
    pub like_clause: bool,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub type_name: String,
    pub constraints: Vec<ColumnConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnConstraint {
    NotNull,
    Null,
    Unique { with_options: bool },
    PrimaryKey { with_options: bool },
    Check,
    Default,
    GeneratedIdentity,
    GeneratedStored,
    /// COLLATE, deferrability attributes, and anything else without its own
    /// classification
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    Check,
    Unique { with_options: bool },
    PrimaryKey { with_options: bool },
    Exclude,
    ForeignKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSequenceStmt {
    /// TEMP / TEMPORARY / UNLOGGED
    pub temp: bool,
    pub name: Option<QualifiedName>,
    pub options: Vec<SequenceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOption {
    /// AS smallint/integer/bigint (raw lowered spelling)
    AsType(String),
    IncrementBy(i64),
    StartWith(i64),
    MinValue(i64),
    NoMinValue,
    MaxValue(i64),
    NoMaxValue,
    Cache(i64),
    Cycle,
    NoCycle,
    OwnedBy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterSequenceStmt {
    pub cmd: AlterSequenceCmd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterSequenceCmd {
    OwnedBy,
    OwnerTo,
    /// Any other sequence option change
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndexStmt {
    pub unique: bool,
    /// USING access method name, as written
    pub using: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExtensionStmt {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterExtensionStmt {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddDrop {
    Add,
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterExtensionContentsStmt {
    pub action: AddDrop,
}

/// One `key [= value]` element of a definition list, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefElem {
    pub name: String,
    pub value: Option<String>,
}

impl DefElem {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCollationStmt {
    pub name: Option<QualifiedName>,
    /// Parenthesized definition list, in source order
    pub options: Vec<DefElem>,
    /// Bare `FROM existing_collation` form
    pub from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOperatorStmt {
    pub options: Vec<DefElem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    Composite { has_fields: bool },
    Enum,
    Range,
    Base,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTypeStmt {
    pub kind: TypeDefKind,
}

/// CREATE POLICY / ALTER POLICY share the same referenced shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStmt {
    pub name: Option<String>,
    pub table: Option<QualifiedName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateViewStmt {
    pub materialized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterViewCmd {
    AlterColumn,
    OwnerTo,
    Reset,
    Set,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterViewStmt {
    pub cmd: AlterViewCmd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFunctionStmt {
    pub is_procedure: bool,
    /// RETURNS type / RETURNS TABLE (...) present
    pub has_declared_return: bool,
    /// LANGUAGE name, lower-cased
    pub language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameTarget {
    Index,
    View,
    Type,
    /// ALTER TABLE ... RENAME COLUMN
    Column { only: bool },
    /// ALTER TABLE ... RENAME CONSTRAINT
    Constraint,
    /// ALTER TABLE ... RENAME TO
    Table,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStmt {
    pub target: RenameTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetSchemaTarget {
    Extension { names: Vec<String> },
    View,
    Type,
    Table,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterObjectSchemaStmt {
    pub target: SetSchemaTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerTarget {
    Schema,
    Aggregate,
    Statistics,
    Subscription,
    Collation,
    Function,
    Type,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterOwnerStmt {
    pub target: OwnerTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependsTarget {
    Trigger,
    MaterializedView,
    Index,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterObjectDependsStmt {
    pub target: DependsTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantTarget {
    Domain,
    Language,
    LargeObject,
    Procedure,
    Routine,
    Type,
    ForeignServer,
    ForeignDataWrapper,
    /// Tables, sequences, schemas, functions: no dedicated feature key
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantStmt {
    pub target: GrantTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlterTableStmt {
    pub if_exists: bool,
    pub only: bool,
    pub cmds: Vec<AlterTableCmd>,
}

/// Enable mode for trigger/rule commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableMode {
    Normal,
    Always,
    Replica,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterTableCmd {
    AddColumn { column: ColumnDef },
    DropColumn,
    AlterColumn(AlterColumnCmd),
    AddConstraint,
    AlterConstraint,
    ValidateConstraint,
    DropConstraint,
    AttachPartition,
    DetachPartition,
    OwnerTo,
    EnableTrigger(EnableMode),
    DisableTrigger,
    EnableRule(EnableMode),
    DisableRule,
    Inherit { no: bool },
    OfType { not: bool },
    SetTablespace,
    SetWithoutOids,
    SetWithoutCluster,
    SetLogged,
    SetUnlogged,
    ReplicaIdentity,
    ClusterOn,
    RowLevelSecurity,
    SetOptions,
    ResetOptions,
    /// Unrecognized command; contributes nothing to classification
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterColumnCmd {
    /// TYPE ... USING expr
    TypeWithUsing,
    /// TYPE without USING
    Type,
    /// SET DEFAULT / DROP DEFAULT
    Default,
    SetNotNull,
    DropNotNull,
    DropExpression,
    SetStatistics,
    SetStorage,
    AddIdentity,
    DropIdentity,
    SetIdentity,
    SetAttributeOptions,
    ResetAttributeOptions,
    Other,
}

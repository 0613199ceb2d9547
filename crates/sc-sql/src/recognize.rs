//! Keyword-level statement recognizer.
//!
//! sqlparser has no grammar for a large slice of PostgreSQL DDL (CREATE
//! COLLATION, CREATE OPERATOR, ALTER EXTENSION, most ALTER forms). This
//! module recognizes those statements from their token stream, mirroring the
//! clause-presence checks the classification rules are defined in terms of.
//! Recognition is best-effort and total: anything not understood yields
//! `None` and degrades to `DdlStatement::Other` upstream.

use crate::ddl::*;
use crate::scan::*;

/// Recognize one statement text, if it belongs to a family this module owns.
pub fn recognize(sql: &str) -> Option<DdlStatement> {
    let tokens = tokenize(sql);
    if tokens.is_empty() {
        return None;
    }
    if keyword_at(&tokens, 0, "CREATE") {
        recognize_create(&tokens)
    } else if keyword_at(&tokens, 0, "ALTER") {
        recognize_alter(&tokens)
    } else if keyword_at(&tokens, 0, "GRANT") {
        Some(DdlStatement::Grant(GrantStmt {
            target: grant_target(&tokens),
        }))
    } else {
        None
    }
}

fn recognize_create(tokens: &[String]) -> Option<DdlStatement> {
    let mut i = 1;
    if keywords_at(tokens, i, &["OR", "REPLACE"]) {
        i += 2;
    }
    while keyword_at(tokens, i, "GLOBAL") || keyword_at(tokens, i, "LOCAL") {
        i += 1;
    }
    let mut temp = false;
    if keyword_at(tokens, i, "TEMP")
        || keyword_at(tokens, i, "TEMPORARY")
        || keyword_at(tokens, i, "UNLOGGED")
    {
        temp = true;
        i += 1;
    }

    if keyword_at(tokens, i, "SCHEMA") {
        let has_elements = find_keyword(tokens, i + 1, "CREATE").is_some();
        return Some(DdlStatement::CreateSchema(CreateSchemaStmt { has_elements }));
    }
    if keyword_at(tokens, i, "SEQUENCE") {
        return Some(recognize_create_sequence(tokens, i + 1, temp));
    }
    if keyword_at(tokens, i, "UNIQUE") && keyword_at(tokens, i + 1, "INDEX") {
        return Some(recognize_create_index(tokens, i + 2, true));
    }
    if keyword_at(tokens, i, "INDEX") {
        return Some(recognize_create_index(tokens, i + 1, false));
    }
    if keyword_at(tokens, i, "COLLATION") {
        return Some(recognize_create_collation(tokens, i + 1));
    }
    if keyword_at(tokens, i, "OPERATOR") {
        if keyword_at(tokens, i + 1, "CLASS") {
            return Some(DdlStatement::CreateOperatorClass);
        }
        if keyword_at(tokens, i + 1, "FAMILY") {
            return Some(DdlStatement::CreateOperatorFamily);
        }
        return Some(recognize_create_operator(tokens, i + 1));
    }
    if keyword_at(tokens, i, "AGGREGATE") {
        return Some(DdlStatement::CreateAggregate);
    }
    if keyword_at(tokens, i, "TYPE") {
        return Some(recognize_create_type(tokens, i + 1));
    }
    if keywords_at(tokens, i, &["ACCESS", "METHOD"]) {
        return Some(DdlStatement::CreateAccessMethod);
    }
    if keyword_at(tokens, i, "CAST") {
        return Some(DdlStatement::CreateCast);
    }
    if keyword_at(tokens, i, "DOMAIN") {
        return Some(DdlStatement::CreateDomain);
    }
    if keyword_at(tokens, i, "STATISTICS") {
        return Some(DdlStatement::CreateStatistics);
    }
    if keyword_at(tokens, i, "SUBSCRIPTION") {
        return Some(DdlStatement::CreateSubscription);
    }
    if keyword_at(tokens, i, "RULE") {
        return Some(DdlStatement::CreateRule);
    }
    if keyword_at(tokens, i, "TRIGGER") || keywords_at(tokens, i, &["CONSTRAINT", "TRIGGER"]) {
        return Some(DdlStatement::CreateTrigger);
    }
    if keyword_at(tokens, i, "FUNCTION") {
        return Some(recognize_create_function(tokens, false));
    }
    if keyword_at(tokens, i, "PROCEDURE") {
        return Some(recognize_create_function(tokens, true));
    }
    if keywords_at(tokens, i, &["FOREIGN", "TABLE"]) {
        return Some(DdlStatement::CreateForeignTable);
    }
    if keyword_at(tokens, i, "POLICY") {
        return Some(DdlStatement::CreatePolicy(recognize_policy(tokens, i + 1)));
    }
    if keyword_at(tokens, i, "EXTENSION") {
        let mut j = i + 1;
        if keywords_at(tokens, j, &["IF", "NOT", "EXISTS"]) {
            j += 3;
        }
        let name = tokens.get(j).map(|t| normalize_ident(t))?;
        return Some(DdlStatement::CreateExtension(CreateExtensionStmt { name }));
    }
    if keywords_at(tokens, i, &["MATERIALIZED", "VIEW"]) {
        return Some(DdlStatement::CreateView(CreateViewStmt { materialized: true }));
    }
    if keyword_at(tokens, i, "RECURSIVE") && keyword_at(tokens, i + 1, "VIEW") {
        return Some(DdlStatement::CreateView(CreateViewStmt {
            materialized: false,
        }));
    }
    if keyword_at(tokens, i, "VIEW") {
        return Some(DdlStatement::CreateView(CreateViewStmt {
            materialized: false,
        }));
    }
    if keyword_at(tokens, i, "TABLE") {
        return Some(recognize_create_table(tokens, i + 1, temp));
    }
    None
}

fn recognize_create_sequence(tokens: &[String], mut i: usize, temp: bool) -> DdlStatement {
    if keywords_at(tokens, i, &["IF", "NOT", "EXISTS"]) {
        i += 3;
    }
    let (name, mut j) = match qualified_name_at(tokens, i) {
        Some((name, next)) => (Some(name), next),
        None => (None, i),
    };

    let mut options = Vec::new();
    while j < tokens.len() {
        if keyword_at(tokens, j, "AS") {
            if let Some(ty) = tokens.get(j + 1) {
                options.push(SequenceOption::AsType(ty.clone()));
            }
            j += 2;
        } else if keyword_at(tokens, j, "INCREMENT") {
            j += 1;
            if keyword_at(tokens, j, "BY") {
                j += 1;
            }
            if let Some((n, next)) = signed_number_at(tokens, j) {
                options.push(SequenceOption::IncrementBy(n));
                j = next;
            }
        } else if keywords_at(tokens, j, &["NO", "MINVALUE"]) {
            options.push(SequenceOption::NoMinValue);
            j += 2;
        } else if keywords_at(tokens, j, &["NO", "MAXVALUE"]) {
            options.push(SequenceOption::NoMaxValue);
            j += 2;
        } else if keywords_at(tokens, j, &["NO", "CYCLE"]) {
            options.push(SequenceOption::NoCycle);
            j += 2;
        } else if keyword_at(tokens, j, "MINVALUE") {
            j += 1;
            if let Some((n, next)) = signed_number_at(tokens, j) {
                options.push(SequenceOption::MinValue(n));
                j = next;
            }
        } else if keyword_at(tokens, j, "MAXVALUE") {
            j += 1;
            if let Some((n, next)) = signed_number_at(tokens, j) {
                options.push(SequenceOption::MaxValue(n));
                j = next;
            }
        } else if keyword_at(tokens, j, "START") {
            j += 1;
            if keyword_at(tokens, j, "WITH") {
                j += 1;
            }
            if let Some((n, next)) = signed_number_at(tokens, j) {
                options.push(SequenceOption::StartWith(n));
                j = next;
            }
        } else if keyword_at(tokens, j, "CACHE") {
            j += 1;
            if let Some((n, next)) = signed_number_at(tokens, j) {
                options.push(SequenceOption::Cache(n));
                j = next;
            }
        } else if keyword_at(tokens, j, "CYCLE") {
            options.push(SequenceOption::Cycle);
            j += 1;
        } else if keywords_at(tokens, j, &["OWNED", "BY"]) {
            options.push(SequenceOption::OwnedBy);
            break;
        } else {
            j += 1;
        }
    }
    DdlStatement::CreateSequence(CreateSequenceStmt {
        temp,
        name,
        options,
    })
}

fn recognize_create_index(tokens: &[String], mut i: usize, unique: bool) -> DdlStatement {
    if keyword_at(tokens, i, "CONCURRENTLY") {
        i += 1;
    }
    // USING only appears between the table name and the column list.
    let paren = find_keyword(tokens, i, "(").unwrap_or(tokens.len());
    let using = find_keyword(tokens, i, "USING")
        .filter(|&u| u < paren)
        .and_then(|u| tokens.get(u + 1))
        .cloned();
    DdlStatement::CreateIndex(CreateIndexStmt { unique, using })
}

/// Parse a parenthesized `key [= value]` definition list starting at `from`.
fn def_list_at(tokens: &[String], from: usize) -> Option<Vec<DefElem>> {
    let (inner, _) = paren_block(tokens, from)?;
    let mut elems = Vec::new();
    for part in split_top_level(inner) {
        if part.is_empty() {
            continue;
        }
        let name = part[0].clone();
        let value = part
            .iter()
            .position(|t| t == "=")
            .map(|eq| part[eq + 1..].concat());
        elems.push(DefElem::new(name, value));
    }
    Some(elems)
}

fn recognize_create_collation(tokens: &[String], mut i: usize) -> DdlStatement {
    if keywords_at(tokens, i, &["IF", "NOT", "EXISTS"]) {
        i += 3;
    }
    let (name, next) = match qualified_name_at(tokens, i) {
        Some((name, next)) => (Some(name), next),
        None => (None, i),
    };
    if keyword_at(tokens, next, "FROM") {
        let from = qualified_name_at(tokens, next + 1).map(|(n, _)| n.to_string());
        return DdlStatement::CreateCollation(CreateCollationStmt {
            name,
            options: Vec::new(),
            from,
        });
    }
    let options = def_list_at(tokens, next).unwrap_or_default();
    DdlStatement::CreateCollation(CreateCollationStmt {
        name,
        options,
        from: None,
    })
}

fn recognize_create_operator(tokens: &[String], i: usize) -> DdlStatement {
    let options = def_list_at(tokens, i).unwrap_or_default();
    DdlStatement::CreateOperator(CreateOperatorStmt { options })
}

fn recognize_create_type(tokens: &[String], i: usize) -> DdlStatement {
    let next = match qualified_name_at(tokens, i) {
        Some((_, next)) => next,
        None => i,
    };
    let kind = if keyword_at(tokens, next, "AS") {
        if keyword_at(tokens, next + 1, "ENUM") {
            TypeDefKind::Enum
        } else if keyword_at(tokens, next + 1, "RANGE") {
            TypeDefKind::Range
        } else if let Some((inner, _)) = paren_block(tokens, next + 1) {
            TypeDefKind::Composite {
                has_fields: !inner.is_empty(),
            }
        } else {
            TypeDefKind::Composite { has_fields: false }
        }
    } else {
        TypeDefKind::Base
    };
    DdlStatement::CreateType(CreateTypeStmt { kind })
}

fn recognize_create_function(tokens: &[String], is_procedure: bool) -> DdlStatement {
    let has_declared_return = find_keyword(tokens, 0, "RETURNS").is_some();
    let language = find_keyword(tokens, 0, "LANGUAGE")
        .and_then(|l| tokens.get(l + 1))
        .map(|t| t.trim_matches('\'').to_lowercase());
    DdlStatement::CreateFunction(CreateFunctionStmt {
        is_procedure,
        has_declared_return,
        language,
    })
}

fn recognize_policy(tokens: &[String], mut i: usize) -> PolicyStmt {
    if keywords_at(tokens, i, &["IF", "EXISTS"]) {
        i += 2;
    }
    let name = tokens.get(i).map(|t| normalize_ident(t));
    let table = find_keyword(tokens, i, "ON")
        .and_then(|on| qualified_name_at(tokens, on + 1))
        .map(|(name, _)| name);
    PolicyStmt { name, table }
}

/// Modifier clauses of a CREATE TABLE statement detected from the token
/// stream. Shared with the AST lowering, which gets no structure for these
/// from sqlparser.
#[derive(Debug, Default)]
pub struct TableModifierFlags {
    pub of_type: bool,
    pub like_clause: bool,
    pub on_commit: Option<OnCommitClause>,
    pub partition_by: bool,
    pub tablespace: bool,
    pub inherits: bool,
    pub using_method: bool,
    pub storage_options: bool,
}

/// Scan a CREATE TABLE token stream for modifier clauses. Clauses that live
/// after the column list (tablespace, partitioning, access method, storage
/// options) are only looked for in the tail, so keywords inside column or
/// constraint definitions cannot shadow them.
pub fn table_modifier_flags(tokens: &[String]) -> TableModifierFlags {
    // A LIKE table element starts directly after the opening paren or a
    // comma; LIKE inside a CHECK expression never does.
    let like_clause = (1..tokens.len()).any(|i| {
        keyword_at(tokens, i, "LIKE") && matches!(tokens[i - 1].as_str(), "(" | ",")
    });
    let mut flags = TableModifierFlags {
        of_type: find_keyword(tokens, 0, "OF").is_some()
            && find_keyword(tokens, 0, "PARTITION").is_none(),
        like_clause,
        ..Default::default()
    };

    let tail_start = match paren_block(tokens, 0) {
        Some((_, after)) => after,
        None => 0,
    };
    let tail = &tokens[tail_start.min(tokens.len())..];

    if let Some(on) = find_keywords(tail, 0, &["ON", "COMMIT"]) {
        flags.on_commit = if keyword_at(tail, on + 2, "DROP") {
            Some(OnCommitClause::Drop)
        } else if keyword_at(tail, on + 2, "DELETE") {
            Some(OnCommitClause::DeleteRows)
        } else if keyword_at(tail, on + 2, "PRESERVE") {
            Some(OnCommitClause::PreserveRows)
        } else {
            None
        };
    }
    flags.partition_by = find_keywords(tail, 0, &["PARTITION", "BY"]).is_some();
    flags.tablespace = find_keyword(tail, 0, "TABLESPACE").is_some();
    flags.inherits = find_keyword(tail, 0, "INHERITS").is_some();
    flags.using_method = find_keyword(tail, 0, "USING").is_some();
    flags.storage_options = find_keywords(tail, 0, &["WITHOUT", "OIDS"]).is_some()
        || find_keyword(tail, 0, "WITH")
            .map(|w| tail.get(w + 1).map(String::as_str) == Some("("))
            .unwrap_or(false);
    flags
}

/// Coarse CREATE TABLE recognition, used when sqlparser cannot parse the
/// statement. Column and constraint detail is unavailable on this path.
fn recognize_create_table(tokens: &[String], mut i: usize, temp: bool) -> DdlStatement {
    let mut if_not_exists = false;
    if keywords_at(tokens, i, &["IF", "NOT", "EXISTS"]) {
        if_not_exists = true;
        i += 3;
    }
    let name = qualified_name_at(tokens, i).map(|(name, _)| name);
    let flags = table_modifier_flags(tokens);
    DdlStatement::CreateTable(CreateTableStmt {
        name,
        if_not_exists,
        temp,
        of_type: flags.of_type,
        on_commit: flags.on_commit,
        storage_options: flags.storage_options,
        partition_by: flags.partition_by,
        tablespace: flags.tablespace,
        inherits: flags.inherits,
        using_method: flags.using_method,
        like_clause: flags.like_clause,
        columns: Vec::new(),
        constraints: Vec::new(),
    })
}

fn recognize_alter(tokens: &[String]) -> Option<DdlStatement> {
    if keyword_at(tokens, 1, "TABLE") {
        return Some(recognize_alter_table(tokens));
    }
    if keywords_at(tokens, 1, &["MATERIALIZED", "VIEW"]) {
        let tail = tail_after_name(tokens, 3);
        if keyword_at(&tail, 0, "RENAME") {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::View,
            }));
        }
        if keyword_at(&tail, 0, "DEPENDS") || keywords_at(&tail, 0, &["NO", "DEPENDS"]) {
            return Some(DdlStatement::AlterObjectDepends(AlterObjectDependsStmt {
                target: DependsTarget::MaterializedView,
            }));
        }
        if keywords_at(&tail, 0, &["SET", "SCHEMA"]) {
            return Some(DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
                target: SetSchemaTarget::View,
            }));
        }
        return Some(DdlStatement::AlterMaterializedView);
    }
    if keyword_at(tokens, 1, "VIEW") {
        let tail = tail_after_name(tokens, 2);
        if keyword_at(&tail, 0, "RENAME") {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::View,
            }));
        }
        if keywords_at(&tail, 0, &["SET", "SCHEMA"]) {
            return Some(DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
                target: SetSchemaTarget::View,
            }));
        }
        let cmd = if keywords_at(&tail, 0, &["OWNER", "TO"]) {
            AlterViewCmd::OwnerTo
        } else if keyword_at(&tail, 0, "RESET") {
            AlterViewCmd::Reset
        } else if keyword_at(&tail, 0, "SET") {
            AlterViewCmd::Set
        } else if keyword_at(&tail, 0, "ALTER") {
            AlterViewCmd::AlterColumn
        } else {
            AlterViewCmd::Other
        };
        return Some(DdlStatement::AlterView(AlterViewStmt { cmd }));
    }
    if keyword_at(tokens, 1, "INDEX") {
        let tail = tail_after_name(tokens, 2);
        if keyword_at(&tail, 0, "RENAME") {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::Index,
            }));
        }
        if keyword_at(&tail, 0, "DEPENDS") || keywords_at(&tail, 0, &["NO", "DEPENDS"]) {
            return Some(DdlStatement::AlterObjectDepends(AlterObjectDependsStmt {
                target: DependsTarget::Index,
            }));
        }
        return Some(DdlStatement::AlterIndex);
    }
    if keyword_at(tokens, 1, "SEQUENCE") {
        let tail = tail_after_name(tokens, 2);
        if keyword_at(&tail, 0, "RENAME") {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::Other,
            }));
        }
        if keywords_at(&tail, 0, &["SET", "SCHEMA"]) {
            return Some(DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
                target: SetSchemaTarget::Other,
            }));
        }
        let cmd = if find_keywords(&tail, 0, &["OWNED", "BY"]).is_some() {
            AlterSequenceCmd::OwnedBy
        } else if find_keywords(&tail, 0, &["OWNER", "TO"]).is_some() {
            AlterSequenceCmd::OwnerTo
        } else {
            AlterSequenceCmd::Options
        };
        return Some(DdlStatement::AlterSequence(AlterSequenceStmt { cmd }));
    }
    if keyword_at(tokens, 1, "EXTENSION") {
        let name = tokens.get(2).map(|t| normalize_ident(t))?;
        let tail = &tokens[3.min(tokens.len())..];
        if keyword_at(tail, 0, "UPDATE") {
            return Some(DdlStatement::AlterExtension(AlterExtensionStmt { name }));
        }
        if keywords_at(tail, 0, &["SET", "SCHEMA"]) {
            return Some(DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
                target: SetSchemaTarget::Extension { names: vec![name] },
            }));
        }
        if keyword_at(tail, 0, "ADD") {
            return Some(DdlStatement::AlterExtensionContents(
                AlterExtensionContentsStmt {
                    action: AddDrop::Add,
                },
            ));
        }
        if keyword_at(tail, 0, "DROP") {
            return Some(DdlStatement::AlterExtensionContents(
                AlterExtensionContentsStmt {
                    action: AddDrop::Drop,
                },
            ));
        }
        return None;
    }
    if keyword_at(tokens, 1, "TYPE") {
        let tail = tail_after_name(tokens, 2);
        if keywords_at(&tail, 0, &["OWNER", "TO"]) {
            return Some(DdlStatement::AlterOwner(AlterOwnerStmt {
                target: OwnerTarget::Type,
            }));
        }
        if keywords_at(&tail, 0, &["SET", "SCHEMA"]) {
            return Some(DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
                target: SetSchemaTarget::Type,
            }));
        }
        if keyword_at(&tail, 0, "RENAME") {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::Type,
            }));
        }
        return Some(DdlStatement::AlterType);
    }
    if keyword_at(tokens, 1, "POLICY") {
        return Some(DdlStatement::AlterPolicy(recognize_policy(tokens, 2)));
    }
    if keyword_at(tokens, 1, "TRIGGER") {
        if find_keyword(tokens, 2, "DEPENDS").is_some() {
            return Some(DdlStatement::AlterObjectDepends(AlterObjectDependsStmt {
                target: DependsTarget::Trigger,
            }));
        }
        if find_keyword(tokens, 2, "RENAME").is_some() {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::Other,
            }));
        }
        return None;
    }
    if keyword_at(tokens, 1, "SUBSCRIPTION") {
        let tail = tail_after_name(tokens, 2);
        if keywords_at(&tail, 0, &["OWNER", "TO"]) {
            return Some(DdlStatement::AlterOwner(AlterOwnerStmt {
                target: OwnerTarget::Subscription,
            }));
        }
        if keyword_at(&tail, 0, "RENAME") {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::Other,
            }));
        }
        return Some(DdlStatement::AlterSubscription);
    }

    // Owner/rename/set-schema families over simple object kinds.
    let owner_target = if keyword_at(tokens, 1, "SCHEMA") {
        Some(OwnerTarget::Schema)
    } else if keyword_at(tokens, 1, "AGGREGATE") {
        Some(OwnerTarget::Aggregate)
    } else if keyword_at(tokens, 1, "STATISTICS") {
        Some(OwnerTarget::Statistics)
    } else if keyword_at(tokens, 1, "COLLATION") {
        Some(OwnerTarget::Collation)
    } else if keyword_at(tokens, 1, "FUNCTION")
        || keyword_at(tokens, 1, "PROCEDURE")
        || keyword_at(tokens, 1, "ROUTINE")
    {
        Some(OwnerTarget::Function)
    } else {
        None
    };
    if let Some(target) = owner_target {
        if find_keywords(tokens, 2, &["OWNER", "TO"]).is_some() {
            return Some(DdlStatement::AlterOwner(AlterOwnerStmt { target }));
        }
        if find_keyword(tokens, 2, "RENAME").is_some() {
            return Some(DdlStatement::Rename(RenameStmt {
                target: RenameTarget::Other,
            }));
        }
        if find_keywords(tokens, 2, &["SET", "SCHEMA"]).is_some() {
            return Some(DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
                target: SetSchemaTarget::Other,
            }));
        }
        return None;
    }
    None
}

fn recognize_alter_table(tokens: &[String]) -> DdlStatement {
    if keywords_at(tokens, 2, &["ALL", "IN", "TABLESPACE"]) {
        return DdlStatement::AlterTableAllInTablespace;
    }
    let mut i = 2;
    let mut if_exists = false;
    if keywords_at(tokens, i, &["IF", "EXISTS"]) {
        if_exists = true;
        i += 2;
    }
    let mut only = false;
    if keyword_at(tokens, i, "ONLY") {
        only = true;
        i += 1;
    }
    let tail_start = match qualified_name_at(tokens, i) {
        Some((_, next)) => next,
        None => i,
    };
    let tail = &tokens[tail_start.min(tokens.len())..];

    if keyword_at(tail, 0, "RENAME") {
        let target = if keyword_at(tail, 1, "COLUMN") {
            RenameTarget::Column { only }
        } else if keyword_at(tail, 1, "CONSTRAINT") {
            RenameTarget::Constraint
        } else {
            RenameTarget::Table
        };
        return DdlStatement::Rename(RenameStmt { target });
    }
    if keywords_at(tail, 0, &["SET", "SCHEMA"]) {
        return DdlStatement::AlterObjectSchema(AlterObjectSchemaStmt {
            target: SetSchemaTarget::Table,
        });
    }

    let cmds = split_top_level(tail)
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(recognize_alter_table_cmd)
        .collect();
    DdlStatement::AlterTable(AlterTableStmt {
        if_exists,
        only,
        cmds,
    })
}

fn recognize_alter_table_cmd(part: &[String]) -> AlterTableCmd {
    if keywords_at(part, 0, &["ADD", "COLUMN"]) {
        return AlterTableCmd::AddColumn {
            column: recognize_added_column(&part[2..]),
        };
    }
    if keyword_at(part, 0, "ADD") {
        let constraint_head = ["CONSTRAINT", "PRIMARY", "UNIQUE", "CHECK", "FOREIGN", "EXCLUDE"]
            .iter()
            .any(|&kw| keyword_at(part, 1, kw));
        if constraint_head {
            return AlterTableCmd::AddConstraint;
        }
        return AlterTableCmd::Other;
    }
    if keywords_at(part, 0, &["DROP", "COLUMN"]) {
        return AlterTableCmd::DropColumn;
    }
    if keywords_at(part, 0, &["DROP", "CONSTRAINT"]) {
        return AlterTableCmd::DropConstraint;
    }
    if keywords_at(part, 0, &["VALIDATE", "CONSTRAINT"]) {
        return AlterTableCmd::ValidateConstraint;
    }
    if keywords_at(part, 0, &["ALTER", "CONSTRAINT"]) {
        return AlterTableCmd::AlterConstraint;
    }
    if keywords_at(part, 0, &["ALTER", "COLUMN"]) {
        // Skip the column name; the sub-command starts after it.
        let sub = &part[3.min(part.len())..];
        return AlterTableCmd::AlterColumn(recognize_alter_column(sub));
    }
    if keyword_at(part, 0, "ATTACH") {
        return AlterTableCmd::AttachPartition;
    }
    if keyword_at(part, 0, "DETACH") {
        return AlterTableCmd::DetachPartition;
    }
    if find_keyword(part, 0, "TRIGGER").is_some() {
        if keyword_at(part, 0, "DISABLE") {
            return AlterTableCmd::DisableTrigger;
        }
        if keyword_at(part, 0, "ENABLE") {
            if keyword_at(part, 1, "ALWAYS") {
                return AlterTableCmd::EnableTrigger(EnableMode::Always);
            }
            if keyword_at(part, 1, "REPLICA") {
                return AlterTableCmd::EnableTrigger(EnableMode::Replica);
            }
            return AlterTableCmd::EnableTrigger(EnableMode::Normal);
        }
        return AlterTableCmd::Other;
    }
    if find_keyword(part, 0, "RULE").is_some() {
        if keyword_at(part, 0, "DISABLE") {
            return AlterTableCmd::DisableRule;
        }
        if keyword_at(part, 0, "ENABLE") {
            if keyword_at(part, 1, "ALWAYS") {
                return AlterTableCmd::EnableRule(EnableMode::Always);
            }
            if keyword_at(part, 1, "REPLICA") {
                return AlterTableCmd::EnableRule(EnableMode::Replica);
            }
            return AlterTableCmd::EnableRule(EnableMode::Normal);
        }
        return AlterTableCmd::Other;
    }
    if find_keywords(part, 0, &["ROW", "LEVEL", "SECURITY"]).is_some() {
        return AlterTableCmd::RowLevelSecurity;
    }
    if keywords_at(part, 0, &["NO", "INHERIT"]) {
        return AlterTableCmd::Inherit { no: true };
    }
    if keyword_at(part, 0, "INHERIT") {
        return AlterTableCmd::Inherit { no: false };
    }
    if keywords_at(part, 0, &["NOT", "OF"]) {
        return AlterTableCmd::OfType { not: true };
    }
    if keyword_at(part, 0, "OF") {
        return AlterTableCmd::OfType { not: false };
    }
    if keywords_at(part, 0, &["SET", "TABLESPACE"]) {
        return AlterTableCmd::SetTablespace;
    }
    if keywords_at(part, 0, &["SET", "WITHOUT", "OIDS"]) {
        return AlterTableCmd::SetWithoutOids;
    }
    if keywords_at(part, 0, &["SET", "WITHOUT", "CLUSTER"]) {
        return AlterTableCmd::SetWithoutCluster;
    }
    if keywords_at(part, 0, &["SET", "LOGGED"]) {
        return AlterTableCmd::SetLogged;
    }
    if keywords_at(part, 0, &["SET", "UNLOGGED"]) {
        return AlterTableCmd::SetUnlogged;
    }
    if keyword_at(part, 0, "SET") && part.get(1).map(String::as_str) == Some("(") {
        return AlterTableCmd::SetOptions;
    }
    if keyword_at(part, 0, "RESET") && part.get(1).map(String::as_str) == Some("(") {
        return AlterTableCmd::ResetOptions;
    }
    if keywords_at(part, 0, &["REPLICA", "IDENTITY"]) {
        return AlterTableCmd::ReplicaIdentity;
    }
    if keywords_at(part, 0, &["CLUSTER", "ON"]) {
        return AlterTableCmd::ClusterOn;
    }
    if keywords_at(part, 0, &["OWNER", "TO"]) {
        return AlterTableCmd::OwnerTo;
    }
    AlterTableCmd::Other
}

fn recognize_alter_column(sub: &[String]) -> AlterColumnCmd {
    if keyword_at(sub, 0, "TYPE") || keywords_at(sub, 0, &["SET", "DATA", "TYPE"]) {
        if find_keyword(sub, 0, "USING").is_some() {
            return AlterColumnCmd::TypeWithUsing;
        }
        return AlterColumnCmd::Type;
    }
    if keywords_at(sub, 0, &["SET", "DEFAULT"]) || keywords_at(sub, 0, &["DROP", "DEFAULT"]) {
        return AlterColumnCmd::Default;
    }
    if keywords_at(sub, 0, &["SET", "NOT", "NULL"]) {
        return AlterColumnCmd::SetNotNull;
    }
    if keywords_at(sub, 0, &["DROP", "NOT", "NULL"]) {
        return AlterColumnCmd::DropNotNull;
    }
    if keywords_at(sub, 0, &["DROP", "EXPRESSION"]) {
        return AlterColumnCmd::DropExpression;
    }
    if keywords_at(sub, 0, &["SET", "STATISTICS"]) {
        return AlterColumnCmd::SetStatistics;
    }
    if keywords_at(sub, 0, &["SET", "STORAGE"]) {
        return AlterColumnCmd::SetStorage;
    }
    if keywords_at(sub, 0, &["ADD", "GENERATED"]) {
        return AlterColumnCmd::AddIdentity;
    }
    if keywords_at(sub, 0, &["DROP", "IDENTITY"]) {
        return AlterColumnCmd::DropIdentity;
    }
    if keyword_at(sub, 0, "RESTART") || keywords_at(sub, 0, &["SET", "GENERATED"]) {
        return AlterColumnCmd::SetIdentity;
    }
    if keyword_at(sub, 0, "SET") && sub.get(1).map(String::as_str) == Some("(") {
        return AlterColumnCmd::SetAttributeOptions;
    }
    if keyword_at(sub, 0, "RESET") && sub.get(1).map(String::as_str) == Some("(") {
        return AlterColumnCmd::ResetAttributeOptions;
    }
    // SET INCREMENT / SET START and friends: identity sequence options.
    if keyword_at(sub, 0, "SET")
        && ["INCREMENT", "START", "CACHE", "MINVALUE", "MAXVALUE", "CYCLE", "NO"]
            .iter()
            .any(|&kw| keyword_at(sub, 1, kw))
    {
        return AlterColumnCmd::SetIdentity;
    }
    AlterColumnCmd::Other
}

/// Parse the added column of an ALTER TABLE ... ADD COLUMN command.
fn recognize_added_column(part: &[String]) -> ColumnDef {
    let mut i = 0;
    if keywords_at(part, i, &["IF", "NOT", "EXISTS"]) {
        i += 3;
    }
    let name = part.get(i).map(|t| normalize_ident(t)).unwrap_or_default();
    let type_name = part.get(i + 1).cloned().unwrap_or_default();
    let rest = &part[(i + 2).min(part.len())..];

    let mut constraints = Vec::new();
    let with_options = find_keyword(rest, 0, "WITH")
        .map(|w| rest.get(w + 1).map(String::as_str) == Some("("))
        .unwrap_or(false);
    let mut j = 0;
    while j < rest.len() {
        if keywords_at(rest, j, &["NOT", "NULL"]) {
            constraints.push(ColumnConstraint::NotNull);
            j += 2;
        } else if keyword_at(rest, j, "NULL") {
            constraints.push(ColumnConstraint::Null);
            j += 1;
        } else if keywords_at(rest, j, &["PRIMARY", "KEY"]) {
            constraints.push(ColumnConstraint::PrimaryKey { with_options });
            j += 2;
        } else if keyword_at(rest, j, "UNIQUE") {
            constraints.push(ColumnConstraint::Unique { with_options });
            j += 1;
        } else if keyword_at(rest, j, "CHECK") {
            constraints.push(ColumnConstraint::Check);
            j += 1;
        } else if keyword_at(rest, j, "DEFAULT") {
            constraints.push(ColumnConstraint::Default);
            j += 1;
        } else if keyword_at(rest, j, "GENERATED") {
            if find_keyword(rest, j + 1, "IDENTITY").is_some() {
                constraints.push(ColumnConstraint::GeneratedIdentity);
            } else {
                constraints.push(ColumnConstraint::GeneratedStored);
            }
            break;
        } else {
            j += 1;
        }
    }
    ColumnDef {
        name,
        type_name,
        constraints,
    }
}

/// Grant target detection: look at what follows the first `ON`.
pub fn grant_target(tokens: &[String]) -> GrantTarget {
    let Some(on) = find_keyword(tokens, 0, "ON") else {
        return GrantTarget::Other;
    };
    let i = on + 1;
    if keyword_at(tokens, i, "DOMAIN") {
        GrantTarget::Domain
    } else if keyword_at(tokens, i, "LANGUAGE") {
        GrantTarget::Language
    } else if keywords_at(tokens, i, &["LARGE", "OBJECT"]) {
        GrantTarget::LargeObject
    } else if keyword_at(tokens, i, "PROCEDURE")
        || keywords_at(tokens, i, &["ALL", "PROCEDURES"])
    {
        GrantTarget::Procedure
    } else if keyword_at(tokens, i, "ROUTINE") || keywords_at(tokens, i, &["ALL", "ROUTINES"]) {
        GrantTarget::Routine
    } else if keyword_at(tokens, i, "TYPE") {
        GrantTarget::Type
    } else if keywords_at(tokens, i, &["FOREIGN", "SERVER"]) {
        GrantTarget::ForeignServer
    } else if keywords_at(tokens, i, &["FOREIGN", "DATA", "WRAPPER"]) {
        GrantTarget::ForeignDataWrapper
    } else {
        GrantTarget::Other
    }
}

/// Skip an optional IF EXISTS plus the object name at `i`, returning the
/// remaining tail.
fn tail_after_name(tokens: &[String], mut i: usize) -> Vec<String> {
    if keywords_at(tokens, i, &["IF", "EXISTS"]) {
        i += 2;
    }
    let next = match qualified_name_at(tokens, i) {
        Some((_, next)) => next,
        None => i,
    };
    tokens[next.min(tokens.len())..].to_vec()
}

#[cfg(test)]
#[path = "recognize_test.rs"]
mod tests;

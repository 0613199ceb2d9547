//! CREATE COLLATION / OPERATOR / AGGREGATE / TYPE classification.
//!
//! The collation and operator validators work over an option bag: duplicate
//! keys are a hard error, keys parse into typed options, and the remaining
//! rules are combination constraints over the typed set.

use std::str::FromStr;

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{
    CreateCollationStmt, CreateOperatorStmt, CreateTypeStmt, DefElem, TypeDefKind,
};
use sc_sql::scan::normalize_ident;

use crate::result::StatementResult;

const CONFLICTING_OPTIONS: &str = "conflicting or redundant options";

pub(crate) fn classify_collation(
    stmt: &CreateCollationStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let feature = matrix.feature_config("create_collation");
    let feature = if feature.is_supported() {
        validate_collation(stmt)
    } else {
        feature
    };
    vec![StatementResult::new(feature)]
}

pub(crate) fn classify_operator(
    stmt: &CreateOperatorStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let feature = matrix.feature_config("create_operator");
    let feature = if feature.is_supported() {
        validate_operator(stmt)
    } else {
        feature
    };
    vec![StatementResult::new(feature)]
}

pub(crate) fn classify_aggregate(matrix: &CompatMatrix) -> Vec<StatementResult> {
    vec![StatementResult::new(matrix.feature_config("create_aggregate"))]
}

pub(crate) fn classify_type(stmt: &CreateTypeStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let feature = match &stmt.kind {
        TypeDefKind::Composite { has_fields: true } => Feature::default_supported(),
        TypeDefKind::Composite { has_fields: false } => matrix.feature_config("create_type"),
        TypeDefKind::Enum => matrix.feature_config("create_type_enum"),
        TypeDefKind::Range => matrix.feature_config("create_type_range"),
        TypeDefKind::Base => matrix.feature_config("create_base_type"),
    };
    vec![StatementResult::new(feature)]
}

/// Collation definition options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollationOption {
    Provider,
    Locale,
    LcCollate,
    LcCtype,
    Rules,
    Version,
    Deterministic,
    From,
}

impl CollationOption {
    /// Whether this option conflicts with a `from` element in the same bag.
    fn conflicts_with_from(self) -> bool {
        !matches!(self, CollationOption::Rules | CollationOption::From)
    }
}

impl FromStr for CollationOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provider" => Ok(CollationOption::Provider),
            "locale" => Ok(CollationOption::Locale),
            "lc_collate" => Ok(CollationOption::LcCollate),
            "lc_ctype" => Ok(CollationOption::LcCtype),
            "rules" => Ok(CollationOption::Rules),
            "version" => Ok(CollationOption::Version),
            "deterministic" => Ok(CollationOption::Deterministic),
            "from" => Ok(CollationOption::From),
            _ => Err(()),
        }
    }
}

/// Operator definition options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorOption {
    LeftArg,
    RightArg,
    Commutator,
    Function,
    Negator,
    Restrict,
    Join,
    Hashes,
    Merges,
}

impl FromStr for OperatorOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leftarg" => Ok(OperatorOption::LeftArg),
            "rightarg" => Ok(OperatorOption::RightArg),
            "commutator" => Ok(OperatorOption::Commutator),
            "procedure" | "function" => Ok(OperatorOption::Function),
            "negator" => Ok(OperatorOption::Negator),
            "restrict" => Ok(OperatorOption::Restrict),
            "join" => Ok(OperatorOption::Join),
            "hashes" => Ok(OperatorOption::Hashes),
            "merges" => Ok(OperatorOption::Merges),
            _ => Err(()),
        }
    }
}

/// Duplicate raw keys in a definition list are a hard error.
fn check_duplicates(options: &[DefElem]) -> Result<(), Feature> {
    for (i, elem) in options.iter().enumerate() {
        if options[..i].iter().any(|prev| prev.name == elem.name) {
            return Err(Feature::unsupported("create_collation", CONFLICTING_OPTIONS));
        }
    }
    Ok(())
}

fn validate_collation(stmt: &CreateCollationStmt) -> Feature {
    // Bare FROM form: CREATE COLLATION name FROM existing.
    if stmt.options.is_empty() {
        if let Some(from) = &stmt.from {
            if from.eq_ignore_ascii_case("default") {
                return Feature::unsupported(
                    "create_collation",
                    "collation \"default\" cannot be copied",
                );
            }
        }
        return Feature::supported("create_collation");
    }

    if let Err(feature) = check_duplicates(&stmt.options) {
        return feature;
    }

    let mut provider = String::new();
    let mut locale = String::new();
    let mut lc_collate = String::new();
    let mut lc_ctype = String::new();
    let mut rules = String::new();
    let mut from = String::new();
    let mut deterministic = true;
    let mut other_options_found = false;

    for elem in &stmt.options {
        let key = normalize_ident(&elem.name);
        let Ok(option) = key.parse::<CollationOption>() else {
            return Feature::unsupported(
                "create_collation",
                format!("collation attribute \"{key}\" not recognized"),
            );
        };
        let value = elem.value.clone().unwrap_or_default();
        other_options_found |= option.conflicts_with_from();
        match option {
            CollationOption::Provider => provider = normalize_ident(&value),
            CollationOption::Locale => locale = value,
            CollationOption::LcCollate => lc_collate = value,
            CollationOption::LcCtype => lc_ctype = value,
            CollationOption::Rules => rules = value,
            CollationOption::Version => {}
            CollationOption::Deterministic => {
                if value.is_empty() {
                    return Feature::unsupported(
                        "create_collation",
                        format!(
                            "collation attribute \"deterministic\" has an unexpected value: {value}"
                        ),
                    );
                }
                if value == "false" {
                    deterministic = false;
                }
            }
            CollationOption::From => from = value,
        }
    }

    if !from.is_empty() {
        if other_options_found {
            return Feature::unsupported("create_collation", CONFLICTING_OPTIONS);
        }
        if from.eq_ignore_ascii_case("default") {
            return Feature::unsupported(
                "create_collation",
                "collation \"default\" cannot be copied",
            );
        }
    }

    if !locale.is_empty() {
        if !lc_collate.is_empty() || !lc_ctype.is_empty() {
            return Feature::unsupported(
                "create_collation",
                "LOCALE cannot be specified together with LC_COLLATE or LC_CTYPE.",
            );
        }
        lc_collate = locale.clone();
        lc_ctype = locale.clone();
    }

    if !provider.is_empty() && provider != "icu" && provider != "libc" {
        return Feature::unsupported(
            "create_collation",
            format!("unrecognized collation provider: {provider}"),
        );
    }

    if provider == "libc" {
        if lc_collate.is_empty() {
            return Feature::unsupported(
                "create_collation",
                "parameter \"lc_collate\" must be specified",
            );
        }
        if lc_ctype.is_empty() {
            return Feature::unsupported(
                "create_collation",
                "parameter \"lc_ctype\" must be specified",
            );
        }
    } else if provider == "icu" && locale.is_empty() {
        return Feature::unsupported(
            "create_collation",
            "parameter \"locale\" must be specified",
        );
    }

    if !deterministic && provider != "icu" {
        return Feature::unsupported(
            "create_collation",
            "nondeterministic collations not supported with this provider",
        );
    }
    if !rules.is_empty() && provider != "icu" {
        return Feature::unsupported(
            "create_collation",
            "ICU rules cannot be specified unless locale provider is ICU",
        );
    }

    Feature::supported("create_collation")
}

fn validate_operator(stmt: &CreateOperatorStmt) -> Feature {
    if check_duplicates(&stmt.options).is_err() {
        return Feature::unsupported("create_operator", CONFLICTING_OPTIONS);
    }
    for elem in &stmt.options {
        let key = normalize_ident(&elem.name);
        if key.parse::<OperatorOption>().is_err() {
            return Feature::unsupported(
                "create_operator",
                format!("operator attribute \"{key}\" not recognized"),
            );
        }
    }
    Feature::supported("create_operator")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;

    fn collation(options: Vec<DefElem>, from: Option<&str>) -> CreateCollationStmt {
        CreateCollationStmt {
            name: None,
            options,
            from: from.map(String::from),
        }
    }

    fn validate(options: Vec<(&str, Option<&str>)>) -> Feature {
        let elems = options
            .into_iter()
            .map(|(k, v)| DefElem::new(k, v.map(String::from)))
            .collect();
        validate_collation(&collation(elems, None))
    }

    #[test]
    fn test_from_default_is_rejected() {
        let feature = validate_collation(&collation(vec![], Some("default")));
        assert_eq!(feature.message(), "collation \"default\" cannot be copied");
        // Any other source collation copies fine.
        let feature = validate_collation(&collation(vec![], Some("en_US")));
        assert!(feature.is_supported());
    }

    #[test]
    fn test_duplicate_option_keys_conflict() {
        let feature = validate(vec![
            ("locale", Some("'en'")),
            ("locale", Some("'de'")),
        ]);
        assert_eq!(feature.message(), "conflicting or redundant options");
    }

    #[test]
    fn test_unknown_option_rejected_by_name() {
        let feature = validate(vec![("localization", Some("'en'"))]);
        assert_eq!(
            feature.message(),
            "collation attribute \"localization\" not recognized"
        );
    }

    #[test]
    fn test_locale_conflicts_with_lc_collate() {
        let feature = validate(vec![
            ("locale", Some("'en'")),
            ("lc_collate", Some("'en'")),
        ]);
        assert_eq!(
            feature.message(),
            "LOCALE cannot be specified together with LC_COLLATE or LC_CTYPE."
        );
    }

    #[test]
    fn test_unrecognized_provider() {
        let feature = validate(vec![("provider", Some("builtin"))]);
        assert_eq!(feature.message(), "unrecognized collation provider: builtin");
    }

    #[test]
    fn test_libc_requires_both_lc_options() {
        let feature = validate(vec![("provider", Some("libc"))]);
        assert_eq!(feature.message(), "parameter \"lc_collate\" must be specified");
        let feature = validate(vec![
            ("provider", Some("libc")),
            ("lc_collate", Some("'de_DE'")),
        ]);
        assert_eq!(feature.message(), "parameter \"lc_ctype\" must be specified");
        let feature = validate(vec![
            ("provider", Some("libc")),
            ("lc_collate", Some("'de_DE'")),
            ("lc_ctype", Some("'de_DE'")),
        ]);
        assert!(feature.is_supported());
    }

    #[test]
    fn test_icu_requires_locale() {
        let feature = validate(vec![("provider", Some("icu"))]);
        assert_eq!(feature.message(), "parameter \"locale\" must be specified");
        let feature = validate(vec![("provider", Some("icu")), ("locale", Some("'en'"))]);
        assert!(feature.is_supported());
    }

    #[test]
    fn test_locale_satisfies_libc_lc_options() {
        let feature = validate(vec![("provider", Some("libc")), ("locale", Some("'C'"))]);
        assert!(feature.is_supported());
    }

    #[test]
    fn test_nondeterministic_requires_icu() {
        let feature = validate(vec![
            ("provider", Some("libc")),
            ("locale", Some("'en'")),
            ("deterministic", Some("false")),
        ]);
        assert_eq!(
            feature.message(),
            "nondeterministic collations not supported with this provider"
        );
        let feature = validate(vec![
            ("provider", Some("icu")),
            ("locale", Some("'en'")),
            ("deterministic", Some("false")),
        ]);
        assert!(feature.is_supported());
    }

    #[test]
    fn test_rules_require_icu() {
        let feature = validate(vec![("rules", Some("'&V << w'"))]);
        assert_eq!(
            feature.message(),
            "ICU rules cannot be specified unless locale provider is ICU"
        );
    }

    #[test]
    fn test_deterministic_without_value_rejected() {
        let feature = validate(vec![("deterministic", None)]);
        assert_eq!(
            feature.message(),
            "collation attribute \"deterministic\" has an unexpected value: "
        );
    }

    #[test]
    fn test_from_in_bag_conflicts_with_other_options() {
        let feature = validate(vec![
            ("from", Some("src")),
            ("provider", Some("icu")),
        ]);
        assert_eq!(feature.message(), "conflicting or redundant options");
    }

    #[test]
    fn test_operator_whitelist() {
        let matrix = test_matrix();
        let stmt = CreateOperatorStmt {
            options: vec![
                DefElem::new("LEFTARG", Some("box".to_string())),
                DefElem::new("RIGHTARG", Some("box".to_string())),
                DefElem::new("PROCEDURE", Some("area_equal".to_string())),
            ],
        };
        let results = classify_operator(&stmt, &matrix);
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_operator_unknown_attribute() {
        let matrix = test_matrix();
        let stmt = CreateOperatorStmt {
            options: vec![DefElem::new("sortop", Some("x".to_string()))],
        };
        let results = classify_operator(&stmt, &matrix);
        assert_eq!(
            results[0].message(),
            "operator attribute \"sortop\" not recognized"
        );
    }

    #[test]
    fn test_type_kinds() {
        let matrix = test_matrix();
        let composite = classify_type(
            &CreateTypeStmt {
                kind: TypeDefKind::Composite { has_fields: true },
            },
            &matrix,
        );
        assert!(composite[0].is_supported());
        let range = classify_type(
            &CreateTypeStmt {
                kind: TypeDefKind::Range,
            },
            &matrix,
        );
        assert_eq!(range[0].message(), "CREATE TYPE AS RANGE is not supported");
        let base = classify_type(
            &CreateTypeStmt {
                kind: TypeDefKind::Base,
            },
            &matrix,
        );
        assert_eq!(
            base[0].message(),
            "CREATE TYPE for base types is not supported"
        );
    }

    #[test]
    fn test_aggregate_uses_config() {
        let matrix = test_matrix();
        let results = classify_aggregate(&matrix);
        assert_eq!(results[0].message(), "CREATE AGGREGATE is not supported");
    }
}

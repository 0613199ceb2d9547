//! CREATE SEQUENCE / ALTER SEQUENCE classification.
//!
//! The bounds validator predicts whether a declared numeric range is large
//! enough for distributed allocation. The error strings reproduce the target
//! engine's wording verbatim, numeric payloads included; they are part of
//! the contract, not incidental text.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{AlterSequenceCmd, AlterSequenceStmt, CreateSequenceStmt, SequenceOption};

use crate::result::StatementResult;

/// Default router topology assumed for chunk sizing.
const NUM_ROUTERS: i64 = 2;
const MAX_CHUNK_SIZE: i64 = 250_000;
/// Minimum viable distributed sequence size given the default chunking.
const MIN_SEQUENCE_SIZE: i64 = 16;

pub(crate) fn classify_create(
    stmt: &CreateSequenceStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let feature = if stmt.temp {
        matrix.feature_config("create_temp_sequence")
    } else {
        let feature = matrix.feature_config("create_sequence");
        if feature.is_supported() {
            validate_sequence(stmt, matrix)
        } else {
            feature
        }
    };
    vec![StatementResult::new(feature)]
}

pub(crate) fn classify_alter(
    stmt: &AlterSequenceStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let feature = match stmt.cmd {
        AlterSequenceCmd::OwnedBy => matrix.feature_config("alter_sequence_owned_by"),
        AlterSequenceCmd::OwnerTo => matrix.feature_config("alter_sequence_owner_to"),
        AlterSequenceCmd::Options => Feature::default_unsupported(),
    };
    vec![StatementResult::new(feature)]
}

/// Declared-type bounds; anything unrecognized falls back to bigint.
fn type_bounds(as_type: &str) -> (i64, i64) {
    match as_type.to_lowercase().as_str() {
        "smallint" => (i16::MIN as i64, i16::MAX as i64),
        "int" | "integer" => (i32::MIN as i64, i32::MAX as i64),
        _ => (i64::MIN, i64::MAX),
    }
}

fn validate_sequence(stmt: &CreateSequenceStmt, matrix: &CompatMatrix) -> Feature {
    let mut as_type = "bigint".to_string();
    let mut cache: i64 = 1;
    let mut increment_by: i64 = 1;
    let mut max_value: i64 = i64::MAX;
    let mut min_value: i64 = 1;
    let mut start_with: i64 = 1;
    let mut no_max_value = false;
    let mut no_min_value = false;

    for option in &stmt.options {
        match option {
            SequenceOption::AsType(ty) => as_type = ty.clone(),
            SequenceOption::StartWith(n) => start_with = *n,
            SequenceOption::IncrementBy(n) => increment_by = *n,
            SequenceOption::NoMinValue => no_min_value = true,
            SequenceOption::MinValue(n) => min_value = *n,
            SequenceOption::NoMaxValue => no_max_value = true,
            SequenceOption::MaxValue(n) => max_value = *n,
            SequenceOption::Cache(n) => cache = *n,
            SequenceOption::Cycle | SequenceOption::NoCycle => {
                return matrix.feature_config("create_sequence_cycle");
            }
            SequenceOption::OwnedBy => {}
        }
    }

    let (type_min, type_max) = type_bounds(&as_type);
    if increment_by < 0 && no_min_value {
        min_value = type_min;
    } else if increment_by > 0 && no_max_value {
        max_value = type_max;
    }

    let sequence_size = sequence_size(increment_by, min_value, max_value, start_with);
    let chunk_size =
        MAX_CHUNK_SIZE.min((0.5 * (sequence_size / (2 * NUM_ROUTERS)) as f64) as i64);
    let chunk_boundary = increment_by.wrapping_mul(chunk_size);

    if increment_by == 0 {
        return Feature::unsupported("create_sequence", "INCREMENT must not be zero");
    }
    if sequence_size < MIN_SEQUENCE_SIZE {
        return Feature::unsupported(
            "create_sequence",
            format!(
                "Not enough values to create distributed sequence. Please specify sequence size \
                 to be greater than 2 * chunk_size * sequence_increment * num_routers.\
                 chunk_size={chunk_size},sequence_increment={increment_by},num_routers={NUM_ROUTERS}"
            ),
        );
    }
    if cache > chunk_size {
        return Feature::unsupported(
            "create_sequence",
            format!("CACHE parameter must be less than chunk size: {chunk_size}"),
        );
    }
    if increment_by < 0 && chunk_boundary < type_min {
        return Feature::unsupported(
            "create_sequence",
            format!("MINVALUE ({chunk_boundary}) is out of range for sequence data type {as_type}"),
        );
    }
    if increment_by > 0 && chunk_boundary > type_max {
        return Feature::unsupported(
            "create_sequence",
            format!("MAXVALUE ({chunk_boundary}) is out of range for sequence data type {as_type}"),
        );
    }
    Feature::supported("create_sequence")
}

/// |max − start + 1| ascending, |min − start − 1| descending; wrapping
/// arithmetic, with the minimum representable value clamped so it survives
/// negation.
fn sequence_size(increment_by: i64, min_value: i64, max_value: i64, start_with: i64) -> i64 {
    let mut size: i64 = 0;
    if increment_by < 0 {
        size = min_value.wrapping_sub(start_with).wrapping_sub(1);
    } else if increment_by > 0 {
        size = max_value.wrapping_sub(start_with).wrapping_add(1);
    }
    if size == i64::MIN {
        size = i64::MIN + 1;
    }
    size.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;
    use sc_sql::ddl::QualifiedName;
    use sc_sql::ddl::SequenceOption::*;

    fn seq(options: Vec<SequenceOption>) -> CreateSequenceStmt {
        CreateSequenceStmt {
            temp: false,
            name: Some(QualifiedName::new("s")),
            options,
        }
    }

    fn classify_one(options: Vec<SequenceOption>) -> StatementResult {
        let matrix = test_matrix();
        let mut results = classify_create(&seq(options), &matrix);
        assert_eq!(results.len(), 1);
        results.remove(0)
    }

    #[test]
    fn test_temp_sequence_unsupported() {
        let matrix = test_matrix();
        let stmt = CreateSequenceStmt {
            temp: true,
            name: None,
            options: vec![],
        };
        let results = classify_create(&stmt, &matrix);
        assert_eq!(results[0].message(), "CREATE TEMP SEQUENCE is not supported");
    }

    #[test]
    fn test_cycle_unsupported() {
        let result = classify_one(vec![StartWith(1), Cycle]);
        assert_eq!(
            result.message(),
            "CREATE SEQUENCE CYCLE OR NO CYCLE is not supported"
        );
        let result = classify_one(vec![NoCycle]);
        assert!(!result.is_supported());
    }

    #[test]
    fn test_increment_zero() {
        let result = classify_one(vec![
            StartWith(5),
            IncrementBy(0),
            MinValue(1),
            NoMaxValue,
            Cache(1),
        ]);
        assert_eq!(result.message(), "INCREMENT must not be zero");
    }

    #[test]
    fn test_not_enough_values() {
        let result = classify_one(vec![
            StartWith(1),
            IncrementBy(1),
            NoMinValue,
            MaxValue(3),
            Cache(1),
        ]);
        assert_eq!(
            result.message(),
            "Not enough values to create distributed sequence. Please specify sequence size to \
             be greater than 2 * chunk_size * sequence_increment * num_routers.\
             chunk_size=0,sequence_increment=1,num_routers=2"
        );
    }

    #[test]
    fn test_not_enough_values_negative_range() {
        let result = classify_one(vec![
            StartWith(-3),
            IncrementBy(1),
            MinValue(-3),
            MaxValue(-1),
            Cache(1),
        ]);
        assert!(result.message().starts_with("Not enough values"));
    }

    #[test]
    fn test_cache_must_be_less_than_chunk_size() {
        let result = classify_one(vec![
            StartWith(1),
            IncrementBy(1),
            NoMinValue,
            MaxValue(40),
            Cache(50),
        ]);
        assert_eq!(
            result.message(),
            "CACHE parameter must be less than chunk size: 5"
        );

        let result = classify_one(vec![
            StartWith(1),
            IncrementBy(1),
            NoMinValue,
            MaxValue(30),
            Cache(4),
        ]);
        assert_eq!(
            result.message(),
            "CACHE parameter must be less than chunk size: 3"
        );

        let result = classify_one(vec![
            StartWith(1),
            IncrementBy(1),
            NoMinValue,
            MaxValue(30),
            Cache(3),
        ]);
        assert!(result.is_supported());
    }

    #[test]
    fn test_min_value_out_of_range_for_integer() {
        let result = classify_one(vec![
            AsType("integer".to_string()),
            StartWith(-1),
            IncrementBy(-100000),
            NoMinValue,
            NoMaxValue,
            Cache(1000),
        ]);
        assert_eq!(
            result.message(),
            "MINVALUE (-25000000000) is out of range for sequence data type integer"
        );
    }

    #[test]
    fn test_max_value_out_of_range_for_smallint() {
        let result = classify_one(vec![
            AsType("smallint".to_string()),
            StartWith(1),
            IncrementBy(100000),
            NoMinValue,
            NoMaxValue,
            Cache(1000),
        ]);
        assert_eq!(
            result.message(),
            "MAXVALUE (409500000) is out of range for sequence data type smallint"
        );
    }

    #[test]
    fn test_max_value_out_of_range_for_integer() {
        let result = classify_one(vec![
            AsType("integer".to_string()),
            StartWith(1),
            IncrementBy(100000),
            NoMinValue,
            NoMaxValue,
            Cache(1000),
        ]);
        assert_eq!(
            result.message(),
            "MAXVALUE (25000000000) is out of range for sequence data type integer"
        );
    }

    #[test]
    fn test_supported_sequences() {
        for options in [
            vec![StartWith(5), IncrementBy(2), MinValue(1), NoMaxValue, Cache(1)],
            vec![
                AsType("integer".to_string()),
                StartWith(1),
                IncrementBy(1),
                NoMinValue,
                NoMaxValue,
                Cache(1),
            ],
            vec![
                StartWith(100),
                IncrementBy(-1),
                MinValue(1),
                MaxValue(100),
                Cache(1),
            ],
            vec![
                StartWith(-10),
                IncrementBy(-1),
                MinValue(-30),
                NoMaxValue,
                Cache(2),
            ],
            vec![StartWith(-10), IncrementBy(1), NoMinValue, NoMaxValue, Cache(1)],
            vec![
                AsType("smallint".to_string()),
                StartWith(-1),
                IncrementBy(-1),
                NoMinValue,
                NoMaxValue,
                Cache(1),
            ],
        ] {
            let result = classify_one(options.clone());
            assert!(result.is_supported(), "expected supported: {options:?}");
        }
    }

    #[test]
    fn test_alter_sequence_forms() {
        let matrix = test_matrix();
        let owned = classify_alter(
            &AlterSequenceStmt {
                cmd: AlterSequenceCmd::OwnedBy,
            },
            &matrix,
        );
        assert_eq!(owned[0].feature.key, "alter_sequence_owned_by");
        let other = classify_alter(
            &AlterSequenceStmt {
                cmd: AlterSequenceCmd::Options,
            },
            &matrix,
        );
        assert!(!other[0].is_supported());
    }
}

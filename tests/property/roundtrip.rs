//! set-then-get returns the value that was stored.

use paramtree::{ConfigContainer, DenseMatrix, Shape};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}(\\.[a-z][a-z0-9_]{0,6}){0,3}"
}

/// Values without separators, brackets or surrounding whitespace. Inner
/// spaces and the empty string are allowed.
fn word_strategy() -> impl Strategy<Value = String> {
    "([A-Za-z0-9_+-]{1,6}( [A-Za-z0-9_+-]{1,6}){0,2})?"
}

#[test]
fn test_scalar_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(key_strategy(), any::<i64>(), any::<u32>(), any::<bool>()),
            |(key, signed, unsigned, flag)| {
                let mut config = ConfigContainer::new();
                config.set(&format!("{}.signed", key), &signed, false).unwrap();
                config.set(&format!("{}.unsigned", key), &unsigned, false).unwrap();
                config.set(&format!("{}.flag", key), &flag, false).unwrap();

                prop_assert_eq!(config.get::<i64>(&format!("{}.signed", key)).unwrap(), signed);
                prop_assert_eq!(config.get::<u32>(&format!("{}.unsigned", key)).unwrap(), unsigned);
                prop_assert_eq!(config.get::<bool>(&format!("{}.flag", key)).unwrap(), flag);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_float_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(key_strategy(), -1.0e12f64..1.0e12f64), |(key, value)| {
            let mut config = ConfigContainer::new();
            config.set(&key, &value, false).unwrap();
            prop_assert_eq!(config.get::<f64>(&key).unwrap(), value);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_vector_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(any::<i32>(), 0..12),
                prop::collection::vec(word_strategy(), 0..6),
            ),
            |(numbers, words)| {
                let mut config = ConfigContainer::new();
                config.set("numbers", &numbers, false).unwrap();
                config.set("words", &words, false).unwrap();

                prop_assert_eq!(config.get::<Vec<i32>>("numbers").unwrap(), numbers.clone());
                prop_assert_eq!(config.get::<Vec<String>>("words").unwrap(), words);

                if !numbers.is_empty() {
                    let head: Vec<i32> = config.get_shaped("numbers", Shape::vector(1)).unwrap();
                    prop_assert_eq!(head, vec![numbers[0]]);
                }
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_nested_vector_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(prop::collection::vec(any::<i16>(), 0..4), 0..4),
            |nested| {
                let mut config = ConfigContainer::new();
                config.set("nested", &nested, false).unwrap();
                prop_assert_eq!(config.get::<Vec<Vec<i16>>>("nested").unwrap(), nested);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_matrix_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let strategy = (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(-1000i32..1000, rows * cols),
        )
    });

    runner
        .run(&strategy, |(rows, cols, entries)| {
            let matrix = DenseMatrix::new(rows, cols, entries).unwrap();
            let mut config = ConfigContainer::new();
            config.set("m", &matrix, false).unwrap();

            let back: DenseMatrix<i32> = config.get("m").unwrap();
            prop_assert_eq!(&back, &matrix);

            let first_row: DenseMatrix<i32> =
                config.get_shaped("m", Shape::matrix(1, cols)).unwrap();
            prop_assert_eq!(first_row.rows(), 1);
            prop_assert_eq!(first_row.get(0, cols - 1), matrix.get(0, cols - 1));
            Ok(())
        })
        .unwrap();
}

//! The same tree built six different ways must read back identically.

use paramtree::{ConfigContainer, ContainerOptions, DenseMatrix, Shape, TreeNode};

const KEYS: [&str; 5] = [
    "string",
    "sub1.int",
    "sub2.size_t",
    "sub2.subsub1.vector",
    "sub2.subsub1.matrix",
];
const VALUES: [&str; 5] = ["string", "1", "1", "[0 1]", "[0 1; 1 2]"];

fn by_set() -> ConfigContainer {
    let mut config = ConfigContainer::new();
    for (key, value) in KEYS.iter().zip(VALUES) {
        config.set(key, value, false).unwrap();
    }
    config
}

fn by_set_and_clone() -> ConfigContainer {
    by_set().clone()
}

fn by_value_and_add_container() -> ConfigContainer {
    let mut config = ConfigContainer::with_value("string", "string").unwrap();
    config.set("sub1.int", "1", false).unwrap();
    config.set("sub2.size_t", &1usize, false).unwrap();
    config
        .add(
            &ConfigContainer::with_value("vector", "[0 1]").unwrap(),
            "sub2.subsub1",
            false,
        )
        .unwrap();
    config
        .add(
            &ConfigContainer::with_value("matrix", "[0 1; 1 2]").unwrap(),
            "sub2.subsub1",
            false,
        )
        .unwrap();
    config
}

fn by_value_and_add_tree() -> ConfigContainer {
    let mut config = ConfigContainer::with_value("string", "string").unwrap();
    config.set("sub1.int", "1", false).unwrap();
    config.set("sub2.size_t", &1usize, false).unwrap();
    let tree = TreeNode::from_pairs([("vector", "[0 1]"), ("matrix", "[0 1; 1 2]")]).unwrap();
    config.add_tree(&tree, "sub2.subsub1", false).unwrap();
    config
}

fn by_pairs() -> ConfigContainer {
    ConfigContainer::from_pairs(&KEYS, &VALUES).unwrap()
}

fn by_tree() -> ConfigContainer {
    let tree = TreeNode::from_pairs(KEYS.iter().zip(VALUES)).unwrap();
    ConfigContainer::from_tree(tree, ContainerOptions::default())
}

fn creators() -> Vec<(&'static str, ConfigContainer)> {
    vec![
        ("set", by_set()),
        ("set_and_clone", by_set_and_clone()),
        ("value_and_add_container", by_value_and_add_container()),
        ("value_and_add_tree", by_value_and_add_tree()),
        ("pairs", by_pairs()),
        ("tree", by_tree()),
    ]
}

#[test]
fn test_creators_agree() {
    let reference = by_set().flatten();
    for (name, config) in creators() {
        assert_eq!(config.flatten(), reference, "creator {}", name);
    }
}

#[test]
fn test_scalars() {
    for (name, config) in creators() {
        assert_eq!(config.get::<String>("string").unwrap(), "string", "{}", name);
        assert_eq!(config.get::<i32>("sub1.int").unwrap(), 1, "{}", name);
        assert_eq!(config.get::<usize>("sub2.size_t").unwrap(), 1, "{}", name);
    }
}

#[test]
fn test_vectors() {
    for (name, config) in creators() {
        let sub = config.sub("sub2.subsub1").unwrap();

        let one: Vec<f64> = sub.get_shaped("vector", Shape::vector(1)).unwrap();
        assert_eq!(one, vec![0.0], "{}", name);

        let two: Vec<f64> = sub.get_shaped("vector", Shape::vector(2)).unwrap();
        assert_eq!(two, vec![0.0, 1.0], "{}", name);

        let inferred: Vec<f64> = sub.get("vector").unwrap();
        assert_eq!(inferred, vec![0.0, 1.0], "{}", name);

        let fixed: [f64; 2] = sub.get("vector").unwrap();
        assert_eq!(fixed, [0.0, 1.0], "{}", name);
    }
}

#[test]
fn test_vectors_with_defaults() {
    for (name, config) in creators() {
        let mut sub = config.sub("sub2.subsub1").unwrap();
        let one: Vec<f64> = sub
            .get_or_shaped("vector", Vec::new(), Shape::vector(1))
            .unwrap();
        assert_eq!(one, vec![0.0], "{}", name);
        let two: Vec<f64> = sub
            .get_or_shaped("vector", Vec::new(), Shape::vector(2))
            .unwrap();
        assert_eq!(two, vec![0.0, 1.0], "{}", name);
    }
}

#[test]
fn test_matrices() {
    for (name, config) in creators() {
        let sub = config.sub("sub2.subsub1").unwrap();
        for (rows, cols) in [(1, 1), (1, 2), (2, 1), (2, 2), (0, 0)] {
            let mat: DenseMatrix<f64> = sub.get_shaped("matrix", Shape::matrix(rows, cols)).unwrap();
            let expected_rows = if rows == 0 { 2 } else { rows };
            let expected_cols = if cols == 0 { 2 } else { cols };
            assert_eq!(mat.rows(), expected_rows, "{}", name);
            assert_eq!(mat.cols(), expected_cols, "{}", name);
            let full = [[0.0, 1.0], [1.0, 2.0]];
            for r in 0..expected_rows {
                for c in 0..expected_cols {
                    assert_eq!(mat[(r, c)], full[r][c], "{} at ({}, {})", name, r, c);
                }
            }
        }
    }
}

#[test]
fn test_report_is_the_same_for_every_creator() {
    let expected = "string = string\n\
                    [ sub1 ]\n\
                    int = 1\n\
                    [ sub2 ]\n\
                    size_t = 1\n\
                    [ sub2.subsub1 ]\n\
                    matrix = [0 1; 1 2]\n\
                    vector = [0 1]\n";
    for (name, config) in creators() {
        assert_eq!(config.report_string(""), expected, "{}", name);
    }
}

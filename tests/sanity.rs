use std::fs;
use std::path::PathBuf;

use vfdt::streams::Stream;
use vfdt::streams::generators::RandomNominalGenerator;
use vfdt::{Example, FeatureDomain, HoeffdingTree, HoeffdingTreeParams};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn learner() -> HoeffdingTree {
    HoeffdingTree::new(
        FeatureDomain::new(vec![3, 3, 2]).unwrap(),
        HoeffdingTreeParams::new(0.05, 0.05, 1).unwrap(),
    )
    .unwrap()
}

fn examples() -> [Example; 4] {
    [
        Example::new(vec![1, 0, 1], 1),
        Example::new(vec![2, 1, 0], 0),
        Example::new(vec![0, 1, 1], 1),
        Example::new(vec![2, 0, 0], 0),
    ]
}

#[test]
fn fresh_tree_grows_into_known_shape() {
    let mut learner = learner();
    for e in examples() {
        learner.update(&e).unwrap();
    }

    let expected = "0=0:\n\
                    | 1=0:\n\
                    | | Leaf\n\
                    | 1=1:\n\
                    | | Leaf\n\
                    | 1=2:\n\
                    | | Leaf\n\
                    0=1:\n\
                    | Leaf\n\
                    0=2:\n\
                    | 1=0:\n\
                    | | 2=0:\n\
                    | | | Leaf\n\
                    | | 2=1:\n\
                    | | | Leaf\n\
                    | 1=1:\n\
                    | | Leaf\n\
                    | 1=2:\n\
                    | | Leaf\n";
    assert_eq!(learner.get_visualization(), expected);
    assert_eq!(learner.tree().node_count(), 12);
    assert_eq!(learner.nb_examples_processed(), 4);
}

#[test]
fn read_model_sets_examples_processed() {
    let mut learner = learner();
    learner.read_model(fixture("sanity0.model"), 3).unwrap();
    assert_eq!(learner.nb_examples_processed(), 3);
}

#[test]
fn empty_model_predicts_half() {
    let mut learner = learner();
    learner.read_model(fixture("sanity0.model"), 0).unwrap();
    let p = learner.make_prediction(examples()[0].values()).unwrap();
    assert!((p - 0.5).abs() < 1e-7);
}

#[test]
fn two_leaf_fixture_reconstructs() {
    let mut learner = learner();
    learner.read_model(fixture("two_leaves.model"), 0).unwrap();
    assert_eq!(learner.get_visualization(), "2=0:\n| Leaf\n2=1:\n| Leaf\n");
    assert_eq!(learner.tree().node_count(), 3);
}

#[test]
fn read_and_visualize() {
    let mut learner = learner();
    learner.read_model(fixture("sanity1.model"), 0).unwrap();
    let expected = "2=0:\n\
                    | 0=0:\n\
                    | | Leaf\n\
                    | 0=1:\n\
                    | | Leaf\n\
                    | 0=2:\n\
                    | | Leaf\n\
                    2=1:\n\
                    | Leaf\n";
    assert_eq!(learner.get_visualization(), expected);
}

#[test]
fn reloaded_model_keeps_learning_identically() {
    let dir = tempfile::tempdir().unwrap();
    let [e1, e2, e3, e4] = examples();

    let mut first = learner();
    first.read_model(fixture("sanity1.model"), 0).unwrap();
    first.update(&e1).unwrap();
    first.update(&e2).unwrap();
    let path0 = dir.path().join("out1.model");
    first.write_model(&path0).unwrap();

    let mut second = learner();
    second
        .read_model(&path0, first.nb_examples_processed())
        .unwrap();
    for e in [&e3, &e4] {
        first.update(e).unwrap();
        second.update(e).unwrap();
    }

    let path1 = dir.path().join("out2.model");
    let path2 = dir.path().join("out3.model");
    first.write_model(&path1).unwrap();
    second.write_model(&path2).unwrap();
    let text1 = fs::read_to_string(&path1).unwrap();
    let text2 = fs::read_to_string(&path2).unwrap();
    assert_eq!(text1, text2);
    assert_eq!(first.nb_examples_processed(), second.nb_examples_processed());

    assert_eq!(text1.lines().next(), Some("15"));
    // [2,0,0] lands in a leaf with no candidates left and stays there.
    assert!(text1.contains(" L pf:[] nijk:[0:2:0:1,1:0:0:1,2:0:0:1]"));
    let expected = "2=0:\n\
                    | 0=0:\n\
                    | | Leaf\n\
                    | 0=1:\n\
                    | | Leaf\n\
                    | 0=2:\n\
                    | | 1=0:\n\
                    | | | Leaf\n\
                    | | 1=1:\n\
                    | | | Leaf\n\
                    | | 1=2:\n\
                    | | | Leaf\n\
                    2=1:\n\
                    | 0=0:\n\
                    | | 1=0:\n\
                    | | | Leaf\n\
                    | | 1=1:\n\
                    | | | Leaf\n\
                    | | 1=2:\n\
                    | | | Leaf\n\
                    | 0=1:\n\
                    | | Leaf\n\
                    | 0=2:\n\
                    | | Leaf\n";
    assert_eq!(second.get_visualization(), expected);
}

#[test]
fn learns_generated_concept_and_survives_round_trip() {
    let domain = FeatureDomain::new(vec![3, 4, 2]).unwrap();
    let params = HoeffdingTreeParams::new(0.05, 1e-3, 50).unwrap();
    let mut learner = HoeffdingTree::new(domain.clone(), params).unwrap();

    let mut train = RandomNominalGenerator::new(domain.clone(), 1, 10, Some(20_000), 11).unwrap();
    assert_eq!(learner.train_on_stream(&mut train, None).unwrap(), 20_000);
    assert!(learner.tree().node_count() > 1);

    let mut test = RandomNominalGenerator::new(domain.clone(), 1, 0, Some(1_000), 99).unwrap();
    let mut correct = 0;
    let mut seen = 0;
    while let Some(e) = test.next_example() {
        let p = learner.make_prediction(e.values()).unwrap();
        let predicted = usize::from(p > 0.5);
        if predicted == e.label() {
            correct += 1;
        }
        seen += 1;
    }
    assert!(correct as f64 / seen as f64 > 0.95, "accuracy {correct}/{seen}");

    let mut reloaded = HoeffdingTree::new(domain.clone(), params).unwrap();
    reloaded.load_model_str(&learner.model_string(), 20_000).unwrap();
    assert_eq!(reloaded.get_visualization(), learner.get_visualization());
    for a in 0..3 {
        for b in 0..4 {
            for c in 0..2 {
                let values = [a, b, c];
                assert_eq!(
                    reloaded.make_prediction(&values).unwrap(),
                    learner.make_prediction(&values).unwrap()
                );
            }
        }
    }
}

//! Demo decision-tree classifier.
//!
//! A shallow CART-style tree fitted once at startup on the synthetic
//! cohort. This mimics the rule evaluator it was labeled by and exists
//! for demonstration; the rule path is authoritative.

pub mod synthetic;

use crate::config::ClassifierConfig;
use crate::core::{MlPrediction, PatientRecord, RiskLevel};
use crate::errors::VitalmapError;

const CLASS_COUNT: usize = 3;
const FEATURE_COUNT: usize = 7;
const MIN_SAMPLES_SPLIT: usize = 2;

const CLASS_LABELS: [RiskLevel; CLASS_COUNT] =
    [RiskLevel::Normal, RiskLevel::Moderate, RiskLevel::High];

/// Immutable trained handle, constructed once at startup and injected
/// into request handlers.
#[derive(Clone, Debug)]
pub struct TrainedClassifier {
    tree: DecisionTree,
}

impl TrainedClassifier {
    pub fn train(config: &ClassifierConfig) -> Result<Self, VitalmapError> {
        if config.samples == 0 {
            return Err(VitalmapError::validation(
                "classifier requires at least one training sample",
            ));
        }

        let cohort = synthetic::generate_cohort(config.samples, config.seed);
        let features: Vec<[f64; FEATURE_COUNT]> = cohort
            .iter()
            .map(|(record, _)| feature_vector(record))
            .collect();
        let labels: Vec<usize> = cohort
            .iter()
            .map(|(_, label)| *label as usize)
            .collect();

        Ok(Self {
            tree: DecisionTree::fit(&features, &labels, config.max_depth),
        })
    }

    /// Predicted class plus confidence, the max leaf class fraction as a
    /// percentage rounded to one decimal.
    pub fn predict(&self, record: &PatientRecord) -> MlPrediction {
        let probabilities = self.tree.probabilities(&feature_vector(record));

        let mut best = 0;
        for class in 1..CLASS_COUNT {
            if probabilities[class] > probabilities[best] {
                best = class;
            }
        }

        MlPrediction {
            predicted_risk: CLASS_LABELS[best],
            confidence: (probabilities[best] * 1000.0).round() / 10.0,
        }
    }
}

fn feature_vector(record: &PatientRecord) -> [f64; FEATURE_COUNT] {
    [
        record.age as f64,
        record.gender.encoded(),
        record.glucose,
        record.systolic_bp,
        record.diastolic_bp,
        record.cholesterol,
        record.bmi,
    ]
}

#[derive(Clone, Debug)]
enum Node {
    Leaf {
        probabilities: [f64; CLASS_COUNT],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Clone, Debug)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    pub fn fit(samples: &[[f64; FEATURE_COUNT]], labels: &[usize], max_depth: usize) -> Self {
        let indices: Vec<usize> = (0..samples.len()).collect();
        Self {
            root: build_node(samples, labels, &indices, max_depth),
        }
    }

    pub fn probabilities(&self, features: &[f64; FEATURE_COUNT]) -> [f64; CLASS_COUNT] {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { probabilities } => return *probabilities,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

fn build_node(
    samples: &[[f64; FEATURE_COUNT]],
    labels: &[usize],
    indices: &[usize],
    depth_left: usize,
) -> Node {
    let counts = class_counts(labels, indices);

    let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
    if depth_left == 0 || indices.len() < MIN_SAMPLES_SPLIT || is_pure {
        return leaf(&counts);
    }

    let Some((feature, threshold)) = best_split(samples, labels, indices, &counts) else {
        return leaf(&counts);
    };

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .partition(|&&idx| samples[idx][feature] <= threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_node(samples, labels, &left, depth_left - 1)),
        right: Box::new(build_node(samples, labels, &right, depth_left - 1)),
    }
}

/// Exhaustive split search: for each feature, sweep the sorted values and
/// score candidate midpoints by weighted Gini impurity.
fn best_split(
    samples: &[[f64; FEATURE_COUNT]],
    labels: &[usize],
    indices: &[usize],
    parent_counts: &[usize; CLASS_COUNT],
) -> Option<(usize, f64)> {
    let total = indices.len() as f64;
    let parent_impurity = gini(parent_counts);
    let mut best: Option<(usize, f64)> = None;
    let mut best_impurity = parent_impurity - 1e-9;

    for feature in 0..FEATURE_COUNT {
        let mut order = indices.to_vec();
        order.sort_by(|&a, &b| {
            samples[a][feature]
                .partial_cmp(&samples[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut left = [0usize; CLASS_COUNT];
        let mut right = *parent_counts;

        for pair in 0..order.len() - 1 {
            let idx = order[pair];
            left[labels[idx]] += 1;
            right[labels[idx]] -= 1;

            let value = samples[idx][feature];
            let next = samples[order[pair + 1]][feature];
            if next <= value {
                continue;
            }

            let left_weight = (pair + 1) as f64 / total;
            let weighted = left_weight * gini(&left) + (1.0 - left_weight) * gini(&right);
            if weighted < best_impurity {
                best_impurity = weighted;
                best = Some((feature, (value + next) / 2.0));
            }
        }
    }

    best
}

fn class_counts(labels: &[usize], indices: &[usize]) -> [usize; CLASS_COUNT] {
    let mut counts = [0usize; CLASS_COUNT];
    for &idx in indices {
        counts[labels[idx]] += 1;
    }
    counts
}

fn gini(counts: &[usize; CLASS_COUNT]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn leaf(counts: &[usize; CLASS_COUNT]) -> Node {
    let total: usize = counts.iter().sum();
    let mut probabilities = [0.0; CLASS_COUNT];
    if total > 0 {
        for class in 0..CLASS_COUNT {
            probabilities[class] = counts[class] as f64 / total as f64;
        }
    }
    Node::Leaf { probabilities }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_a_single_threshold_split() {
        let samples: Vec<[f64; FEATURE_COUNT]> = (0..20)
            .map(|i| {
                let glucose = if i < 10 { 90.0 } else { 150.0 };
                [40.0, 0.0, glucose, 110.0, 70.0, 180.0, 22.0]
            })
            .collect();
        let labels: Vec<usize> = (0..20).map(|i| usize::from(i >= 10)).collect();

        let tree = DecisionTree::fit(&samples, &labels, 5);

        let low = tree.probabilities(&[40.0, 0.0, 85.0, 110.0, 70.0, 180.0, 22.0]);
        let high = tree.probabilities(&[40.0, 0.0, 160.0, 110.0, 70.0, 180.0, 22.0]);
        assert_eq!(low[0], 1.0);
        assert_eq!(high[1], 1.0);
    }

    #[test]
    fn depth_limit_caps_the_tree() {
        // With depth zero the tree is a single leaf carrying the class
        // priors, whatever the data looks like.
        let samples = vec![
            [30.0, 0.0, 90.0, 110.0, 70.0, 180.0, 22.0],
            [30.0, 0.0, 150.0, 110.0, 70.0, 180.0, 22.0],
            [30.0, 0.0, 200.0, 110.0, 70.0, 180.0, 22.0],
            [30.0, 0.0, 250.0, 110.0, 70.0, 180.0, 22.0],
        ];
        let labels = vec![0, 1, 2, 2];

        let tree = DecisionTree::fit(&samples, &labels, 0);
        let probabilities = tree.probabilities(&samples[0]);
        assert_eq!(probabilities, [0.25, 0.25, 0.5]);
    }

    #[test]
    fn leaf_probabilities_always_sum_to_one() {
        let cohort = synthetic::generate_cohort(200, 7);
        let samples: Vec<[f64; FEATURE_COUNT]> =
            cohort.iter().map(|(r, _)| feature_vector(r)).collect();
        let labels: Vec<usize> = cohort.iter().map(|(_, l)| *l as usize).collect();
        let tree = DecisionTree::fit(&samples, &labels, 5);

        for sample in &samples {
            let probabilities = tree.probabilities(sample);
            let sum: f64 = probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}

use perception_utils::{
    highest_prob_classification, highest_prob_label, label_to_string, to_label, Label,
    ObjectClassification,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_list(rng: &mut StdRng, len: usize) -> Vec<ObjectClassification> {
    (0..len)
        .map(|_| {
            let label = Label::ALL[rng.random_range(0..Label::COUNT)];
            // Coarse probabilities so ties are frequent.
            let probability = f64::from(rng.random_range(0..=10u8)) / 10.0;
            ObjectClassification::new(label, probability)
        })
        .collect()
}

/// Index of the first entry carrying the maximum probability.
fn first_max_index(list: &[ObjectClassification]) -> usize {
    let max = list
        .iter()
        .map(|c| c.probability)
        .fold(f64::NEG_INFINITY, f64::max);
    list.iter().position(|c| c.probability == max).unwrap()
}

#[test]
fn label_and_classification_selection_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let len = rng.random_range(1..12);
        let list = random_list(&mut rng, len);
        assert_eq!(
            highest_prob_label(&list),
            highest_prob_classification(&list).label
        );
    }
}

#[test]
fn selection_returns_first_maximum_entry_intact() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let len = rng.random_range(1..12);
        let list = random_list(&mut rng, len);
        let expected = list[first_max_index(&list)];
        let selected = highest_prob_classification(&list);
        assert_eq!(selected, expected);
        assert!(list.contains(&selected));
    }
}

#[test]
fn selection_does_not_depend_on_entries_after_a_strict_maximum() {
    let list = vec![
        ObjectClassification::new(Label::Bicycle, 0.3),
        ObjectClassification::new(Label::Pedestrian, 0.95),
        ObjectClassification::new(Label::Car, 0.95),
        ObjectClassification::new(Label::Bus, 0.1),
    ];
    let selected = highest_prob_classification(&list);
    assert_eq!(selected.label, Label::Pedestrian);
    assert_eq!(selected.probability, 0.95);
}

#[test]
fn every_label_round_trips_through_its_name() {
    for label in Label::ALL {
        assert_eq!(to_label(&label_to_string(label)), Ok(label));
    }
}

use rand::{rngs::SmallRng, SeedableRng};
use ssp_challenge::{Error, Population, Selection, Supplier};
use std::collections::HashSet;

fn supplier(label: usize, weight: f64, blacklist: &[usize], interactions: &[usize]) -> Supplier {
    Supplier {
        label,
        weight,
        blacklist: blacklist.iter().copied().collect(),
        interactions: interactions.to_vec(),
    }
}

// Fixed population from the worked scenario: 1 and 2 exclude each other,
// 3 and 4 exclude each other.
fn fixed_population() -> Population {
    Population {
        num_suppliers: 4,
        suppliers: vec![
            supplier(1, 0.5, &[2], &[3, 4]),
            supplier(2, 0.9, &[1], &[3, 4]),
            supplier(3, 0.2, &[4], &[1, 2]),
            supplier(4, 0.1, &[3], &[1, 2]),
        ],
    }
}

#[test]
fn test_partition_property() {
    let mut rng = SmallRng::seed_from_u64(42);
    for n in [1, 2, 3, 8, 13, 26] {
        let population = Population::generate(n, &mut rng).unwrap();
        assert_eq!(population.suppliers.len(), n);
        for supplier in &population.suppliers {
            assert!(!supplier.blacklist.contains(&supplier.label));
            assert!(!supplier.interactions.contains(&supplier.label));
            let interactions: HashSet<usize> = supplier.interactions.iter().copied().collect();
            assert_eq!(interactions.len(), supplier.interactions.len());
            assert!(supplier.blacklist.is_disjoint(&interactions));
            let mut union: Vec<usize> = supplier.blacklist.union(&interactions).copied().collect();
            union.sort_unstable();
            let others: Vec<usize> = (1..=n).filter(|&m| m != supplier.label).collect();
            assert_eq!(union, others);
        }
    }
}

#[test]
fn test_blacklist_size() {
    let mut rng = SmallRng::seed_from_u64(7);
    for n in 1..=30 {
        let population = Population::generate(n, &mut rng).unwrap();
        for supplier in &population.suppliers {
            assert_eq!(supplier.blacklist.len(), n / 2);
            assert_eq!(supplier.interactions.len(), n - 1 - n / 2);
        }
    }
}

#[test]
fn test_interactions_keep_generation_order() {
    // Blacklist draws remove from an ascending pool, so the leftover
    // interactions list stays ascending.
    let mut rng = SmallRng::seed_from_u64(123);
    let population = Population::generate(20, &mut rng).unwrap();
    for supplier in &population.suppliers {
        assert!(supplier.interactions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_weights_rounded_and_in_range() {
    let mut rng = SmallRng::seed_from_u64(99);
    let population = Population::generate(50, &mut rng).unwrap();
    for supplier in &population.suppliers {
        assert!(supplier.weight >= 0.0 && supplier.weight < 1.0);
        assert_eq!((supplier.weight * 1000.0).round() / 1000.0, supplier.weight);
    }
}

#[test]
fn test_zero_suppliers_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Population::generate(0, &mut rng),
        Err(Error::InvalidArgument(0))
    );
}

#[test]
fn test_single_supplier() {
    let mut rng = SmallRng::seed_from_u64(1);
    let population = Population::generate(1, &mut rng).unwrap();
    let supplier = population.supplier(1).unwrap();
    assert_eq!(supplier.label, 1);
    assert!(supplier.blacklist.is_empty());
    assert!(supplier.interactions.is_empty());
}

#[test]
fn test_generation_is_deterministic() {
    let seed = [3u8; 32];
    let a = Population::generate_instance(&seed, 20).unwrap();
    let b = Population::generate_instance(&seed, 20).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_supplier_lookup() {
    let population = fixed_population();
    assert_eq!(population.supplier(2).unwrap().label, 2);
    assert!(population.supplier(0).is_none());
    assert!(population.supplier(5).is_none());
}

#[test]
fn test_display() {
    let population = fixed_population();
    let text = format!("{}", population.supplier(1).unwrap());
    assert!(text.contains("Supplier 1"));
    assert!(text.contains("offers grams: 0.5"));
    assert!(text.contains("competes with suppliers: [2]"));
    assert!(text.contains("interacts with: [3, 4]"));
}

#[test]
fn test_verify_accepts_valid_selection() {
    let population = fixed_population();
    let selection = Selection {
        total_weight: 1.1,
        labels: vec![2, 3],
    };
    assert_eq!(population.verify_selection(&selection).unwrap(), 1.1);
}

#[test]
fn test_verify_accepts_single_member() {
    let population = fixed_population();
    let selection = Selection {
        total_weight: 0.9,
        labels: vec![2],
    };
    assert_eq!(population.verify_selection(&selection).unwrap(), 0.9);
}

#[test]
fn test_verify_rejects_empty_selection() {
    let population = fixed_population();
    let selection = Selection {
        total_weight: 0.0,
        labels: vec![],
    };
    assert!(population.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_interference() {
    // 4 is in 3's blacklist, so [3, 4] violates the interference rule.
    let population = fixed_population();
    let selection = Selection {
        total_weight: 0.3,
        labels: vec![3, 4],
    };
    assert!(population.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_member_blacklisted_by_candidate() {
    // Asymmetric case: 1 does not blacklist 2, but 2 blacklists 1, so the
    // mutual check (not the interference check) must reject [1, 2].
    let population = Population {
        num_suppliers: 3,
        suppliers: vec![
            supplier(1, 0.5, &[3], &[2]),
            supplier(2, 0.4, &[1], &[3]),
            supplier(3, 0.3, &[2], &[1]),
        ],
    };
    let selection = Selection {
        total_weight: 0.9,
        labels: vec![1, 2],
    };
    assert!(population.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_unknown_label() {
    let population = fixed_population();
    let selection = Selection {
        total_weight: 0.5,
        labels: vec![1, 9],
    };
    assert!(population.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_duplicate_label() {
    let population = fixed_population();
    let selection = Selection {
        total_weight: 0.9,
        labels: vec![1, 3, 3],
    };
    assert!(population.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_weight_mismatch() {
    let population = fixed_population();
    let selection = Selection {
        total_weight: 0.9,
        labels: vec![1, 3],
    };
    assert!(population.verify_selection(&selection).is_err());
}

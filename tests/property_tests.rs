use dynhuff::compression::compress::compress;
use dynhuff::huffman_coding::adaptive::DynamicHuffman;
use proptest::prelude::*;

proptest! {
    #[test]
    fn same_input_same_codes(input in prop::collection::vec(any::<u8>(), 0..300)) {
        let a = compress(&input);
        let b = compress(&input);
        prop_assert_eq!(a.codes, b.codes);
        prop_assert_eq!(a.bits, b.bits);
    }

    #[test]
    fn weights_count_observations(input in prop::collection::vec(0..16u8, 1..300)) {
        let mut dh = DynamicHuffman::new();
        let mut counts = [0u64; 256];
        for &b in &input {
            dh.observe(b);
            counts[b as usize] += 1;
        }

        prop_assert_eq!(dh.total_weight(), input.len() as u64);
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        prop_assert_eq!(dh.leaf_count(), distinct);
        for sym in 0..=255u8 {
            let expect = if counts[sym as usize] > 0 { Some(counts[sym as usize]) } else { None };
            prop_assert_eq!(dh.weight_of(sym), expect);
        }
    }

    #[test]
    fn codes_are_prefix_free_and_retrace(input in prop::collection::vec(any::<u8>(), 2..300)) {
        let mut dh = DynamicHuffman::new();
        input.iter().for_each(|&b| dh.observe(b));
        let table = dh.code_table();

        if table.len() >= 2 {
            for &(sym, _, code) in &table {
                prop_assert!(!code.is_empty());
                prop_assert!(code.chars().all(|c| c == '0' || c == '1'));
                prop_assert_eq!(dh.resolve(code), Some(sym));
                for &(other, _, other_code) in &table {
                    if other != sym {
                        prop_assert!(!other_code.starts_with(code));
                    }
                }
            }
        } else {
            prop_assert_eq!(table[0].2, "");
        }
    }

    #[test]
    fn unseen_symbols_have_no_code(
        input in prop::collection::vec(0..128u8, 0..200),
        probe in 128..=255u8,
    ) {
        let mut dh = DynamicHuffman::new();
        for &b in &input {
            dh.observe(b);
            prop_assert_eq!(dh.code_for(probe), "");
        }
    }

    #[test]
    fn first_occurrence_emits_nothing(input in prop::collection::vec(any::<u8>(), 0..300)) {
        let c = compress(&input);
        let mut seen = [false; 256];
        for (&b, code) in input.iter().zip(&c.codes) {
            if !seen[b as usize] {
                prop_assert_eq!(code.as_str(), "");
                seen[b as usize] = true;
            }
        }
        prop_assert_eq!(c.codes.concat(), c.bits.clone());
        prop_assert_eq!(c.stats.original_bits, input.len() * 8);
        prop_assert_eq!(c.stats.compressed_bits, c.bits.len());
    }

    #[test]
    fn root_weight_is_the_sum_of_children(input in prop::collection::vec(0..32u8, 2..200)) {
        let mut dh = DynamicHuffman::new();
        input.iter().for_each(|&b| dh.observe(b));
        let root = dh.root().unwrap();
        let node = dh.node(root);
        if let Some((left, right)) = node.children() {
            prop_assert_eq!(node.weight, dh.node(left).weight + dh.node(right).weight);
            // Children are ordered lighter (or older) first
            prop_assert!(dh.node(left).key() < dh.node(right).key());
        }
    }
}

#[test]
fn aab_scenario() {
    let c = compress(b"aab");
    assert_eq!(c.codes, vec!["", "", ""]);
    assert_eq!(c.stats.compressed_bits, 0);
}

#[test]
fn independent_engines_agree() {
    let text = b"it was the best of times, it was the worst of times";
    let mut one = DynamicHuffman::new();
    let mut two = DynamicHuffman::default();
    for &b in text.iter() {
        assert_eq!(one.code_for(b), two.code_for(b));
        one.observe(b);
        two.observe(b);
    }
    assert_eq!(one.code_table(), two.code_table());
}

#[test]
fn frequent_symbols_get_shorter_codes() {
    let mut dh = DynamicHuffman::new();
    for _ in 0..50 {
        dh.observe(b'e');
    }
    for &b in b"xyzq" {
        dh.observe(b);
    }
    let e = dh.code_for(b'e').len();
    for &b in b"xyzq" {
        assert!(e < dh.code_for(b).len());
    }
}

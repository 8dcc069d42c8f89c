use fd_dna::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// All valid sequences up to (and including) length `n`.
fn all_sequences(n: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..n {
        let next: Vec<String> = last.iter()
            .flat_map(|s| DNA_ALPHABET.into_iter().map(move |c| format!("{s}{c}")))
            .collect();
        all.extend(next.iter().cloned());
        last = next;
    }
    all
}

#[test]
fn complement_is_an_involution() {
    init();
    for seq in all_sequences(5) {
        let once = get_complementary_sequence(&seq).unwrap();
        assert_eq!(get_length(&once), get_length(&seq));
        assert_eq!(get_complementary_sequence(&once).unwrap(), seq);
    }
}

#[test]
fn nothing_is_longer_than_itself() {
    for seq in all_sequences(3) {
        assert!(!is_longer(&seq, &seq));
        assert!(contains_sequence(&seq, ""));
        assert!(contains_sequence(&seq, &seq));
        assert!(is_valid_sequence(&seq));
    }
}

#[test]
fn nucleotide_counts_add_up() {
    for seq in all_sequences(4) {
        let total: usize = DNA_ALPHABET.iter()
            .map(|&b| count_nucleotides(&seq, b))
            .sum();
        assert_eq!(total, get_length(&seq));
    }
}

#[test]
fn insertion_preserves_both_parts() {
    init();
    let seq = "CCGGATAG";
    let insert = "TGC";
    for index in 0..=get_length(seq) {
        let result = insert_sequence(seq, insert, index);
        assert_eq!(get_length(&result), get_length(seq) + get_length(insert));
        assert!(contains_sequence(&result, insert));
        assert!(result.starts_with(&seq[..index]));
        assert!(result.ends_with(&seq[index..]));
    }
}

#[test]
fn invalid_sequences_have_no_complement() {
    init();
    for seq in ["ATQAZG", "N", "acgt", "AT GC"] {
        assert!(!is_valid_sequence(seq));
        assert!(get_complementary_sequence(seq).is_err());
    }
}

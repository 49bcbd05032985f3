use markov_gen_core::model::ngram::make_ngrams;
use markov_gen_core::model::transition_table::TransitionTable;
use markov_gen_core::tokenizer::Token;
use markov_gen_core::{MarkovModel, TailEdge};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// --- STRATEGIES ---

// Tiny vocabulary so n-grams repeat and bags get duplicates
prop_compose! {
	fn arb_corpus()(
		words in proptest::collection::vec(prop::sample::select(vec!["the", "cat", "sat", "on", "mat."]), 0..80)
	) -> Vec<Token> {
		words.into_iter().map(str::to_owned).collect()
	}
}

fn arb_tail_edge() -> impl Strategy<Value = TailEdge> {
	prop_oneof![Just(TailEdge::Midpoint), Just(TailEdge::WrapToStart)]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(300))]

	#[test]
	fn ngram_count_and_width(tokens in arb_corpus(), n in 1usize..6) {
		let ngrams = make_ngrams(n, &tokens).unwrap();
		prop_assert_eq!(ngrams.len(), tokens.len().saturating_sub(n));
		for (i, ngram) in ngrams.iter().enumerate() {
			prop_assert_eq!(ngram.len(), n);
			prop_assert_eq!(ngram.words(), &tokens[i..i + n]);
		}
	}

	#[test]
	fn every_ngram_has_successors(tokens in arb_corpus(), n in 1usize..5, tail_edge in arb_tail_edge()) {
		let ngrams = make_ngrams(n, &tokens).unwrap();
		let table = TransitionTable::build(&ngrams, tail_edge);
		for ngram in &ngrams {
			prop_assert!(!table.get(ngram).unwrap().is_empty());
		}
		for (_, bag) in table.iter() {
			prop_assert!(!bag.is_empty());
		}
	}

	#[test]
	fn bags_count_observed_transitions(tokens in arb_corpus(), n in 2usize..4, tail_edge in arb_tail_edge()) {
		let ngrams = make_ngrams(n, &tokens).unwrap();
		let table = TransitionTable::build(&ngrams, tail_edge);

		for (key, bag) in table.iter() {
			for follower in bag.iter() {
				let observed = ngrams
					.windows(2)
					.filter(|pair| &pair[0] == key && &pair[1] == follower)
					.count();
				let last = ngrams.last().unwrap();
				let synthetic = &ngrams[tail_edge.successor_index(ngrams.len())];
				let tail = usize::from(key == last && follower == synthetic);
				prop_assert_eq!(bag.count_of(follower), observed + tail);
			}
			let observed_total = ngrams.windows(2).filter(|pair| &pair[0] == key).count();
			let tail_total = usize::from(Some(key) == ngrams.last());
			prop_assert_eq!(bag.len(), observed_total + tail_total);
		}
	}

	#[test]
	fn walk_length_and_reproducibility(
		tokens in arb_corpus(),
		n in 2usize..4,
		length in 0usize..200,
		seed in any::<u64>()
	) {
		let model = MarkovModel::build(tokens.clone(), n, TailEdge::Midpoint).unwrap();
		prop_assume!(!model.ngrams().is_empty());

		let first = model.generate(length, &mut StdRng::seed_from_u64(seed)).unwrap();
		let second = model.generate(length, &mut StdRng::seed_from_u64(seed)).unwrap();

		prop_assert_eq!(first.len(), length + 1);
		prop_assert_eq!(&first, &second);
		for word in &first {
			prop_assert!(tokens.contains(word));
		}
	}
}

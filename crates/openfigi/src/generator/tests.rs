use crate::{
    Prefix, RandSource, SeededRandom, Symbol, SymbolGenerator, ThreadRandom, UniqueSymbols,
    validate,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread::scope;

/// Replays a fixed script of indices, wrapping around at the end.
struct ScriptedRand {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedRand {
    fn new(script: Vec<usize>) -> Self {
        Self { script, pos: 0 }
    }
}

impl RandSource for ScriptedRand {
    fn rand_index(&mut self, len: usize) -> usize {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % len
    }
}

/// Draw script for one symbol: prefix index, then eight body indices.
fn draw(prefix: usize, body: usize) -> Vec<usize> {
    let mut script = vec![prefix];
    script.extend([body; 8]);
    script
}

#[test]
fn scripted_draws_produce_expected_symbols() {
    let generator = SymbolGenerator::new(ScriptedRand::new([draw(0, 0), draw(1, 1)].concat()));

    let first = generator.next_symbol();
    let second = generator.next_symbol();

    assert_eq!(first, "BBG000000007");
    assert_eq!(second, "KKG111111115");
    assert_eq!(first.prefix(), Prefix::Bbg);
    assert_eq!(second.prefix(), Prefix::Kkg);
}

#[test]
fn last_alphabet_index_draws_z() {
    let generator = SymbolGenerator::new(ScriptedRand::new(draw(0, 30)));
    let symbol = generator.next_symbol();
    assert_eq!(symbol.body(), "ZZZZZZZZ");
    assert!(validate(symbol.as_str()).is_ok());
}

#[test]
fn generate_skips_duplicates() {
    let script = [draw(0, 0), draw(0, 0), draw(1, 1)].concat();
    let generator = SymbolGenerator::new(ScriptedRand::new(script));

    let symbols = generator.generate(2);

    assert_eq!(symbols, vec![
        "BBG000000007".parse::<Symbol>().unwrap(),
        "KKG111111115".parse::<Symbol>().unwrap(),
    ]);
}

#[test]
fn generate_zero_is_empty() {
    let generator = SymbolGenerator::default();
    assert!(generator.generate(0).is_empty());
}

#[test]
fn generate_returns_exactly_n_distinct_valid_symbols() {
    let generator = SymbolGenerator::new(ThreadRandom);
    for n in [1, 10, 100, 1_000] {
        let symbols = generator.try_generate(n).unwrap();
        assert_eq!(symbols.len(), n);

        let distinct: HashSet<_> = symbols.iter().collect();
        assert_eq!(distinct.len(), n, "duplicates for n = {n}");

        for symbol in &symbols {
            assert!(validate(symbol.as_str()).is_ok(), "{symbol} is invalid");
        }
    }
}

#[test]
fn same_seed_same_symbols() {
    let a = SymbolGenerator::new(SeededRandom::with_seed(7));
    let b = SymbolGenerator::new(SeededRandom::with_seed(7));
    assert_eq!(a.generate(50), b.generate(50));
}

#[test]
fn unique_symbols_counts_accepted() {
    let script = [draw(0, 0), draw(0, 0), draw(0, 0), draw(1, 2)].concat();
    let generator = SymbolGenerator::new(ScriptedRand::new(script));
    let mut unique = UniqueSymbols::default();
    assert!(unique.is_empty());

    let a = unique.try_next(&generator).unwrap();
    let b = unique.try_next(&generator).unwrap();

    assert_ne!(a, b);
    assert_eq!(unique.len(), 2);
    assert_eq!(b.prefix(), Prefix::Kkg);
}

#[test]
fn shared_generator_is_safe_across_threads() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 512;

    let generator = Arc::new(SymbolGenerator::new(SeededRandom::default()));
    let seen = Arc::new(Mutex::new(Vec::with_capacity(THREADS * PER_THREAD)));

    scope(|s| {
        for _ in 0..THREADS {
            let generator = Arc::clone(&generator);
            let seen = Arc::clone(&seen);
            s.spawn(move || {
                let batch = generator.generate(PER_THREAD);
                seen.lock().unwrap().extend(batch);
            });
        }
    });

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), THREADS * PER_THREAD);
    for symbol in seen.iter() {
        assert!(validate(symbol.as_str()).is_ok(), "{symbol} is invalid");
    }
}

#[cfg(not(feature = "parking-lot"))]
#[test]
fn poisoned_lock_surfaces_as_error() {
    struct PanickingRand;
    impl RandSource for PanickingRand {
        fn rand_index(&mut self, _len: usize) -> usize {
            panic!("rng failure");
        }
    }

    let generator = Arc::new(SymbolGenerator::new(PanickingRand));
    let clone = Arc::clone(&generator);
    let _ = std::thread::spawn(move || clone.try_next_symbol()).join();

    assert_eq!(generator.try_next_symbol(), Err(crate::Error::LockPoisoned));
    assert_eq!(generator.try_generate(3), Err(crate::Error::LockPoisoned));
    assert_eq!(generator.try_generate(0), Ok(Vec::new()));
}

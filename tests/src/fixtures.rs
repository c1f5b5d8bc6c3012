//! Batch builders shared by the integration tests and the benchmarks.

use primitive_types::H160;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashMap;
use tx_scheduler::{Action, Nonce, NonceState, Sender, Transaction};

/// Deterministic test address.
pub fn addr(val: u64) -> Sender {
    H160::from_low_u64_be(val)
}

/// Transaction from a list of (sender, nonce) pairs; the first is the main action.
pub fn chain(actions: &[(u64, u64)]) -> Transaction {
    let mut iter = actions.iter().map(|&(s, n)| Action::new(addr(s), n));
    let main = iter.next().expect("chain needs a main action");
    Transaction::new(main).with_authorizations(iter.collect())
}

/// Nonce table usable as a provider.
pub fn nonces(entries: &[(u64, u64)]) -> HashMap<Sender, Nonce> {
    entries.iter().map(|&(s, n)| (addr(s), n)).collect()
}

/// Position of every scheduled transaction within `input`, matched by main action.
pub fn scheduled_indices(input: &[Transaction], order: &[Transaction]) -> Vec<usize> {
    order
        .iter()
        .filter_map(|tx| input.iter().position(|candidate| candidate.main == tx.main))
        .collect()
}

/// Execute `order` against `initial` the way the chain would.
///
/// Returns false as soon as a main action does not carry the expected nonce.
pub fn replays_cleanly(order: &[Transaction], initial: &HashMap<Sender, Nonce>) -> bool {
    let mut state: NonceState = initial.iter().map(|(s, n)| (*s, *n)).collect();
    for tx in order {
        if state.get(&tx.main.sender) != tx.main.nonce {
            return false;
        }
        state.increment(tx.main.sender);
        for auth in &tx.auth {
            if state.get(&auth.sender) == auth.nonce {
                state.increment(auth.sender);
            }
        }
    }
    true
}

/// Random batch over `senders` accounts that all start at nonce 0.
///
/// Every sender gets `per_sender` transactions in shuffled order; roughly one
/// transaction in `auth_one_in` carries an authorization of a nearby sender.
pub fn random_batch(
    seed: u64,
    senders: u64,
    per_sender: u64,
    auth_one_in: u32,
) -> (Vec<Transaction>, HashMap<Sender, Nonce>) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut transactions = Vec::with_capacity((senders * per_sender) as usize);

    for sender in 0..senders {
        for nonce in 0..per_sender {
            let mut actions = vec![(sender, nonce)];
            if auth_one_in > 0 && rng.gen_ratio(1, auth_one_in) {
                let other = (sender + rng.gen_range(1..4)) % senders;
                if other != sender {
                    actions.push((other, rng.gen_range(0..per_sender)));
                }
            }
            transactions.push(chain(&actions));
        }
    }

    transactions.shuffle(&mut rng);

    let provider = (0..senders).map(|s| (addr(s), 0)).collect();
    (transactions, provider)
}

/// `size` transactions of sender 0, each authorizing a distinct account.
pub fn hub_batch(size: u64) -> Vec<Transaction> {
    (0..size).map(|i| chain(&[(0, i), (i + 1, 0)])).collect()
}

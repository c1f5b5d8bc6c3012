//! Dependency Partitioner
//!
//! Splits a batch into clusters of transactions that share no sender,
//! directly or transitively. Clusters can be ordered independently.

use crate::domain::entities::Transaction;
use crate::domain::value_objects::Sender;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Undirected graph over senders.
///
/// Senders and neighbours are kept in insertion order so traversals are
/// deterministic for a given batch. Edge membership is answered by a set so
/// adding an edge is O(1) however many partners a sender has.
#[derive(Debug, Clone, Default)]
pub struct SenderGraph {
    /// Senders in order of first appearance
    senders: Vec<Sender>,
    /// Adjacency list: sender -> [neighbour, ...]
    adjacency: HashMap<Sender, Vec<Sender>>,
    /// Undirected edges keyed as (smaller, larger)
    edges: HashSet<(Sender, Sender)>,
}

impl SenderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sender node if not present yet.
    pub fn add_node(&mut self, sender: Sender) {
        if !self.adjacency.contains_key(&sender) {
            self.adjacency.insert(sender, Vec::new());
            self.senders.push(sender);
        }
    }

    /// Add an undirected edge. Self-loops and repeated edges are ignored.
    pub fn add_edge(&mut self, a: Sender, b: Sender) {
        self.add_node(a);
        self.add_node(b);
        if a == b || self.has_edge(&a, &b) {
            return;
        }
        self.edges.insert(edge_key(a, b));
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    pub fn has_edge(&self, a: &Sender, b: &Sender) -> bool {
        self.edges.contains(&edge_key(*a, *b))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count(&self) -> usize {
        self.senders.len()
    }

    /// Connected components by breadth-first traversal.
    ///
    /// Returns the component index of every sender; components are numbered
    /// in order of their first sender's appearance.
    pub fn components(&self) -> HashMap<Sender, usize> {
        let mut component: HashMap<Sender, usize> = HashMap::with_capacity(self.senders.len());
        let mut next_id = 0usize;

        for &start in &self.senders {
            if component.contains_key(&start) {
                continue;
            }

            let mut queue = VecDeque::from([start]);
            component.insert(start, next_id);
            while let Some(sender) = queue.pop_front() {
                let Some(neighbours) = self.adjacency.get(&sender) else {
                    continue;
                };
                for &neighbour in neighbours {
                    if !component.contains_key(&neighbour) {
                        component.insert(neighbour, next_id);
                        queue.push_back(neighbour);
                    }
                }
            }
            next_id += 1;
        }

        component
    }
}

fn edge_key(a: Sender, b: Sender) -> (Sender, Sender) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Build the sender graph of a batch.
///
/// Each transaction links consecutive senders of its action chain (main, then
/// every authorization in order), which is enough to connect all senders a
/// transaction names.
pub fn build_sender_graph(transactions: &[Transaction]) -> SenderGraph {
    let mut graph = SenderGraph::new();

    for tx in transactions {
        graph.add_node(tx.main.sender);
        let chain: Vec<Sender> = tx.actions().map(|action| action.sender).collect();
        for pair in chain.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }
    }

    graph
}

/// Group transactions by the connected component of their main sender.
///
/// Groups appear in order of first appearance and keep input order inside.
pub fn partition(transactions: Vec<Transaction>) -> Vec<Vec<Transaction>> {
    let graph = build_sender_graph(&transactions);
    let component = graph.components();

    let mut groups: Vec<Vec<Transaction>> = Vec::new();
    let mut slot: HashMap<usize, usize> = HashMap::new();

    for tx in transactions {
        let Some(&id) = component.get(&tx.main.sender) else {
            continue;
        };
        let index = *slot.entry(id).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[index].push(tx);
    }

    debug!(
        senders = graph.node_count(),
        edges = graph.edge_count(),
        partitions = groups.len(),
        "Partitioned batch"
    );
    groups
}

/// Distinct senders referenced by a group of transactions.
pub fn senders_of(transactions: &[Transaction]) -> HashSet<Sender> {
    transactions
        .iter()
        .flat_map(|tx| tx.actions().map(|action| action.sender))
        .collect()
}

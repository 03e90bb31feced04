//! Simple-path enumeration through the transmutation graph

// nact modules
use nact_data::constants::BARN_TO_CM2;
use nact_data::{DataStore, ReactionKind};
use nact_nuclide::Nuclide;
use nact_utils::f;

/// One enumerated transmutation/decay chain
///
/// Nodes are stored start-first with the per-edge transfer coefficients and
/// per-node removal rates needed by the Bateman kernel. All vectors are
/// parallel: edge `i` runs from node `i` to node `i+1`.
#[derive(Debug, Clone)]
pub(crate) struct Chain {
    /// Nuclides along the chain, start first
    pub nodes: Vec<Nuclide>,
    /// Transfer coefficient k for each edge (1/s)
    pub rates: Vec<f64>,
    /// Removal rate for each node under the enumeration flux (1/s)
    pub removal: Vec<f64>,
    /// Reaction channel for each edge
    pub reactions: Vec<ReactionKind>,
    /// Cross section for each edge (barns), 0 for decay edges
    pub cross_sections: Vec<f64>,
}

impl Chain {
    fn root(store: &DataStore, start: &Nuclide, flux: f64) -> Self {
        Self {
            nodes: vec![start.clone()],
            rates: Vec::new(),
            removal: vec![store.removal_rate(start, flux)],
            reactions: Vec::new(),
            cross_sections: Vec::new(),
        }
    }

    fn extended(
        &self,
        daughter: &Nuclide,
        rate: f64,
        removal: f64,
        reaction: ReactionKind,
        cross_section: f64,
    ) -> Self {
        let mut next = self.clone();
        next.nodes.push(daughter.clone());
        next.rates.push(rate);
        next.removal.push(removal);
        next.reactions.push(reaction);
        next.cross_sections.push(cross_section);
        next
    }

    /// The last nuclide in the chain
    pub fn terminal(&self) -> &Nuclide {
        // a chain always holds at least its start node
        self.nodes.last().unwrap()
    }

    /// Number of edges crossed
    pub fn edge_count(&self) -> usize {
        self.rates.len()
    }

    /// Cross section of the first activation edge (barns), 0 when the
    /// chain never crosses one
    pub fn first_activation_sigma(&self) -> f64 {
        self.reactions
            .iter()
            .zip(&self.cross_sections)
            .find(|(reaction, _)| **reaction != ReactionKind::Decay)
            .map(|(_, sigma)| *sigma)
            .unwrap_or(0.0)
    }

    /// Append a second chain whose start is this chain's terminal
    pub fn join(&self, tail: &Chain) -> Self {
        let mut joined = self.clone();
        joined.nodes.extend(tail.nodes[1..].iter().cloned());
        joined.rates.extend(&tail.rates);
        joined.removal.extend(&tail.removal[1..]);
        joined.reactions.extend(&tail.reactions);
        joined.cross_sections.extend(&tail.cross_sections);
        joined
    }

    /// Compact human-readable pathway, e.g.
    /// `Co-59 -(n,g)-> Co-60 -decay-> Ni-60`
    pub fn descriptor(&self) -> String {
        let mut text = self.nodes[0].name();
        for (node, reaction) in self.nodes[1..].iter().zip(&self.reactions) {
            text += &f!(" -{reaction}-> {node}");
        }
        text
    }
}

/// Enumerate every simple chain out of `start` up to `depth` edges
///
/// Activation edges are only followed under a positive flux and decay
/// edges only out of radioactive nuclides. A nuclide appears at most once
/// per chain, which cuts the cycles a transmutation graph otherwise
/// contains. The trivial chain holding only the start node is always
/// included.
///
/// Order is deterministic: depth-first, edges in store insertion order,
/// activation before decay.
pub(crate) fn enumerate_chains(
    store: &DataStore,
    start: &Nuclide,
    flux: f64,
    depth: usize,
) -> Vec<Chain> {
    let mut chains = Vec::new();
    extend(store, flux, depth, Chain::root(store, start, flux), &mut chains);
    chains
}

fn extend(store: &DataStore, flux: f64, depth: usize, current: Chain, out: &mut Vec<Chain>) {
    let parent = current.terminal().clone();

    if current.edge_count() < depth {
        if flux > 0.0 {
            for edge in store.activation_edges_from(&parent) {
                if edge.cross_section <= 0.0 || current.nodes.contains(&edge.daughter) {
                    continue;
                }
                let next = current.extended(
                    &edge.daughter,
                    edge.cross_section * BARN_TO_CM2 * flux,
                    store.removal_rate(&edge.daughter, flux),
                    edge.reaction,
                    edge.cross_section,
                );
                extend(store, flux, depth, next, out);
            }
        }

        let lambda = store.lambda(&parent);
        if lambda > 0.0 {
            for edge in store.decay_edges_from(&parent) {
                if current.nodes.contains(&edge.daughter) {
                    continue;
                }
                let next = current.extended(
                    &edge.daughter,
                    lambda * edge.branching,
                    store.removal_rate(&edge.daughter, flux),
                    ReactionKind::Decay,
                    0.0,
                );
                extend(store, flux, depth, next, out);
            }
        }
    }

    out.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nact_data::{ActivationRecord, DecayRecord};

    fn store() -> DataStore {
        let activation = vec![
            ActivationRecord {
                symbol: "Co".to_string(),
                mass: 59,
                daughter: "Co-60".to_string(),
                reaction: "nγ".to_string(),
                cross_section: 37.18,
                daughter_lambda: 4.167e-9,
                ..Default::default()
            },
            ActivationRecord {
                symbol: "Fe".to_string(),
                mass: 58,
                daughter: "Fe-59".to_string(),
                reaction: "nγ".to_string(),
                cross_section: 1.28,
                daughter_lambda: 1.803e-7,
                ..Default::default()
            },
        ];
        let decay = vec![
            DecayRecord {
                parent: "Fe-59".to_string(),
                daughter: "Co-59".to_string(),
                branching: 1.0,
                parent_lambda: 1.803e-7,
                daughter_lambda: 0.0,
            },
            DecayRecord {
                parent: "Co-60".to_string(),
                daughter: "Ni-60".to_string(),
                branching: 1.0,
                parent_lambda: 4.167e-9,
                daughter_lambda: 0.0,
            },
        ];
        DataStore::from_records(&activation, &decay, &[]).unwrap()
    }

    #[test]
    fn trivial_chain_always_included() {
        let store = store();
        let nickel = Nuclide::try_from("Ni-64").unwrap();
        let chains = enumerate_chains(&store, &nickel, 1e14, 6);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].edge_count(), 0);
        assert_eq!(chains[0].descriptor(), "Ni-64");
    }

    #[test]
    fn full_depth_from_iron() {
        let store = store();
        let iron = Nuclide::try_from("Fe-58").unwrap();
        let chains = enumerate_chains(&store, &iron, 1e14, 6);

        // Fe-58, -> Fe-59, -> Co-59, -> Co-60, -> Ni-60
        assert_eq!(chains.len(), 5);
        let longest = chains.iter().max_by_key(|c| c.edge_count()).unwrap();
        assert_eq!(
            longest.descriptor(),
            "Fe-58 -(n,g)-> Fe-59 -decay-> Co-59 -(n,g)-> Co-60 -decay-> Ni-60"
        );
        assert_eq!(longest.first_activation_sigma(), 1.28);
    }

    #[test]
    fn zero_flux_collapses_activation_edges() {
        let store = store();
        let iron = Nuclide::try_from("Fe-59").unwrap();
        let chains = enumerate_chains(&store, &iron, 0.0, 6);

        // Fe-59 -> Co-59 stops there: Co-59 is stable and (n,g) needs flux
        assert_eq!(chains.len(), 2);
        assert!(chains.iter().all(|c| c
            .reactions
            .iter()
            .all(|r| *r == ReactionKind::Decay)));
    }

    #[test]
    fn depth_cap_limits_chains() {
        let store = store();
        let iron = Nuclide::try_from("Fe-58").unwrap();
        let chains = enumerate_chains(&store, &iron, 1e14, 2);
        assert!(chains.iter().all(|c| c.edge_count() <= 2));
        assert_eq!(chains.len(), 3);
    }

    #[test]
    fn join_concatenates_paths() {
        let store = store();
        let iron = Nuclide::try_from("Fe-58").unwrap();
        let irradiation = enumerate_chains(&store, &iron, 1e14, 1);
        let grown = irradiation.iter().find(|c| c.edge_count() == 1).unwrap();

        let cooling = enumerate_chains(&store, grown.terminal(), 0.0, 1);
        let tail = cooling.iter().find(|c| c.edge_count() == 1).unwrap();

        let joined = grown.join(tail);
        assert_eq!(joined.edge_count(), 2);
        assert_eq!(
            joined.descriptor(),
            "Fe-58 -(n,g)-> Fe-59 -decay-> Co-59"
        );
        assert_eq!(joined.first_activation_sigma(), 1.28);
    }
}

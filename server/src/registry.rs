//! Networks created by clients, addressed by handle.
use gridlib::{Network, SimulationConfig};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Handle given to clients for a created network.
pub type NetworkId = usize;

/// A network together with the settings it was created with.
#[derive(Debug)]
pub struct NetworkEntry {
    pub name: Option<String>,
    pub network: Network,
    /// Holds the default source for distance queries.
    pub config: SimulationConfig,
}

/// Owns every network created through the API.
#[derive(Default, Debug)]
pub struct NetworkRegistry {
    next_id: NetworkId,
    networks: HashMap<NetworkId, NetworkEntry>,
}

/// Registry shared between request handlers.
pub type Registry = Arc<Mutex<NetworkRegistry>>;

impl NetworkRegistry {
    /// Store the network and return its handle. Handles are never reused.
    pub fn create(
        &mut self,
        name: Option<String>,
        network: Network,
        config: SimulationConfig,
    ) -> NetworkId {
        let id = self.next_id;
        self.next_id += 1;
        self.networks.insert(
            id,
            NetworkEntry {
                name,
                network,
                config,
            },
        );
        id
    }

    pub fn get(&self, id: NetworkId) -> Option<&NetworkEntry> {
        self.networks.get(&id)
    }

    pub fn get_mut(&mut self, id: NetworkId) -> Option<&mut NetworkEntry> {
        self.networks.get_mut(&id)
    }

    pub fn remove(&mut self, id: NetworkId) -> Option<NetworkEntry> {
        self.networks.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

/// Lock the registry, recovering it if poisoned. Network operations are all-or-nothing.
pub fn lock(registry: &Registry) -> MutexGuard<'_, NetworkRegistry> {
    match registry.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Recovering poisoned network registry");
            poisoned.into_inner()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlib::Edge;

    fn add(registry: &mut NetworkRegistry, network: Network) -> NetworkId {
        registry.create(None, network, SimulationConfig::default())
    }

    #[test]
    fn handles_are_not_reused() {
        let mut registry = NetworkRegistry::default();
        let a = add(&mut registry, Network::new(2, vec![Edge::new(0, 1, 1)]));
        let b = add(&mut registry, Network::new(1, vec![]));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        assert!(registry.remove(a).is_some());
        assert!(registry.get(a).is_none());
        let c = add(&mut registry, Network::new(1, vec![]));
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn mutate_through_handle() {
        let mut registry = NetworkRegistry::default();
        let id = add(&mut registry, Network::new(2, vec![Edge::new(0, 1, 1)]));
        registry.get_mut(id).unwrap().network.remove_one().unwrap();
        assert_eq!(registry.get(id).unwrap().network.removed_edges().len(), 1);
        assert!(registry.get_mut(id + 1).is_none());
    }

    #[test]
    fn keeps_name_and_config() {
        let mut registry = NetworkRegistry::default();
        let id = registry.create(
            Some("Feeder".to_string()),
            Network::new(3, vec![Edge::new(0, 2, 1)]),
            SimulationConfig { source: 2 },
        );
        let entry = registry.get(id).unwrap();
        assert_eq!(entry.name.as_deref(), Some("Feeder"));
        assert_eq!(entry.config.source, 2);
    }
}

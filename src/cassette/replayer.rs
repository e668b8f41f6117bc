//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Recorded calls for one port/method pair and which have been served.
#[derive(Debug, Default)]
struct Queue {
    interactions: Vec<Interaction>,
    consumed: Vec<bool>,
}

/// Replays interactions from a loaded cassette.
///
/// Concurrent calls may complete, and so be recorded, in a different order
/// than they are issued on replay. Each request is therefore served the
/// first unconsumed interaction whose recorded input matches exactly, and
/// only falls back to the first unconsumed interaction when none does.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Queue>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Queue> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            let queue = queues.entry(key).or_default();
            queue.interactions.push(interaction.clone());
            queue.consumed.push(false);
        }
        Self { queues }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette has no (more) interactions for the
    /// given port/method combination.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
        input: &serde_json::Value,
    ) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        }
        let queue = self.queues.get_mut(&key).ok_or("cassette queue vanished")?;

        let (interactions, consumed) = (&queue.interactions, &queue.consumed);
        let index = (0..interactions.len())
            .find(|&i| !consumed[i] && interactions[i].input == *input)
            .or_else(|| consumed.iter().position(|served| !served))
            .ok_or_else(|| {
                format!(
                    "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
                     have been consumed.",
                    count = interactions.len(),
                )
            })?;

        queue.consumed[index] = true;
        Ok(&queue.interactions[index])
    }
}

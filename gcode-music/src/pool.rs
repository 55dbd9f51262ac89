use crate::config::PoolConfig;
use crate::slot::Slot;

/// A fixed number of slots sharing capacity and M-code addressing.
///
/// All storage lives inline, nothing is allocated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPool<const N: usize, const L: usize> {
    slots: [Slot<L>; N],
    base_code: u16,
    code_span: u16,
}

impl<const N: usize, const L: usize> SlotPool<N, L> {
    /// Create a pool and load its default content.
    ///
    /// A default that doesn't fit its slot leaves that slot empty, defaults beyond the last
    /// slot are dropped.
    pub fn new(config: &PoolConfig) -> Self {
        let mut pool = Self {
            slots: core::array::from_fn(|_| Slot::new()),
            base_code: config.base_code,
            code_span: config.code_span,
        };

        let base_code = config.base_code as u32;
        for (position, definition) in config.defaults.iter().enumerate() {
            match pool.get_mut(position) {
                Some(slot) => {
                    if let Err(e) = slot.define(definition) {
                        warn!("Default macro M{} skipped: {:?}", base_code + position as u32, e);
                    }
                }
                None => {
                    warn!("{} default macros for a pool of {} slots", config.defaults.len(), N);
                    break;
                }
            }
        }
        pool
    }

    pub fn base_code(&self) -> u16 {
        self.base_code
    }

    /// Number of slots
    pub const fn len(&self) -> usize {
        N
    }

    /// Maximum content length of each slot
    pub const fn slot_capacity(&self) -> usize {
        L
    }

    /// Whether `code` falls in the M-code range routed to this pool
    pub fn claims(&self, code: u16) -> bool {
        code >= self.base_code && code - self.base_code < self.code_span
    }

    /// Slot position addressed by `trigger_index`, `None` when below the base or past the last slot
    pub fn position_of(&self, trigger_index: i32) -> Option<usize> {
        let position = trigger_index as i64 - self.base_code as i64;
        if position < 0 || position >= N as i64 {
            None
        } else {
            Some(position as usize)
        }
    }

    pub fn get(&self, position: usize) -> Option<&Slot<L>> {
        self.slots.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Slot<L>> {
        self.slots.get_mut(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot<L>> {
        self.slots.iter()
    }
}

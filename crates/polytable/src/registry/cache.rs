use polytable_core::schema::TypeId;

use std::sync::OnceLock;

/// One lazily initialised slot per type.
///
/// The set of types is closed once the registry is built, so the slots are
/// allocated up front and initialisation only ever synchronises on the slot
/// being filled. Filling one slot may request other slots.
pub(crate) struct KeyedCache<T> {
    slots: Box<[OnceLock<T>]>,
}

impl<T> KeyedCache<T> {
    pub(crate) fn new(len: usize) -> KeyedCache<T> {
        KeyedCache {
            slots: (0..len).map(|_| OnceLock::new()).collect(),
        }
    }

    #[track_caller]
    pub(crate) fn get_or_init(&self, id: TypeId, init: impl FnOnce() -> T) -> &T {
        self.slots[id.0].get_or_init(init)
    }

    pub(crate) fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Barrier,
    };
    use std::thread;

    #[test]
    fn initialises_each_slot_once() {
        let cache = Arc::new(KeyedCache::<usize>::new(2));
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    *cache.get_or_init(TypeId(1), || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        42
                    })
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.populated(), 1);
    }

    #[test]
    fn slot_init_may_fill_other_slots() {
        let cache = KeyedCache::<usize>::new(3);

        let value = *cache.get_or_init(TypeId(0), || {
            let child = *cache.get_or_init(TypeId(1), || {
                *cache.get_or_init(TypeId(2), || 1) + 1
            });
            child + 1
        });

        assert_eq!(value, 3);
        assert_eq!(cache.populated(), 3);
    }
}

//! Single-value Actor for reactive state

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container whose value changes only inside its processing
/// loop. The loop usually `select!`s over one or more relay streams; UI
/// binds to [`Actor::signal`].
///
/// The processing task is droppable: when the last clone of the Actor goes
/// away, every timer and stream await inside the loop is cancelled with it.
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)] // held so the processing loop lives as long as the Actor
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    /// The reactive view of this Actor's state.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Current value snapshot, for event handlers where a signal chain is
    /// impractical. Prefer [`Actor::signal`].
    pub fn get_cloned(&self) -> T {
        self.state.lock_ref().clone()
    }
}

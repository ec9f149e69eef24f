use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use leptos::prelude::*;

use super::PageState;
use crate::portfolio::{Deferred, TaskId};

/// Browser timeouts started on behalf of the page state, keyed by task.
#[derive(Clone, Default)]
pub struct Timers(Arc<Mutex<HashMap<TaskId, TimeoutHandle>>>);

impl Timers {
    pub fn start(&self, state: PageState, deferred: Deferred) {
        let Deferred { id, task, delay } = deferred;
        let timers = self.clone();
        let res = set_timeout_with_handle(
            move || {
                timers.forget(id);
                // the signal is gone if the page was torn down in the meantime
                state.try_update(|s| s.fire(id));
            },
            delay,
        );
        match res {
            Ok(handle) => {
                self.0
                    .lock()
                    .expect("should be able to lock timer table")
                    .insert(id, handle);
            }
            Err(e) => log::error!("couldn't start {task:?} timer: {e:?}"),
        }
    }

    pub fn cancel(&self, ids: &[TaskId]) {
        let mut table = self.0.lock().expect("should be able to lock timer table");
        for id in ids {
            if let Some(handle) = table.remove(id) {
                handle.clear();
            }
        }
    }

    fn forget(&self, id: TaskId) {
        self.0
            .lock()
            .expect("should be able to lock timer table")
            .remove(&id);
    }
}

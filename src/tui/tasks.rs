//! Background fetch bookkeeping: at most one in-flight task per screen.

use log::debug;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSlot {
    List,
    Detail,
}

/// Abort handles for the fetch tasks owned by each screen.
///
/// Replacing a slot aborts whatever was running there, so a refresh never
/// races an older fetch for the same screen. Dropping the set aborts
/// everything.
#[derive(Debug, Default)]
pub struct ScreenTasks {
    list: Option<AbortHandle>,
    detail: Option<AbortHandle>,
}

impl ScreenTasks {
    fn slot_mut(&mut self, slot: TaskSlot) -> &mut Option<AbortHandle> {
        match slot {
            TaskSlot::List => &mut self.list,
            TaskSlot::Detail => &mut self.detail,
        }
    }

    pub fn replace(&mut self, slot: TaskSlot, handle: AbortHandle) {
        if let Some(old) = self.slot_mut(slot).replace(handle) {
            debug!("Aborting superseded {:?} fetch", slot);
            old.abort();
        }
    }

    pub fn cancel(&mut self, slot: TaskSlot) {
        if let Some(handle) = self.slot_mut(slot).take() {
            debug!("Cancelling {:?} fetch", slot);
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        self.cancel(TaskSlot::List);
        self.cancel(TaskSlot::Detail);
    }

    pub fn is_running(&self, slot: TaskSlot) -> bool {
        let handle = match slot {
            TaskSlot::List => &self.list,
            TaskSlot::Detail => &self.detail,
        };
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScreenTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

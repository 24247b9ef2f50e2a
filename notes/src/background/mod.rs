pub mod auth_requester;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

use crate::app_core::DataEventHandler;
use crate::commands::executor;
use crate::events::AppCommand;
use crate::state::AppState;
use auth_requester::AuthRequester;
use notes_auth::AuthGateway;

/// Manages background request tasks
/// Tracks running tasks so they can be aborted on shutdown
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task under `task_id`
    ///
    /// A still-running task with the same ID is detached, not aborted.
    pub fn spawn_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        let handle = tokio::spawn(future);
        if self.tasks.insert(task_id.clone(), handle).is_some() {
            tracing::debug!("Task {} replaced a still-running task", task_id);
        }
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Production command handler: runs requests as tokio tasks
pub struct TaskHandler<G: AuthGateway> {
    task_manager: BackgroundTaskManager,
    requester: AuthRequester<G>,
}

impl<G: AuthGateway> TaskHandler<G> {
    pub fn new(requester: AuthRequester<G>) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            requester,
        }
    }

    pub fn shutdown(&mut self) {
        self.task_manager.cancel_all();
    }
}

impl<G: AuthGateway> DataEventHandler for TaskHandler<G> {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.requester);
    }
}

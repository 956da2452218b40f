use crate::libs::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(TaskId),
    TaskUpdated(TaskId),
    TaskCompleted(TaskId, String), // id, completion date
    TaskDeleted(TaskId),
    TaskNotFound(TaskId),
    TasksDeletedCount(usize),
    TasksHeader,
    TaskHeader(TaskId),
    TasksToBeDeleted,
    ConfirmDeleteTasks(usize),
    DeletionCancelled,
    NoTasksFound,
    NoChangesDetected,

    // === STORE MESSAGES ===
    StoreReady(String), // path
    StoreOpened(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
}

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(i64),
    TaskStatusUpdated(i64, String),
    TaskNotFoundWithId(i64),
    NoTasksFound,
    TasksHeader,
    TaskNameEmpty,
    TaskIdInvalid(i64),
    ConfirmDeleteTask(i64),

    // === STATUS MESSAGES ===
    StatusesHeader,
    NoStatusesFound,
    StatusNotFound(String),
    StatusNameEmpty,

    // === MENU MESSAGES ===
    MenuTitle,
    MenuGoodbye,
    OperationCancelled,

    // === PROMPT MESSAGES ===
    PromptMenuChoice(usize, usize),
    PromptTaskName,
    PromptTaskDescription,
    PromptTaskId,
    PromptStatusChoice(usize),
    PromptDbFile,
    NumberOutOfRange(usize, usize),
    InvalidNumber,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    DbPathEmpty,
}

/// Every user-facing message in the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // title
    TaskUpdated(String), // title
    TaskDeleted(String), // title
    TaskNotFound(String), // id or prefix
    TaskNotUpdated(String), // id
    TasksNotFound,
    TasksHeader,
    TasksWithStatusHeader(String), // status label
    OverdueTasksHeader,
    HighPriorityTasksHeader,
    SearchResultsHeader(String), // query
    RelatedTasksHeader(String),  // title
    TaskDetailsHeader,
    NoChangesDetected,
    ConfirmDeleteTask(String), // title
    EditingTask(String),       // title
    TasksRelated(String, String), // title, related title
    TasksNotRelated,
    NoDataPlaceholder,
    NoRelatedPlaceholder,
    ValidationFailed(String), // error

    // === STATISTICS MESSAGES ===
    StatsHeader,
    StatsTotal(usize),
    StatsOverdue(usize),
    StatsHighPriority(usize),

    // === STORAGE MESSAGES ===
    TasksLoaded(usize, String), // count, location
    TaskStoreNotFound(String),  // location
    TaskStoreLoadFailed(String), // error
    TasksSaveFailed(String),    // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigWizardHeader,
    ConfigLoadFailed(String), // error

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NothingToExport,

    // === MENU MESSAGES ===
    MenuMainHeader,
    MenuViewHeader,
    MenuViewAll,
    MenuViewPending,
    MenuViewInProgress,
    MenuViewDone,
    MenuViewStats,
    MenuViewOverdue,
    MenuViewHighPriority,
    MenuViewTasks,
    MenuSearchTask,
    MenuAddTask,
    MenuBack,
    MenuExit,
    ActionEdit,
    ActionDelete,
    ActionRelated,
    ActionRelate,
    Goodbye,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskDifficulty,
    PromptTaskDueDate,
    PromptSearchQuery,
    PromptSelectOption,
    PromptSelectTask,
    PromptSelectRelatedTask,
    PromptTasksFile,
    PromptDefaultSort,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}

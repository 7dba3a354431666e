use std::fmt::Debug;

/// Labels and messages that distinguish one catalog flavour from another.
///
/// Games and notes share every operation; they only differ in what their
/// fields are called and how empty results are reported. A `Kind` is a
/// zero-sized marker carrying that vocabulary, so [`Record`](super::Record),
/// [`Task`](super::Task) and [`Catalog`](crate::store::Catalog) are written
/// once and instantiated per flavour.
pub trait Kind: Debug + Clone + Copy + PartialEq + Eq + Default + 'static {
    /// Singular record noun, lower case (`game`, `note`).
    const RECORD: &'static str;
    /// Plural record noun, lower case.
    const RECORDS: &'static str;
    /// Singular task noun, lower case (`play`, `item`).
    const TASK: &'static str;
    /// Plural task noun, lower case.
    const TASKS: &'static str;

    const RATING_LABEL: &'static str;
    const CATEGORY_LABEL: &'static str;
    const ARCHIVED_LABEL: &'static str;

    /// Suffix for a completed task.
    const COMPLETE_LABEL: &'static str;
    /// Suffix for a task still to do.
    const PENDING_LABEL: &'static str;

    const NO_RECORDS: &'static str;
    const NO_ACTIVE: &'static str;
    const NO_ARCHIVED: &'static str;
    /// Shown in place of the task list of a record without tasks.
    const NO_TASKS: &'static str;
    /// Reported by task search when the catalog holds no records.
    const NO_RECORDS_TO_SEARCH: &'static str;

    /// Renders the archived flag inside a record line.
    fn archived_flag(archived: bool) -> String {
        archived.to_string()
    }

    /// Message for a task search that matched nothing.
    fn no_tasks_found(query: &str) -> String {
        format!("No {} found for: {}", Self::TASKS, query)
    }
}

/// Tabletop games and the plays recorded against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Games;

impl Kind for Games {
    const RECORD: &'static str = "game";
    const RECORDS: &'static str = "games";
    const TASK: &'static str = "play";
    const TASKS: &'static str = "plays";

    const RATING_LABEL: &'static str = "Rating";
    const CATEGORY_LABEL: &'static str = "Brand";
    const ARCHIVED_LABEL: &'static str = "Saved For Later";

    const COMPLETE_LABEL: &'static str = "Played";
    const PENDING_LABEL: &'static str = "To-Be Played";

    const NO_RECORDS: &'static str = "No games stored";
    const NO_ACTIVE: &'static str = "No running games stored";
    const NO_ARCHIVED: &'static str = "No games were found as saved for later";
    const NO_TASKS: &'static str = "\tNO PLAYS WERE ADDED";
    const NO_RECORDS_TO_SEARCH: &'static str = "No games stored in the system!";
}

/// Notes and their to-do items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Notes;

impl Kind for Notes {
    const RECORD: &'static str = "note";
    const RECORDS: &'static str = "notes";
    const TASK: &'static str = "item";
    const TASKS: &'static str = "items";

    const RATING_LABEL: &'static str = "Priority";
    const CATEGORY_LABEL: &'static str = "Category";
    const ARCHIVED_LABEL: &'static str = "Archived";

    const COMPLETE_LABEL: &'static str = "Complete";
    const PENDING_LABEL: &'static str = "TODO";

    const NO_RECORDS: &'static str = "No notes stored";
    const NO_ACTIVE: &'static str = "No active notes stored";
    const NO_ARCHIVED: &'static str = "No archived notes stored";
    const NO_TASKS: &'static str = "\tNO ITEMS ADDED";
    const NO_RECORDS_TO_SEARCH: &'static str = "No notes stored";

    fn archived_flag(archived: bool) -> String {
        let flag = if archived { 'Y' } else { 'N' };
        flag.to_string()
    }
}

mod add_entry;
mod delete_entry;
mod update_score;

pub use add_entry::AddEntryCommandHandler;
pub use delete_entry::DeleteEntryCommandHandler;
pub use update_score::UpdateScoreCommandHandler;

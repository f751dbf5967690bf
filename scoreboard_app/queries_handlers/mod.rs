mod list_entries;

pub use list_entries::ListEntriesHandler;

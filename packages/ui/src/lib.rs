//! This crate contains all shared UI for the workspace.

pub mod backend;
pub mod filter;

mod users;
pub use users::{use_users, Users, UsersProvider};

mod theme;
pub use theme::{
    apply_theme, load_theme_from_storage, set_theme, use_theme, ThemeSignal, THEME_STORAGE_KEY,
};

mod search_box;
pub use search_box::SearchBox;

mod user_table;
pub use user_table::UserTable;

mod pager;
pub use pager::Pager;

mod user_form_dialog;
pub use user_form_dialog::{UserFormDialog, UserFormSubmit};

pub mod views;

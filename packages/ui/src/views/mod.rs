mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod users;
pub use users::UsersView;

mod settings;
pub use settings::SettingsView;

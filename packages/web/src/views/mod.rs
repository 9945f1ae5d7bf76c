mod users;
pub use users::Users;

mod settings;
pub use settings::Settings;

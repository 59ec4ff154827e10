pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod forms;
pub(crate) mod resource;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use forms::{MIN_PASSWORD_LENGTH, validate_login_form, validate_signup_form};
pub use resource::Resource;

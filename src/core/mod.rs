pub mod content;
pub mod validator;

pub mod auth_handler;
pub mod authorizer_handler;
pub mod hello_handler;
pub mod users_handler;

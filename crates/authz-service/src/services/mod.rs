pub mod authorizer_service;
pub mod token_service;

pub mod resource_service;
pub mod sanitizer;
pub mod validator;

#[cfg(test)]
mod tests;

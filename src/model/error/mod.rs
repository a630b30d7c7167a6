pub mod resource_errors;

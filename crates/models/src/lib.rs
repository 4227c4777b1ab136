pub mod account;
pub mod db;
pub mod message;
pub mod project;
pub mod skill;
pub mod validate;

#[cfg(test)]
mod tests;

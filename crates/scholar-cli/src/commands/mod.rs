pub mod add;
pub mod clear;
pub mod delete;
pub mod detect;
pub mod dispatch;
pub mod docs;
pub mod list;
pub mod shared;
pub mod show;
pub mod update;

#[cfg(test)]
mod test_support;

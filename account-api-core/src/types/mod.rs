//! 类型定义模块

mod account;

pub use account::{Account, AccountFields, AccountId, AccountPayload};

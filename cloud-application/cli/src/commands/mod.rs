//! CLI 命令处理模块

pub mod account;
pub mod catalog; // 模板、方案与区域
pub mod common; // 公共工具函数
pub mod job;
pub mod network;
pub mod output;
pub mod snapshot;
pub mod tag;
pub mod vm;
pub mod volume;

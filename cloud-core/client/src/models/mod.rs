//! 云平台数据模型
//!
//! 所有模型都是平台 JSON 结构的不可变值对象，按值比较，不做本地缓存。
//!
//! 解码约定：
//! - 配额字段（`*limit` / `*available`）为 `Option<u64>`，`None` 表示无限制
//! - 用量字段（`*total` 等）为 `u64`，缺失时为 0
//! - 所有枚举都带 `Unrecognized` 兜底，遇到未知取值不会解码失败

/// 以字符串标签表示的枚举（大小写不敏感，未知标签归为 `Unrecognized`）
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// 未识别的取值
            Unrecognized,
        }

        impl $name {
            /// 平台使用的标签
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized => "UNRECOGNIZED",
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                s.as_str().parse().unwrap_or(Self::Unrecognized)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Unrecognized)
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.label().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// 以整数代码表示的枚举（未知代码归为 `Unrecognized`）
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// 未识别的代码
            Unrecognized,
        }

        impl $name {
            /// 从平台代码转换
            pub fn from_code(code: i64) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    _ => Self::Unrecognized,
                }
            }

            /// 平台代码（`Unrecognized` 为 -1）
            pub fn code(&self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unrecognized => -1,
                }
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                Self::from_code(code)
            }
        }

        impl From<$name> for i64 {
            fn from(v: $name) -> i64 {
                v.code()
            }
        }
    };
}

pub(crate) mod de;

mod account;
mod job;
mod network;
mod offering;
mod response;
mod snapshot;
mod tag;
mod template;
mod virtual_machine;
mod volume;
mod zone;

pub use account::{Account, AccountState, AccountType, User, UserState};
pub use job::{AsyncCreateResponse, AsyncJob, AsyncJobError, AsyncJobErrorCode, AsyncJobStatus};
pub use network::{GuestIpType, Network, NetworkState, TrafficType};
pub use offering::{DiskOffering, ServiceOffering, StorageType};
pub use response::{ApiErrorResponse, SuccessResponse};
pub use snapshot::{Snapshot, SnapshotState, SnapshotType};
pub use tag::{ResourceTag, ResourceType};
pub use template::{Template, TemplateFilter};
pub use virtual_machine::{Nic, VirtualMachine, VirtualMachineState};
pub use volume::{Volume, VolumeState, VolumeType};
pub use zone::{NetworkType, Zone};

/// 具有平台分配标识的对象
pub trait Identified {
    /// 用于去重的身份标识
    fn identity(&self) -> String;
}

/// 按身份去重，保留首次出现的元素
pub fn dedup_by_identity<T: Identified>(items: Vec<T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.identity()))
        .collect()
}

macro_rules! identified_by_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn identity(&self) -> String {
                    self.id.clone()
                }
            }
        )+
    };
}

identified_by_id!(
    Account,
    User,
    VirtualMachine,
    Nic,
    Volume,
    Network,
    ServiceOffering,
    DiskOffering,
    Snapshot,
    Zone,
);

/// 跨区域模板在每个区域各返回一条，以 (ID, 区域) 区分
impl Identified for Template {
    fn identity(&self) -> String {
        format!("{}@{}", self.id, self.zone_id.as_deref().unwrap_or(""))
    }
}

impl Identified for AsyncJob {
    fn identity(&self) -> String {
        self.job_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_enum_case_insensitive() {
        assert_eq!("running".parse::<VirtualMachineState>().unwrap(), VirtualMachineState::Running);
        assert_eq!("RUNNING".parse::<VirtualMachineState>().unwrap(), VirtualMachineState::Running);
        assert_eq!(VirtualMachineState::Running.to_string(), "Running");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let state: VolumeState = serde_json::from_str(r#""Hibernating""#).unwrap();
        assert_eq!(state, VolumeState::Unrecognized);
    }

    #[test]
    fn test_code_enum_round_trip() {
        assert_eq!(AccountType::from_code(2), AccountType::DomainAdmin);
        assert_eq!(AccountType::from_code(42), AccountType::Unrecognized);
        assert_eq!(serde_json::to_string(&AsyncJobStatus::Failed).unwrap(), "2");
        let status: AsyncJobStatus = serde_json::from_str("7").unwrap();
        assert_eq!(status, AsyncJobStatus::Unrecognized);
    }

    #[test]
    fn test_dedup_keeps_first() {
        let tags = vec![
            ResourceTag::new("env", "prod", ResourceType::UserVm, "vm-1"),
            ResourceTag::new("env", "dev", ResourceType::UserVm, "vm-1"),
            ResourceTag::new("env", "prod", ResourceType::UserVm, "vm-2"),
        ];
        let deduped = dedup_by_identity(tags);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].value, "prod");
    }
}
